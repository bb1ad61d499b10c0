//! A searchable dropdown (ARIA combobox pattern) for the terminal.
//!
//! [`Combobox`] is the widget itself: it filters a fixed option list by
//! case-insensitive substring, tracks the keyboard highlight, and notifies
//! listeners when a selection is committed. [`view::project`] turns its state
//! into a render tree, which [`tui::render_combobox`] draws with `ratatui`.
//! The [`ui`] module hosts the widget in an interactive terminal picker.

pub mod app_dirs;
pub mod combobox;
pub mod logging;
pub mod tui;
pub mod ui;
pub mod view;

pub use combobox::{
	ComboKey, ComboState, Combobox, KeyDisposition, ListenerId, SelectionChanged, filter_options,
};
pub use tui::{Theme, default_theme};
pub use ui::{App, PickOutcome, PickerBuilder, PickerConfig, run};
pub use view::{ComboboxView, ViewIds};
