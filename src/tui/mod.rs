//! Terminal rendering for the combobox: themes and the frame renderer.

pub mod render;
pub mod theme;

pub use render::{ComboboxLayout, Hit, render_combobox};
pub use theme::{Theme, default_theme};
