//! Interactive terminal picker built around a single [`Combobox`].
//!
//! The [`builder`] module exposes the public-facing [`PickerBuilder`]. The
//! remaining submodules implement the event loop, input routing, and drawing.
//!
//! [`Combobox`]: crate::combobox::Combobox

mod actions;
mod builder;
mod config;
mod render;
mod runtime;
mod state;

pub use builder::PickerBuilder;
pub use config::{DEFAULT_HINT, PickerConfig};
pub use runtime::run;
pub use state::{App, PickOutcome};
