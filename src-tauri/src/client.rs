//! Frontend-side logic over the command bindings
//!
//! - `bindings`: the `ConfigCommands` boundary and its in-process implementation
//! - `settings`: reads and parses the settings blob
//! - `setup`: the setup screen's button handler

pub mod bindings;
pub mod settings;
pub mod setup;

pub use bindings::{ConfigCommands, LocalCommands};
pub use settings::{get_settings, Settings};
pub use setup::SetupScreen;
