//! Configuration for the shadoll placeholder.
//!
//! - [`ConfigStore`] holds the live [`DisplayConfig`] and the keyboard edits on it.
//! - [`query`] reads and writes the `bg=…&logo=…` form of a configuration.
//! - [`Settings`] is the optional `config.toml` file.
//! - [`StateFile`] remembers the last configuration between runs.

mod error;
pub mod query;
mod settings;
mod state;
mod store;

pub use error::{ConfigError, ConfigResult};
pub use settings::{LoggingSettings, Settings, project_dirs};
pub use shadoll_core::DisplayConfig;
pub use state::StateFile;
pub use store::ConfigStore;
