pub mod constants;
pub mod settings;

pub use settings::{ClientConfig, ConfigError};
