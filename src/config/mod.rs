#[cfg(feature = "cli")]
pub mod cli;
pub mod job;
pub mod toml_config;

pub use job::{JobOverrides, RelocationJob};
pub use toml_config::{LoggingConfig, RelocationSection, TomlConfig};
