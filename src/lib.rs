pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::LocalFs;
pub use config::{JobOverrides, RelocationJob, TomlConfig};
pub use crate::core::manifest::{list_dir_names, FileSource};
pub use crate::core::relocator::{relocate, Relocator};
pub use domain::model::{FileMove, RelocationPlan};
pub use domain::ports::FileMover;
pub use utils::error::{RelocateError, Result};
