pub mod manifest;
pub mod relocator;

pub use crate::domain::model::{FileMove, RelocationPlan};
pub use crate::domain::ports::FileMover;
pub use crate::utils::error::Result;
