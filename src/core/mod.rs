pub mod engine;
pub mod generator;
pub mod pipeline;
pub mod sql;

pub use crate::domain::model::{GenerationResult, ItemCustomizations, MenuItem};
pub use crate::domain::ports::{ConfigProvider, OutputFormat, Pipeline, Storage};
pub use crate::utils::error::Result;
