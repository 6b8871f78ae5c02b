pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{
    cli::{LocalStorage, StdoutStorage},
    CliConfig,
};

pub use crate::core::{
    engine::GeneratorEngine,
    generator::{generate_customizations, generate_sql},
    pipeline::GenerationPipeline,
};
pub use domain::model::{Category, MenuItem};
pub use utils::error::{GeneratorError, Result};
