use crate::domain::model::{GenerationResult, MenuItem};
use crate::utils::error::Result;

/// Where the rendered output ends up. Returns a description of the destination.
pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}

pub trait ConfigProvider {
    /// TOML items file; `None` means the built-in menu.
    fn items_file(&self) -> Option<&str>;
    /// Output file; `None` leaves the choice of destination to the storage.
    fn output_file(&self) -> Option<&str>;
    fn output_format(&self) -> OutputFormat;
    fn strict(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Sql,
    Json,
}

impl OutputFormat {
    pub fn default_file_name(self) -> &'static str {
        match self {
            OutputFormat::Sql => "customizations.sql",
            OutputFormat::Json => "customizations.json",
        }
    }
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<MenuItem>>;
    fn transform(&self, items: Vec<MenuItem>) -> Result<GenerationResult>;
    fn load(&self, result: GenerationResult) -> Result<String>;
}
