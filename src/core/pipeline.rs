use crate::config::toml_config::ItemsFile;
use crate::core::{generator, sql};
use crate::core::{ConfigProvider, GenerationResult, MenuItem, OutputFormat, Pipeline, Storage};
use crate::domain::menu;
use crate::utils::error::Result;
use crate::utils::validation;

pub struct GenerationPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> GenerationPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for GenerationPipeline<S, C> {
    fn extract(&self) -> Result<Vec<MenuItem>> {
        let items = match self.config.items_file() {
            Some(path) => {
                tracing::debug!("Loading items from: {}", path);
                ItemsFile::from_file(path)?.items
            }
            None => {
                tracing::debug!("Using built-in menu");
                menu::default_menu()
            }
        };

        validation::validate_items(&items, self.config.strict())?;
        Ok(items)
    }

    fn transform(&self, items: Vec<MenuItem>) -> Result<GenerationResult> {
        let items: Vec<_> = items
            .iter()
            .map(|item| {
                let generated = generator::generate_customizations(item);
                tracing::debug!(
                    "{} ({}): {} groups, {} options",
                    item.id,
                    item.category,
                    generated.groups.len(),
                    generated.option_count()
                );
                generated
            })
            .collect();

        let sql_output = sql::render_document(&items);

        Ok(GenerationResult { items, sql_output })
    }

    fn load(&self, result: GenerationResult) -> Result<String> {
        let format = self.config.output_format();
        let path = self
            .config
            .output_file()
            .unwrap_or_else(|| format.default_file_name());

        let data = match format {
            OutputFormat::Sql => result.sql_output.into_bytes(),
            OutputFormat::Json => {
                let mut json = serde_json::to_vec_pretty(&result.items)?;
                json.push(b'\n');
                json
            }
        };

        tracing::debug!("Writing {} bytes as {:?}", data.len(), format);
        self.storage.write_file(path, &data)
    }
}
