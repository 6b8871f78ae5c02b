use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct GeneratorEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> GeneratorEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load once. Returns where the output was written.
    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting customization generation");

        let items = self.pipeline.extract()?;
        tracing::info!("Loaded {} menu items", items.len());

        let result = self.pipeline.transform(items)?;
        let groups: usize = result.items.iter().map(|i| i.groups.len()).sum();
        let options: usize = result.items.iter().map(|i| i.option_count()).sum();
        tracing::info!("Generated {} groups and {} options", groups, options);

        let destination = self.pipeline.load(result)?;
        tracing::info!("Output written to {}", destination);

        Ok(destination)
    }
}
