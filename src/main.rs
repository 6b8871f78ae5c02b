use anyhow::Context;
use clap::Parser;
use menu_customization_sql::core::{ConfigProvider, Storage};
use menu_customization_sql::utils::{logger, validation::Validate};
use menu_customization_sql::{
    CliConfig, GenerationPipeline, GeneratorEngine, LocalStorage, StdoutStorage,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let result = if config.output_file().is_some() {
        run(LocalStorage::new(".".to_string()), config)
    } else {
        run(StdoutStorage, config)
    };

    if let Err(e) = &result {
        tracing::error!("Generation failed: {}", e);
        tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
    }

    result.context("customization generation failed")?;
    Ok(())
}

fn run<S: Storage>(storage: S, config: CliConfig) -> menu_customization_sql::Result<String> {
    let pipeline = GenerationPipeline::new(storage, config);
    GeneratorEngine::new(pipeline).run()
}
