use menu_customization_sql::core::Pipeline;
use menu_customization_sql::{
    CliConfig, GenerationPipeline, GeneratorEngine, GeneratorError, LocalStorage,
};
use std::fs;
use tempfile::TempDir;

fn config_for(temp_dir: &TempDir) -> CliConfig {
    CliConfig {
        output: Some(temp_dir.path().join("out.sql").to_string_lossy().into_owned()),
        ..Default::default()
    }
}

#[test]
fn test_end_to_end_builtin_menu_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir);

    let pipeline = GenerationPipeline::new(LocalStorage::new(".".to_string()), config);
    let destination = GeneratorEngine::new(pipeline).run().unwrap();

    assert!(destination.ends_with("out.sql"));
    let content = fs::read_to_string(temp_dir.path().join("out.sql")).unwrap();
    assert!(content.starts_with("-- Generated Customizations\n"));
    assert_eq!(content.matches("INSERT INTO customization_groups").count(), 65);
    assert!(content.contains("'CO_RB_003_REMOVE_FRIES'"));
}

#[test]
fn test_items_file_drives_generation() {
    let temp_dir = TempDir::new().unwrap();
    let items_path = temp_dir.path().join("items.toml");
    fs::write(
        &items_path,
        r#"
[[items]]
id = "ITEM_GS_009"
category = "GS"

[[items]]
id = "ITEM_XX_001"
category = "XX"
"#,
    )
    .unwrap();

    let mut config = config_for(&temp_dir);
    config.items = Some(items_path.to_string_lossy().into_owned());

    let pipeline = GenerationPipeline::new(LocalStorage::new(".".to_string()), config);
    let items = pipeline.extract().unwrap();
    assert_eq!(items.len(), 2);

    let result = pipeline.transform(items).unwrap();
    assert_eq!(result.items[0].groups.len(), 5);
    assert_eq!(result.items[1].groups.len(), 4);
    pipeline.load(result).unwrap();

    let content = fs::read_to_string(temp_dir.path().join("out.sql")).unwrap();
    assert!(content.contains("-- Customizations for ITEM_GS_009\n"));
    assert!(content.contains("-- Customizations for ITEM_XX_001\n"));
    assert!(!content.contains("CG_XX_001_ADDON"));
}

#[test]
fn test_strict_mode_writes_nothing_on_duplicate() {
    let temp_dir = TempDir::new().unwrap();
    let items_path = temp_dir.path().join("items.toml");
    fs::write(
        &items_path,
        "[[items]]\nid = \"ITEM_A\"\ncategory = \"GS\"\n\n[[items]]\nid = \"ITEM_A\"\ncategory = \"SW\"\n",
    )
    .unwrap();

    let mut config = config_for(&temp_dir);
    config.items = Some(items_path.to_string_lossy().into_owned());
    config.strict = true;

    let pipeline = GenerationPipeline::new(LocalStorage::new(".".to_string()), config);
    let err = GeneratorEngine::new(pipeline).run().unwrap_err();

    assert!(matches!(err, GeneratorError::DuplicateItem { .. }));
    assert!(!temp_dir.path().join("out.sql").exists());
}

#[test]
fn test_missing_items_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = config_for(&temp_dir);
    config.items = Some(temp_dir.path().join("missing.toml").to_string_lossy().into_owned());

    let pipeline = GenerationPipeline::new(LocalStorage::new(".".to_string()), config);
    assert!(matches!(pipeline.extract(), Err(GeneratorError::IoError(_))));
}
