use crate::domain::model::MenuItem;
use crate::utils::error::{GeneratorError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid")
});

/// Item list supplied by the operator instead of the built-in menu.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemsFile {
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl ItemsFile {
    /// 從 TOML 檔案載入
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GeneratorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析並驗證
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        let file: Self = toml::from_str(&processed_content).map_err(|e| GeneratorError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })?;

        file.validate()?;
        Ok(file)
    }

    /// 替換環境變數 (例如 ${MENU_PREFIX}); unset variables are left untouched
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl Validate for ItemsFile {
    fn validate(&self) -> Result<()> {
        if self.items.is_empty() {
            return Err(GeneratorError::ConfigError {
                message: "no [[items]] entries".to_string(),
            });
        }
        Ok(())
    }
}
