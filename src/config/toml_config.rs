use crate::core::Principle;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_single_line, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub demo: DemoSection,
    #[serde(default)]
    pub birds: BirdsSection,
    #[serde(default)]
    pub notification: NotificationSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoSection {
    pub principles: Option<Vec<Principle>>,
    pub show_violations: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BirdsSection {
    pub sparrow_color: Option<String>,
    pub penguin_color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationSection {
    pub message: Option<String>,
}

impl DemoConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| DemoError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        if let Some(principles) = &self.demo.principles {
            validate_non_empty_list("demo.principles", principles)?;
        }

        let text_fields = [
            ("birds.sparrow_color", &self.birds.sparrow_color),
            ("birds.penguin_color", &self.birds.penguin_color),
            ("notification.message", &self.notification.message),
        ];
        for (field, value) in text_fields {
            if let Some(value) = value {
                validate_non_empty_string(field, value)?;
                validate_single_line(field, value)?;
            }
        }

        Ok(())
    }
}
