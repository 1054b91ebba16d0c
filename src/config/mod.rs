pub mod console;
pub mod toml_config;

use crate::core::{Principle, SettingsProvider};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_single_line, Validate,
};
use toml_config::DemoConfig;

pub const DEFAULT_SPARROW_COLOR: &str = "red";
pub const DEFAULT_PENGUIN_COLOR: &str = "black";
pub const DEFAULT_MESSAGE: &str = "Message sent by Dependency inversion";

/// 合併預設值、TOML 檔與命令列之後的最終設定
#[derive(Debug, Clone, PartialEq)]
pub struct DemoSettings {
    pub principles: Vec<Principle>,
    pub sparrow_color: String,
    pub penguin_color: String,
    pub message: String,
    pub show_violations: bool,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            principles: Principle::default_selection(),
            sparrow_color: DEFAULT_SPARROW_COLOR.to_string(),
            penguin_color: DEFAULT_PENGUIN_COLOR.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            show_violations: false,
        }
    }
}

impl DemoSettings {
    pub fn all_principles() -> Self {
        Self {
            principles: Principle::ALL.to_vec(),
            ..Self::default()
        }
    }

    /// 用 TOML 檔中有設定的欄位覆蓋目前的值
    pub fn apply_file(mut self, file: &DemoConfig) -> Self {
        if let Some(principles) = &file.demo.principles {
            self.principles = principles.clone();
        }
        if let Some(show) = file.demo.show_violations {
            self.show_violations = show;
        }
        if let Some(color) = &file.birds.sparrow_color {
            self.sparrow_color = color.clone();
        }
        if let Some(color) = &file.birds.penguin_color {
            self.penguin_color = color.clone();
        }
        if let Some(message) = &file.notification.message {
            self.message = message.clone();
        }
        self
    }
}

impl Validate for DemoSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("principles", &self.principles)?;
        for (field, value) in [
            ("sparrow_color", &self.sparrow_color),
            ("penguin_color", &self.penguin_color),
            ("message", &self.message),
        ] {
            validate_non_empty_string(field, value)?;
            validate_single_line(field, value)?;
        }
        Ok(())
    }
}

impl SettingsProvider for DemoSettings {
    fn principles(&self) -> &[Principle] {
        &self.principles
    }

    fn sparrow_color(&self) -> &str {
        &self.sparrow_color
    }

    fn penguin_color(&self) -> &str {
        &self.penguin_color
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn show_violations(&self) -> bool {
        self.show_violations
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "demo-solid")]
#[command(about = "Console demonstrations of the SOLID design principles")]
pub struct CliConfig {
    /// Principles to demonstrate (comma separated)
    #[arg(long = "principle", value_enum, value_delimiter = ',')]
    pub principles: Vec<Principle>,

    /// Demonstrate every principle, overrides --principle
    #[arg(long)]
    pub all: bool,

    #[arg(long)]
    pub sparrow_color: Option<String>,

    #[arg(long)]
    pub penguin_color: Option<String>,

    /// Message sent through the notification service
    #[arg(long)]
    pub message: Option<String>,

    /// Also call the broken designs and report their failures
    #[arg(long)]
    pub show_violations: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列參數優先於 TOML 檔
    pub fn into_settings(self, file: Option<&DemoConfig>) -> DemoSettings {
        let mut settings = DemoSettings::default();
        if let Some(file) = file {
            settings = settings.apply_file(file);
        }

        if self.all {
            settings.principles = Principle::ALL.to_vec();
        } else if !self.principles.is_empty() {
            settings.principles = self.principles;
        }
        if self.show_violations {
            settings.show_violations = true;
        }
        if let Some(color) = self.sparrow_color {
            settings.sparrow_color = color;
        }
        if let Some(color) = self.penguin_color {
            settings.penguin_color = color;
        }
        if let Some(message) = self.message {
            settings.message = message;
        }
        settings
    }
}
