pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{
    console::{MemoryConsole, StdoutConsole},
    toml_config::DemoConfig,
    DemoSettings,
};
pub use crate::core::{runner::DemoRunner, Principle, RunSummary};
pub use utils::error::{DemoError, Result};
