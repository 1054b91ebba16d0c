pub mod dip;
pub mod isp;
pub mod lsp;
pub mod ocp;
pub mod runner;
pub mod srp;

pub use crate::domain::model::{Document, Invoice, Principle, RunSummary};
pub use crate::domain::ports::{Console, SettingsProvider};
pub use crate::utils::error::Result;
