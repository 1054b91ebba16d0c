use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub number: String,
    pub amount_cents: u64,
}

impl Invoice {
    pub fn new(number: impl Into<String>, amount_cents: u64) -> Self {
        Self {
            number: number.into(),
            amount_cents,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Principle {
    Srp,
    Ocp,
    Lsp,
    Isp,
    Dip,
}

impl Principle {
    /// S, O, L, I, D
    pub const ALL: [Principle; 5] = [
        Principle::Srp,
        Principle::Ocp,
        Principle::Lsp,
        Principle::Isp,
        Principle::Dip,
    ];

    /// 寫到 console 的標題行
    pub fn heading(&self) -> &'static str {
        match self {
            Principle::Srp => "Single responsibility",
            Principle::Ocp => "Open/closed",
            Principle::Lsp => "Liskov",
            Principle::Isp => "Interface segregation",
            Principle::Dip => "Dependency inversion",
        }
    }

    pub fn default_selection() -> Vec<Principle> {
        vec![Principle::Lsp, Principle::Dip]
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Principle::Srp => "srp",
            Principle::Ocp => "ocp",
            Principle::Lsp => "lsp",
            Principle::Isp => "isp",
            Principle::Dip => "dip",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub principles: Vec<Principle>,
    pub lines_written: usize,
    pub violations: usize,
}
