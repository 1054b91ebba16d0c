//! Interface segregation: 大介面拆成小介面，型別只實作自己做得到的部分。

use crate::core::{Console, Document};
use crate::utils::error::Result;

pub mod broken {
    use crate::core::{Console, Document};
    use crate::utils::error::{DemoError, Result};

    pub trait ManagerDevice {
        fn print(&self, doc: &Document, out: &dyn Console) -> Result<()>;
        fn scan(&self, doc: &Document, out: &dyn Console) -> Result<()>;
        fn fax(&self, doc: &Document, out: &dyn Console) -> Result<()>;
    }

    /// 被迫實作 scan 和 fax 的印表機
    #[derive(Debug, Clone, Copy, Default)]
    pub struct Printer;

    impl ManagerDevice for Printer {
        fn print(&self, _doc: &Document, _out: &dyn Console) -> Result<()> {
            Err(DemoError::not_implemented("Printer", "print"))
        }

        fn scan(&self, _doc: &Document, _out: &dyn Console) -> Result<()> {
            Err(DemoError::not_implemented("Printer", "scan"))
        }

        fn fax(&self, _doc: &Document, _out: &dyn Console) -> Result<()> {
            Err(DemoError::not_implemented("Printer", "fax"))
        }
    }
}

pub trait DocumentPrinter {
    fn print(&self, doc: &Document, out: &dyn Console) -> Result<()>;
}

pub trait DocumentScanner {
    fn scan(&self, doc: &Document, out: &dyn Console) -> Result<()>;
}

pub trait DocumentFax {
    fn fax(&self, doc: &Document, out: &dyn Console) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Printer;

impl DocumentPrinter for Printer {
    fn print(&self, doc: &Document, out: &dyn Console) -> Result<()> {
        out.write_line(&format!("Print document {}", doc.title))
    }
}

/// 多功能事務機：三個小介面都實作
#[derive(Debug, Clone, Copy, Default)]
pub struct OfficeMachine;

impl DocumentPrinter for OfficeMachine {
    fn print(&self, doc: &Document, out: &dyn Console) -> Result<()> {
        out.write_line(&format!("Print document {}", doc.title))
    }
}

impl DocumentScanner for OfficeMachine {
    fn scan(&self, doc: &Document, out: &dyn Console) -> Result<()> {
        out.write_line(&format!("Scan document {}", doc.title))
    }
}

impl DocumentFax for OfficeMachine {
    fn fax(&self, doc: &Document, out: &dyn Console) -> Result<()> {
        out.write_line(&format!("Fax document {}", doc.title))
    }
}
