//! Single responsibility: 每個型別只負責一件事。
//! `Invoice` 只保存資料，列印和寄信各自交給獨立的型別。

use crate::core::{Console, Invoice};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct InvoicePrinter;

impl InvoicePrinter {
    pub fn print_invoice(&self, invoice: &Invoice, out: &dyn Console) -> Result<()> {
        tracing::debug!("Printing invoice {}", invoice.number);
        out.write_line("Print invoice")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InvoiceEmail;

impl InvoiceEmail {
    pub fn email_invoice(&self, invoice: &Invoice, out: &dyn Console) -> Result<()> {
        tracing::debug!("Emailing invoice {}", invoice.number);
        out.write_line("Email invoice")
    }
}
