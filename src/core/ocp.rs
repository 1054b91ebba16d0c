//! Open/closed: 不修改既有的 `InvoiceEmail`，而是包一層來擴充新行為。

use crate::core::srp::InvoiceEmail;
use crate::core::Console;
use crate::utils::error::Result;
use std::ops::Deref;

#[derive(Debug, Clone, Copy, Default)]
pub struct EmailInvoiceConfirm {
    email: InvoiceEmail,
}

impl EmailInvoiceConfirm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send_confirm_invoice(&self, out: &dyn Console) -> Result<()> {
        out.write_line("Confirm email was sent")
    }
}

impl Deref for EmailInvoiceConfirm {
    type Target = InvoiceEmail;

    fn deref(&self) -> &Self::Target {
        &self.email
    }
}
