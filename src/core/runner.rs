use crate::core::dip::{ConsoleMessageService, Notification};
use crate::core::isp::{self, DocumentFax, DocumentPrinter, DocumentScanner};
use crate::core::lsp::{self, MovingBird};
use crate::core::ocp::EmailInvoiceConfirm;
use crate::core::srp::{InvoiceEmail, InvoicePrinter};
use crate::core::{Console, Document, Invoice, Principle, RunSummary, SettingsProvider};
use crate::utils::error::Result;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 計算寫出的行數，其餘直接轉給內層 console
struct CountingConsole<'a> {
    inner: &'a dyn Console,
    lines: AtomicUsize,
}

impl Console for CountingConsole<'_> {
    fn write_line(&self, line: &str) -> Result<()> {
        self.inner.write_line(line)?;
        self.lines.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

pub struct DemoRunner<S: SettingsProvider, C: Console> {
    settings: S,
    console: C,
}

impl<S: SettingsProvider, C: Console> DemoRunner<S, C> {
    pub fn new(settings: S, console: C) -> Self {
        Self { settings, console }
    }

    /// 依 S, O, L, I, D 的順序執行選到的原則
    pub fn run(&self) -> Result<RunSummary> {
        let mut selected = self.settings.principles().to_vec();
        selected.sort();
        selected.dedup();

        tracing::info!("Running {} principle demo(s)", selected.len());

        let out = CountingConsole {
            inner: &self.console,
            lines: AtomicUsize::new(0),
        };
        let mut violations = 0;

        for principle in &selected {
            tracing::debug!("Demonstrating {}", principle);
            out.write_line(principle.heading())?;

            match principle {
                Principle::Srp => self.single_responsibility(&out)?,
                Principle::Ocp => self.open_closed(&out)?,
                Principle::Lsp => self.liskov(&out)?,
                Principle::Isp => self.interface_segregation(&out)?,
                Principle::Dip => self.dependency_inversion(&out)?,
            }

            if self.settings.show_violations() {
                violations += self.report_violations(*principle, &out)?;
            }
        }

        let summary = RunSummary {
            principles: selected,
            lines_written: out.lines.load(Ordering::Relaxed),
            violations,
        };
        tracing::info!(
            "Finished: {} line(s) written, {} violation(s) observed",
            summary.lines_written,
            summary.violations
        );
        Ok(summary)
    }

    fn single_responsibility(&self, out: &dyn Console) -> Result<()> {
        let invoice = Invoice::new("INV-0001", 10_000);
        InvoicePrinter.print_invoice(&invoice, out)?;
        InvoiceEmail.email_invoice(&invoice, out)
    }

    fn open_closed(&self, out: &dyn Console) -> Result<()> {
        let invoice = Invoice::new("INV-0002", 2_500);
        let confirm = EmailInvoiceConfirm::new();
        confirm.email_invoice(&invoice, out)?;
        confirm.send_confirm_invoice(out)
    }

    fn liskov(&self, out: &dyn Console) -> Result<()> {
        let sparrow = lsp::Sparrow::new(self.settings.sparrow_color());
        let penguin = lsp::Penguin::new(self.settings.penguin_color());

        let birds: [&dyn MovingBird; 2] = [&sparrow, &penguin];
        for bird in birds {
            tracing::debug!("Moving {} bird", bird.color());
            bird.move_about(out)?;
        }
        Ok(())
    }

    fn interface_segregation(&self, out: &dyn Console) -> Result<()> {
        let doc = Document::new("report.pdf");
        isp::Printer.print(&doc, out)?;

        let machine = isp::OfficeMachine;
        machine.print(&doc, out)?;
        machine.scan(&doc, out)?;
        machine.fax(&doc, out)
    }

    fn dependency_inversion(&self, out: &dyn Console) -> Result<()> {
        let notification = Notification::new(ConsoleMessageService::new(out));
        notification.send(self.settings.message())
    }

    /// 呼叫錯誤設計的型別；它們回傳的錯誤只記錄，不往外傳
    fn report_violations(&self, principle: Principle, out: &dyn Console) -> Result<usize> {
        use isp::broken::ManagerDevice;
        use lsp::broken::Bird;

        let outcomes = match principle {
            Principle::Lsp => {
                let sparrow = lsp::broken::Sparrow {
                    color: self.settings.sparrow_color().to_string(),
                };
                let penguin = lsp::broken::Penguin {
                    color: self.settings.penguin_color().to_string(),
                };
                vec![sparrow.fly(out), penguin.fly(out)]
            }
            Principle::Isp => {
                let doc = Document::new("report.pdf");
                let printer = isp::broken::Printer;
                vec![
                    printer.print(&doc, out),
                    printer.scan(&doc, out),
                    printer.fax(&doc, out),
                ]
            }
            Principle::Srp | Principle::Ocp | Principle::Dip => Vec::new(),
        };

        let mut count = 0;
        for outcome in outcomes {
            match outcome {
                Ok(()) => {}
                Err(e) if e.is_violation() => {
                    tracing::warn!("{} violation: {}", principle, e);
                    out.write_line(&format!("violation: {}", e))?;
                    count += 1;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::console::MemoryConsole;
    use crate::config::DemoSettings;
    use crate::utils::error::DemoError;

    struct FailingConsole;

    impl Console for FailingConsole {
        fn write_line(&self, _line: &str) -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed").into())
        }
    }

    #[test]
    fn test_default_run_matches_entry_routine() {
        let console = MemoryConsole::new();
        let runner = DemoRunner::new(DemoSettings::default(), &console);

        let summary = runner.run().unwrap();

        assert_eq!(
            console.lines(),
            vec![
                "Liskov",
                "red Sparrow fly",
                "black Penguin Run",
                "Dependency inversion",
                "Message sent by Dependency inversion",
            ]
        );
        assert_eq!(summary.principles, vec![Principle::Lsp, Principle::Dip]);
        assert_eq!(summary.lines_written, 5);
        assert_eq!(summary.violations, 0);
    }

    #[test]
    fn test_principles_run_in_canonical_order() {
        let settings = DemoSettings {
            principles: vec![Principle::Dip, Principle::Srp, Principle::Dip],
            ..DemoSettings::default()
        };
        let console = MemoryConsole::new();

        let summary = DemoRunner::new(settings, &console).run().unwrap();

        assert_eq!(summary.principles, vec![Principle::Srp, Principle::Dip]);
        assert_eq!(console.lines()[0], "Single responsibility");
        assert_eq!(console.lines()[3], "Dependency inversion");
    }

    #[test]
    fn test_violations_are_reported_not_propagated() {
        let settings = DemoSettings {
            principles: vec![Principle::Lsp, Principle::Isp],
            show_violations: true,
            ..DemoSettings::default()
        };
        let console = MemoryConsole::new();

        let summary = DemoRunner::new(settings, &console).run().unwrap();

        // 企鵝 fly 一次，印表機 print/scan/fax 三次
        assert_eq!(summary.violations, 4);
        let lines = console.lines();
        assert!(lines
            .iter()
            .any(|l| l == "violation: Penguin cannot fly: operation not implemented"));
        assert!(lines
            .iter()
            .any(|l| l == "violation: Printer cannot fax: operation not implemented"));
        assert_eq!(lines.iter().filter(|l| *l == "red Sparrow fly").count(), 2);
    }

    #[test]
    fn test_console_failure_propagates() {
        let runner = DemoRunner::new(DemoSettings::default(), FailingConsole);

        let err = runner.run().unwrap_err();

        assert!(matches!(err, DemoError::IoError(_)));
        assert!(!err.is_violation());
    }
}
