use demo_solid::core::dip::{ConsoleMessageService, Notification};
use demo_solid::core::isp::broken::ManagerDevice;
use demo_solid::core::isp::{self, DocumentPrinter};
use demo_solid::core::lsp::broken::Bird;
use demo_solid::core::lsp::{self, MovingBird};
use demo_solid::core::Document;
use demo_solid::{DemoError, DemoRunner, DemoSettings, MemoryConsole, Principle};

#[test]
fn test_sparrow_and_penguin_move() {
    let console = MemoryConsole::new();

    lsp::Sparrow::new("red").move_about(&console).unwrap();
    lsp::Penguin::new("black").move_about(&console).unwrap();

    let lines = console.lines();
    assert!(lines[0].contains("red") && lines[0].contains("Sparrow fly"));
    assert!(lines[1].contains("black") && lines[1].contains("Penguin Run"));
}

#[test]
fn test_broken_designs_raise_not_implemented() {
    let console = MemoryConsole::new();
    let penguin = lsp::broken::Penguin {
        color: "black".to_string(),
    };

    assert!(matches!(
        penguin.fly(&console),
        Err(DemoError::NotImplemented {
            type_name: "Penguin",
            operation: "fly"
        })
    ));
    assert!(isp::broken::Printer
        .print(&Document::new("memo"), &console)
        .is_err());
    assert!(console.lines().is_empty());
}

#[test]
fn test_segregated_printer_prints() {
    let console = MemoryConsole::new();

    isp::Printer.print(&Document::new("memo"), &console).unwrap();

    assert_eq!(console.lines(), vec!["Print document memo"]);
}

#[test]
fn test_notification_sends_via_injected_service() {
    let console = MemoryConsole::new();
    let notification = Notification::new(ConsoleMessageService::new(&console));

    notification.send("hello").unwrap();

    assert_eq!(console.lines(), vec!["hello"]);
}

#[test]
fn test_full_run_covers_every_principle() {
    let console = MemoryConsole::new();
    let settings = DemoSettings {
        sparrow_color: "brown".to_string(),
        message: "done".to_string(),
        ..DemoSettings::all_principles()
    };

    let summary = DemoRunner::new(settings, &console).run().unwrap();

    assert_eq!(summary.principles, Principle::ALL.to_vec());
    assert_eq!(
        console.lines(),
        vec![
            "Single responsibility",
            "Print invoice",
            "Email invoice",
            "Open/closed",
            "Email invoice",
            "Confirm email was sent",
            "Liskov",
            "brown Sparrow fly",
            "black Penguin Run",
            "Interface segregation",
            "Print document report.pdf",
            "Print document report.pdf",
            "Scan document report.pdf",
            "Fax document report.pdf",
            "Dependency inversion",
            "done",
        ]
    );
    assert_eq!(summary.lines_written, 16);
    assert_eq!(summary.violations, 0);
}
