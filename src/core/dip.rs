//! Dependency inversion: `Notification` 只依賴 `MessageService` 抽象，
//! 具體的送信方式由呼叫端注入。

use crate::core::Console;
use crate::utils::error::Result;

pub trait MessageService {
    fn send(&self, message: &str) -> Result<()>;
}

pub struct ConsoleMessageService<C: Console> {
    console: C,
}

impl<C: Console> ConsoleMessageService<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> MessageService for ConsoleMessageService<C> {
    fn send(&self, message: &str) -> Result<()> {
        self.console.write_line(message)
    }
}

pub struct Notification<S: MessageService> {
    message_service: S,
}

impl<S: MessageService> Notification<S> {
    pub fn new(message_service: S) -> Self {
        Self { message_service }
    }

    pub fn send(&self, message: &str) -> Result<()> {
        tracing::debug!("Delegating notification to message service");
        self.message_service.send(message)
    }
}
