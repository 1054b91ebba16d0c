use crate::domain::model::Principle;
use crate::utils::error::Result;

/// 示範程式唯一的對外介面：逐行輸出
pub trait Console: Send + Sync {
    fn write_line(&self, line: &str) -> Result<()>;
}

impl<C: Console + ?Sized> Console for &C {
    fn write_line(&self, line: &str) -> Result<()> {
        (**self).write_line(line)
    }
}

pub trait SettingsProvider: Send + Sync {
    fn principles(&self) -> &[Principle];
    fn sparrow_color(&self) -> &str;
    fn penguin_color(&self) -> &str;
    fn message(&self) -> &str;
    fn show_violations(&self) -> bool;
}
