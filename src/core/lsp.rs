//! Liskov substitution: 子型別必須能完全取代父型別而不出錯。
//!
//! [`broken`] 裡的 `Bird` 要求所有鳥都會飛，企鵝只能回傳錯誤。
//! 修正後的 [`MovingBird`] 只要求「會移動」，麻雀用飛的、企鵝用跑的。

use crate::core::Console;
use crate::utils::error::Result;

pub mod broken {
    use crate::core::Console;
    use crate::utils::error::{DemoError, Result};

    pub trait Bird {
        fn color(&self) -> &str;
        fn fly(&self, out: &dyn Console) -> Result<()>;
    }

    #[derive(Debug, Clone)]
    pub struct Sparrow {
        pub color: String,
    }

    impl Bird for Sparrow {
        fn color(&self) -> &str {
            &self.color
        }

        fn fly(&self, out: &dyn Console) -> Result<()> {
            out.write_line(&format!("{} Sparrow fly", self.color))
        }
    }

    #[derive(Debug, Clone)]
    pub struct Penguin {
        pub color: String,
    }

    impl Bird for Penguin {
        fn color(&self) -> &str {
            &self.color
        }

        // 企鵝不會飛
        fn fly(&self, _out: &dyn Console) -> Result<()> {
            Err(DemoError::not_implemented("Penguin", "fly"))
        }
    }
}

pub trait MovingBird {
    fn color(&self) -> &str;
    fn move_about(&self, out: &dyn Console) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct Sparrow {
    color: String,
}

impl Sparrow {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }

    pub fn fly(&self, out: &dyn Console) -> Result<()> {
        out.write_line(&format!("{} Sparrow fly", self.color))
    }
}

impl MovingBird for Sparrow {
    fn color(&self) -> &str {
        &self.color
    }

    fn move_about(&self, out: &dyn Console) -> Result<()> {
        self.fly(out)
    }
}

#[derive(Debug, Clone)]
pub struct Penguin {
    color: String,
}

impl Penguin {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }

    pub fn run(&self, out: &dyn Console) -> Result<()> {
        out.write_line(&format!("{} Penguin Run", self.color))
    }
}

impl MovingBird for Penguin {
    fn color(&self) -> &str {
        &self.color
    }

    fn move_about(&self, out: &dyn Console) -> Result<()> {
        self.run(out)
    }
}

#[cfg(test)]
mod tests {
    use super::broken::Bird;
    use super::*;
    use crate::config::console::MemoryConsole;

    #[test]
    fn test_sparrow_moves_by_flying() {
        let console = MemoryConsole::new();
        Sparrow::new("red").move_about(&console).unwrap();

        let line = &console.lines()[0];
        assert!(line.contains("red"));
        assert!(line.contains("Sparrow fly"));
    }

    #[test]
    fn test_penguin_moves_by_running() {
        let console = MemoryConsole::new();
        Penguin::new("black").move_about(&console).unwrap();

        assert_eq!(console.lines(), vec!["black Penguin Run"]);
    }

    #[test]
    fn test_any_moving_bird_substitutes() {
        let console = MemoryConsole::new();
        let birds: Vec<Box<dyn MovingBird>> = vec![
            Box::new(Sparrow::new("brown")),
            Box::new(Penguin::new("white")),
        ];

        for bird in &birds {
            assert!(bird.move_about(&console).is_ok());
        }
        assert_eq!(
            console.lines(),
            vec!["brown Sparrow fly", "white Penguin Run"]
        );
    }

    #[test]
    fn test_broken_penguin_cannot_fly() {
        let console = MemoryConsole::new();
        let sparrow = broken::Sparrow {
            color: "red".to_string(),
        };
        let penguin = broken::Penguin {
            color: "black".to_string(),
        };

        assert!(sparrow.fly(&console).is_ok());
        let err = penguin.fly(&console).unwrap_err();
        assert!(err.is_violation());
        assert_eq!(penguin.color(), "black");
        assert_eq!(console.lines(), vec!["red Sparrow fly"]);
    }
}
