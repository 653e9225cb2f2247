mod quiz;
mod result;

use crossterm::style::{style, Color, Stylize};

pub use quiz::{render_outcome, render_question};
pub use result::render_score;

/// Whether rendered lines carry ANSI colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Theme {
    pub color: bool,
}

impl Theme {
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn colored() -> Self {
        Self { color: true }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_bold(&self, text: &str, color: Color) -> String {
        if self.color {
            style(text).with(color).bold().to_string()
        } else {
            text.to_string()
        }
    }
}
