use std::io::{self, Write};

use crossterm::style::Color;

use crate::app::AnswerOutcome;
use crate::models::Question;

use super::Theme;

pub fn render_question<W: Write>(
    out: &mut W,
    theme: Theme,
    number: usize,
    question: &Question,
) -> io::Result<()> {
    let header = format!("Problem #{}: {}", number, question.text());
    writeln!(out, "{}", theme.paint_bold(&header, Color::Cyan))?;

    for (index, option) in question.options().iter().enumerate() {
        writeln!(out, "{}) {}", index + 1, option)?;
    }

    out.flush()
}

/// Only answers that could not be judged produce a notice.
pub fn render_outcome<W: Write>(
    out: &mut W,
    theme: Theme,
    outcome: &AnswerOutcome,
) -> io::Result<()> {
    let notice = match outcome {
        AnswerOutcome::Unreadable(reason) => format!("Failed to read your answer: {}", reason),
        AnswerOutcome::NotANumber(raw) => {
            format!("Failed to read your answer. Expected number, but got: {}", raw)
        }
        AnswerOutcome::Correct | AnswerOutcome::Incorrect(_) => return Ok(()),
    };

    writeln!(out, "{}", theme.paint(&notice, Color::Yellow))
}
