use std::io::{self, Write};

use crossterm::style::Color;

use crate::models::Score;

use super::Theme;

pub fn get_grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

/// Writes the closing `You scored X out of Y.` line.
pub fn render_score<W: Write>(out: &mut W, theme: Theme, score: Score) -> io::Result<()> {
    let line = score.to_string();
    let color = get_grade_color(score.percentage());
    writeln!(out, "{}", theme.paint_bold(&line, color))?;
    out.flush()
}
