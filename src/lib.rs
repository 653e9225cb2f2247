//! # csv-quiz
//!
//! A line-oriented terminal quiz that reads its questions from a
//! `;`-delimited file.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use csv_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load questions from a `question;option1;...;optionN;answer` file
//!     let quiz = Quiz::from_csv("problems/example.csv")?;
//!
//!     // Ask every question on stdin/stdout
//!     let score = quiz.run()?;
//!     assert!(score.correct <= score.total);
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod models;
pub mod terminal;
mod ui;

use std::io::{self, BufRead, Write};
use std::path::Path;

use thiserror::Error;

pub use app::{AnswerInput, AnswerOutcome, App};
pub use data::{
    load_questions_from_csv, parse_rows, read_rows, LoadError, ValidationError,
    DEFAULT_QUESTIONS_PATH, MIN_FIELDS,
};
pub use models::{Question, Score, MIN_OPTIONS};
pub use ui::Theme;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading questions from file.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// IO error while writing the quiz.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
    theme: Theme,
}

impl Quiz {
    /// Create a new quiz from a vector of questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            app: App::with_questions(questions),
            theme: Theme::plain(),
        }
    }

    /// Load a quiz from a `;`-delimited file.
    ///
    /// Fails without asking anything if the file cannot be opened or read,
    /// or if any row is malformed.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let questions = load_questions_from_csv(path)?;
        Ok(Self::new(questions))
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Run the quiz on stdin and stdout.
    pub fn run(self) -> Result<Score, QuizError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(&mut stdin.lock(), &mut stdout.lock())
    }

    /// Run the quiz against arbitrary input and output.
    ///
    /// Every question gets exactly one line of input. Unreadable or
    /// non-numeric answers are reported and counted as wrong; only a failure
    /// to write `output` ends the run early.
    pub fn run_with<R: BufRead, W: Write>(
        mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Score, QuizError> {
        run_prompt_loop(&mut self.app, self.theme, input, output)?;

        let score = self.app.score();
        log::info!("quiz finished: {} of {} correct", score.correct, score.total);
        ui::render_score(output, self.theme, score)?;

        Ok(score)
    }

    /// Get a reference to the underlying app.
    pub fn app(&self) -> &App {
        &self.app
    }
}

fn run_prompt_loop<R: BufRead, W: Write>(
    app: &mut App,
    theme: Theme,
    input: &mut R,
    output: &mut W,
) -> Result<(), QuizError> {
    while let Some(question) = app.current_question() {
        ui::render_question(output, theme, app.current_question_number(), question)?;

        let answer = read_answer(input);
        let number = app.current_question_number();
        if let Some(outcome) = app.submit_answer(answer) {
            log::debug!("problem #{}: {:?}", number, outcome);
            ui::render_outcome(output, theme, outcome)?;
        }
    }

    Ok(())
}

/// Read one answer line. Never fails: read errors become [`AnswerInput::Unreadable`].
fn read_answer<R: BufRead>(input: &mut R) -> AnswerInput {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => AnswerInput::Unreadable("unexpected end of input".to_string()),
        Ok(_) => AnswerInput::from_line(&line),
        Err(e) => AnswerInput::Unreadable(e.to_string()),
    }
}
