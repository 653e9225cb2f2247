//! Turns raw `;`-separated rows into validated questions.
//!
//! A row is `question;option1;...;optionN;answer`. The whole batch is
//! rejected on the first bad row.

use thiserror::Error;

use crate::models::{Question, MIN_OPTIONS};

/// Question text, at least two options and the answer.
pub const MIN_FIELDS: usize = MIN_OPTIONS + 2;

/// A row that cannot become a [`Question`]. Row numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(
        "not enough parameters, check if the {row} row has: \
         question, minimum 2 options and answer (found {found} fields)"
    )]
    NotEnoughFields { row: usize, found: usize },

    #[error("invalid answer for {row} row: must be an option number, got: {value}")]
    InvalidAnswer { row: usize, value: String },
}

impl ValidationError {
    pub fn row(&self) -> usize {
        match self {
            ValidationError::NotEnoughFields { row, .. } => *row,
            ValidationError::InvalidAnswer { row, .. } => *row,
        }
    }
}

/// Parse every row into a question, preserving order.
pub fn parse_rows<I, R, S>(rows: I) -> Result<Vec<Question>, ValidationError>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| parse_row(index + 1, row.as_ref()))
        .collect()
}

fn parse_row<S: AsRef<str>>(row: usize, fields: &[S]) -> Result<Question, ValidationError> {
    let not_enough_fields = || ValidationError::NotEnoughFields {
        row,
        found: fields.len(),
    };

    let [text, options @ .., raw_answer] = fields else {
        return Err(not_enough_fields());
    };
    if options.len() < MIN_OPTIONS {
        return Err(not_enough_fields());
    }

    let raw_answer = raw_answer.as_ref();

    let invalid_answer = || ValidationError::InvalidAnswer {
        row,
        value: raw_answer.to_string(),
    };

    let answer = raw_answer
        .parse::<i64>()
        .ok()
        .and_then(|answer| usize::try_from(answer).ok())
        .ok_or_else(invalid_answer)?;

    let options = options.iter().map(|option| option.as_ref().to_string()).collect();
    Question::new(text.as_ref(), options, answer).ok_or_else(invalid_answer)
}
