use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use thiserror::Error;

use super::parser::{parse_rows, ValidationError};
use crate::models::Question;

pub const DEFAULT_QUESTIONS_PATH: &str = "./problems/example.csv";

pub const FIELD_DELIMITER: u8 = b';';

/// Error loading a question file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open the CSV file: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse the provided CSV file {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Load and validate every question in a `;`-delimited file.
///
/// The file is closed before validation starts, whatever the outcome.
pub fn load_questions_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let rows = {
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        read_rows(file).map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?
    };
    log::debug!("read {} rows from {}", rows.len(), path.display());

    let questions = parse_rows(&rows)?;
    log::info!("loaded {} questions from {}", questions.len(), path.display());

    Ok(questions)
}

/// Read all records from `reader` as raw string fields.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<Vec<String>>, csv::Error> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    csv_reader
        .records()
        .map(|record| Ok(record?.iter().map(str::to_owned).collect()))
        .collect()
}
