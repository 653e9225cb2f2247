mod loader;
mod parser;

pub use loader::{load_questions_from_csv, read_rows, LoadError, DEFAULT_QUESTIONS_PATH};
pub use parser::{parse_rows, ValidationError, MIN_FIELDS};
