mod question;
mod score;

pub use question::{Question, MIN_OPTIONS};
pub use score::Score;
