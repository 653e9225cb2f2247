/// A single quiz question with its options and the 1-based correct answer.
///
/// Instances are only built through [`Question::new`], which enforces that
/// there are at least two options and that the answer points at one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_answer: usize,
}

/// Smallest number of options a question may carry.
pub const MIN_OPTIONS: usize = 2;

impl Question {
    /// Returns `None` when the options or the answer index are out of shape.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_answer: usize,
    ) -> Option<Self> {
        if options.len() < MIN_OPTIONS || !(1..=options.len()).contains(&correct_answer) {
            return None;
        }

        Some(Self {
            text: text.into(),
            options,
            correct_answer,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// 1-based position of the correct option.
    pub fn correct_answer(&self) -> usize {
        self.correct_answer
    }

    pub fn is_correct(&self, answer: i64) -> bool {
        usize::try_from(answer).is_ok_and(|answer| answer == self.correct_answer)
    }
}
