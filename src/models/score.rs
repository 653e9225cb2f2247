use std::fmt;

/// Number of correct answers out of the questions asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            (self.correct as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You scored {} out of {}.", self.correct, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_display() {
        let score = Score { correct: 1, total: 1 };
        assert_eq!(score.to_string(), "You scored 1 out of 1.");
    }

    #[test]
    fn test_percentage_of_empty_quiz() {
        assert_eq!(Score::default().percentage(), 0.0);
        assert_eq!(Score { correct: 3, total: 4 }.percentage(), 75.0);
    }
}
