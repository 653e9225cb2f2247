use crate::models::{Question, Score};

/// What the user typed for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerInput {
    Number(i64),
    NotANumber(String),
    /// Nothing usable could be read; carries the reason.
    Unreadable(String),
}

impl AnswerInput {
    /// Interpret one line of input, without its trailing newline.
    pub fn from_line(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return AnswerInput::Unreadable("unexpected newline".to_string());
        }

        match trimmed.parse::<i64>() {
            Ok(number) => AnswerInput::Number(number),
            Err(_) => AnswerInput::NotANumber(trimmed.to_string()),
        }
    }
}

/// How a submitted answer was judged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect(i64),
    NotANumber(String),
    Unreadable(String),
}

impl AnswerOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Correct)
    }
}

/// Progress through one run of the quiz.
pub struct App {
    questions: Vec<Question>,
    current_question_index: usize,
    answers: Vec<AnswerOutcome>,
}

impl App {
    pub fn with_questions(questions: Vec<Question>) -> Self {
        let num_questions = questions.len();

        Self {
            questions,
            current_question_index: 0,
            answers: Vec::with_capacity(num_questions),
        }
    }

    /// `None` once every question has been answered.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_question_index)
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[AnswerOutcome] {
        &self.answers
    }

    pub fn is_finished(&self) -> bool {
        self.current_question_index >= self.questions.len()
    }

    /// Judge `input` against the current question and move on to the next one.
    ///
    /// Returns `None` if the quiz is already finished.
    pub fn submit_answer(&mut self, input: AnswerInput) -> Option<&AnswerOutcome> {
        let question = self.current_question()?;

        let outcome = match input {
            AnswerInput::Number(answer) if question.is_correct(answer) => AnswerOutcome::Correct,
            AnswerInput::Number(answer) => AnswerOutcome::Incorrect(answer),
            AnswerInput::NotANumber(raw) => AnswerOutcome::NotANumber(raw),
            AnswerInput::Unreadable(reason) => AnswerOutcome::Unreadable(reason),
        };

        self.answers.push(outcome);
        self.current_question_index += 1;
        self.answers.last()
    }

    pub fn calculate_score(&self) -> usize {
        self.answers.iter().filter(|answer| answer.is_correct()).count()
    }

    pub fn score(&self) -> Score {
        Score {
            correct: self.calculate_score(),
            total: self.total_questions(),
        }
    }
}
