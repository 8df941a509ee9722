use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Difficulty tag carried by each question record.
///
/// Input records use the labels `easy`, `medium` and `hard`; any other label
/// maps to `Unknown`, which renders as no stars at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Unknown,
}

impl Difficulty {
    /// Maps a record label to a difficulty. Labels are matched exactly.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "easy" => Self::Easy,
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::Unknown,
        }
    }

    /// Static star lookup for display.
    #[must_use]
    pub fn stars(self) -> &'static str {
        match self {
            Self::Easy => "⭐",
            Self::Medium => "⭐⭐",
            Self::Hard => "⭐⭐⭐",
            Self::Unknown => "",
        }
    }
}

//
// ─── ENCODED TEXT ──────────────────────────────────────────────────────────────
//

/// A percent-encoded text field as supplied by the caller.
///
/// Comparisons (e.g. matching a selected option against the correct answer)
/// happen on the raw encoded form; decoding is for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedText(String);

impl EncodedText {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw encoded form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-decodes for display. Malformed escapes decode lossily rather
    /// than failing; input is assumed well-formed by contract.
    #[must_use]
    pub fn decode(&self) -> String {
        percent_decode_str(&self.0).decode_utf8_lossy().into_owned()
    }
}

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Raw question record as deserialized from caller-supplied data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    pub difficulty: String,
}

impl QuestionRecord {
    /// Validates the record into a `QuizQuestion`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionValidationError` when the question text or correct
    /// answer is blank, or when there are no distractors. Unknown difficulty
    /// labels are not an error; they map to `Difficulty::Unknown`.
    pub fn validate(self) -> Result<QuizQuestion, QuestionValidationError> {
        if self.question.trim().is_empty() {
            return Err(QuestionValidationError::EmptyQuestion);
        }
        if self.correct_answer.trim().is_empty() {
            return Err(QuestionValidationError::EmptyCorrectAnswer);
        }
        if self.incorrect_answers.is_empty() {
            return Err(QuestionValidationError::NoIncorrectAnswers);
        }

        Ok(QuizQuestion {
            question: EncodedText::new(self.question),
            correct_answer: EncodedText::new(self.correct_answer),
            incorrect_answers: self
                .incorrect_answers
                .into_iter()
                .map(EncodedText::new)
                .collect(),
            difficulty: Difficulty::from_label(&self.difficulty),
        })
    }
}

/// One immutable trivia item: a correct answer, an ordered set of
/// distractors, and a difficulty tag. Text fields stay percent-encoded until
/// display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    question: EncodedText,
    correct_answer: EncodedText,
    incorrect_answers: Vec<EncodedText>,
    difficulty: Difficulty,
}

impl QuizQuestion {
    #[must_use]
    pub fn new(
        question: EncodedText,
        correct_answer: EncodedText,
        incorrect_answers: Vec<EncodedText>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            question,
            correct_answer,
            incorrect_answers,
            difficulty,
        }
    }

    #[must_use]
    pub fn question(&self) -> &EncodedText {
        &self.question
    }

    #[must_use]
    pub fn correct_answer(&self) -> &EncodedText {
        &self.correct_answer
    }

    #[must_use]
    pub fn incorrect_answers(&self) -> &[EncodedText] {
        &self.incorrect_answers
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

//
// ─── VALIDATION ERRORS ─────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionValidationError {
    #[error("question text must not be blank")]
    EmptyQuestion,

    #[error("correct answer must not be blank")]
    EmptyCorrectAnswer,

    #[error("a question needs at least one incorrect answer")]
    NoIncorrectAnswers,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
