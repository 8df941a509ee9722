use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::question::{EncodedText, QuizQuestion};

/// Per-question answer state. Reset to `Unanswered` whenever the session
/// advances to the next question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerState {
    Unanswered,
    Answered {
        selected: EncodedText,
        was_correct: bool,
    },
}

/// Short status shown after an answer or at quiz end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    None,
    Correct,
    Incorrect,
    QuizOver,
}

impl Feedback {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Correct => "Correct",
            Self::Incorrect => "Sorry. Please try again.",
            Self::QuizOver => "Quiz Over",
        }
    }
}

/// Mutable runtime state tracking progress through a fixed question list.
///
/// The session owns all transitions: the presentation layer feeds it two
/// events (an option was selected, advance was requested) and reads derived
/// state back out. Counters only move on the `Unanswered -> Answered`
/// transition, so repeated selections cannot double-count.
///
/// Invariant: `correct_count <= answered_count <= current_index + 1
/// <= total_questions` holds after every operation on a non-empty session.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    current_index: usize,
    answer: AnswerState,
    correct_count: u32,
    answered_count: u32,
    finished: bool,
}

impl QuizSession {
    #[must_use]
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            current_index: 0,
            answer: AnswerState::Unanswered,
            correct_count: 0,
            answered_count: 0,
            finished: false,
        }
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The active question. Stays on the last question once the session is
    /// finished; `None` only for an empty session.
    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_index)
    }

    #[must_use]
    pub fn answer(&self) -> &AnswerState {
        &self.answer
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<&EncodedText> {
        match &self.answer {
            AnswerState::Unanswered => None,
            AnswerState::Answered { selected, .. } => Some(selected),
        }
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    #[must_use]
    pub fn answered_count(&self) -> u32 {
        self.answered_count
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// True exactly while the "next" control should be offered: the current
    /// question is answered and the session has not ended.
    #[must_use]
    pub fn show_next(&self) -> bool {
        !self.finished && matches!(self.answer, AnswerState::Answered { .. })
    }

    #[must_use]
    pub fn feedback(&self) -> Feedback {
        if self.finished {
            return Feedback::QuizOver;
        }
        match self.answer {
            AnswerState::Unanswered => Feedback::None,
            AnswerState::Answered { was_correct, .. } => {
                if was_correct {
                    Feedback::Correct
                } else {
                    Feedback::Incorrect
                }
            }
        }
    }

    /// Completion-based percentage: answered questions over the whole list.
    /// Defined as `0.0` for an empty session.
    #[must_use]
    pub fn top_progress_percent(&self) -> f64 {
        self.percent_of_total(self.answered_count)
    }

    /// Accuracy-based percentage: correct answers over the whole list.
    /// Defined as `0.0` for an empty session.
    #[must_use]
    pub fn bottom_progress_percent(&self) -> f64 {
        self.percent_of_total(self.correct_count)
    }

    fn percent_of_total(&self, count: u32) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        f64::from(count) / self.questions.len() as f64 * 100.0
    }

    /// Records the selection of `option` (raw encoded form) for the current
    /// question.
    ///
    /// Valid only while the current question is unanswered; calls while
    /// already answered, after the session finished, or on an empty session
    /// are ignored. Correctness is decided by comparing against the current
    /// question's raw correct answer. Any valid selection bumps the answered
    /// count; a correct one also bumps the correct count.
    pub fn select_option(&mut self, option: &str) {
        if self.finished || !matches!(self.answer, AnswerState::Unanswered) {
            return;
        }
        let Some(question) = self.questions.get(self.current_index) else {
            return;
        };

        let was_correct = question.correct_answer().as_str() == option;
        if was_correct {
            self.correct_count += 1;
        }
        self.answered_count += 1;
        self.answer = AnswerState::Answered {
            selected: EncodedText::new(option),
            was_correct,
        };
    }

    /// Moves to the next question, or ends the session when the current
    /// question was the last one.
    ///
    /// Valid only while the current question is answered; the "next" control
    /// is only shown then, but unanswered or already-finished calls are also
    /// ignored here directly.
    pub fn advance(&mut self) {
        if self.finished || matches!(self.answer, AnswerState::Unanswered) {
            return;
        }
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.answer = AnswerState::Unanswered;
        } else {
            self.finished = true;
        }
    }

    /// A fresh uniform permutation of the current question's options
    /// (distractors plus the correct answer), regenerated on every call.
    ///
    /// The presentation layer calls this once per render, so the displayed
    /// order is not stable across renders of the same question.
    #[must_use]
    pub fn shuffled_options<R: Rng>(&self, rng: &mut R) -> Vec<&EncodedText> {
        let Some(question) = self.current_question() else {
            return Vec::new();
        };
        let mut options: Vec<&EncodedText> = question.incorrect_answers().iter().collect();
        options.push(question.correct_answer());
        options.shuffle(rng);
        options
    }
}
