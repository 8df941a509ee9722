use quiz_core::model::{Feedback, QuizQuestion, QuizSession};
use rand::Rng;

/// The two events the widget surface can emit. `Select` carries the raw
/// encoded option text, not the decoded display form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(String),
    Advance,
}

/// Visual state of one option row, computed once per render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionVisual {
    Neutral,
    CorrectReveal,
    SelectedWrong,
}

impl OptionVisual {
    /// Static class lookup consumed by the view.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Neutral => "quiz-option",
            Self::CorrectReveal => "quiz-option quiz-option--correct",
            Self::SelectedWrong => "quiz-option quiz-option--selected",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    /// Raw encoded text, echoed back through `QuizIntent::Select`.
    pub raw: String,
    /// Percent-decoded display text.
    pub label: String,
    pub visual: OptionVisual,
}

/// View model over a [`QuizSession`]: applies intents and exposes the
/// display strings and percentages the view interpolates.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            session: QuizSession::new(questions),
        }
    }

    pub fn apply(&mut self, intent: QuizIntent) {
        match intent {
            QuizIntent::Select(option) => {
                tracing::debug!(%option, "option selected");
                self.session.select_option(&option);
            }
            QuizIntent::Advance => {
                tracing::debug!("advance requested");
                self.session.advance();
            }
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn has_question(&self) -> bool {
        self.session.current_question().is_some()
    }

    /// True once the current question has been answered; option rows are
    /// inert from then on.
    #[must_use]
    pub fn answered(&self) -> bool {
        self.session.selected_option().is_some()
    }

    #[must_use]
    pub fn counter_label(&self) -> String {
        format!(
            "Question {} of {}",
            self.session.current_index() + 1,
            self.session.total_questions()
        )
    }

    #[must_use]
    pub fn stars(&self) -> &'static str {
        self.session
            .current_question()
            .map_or("", |question| question.difficulty().stars())
    }

    #[must_use]
    pub fn question_text(&self) -> Option<String> {
        self.session
            .current_question()
            .map(|question| question.question().decode())
    }

    /// Builds the option rows for this render: a fresh shuffle of the
    /// current question's options with their visual states.
    #[must_use]
    pub fn options<R: Rng>(&self, rng: &mut R) -> Vec<OptionVm> {
        let feedback = self.session.feedback();
        let selected = self.session.selected_option().map(|text| text.as_str());
        let correct = self
            .session
            .current_question()
            .map(|question| question.correct_answer().as_str());

        self.session
            .shuffled_options(rng)
            .into_iter()
            .map(|text| {
                let raw = text.as_str();
                OptionVm {
                    raw: raw.to_string(),
                    label: text.decode(),
                    visual: option_visual(feedback, selected, correct == Some(raw), raw),
                }
            })
            .collect()
    }

    #[must_use]
    pub fn feedback_message(&self) -> &'static str {
        self.session.feedback().message()
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        format!("Score: {:.2}%", self.session.bottom_progress_percent())
    }

    #[must_use]
    pub fn top_progress_percent(&self) -> f64 {
        self.session.top_progress_percent()
    }

    #[must_use]
    pub fn bottom_progress_percent(&self) -> f64 {
        self.session.bottom_progress_percent()
    }

    #[must_use]
    pub fn show_next(&self) -> bool {
        self.session.show_next()
    }
}

/// Correct styling applies only on a session-wide `Correct` with the option
/// being the correct answer; selected styling applies to the chosen option
/// whenever feedback is anything else (including `Quiz Over`).
fn option_visual(
    feedback: Feedback,
    selected: Option<&str>,
    is_correct_option: bool,
    option: &str,
) -> OptionVisual {
    if feedback == Feedback::Correct && is_correct_option {
        OptionVisual::CorrectReveal
    } else if feedback != Feedback::Correct && selected == Some(option) {
        OptionVisual::SelectedWrong
    } else {
        OptionVisual::Neutral
    }
}
