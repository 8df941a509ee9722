use std::sync::Arc;

use quiz_core::model::QuizQuestion;

/// UI-facing surface of the composition root: the widget's only input is
/// the question list it is constructed with.
pub trait UiApp: Send + Sync {
    fn quiz_questions(&self) -> Arc<Vec<QuizQuestion>>;
}

#[derive(Clone)]
pub struct AppContext {
    questions: Arc<Vec<QuizQuestion>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            questions: app.quiz_questions(),
        }
    }

    #[must_use]
    pub fn questions(&self) -> Arc<Vec<QuizQuestion>> {
        Arc::clone(&self.questions)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
