use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{QuizIntent, QuizVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(move || QuizVm::new(ctx.questions().as_ref().clone()));

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        vm.write().apply(intent);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let vm_guard = vm.read();
    let has_question = vm_guard.has_question();
    let answered = vm_guard.answered();
    let counter_label = vm_guard.counter_label();
    let stars_label = format!("Difficulty: {}", vm_guard.stars());
    let question_text = vm_guard.question_text();
    // Fresh shuffle on every render; the displayed order is intentionally
    // not stable for an unanswered question.
    let options = vm_guard.options(&mut rand::thread_rng());
    let feedback_message = vm_guard.feedback_message();
    let score_label = vm_guard.score_label();
    let top_percent = vm_guard.top_progress_percent();
    let bottom_percent = vm_guard.bottom_progress_percent();
    let show_next = vm_guard.show_next();
    drop(vm_guard);

    let option_rows = options.into_iter().map(|option| {
        let class = option.visual.class();
        let label = option.label;
        let raw = option.raw;
        rsx! {
            li {
                class: "{class}",
                onclick: move |_| {
                    if !answered {
                        dispatch_intent.call(QuizIntent::Select(raw.clone()));
                    }
                },
                "{label}"
            }
        }
    });

    rsx! {
        div { class: "quiz-container",
            if !has_question {
                p { class: "quiz-empty", "No questions loaded. Supply a question set to start." }
            } else {
                div { class: "progress-meter progress-meter--top",
                    div { class: "progress-meter__fill", style: "width: {top_percent}%;" }
                }

                div { class: "quiz-question-number", "{counter_label}" }
                div { class: "quiz-stars", "{stars_label}" }
                if let Some(text) = question_text {
                    div { class: "quiz-question", "{text}" }
                }

                ul { class: "quiz-options",
                    {option_rows}
                }

                div { class: "quiz-feedback", "{feedback_message}" }
                div { class: "quiz-score-row",
                    div { "{score_label}" }
                    div { "Max Score: 75%" }
                }

                div { class: "progress-meter progress-meter--bottom",
                    div { class: "progress-meter__fill", style: "width: {bottom_percent}%;" }
                }

                if show_next {
                    button {
                        class: "quiz-next-btn",
                        id: "quiz-next",
                        r#type: "button",
                        onclick: move |_| dispatch_intent.call(QuizIntent::Advance),
                        "Next Question"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<QuizVm>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, vm: Signal<QuizVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<QuizVm> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
