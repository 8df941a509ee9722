use quiz_core::model::{Difficulty, EncodedText, QuizQuestion};

use super::test_harness::setup_quiz_harness;
use crate::vm::QuizIntent;

fn question(text: &str, correct: &str, incorrect: &[&str], difficulty: Difficulty) -> QuizQuestion {
    QuizQuestion::new(
        EncodedText::new(text),
        EncodedText::new(correct),
        incorrect.iter().copied().map(EncodedText::new).collect(),
        difficulty,
    )
}

fn capital_quiz() -> Vec<QuizQuestion> {
    vec![
        question(
            "What%20is%20the%20capital%20of%20France%3F",
            "Paris",
            &["Lyon", "Marseille", "Nice"],
            Difficulty::Easy,
        ),
        question(
            "What%20is%20the%20capital%20of%20Japan%3F",
            "Tokyo",
            &["Osaka", "Kyoto"],
            Difficulty::Hard,
        ),
    ]
}

#[test]
fn quiz_smoke_renders_question_scaffold() {
    let mut harness = setup_quiz_harness(capital_quiz());
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("What is the capital of France?"),
        "missing decoded question in {html}"
    );
    assert!(html.contains("Question 1 of 2"), "missing counter in {html}");
    assert!(html.contains("Difficulty: ⭐"), "missing stars in {html}");
    for option in ["Paris", "Lyon", "Marseille", "Nice"] {
        assert!(html.contains(option), "missing option {option} in {html}");
    }
    assert!(html.contains("Score: 0.00%"), "missing score in {html}");
    assert!(html.contains("Max Score: 75%"), "missing max score in {html}");
    assert!(!html.contains("Next Question"), "next button shown early in {html}");
}

#[test]
fn quiz_smoke_correct_selection_reveals_and_scores() {
    let mut harness = setup_quiz_harness(capital_quiz());
    harness.rebuild();

    harness.handles.dispatch().call(QuizIntent::Select("Paris".to_string()));
    harness.drive();
    let html = harness.render();

    assert!(html.contains("Correct"), "missing feedback in {html}");
    assert!(html.contains("quiz-option--correct"), "missing reveal class in {html}");
    assert!(html.contains("Score: 50.00%"), "missing score in {html}");
    assert!(html.contains("Next Question"), "missing next button in {html}");

    let vm = harness.handles.vm();
    let vm = vm.read();
    assert_eq!(vm.session().correct_count(), 1);
    assert_eq!(vm.session().answered_count(), 1);
    assert_eq!(vm.session().top_progress_percent(), 50.0);
}

#[test]
fn quiz_smoke_wrong_selection_marks_and_apologizes() {
    let mut harness = setup_quiz_harness(capital_quiz());
    harness.rebuild();

    harness.handles.dispatch().call(QuizIntent::Select("Lyon".to_string()));
    harness.drive();
    let html = harness.render();

    assert!(
        html.contains("Sorry. Please try again."),
        "missing feedback in {html}"
    );
    assert!(
        html.contains("quiz-option--selected"),
        "missing selected class in {html}"
    );
    assert!(
        !html.contains("quiz-option--correct"),
        "correct reveal leaked in {html}"
    );
    assert!(html.contains("Score: 0.00%"), "missing score in {html}");
}

#[test]
fn quiz_smoke_second_selection_is_ignored() {
    let mut harness = setup_quiz_harness(capital_quiz());
    harness.rebuild();

    let dispatch = harness.handles.dispatch();
    dispatch.call(QuizIntent::Select("Lyon".to_string()));
    harness.drive();
    dispatch.call(QuizIntent::Select("Paris".to_string()));
    harness.drive();

    let vm = harness.handles.vm();
    let vm = vm.read();
    assert_eq!(vm.session().answered_count(), 1);
    assert_eq!(vm.session().correct_count(), 0);
    assert_eq!(vm.feedback_message(), "Sorry. Please try again.");
}

#[test]
fn quiz_smoke_advance_resets_for_the_next_question() {
    let mut harness = setup_quiz_harness(capital_quiz());
    harness.rebuild();

    let dispatch = harness.handles.dispatch();
    dispatch.call(QuizIntent::Select("Paris".to_string()));
    harness.drive();
    dispatch.call(QuizIntent::Advance);
    harness.drive();
    let html = harness.render();

    assert!(
        html.contains("What is the capital of Japan?"),
        "missing second question in {html}"
    );
    assert!(html.contains("Question 2 of 2"), "missing counter in {html}");
    assert!(!html.contains("Next Question"), "next button lingered in {html}");
    assert!(html.contains("Difficulty: ⭐⭐⭐"), "missing stars in {html}");
}

#[test]
fn quiz_smoke_finishing_shows_quiz_over() {
    let mut harness = setup_quiz_harness(vec![question(
        "Q1",
        "B",
        &["A", "C", "D"],
        Difficulty::Easy,
    )]);
    harness.rebuild();

    let dispatch = harness.handles.dispatch();
    dispatch.call(QuizIntent::Select("B".to_string()));
    harness.drive();
    dispatch.call(QuizIntent::Advance);
    harness.drive();
    let html = harness.render();

    assert!(html.contains("Quiz Over"), "missing terminal feedback in {html}");
    assert!(!html.contains("Next Question"), "next button lingered in {html}");
    assert!(html.contains("Score: 100.00%"), "missing final score in {html}");

    let vm = harness.handles.vm();
    let vm = vm.read();
    assert!(vm.session().is_finished());
}

#[test]
fn quiz_smoke_empty_question_list_renders_empty_state() {
    let mut harness = setup_quiz_harness(Vec::new());
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("No questions loaded."),
        "missing empty state in {html}"
    );
    assert!(!html.contains("Question 1 of"), "question scaffold leaked in {html}");
}
