use quiz_core::model::QuestionRecord;

/// Built-in question set used when no question file is configured. Text
/// fields are percent-encoded, matching the caller data contract.
pub fn sample_records() -> Vec<QuestionRecord> {
    vec![
        QuestionRecord {
            question: "Which%20planet%20is%20known%20as%20the%20%22Red%20Planet%22%3F".to_string(),
            correct_answer: "Mars".to_string(),
            incorrect_answers: vec![
                "Venus".to_string(),
                "Jupiter".to_string(),
                "Mercury".to_string(),
            ],
            difficulty: "easy".to_string(),
        },
        QuestionRecord {
            question: "In%20what%20year%20did%20the%20Apollo%2011%20mission%20land%20on%20the%20moon%3F"
                .to_string(),
            correct_answer: "1969".to_string(),
            incorrect_answers: vec![
                "1967".to_string(),
                "1971".to_string(),
                "1973".to_string(),
            ],
            difficulty: "medium".to_string(),
        },
        QuestionRecord {
            question: "Who%20composed%20%22The%20Rite%20of%20Spring%22%3F".to_string(),
            correct_answer: "Igor%20Stravinsky".to_string(),
            incorrect_answers: vec![
                "Claude%20Debussy".to_string(),
                "Maurice%20Ravel".to_string(),
                "Sergei%20Prokofiev".to_string(),
            ],
            difficulty: "hard".to_string(),
        },
        QuestionRecord {
            question: "What%20is%20the%20chemical%20symbol%20for%20gold%3F".to_string(),
            correct_answer: "Au".to_string(),
            incorrect_answers: vec![
                "Ag".to_string(),
                "Gd".to_string(),
                "Go".to_string(),
            ],
            difficulty: "easy".to_string(),
        },
    ]
}
