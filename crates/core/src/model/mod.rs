mod question;
mod session;

pub use question::{
    Difficulty, EncodedText, QuestionRecord, QuestionValidationError, QuizQuestion,
};
pub use session::{AnswerState, Feedback, QuizSession};
