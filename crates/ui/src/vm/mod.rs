mod quiz_vm;

pub use quiz_vm::{OptionVisual, OptionVm, QuizIntent, QuizVm};
