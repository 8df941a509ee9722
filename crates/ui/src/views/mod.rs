mod quiz;

pub use quiz::QuizView;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod quiz_smoke;
