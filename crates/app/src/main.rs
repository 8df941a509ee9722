use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{QuestionRecord, QuizQuestion};
use ui::{App, UiApp, build_app_context};

mod sample;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyPath,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyPath => write!(f, "--questions requires a non-empty path"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    questions: Arc<Vec<QuizQuestion>>,
}

impl UiApp for DesktopApp {
    fn quiz_questions(&self) -> Arc<Vec<QuizQuestion>> {
        Arc::clone(&self.questions)
    }
}

struct Args {
    questions_path: Option<PathBuf>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <json_path>]");
    eprintln!();
    eprintln!("With no question file, a built-in sample set is used.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZSHOW_QUESTIONS");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut questions_path = std::env::var("QUIZSHOW_QUESTIONS")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    let value = require_value(args, "--questions")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyPath);
                    }
                    questions_path = Some(PathBuf::from(value));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { questions_path })
    }
}

/// Validates raw records at the trust boundary. Invalid records are skipped
/// with a warning rather than aborting the launch; zero valid records just
/// means the widget starts in its empty state.
fn validate_records(records: Vec<QuestionRecord>) -> Vec<QuizQuestion> {
    let mut questions = Vec::with_capacity(records.len());
    for record in records {
        match record.validate() {
            Ok(question) => questions.push(question),
            Err(err) => tracing::warn!(%err, "skipping invalid question record"),
        }
    }
    questions
}

fn load_questions(path: &PathBuf) -> Result<Vec<QuizQuestion>, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    let records: Vec<QuestionRecord> = serde_json::from_str(&raw)?;
    Ok(validate_records(records))
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let questions = match parsed.questions_path {
        Some(path) => load_questions(&path)?,
        None => validate_records(sample::sample_records()),
    };
    tracing::info!(count = questions.len(), "question set loaded");

    let app = DesktopApp {
        questions: Arc::new(questions),
    };
    let context = build_app_context(&(Arc::new(app) as Arc<dyn UiApp>));

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz Show")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
