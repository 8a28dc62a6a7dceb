use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use news_quiz::{Quiz, QuizConfig};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the quiz from
    #[arg(short, long, env = "QUIZ_QUESTIONS")]
    questions: PathBuf,

    /// How long the loading screen stays up, in milliseconds
    #[arg(long, default_value_t = 2000)]
    loading_ms: u64,

    /// How long answer feedback is shown, in milliseconds
    #[arg(long, default_value_t = 3000)]
    feedback_ms: u64,

    /// Where to write the log (the terminal is taken by the quiz)
    #[arg(long, default_value = "news-quiz.log")]
    log_file: PathBuf,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error running quiz: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let _guard = setup_file_logging(&args.log_file, args.verbose)?;

    let config = QuizConfig::from_millis(args.loading_ms, args.feedback_ms);
    let quiz = Quiz::from_json(&args.questions, config)?;
    tracing::info!(
        path = %args.questions.display(),
        loading_ms = args.loading_ms,
        feedback_ms = args.feedback_ms,
        "starting quiz"
    );

    quiz.run().await?;
    Ok(())
}

fn setup_file_logging(log_path: &Path, verbose: bool) -> Result<WorkerGuard> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating log directory {}", parent.display()))?;
        }
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .init();

    Ok(guard)
}
