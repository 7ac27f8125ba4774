use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use attendance_core::ports::{RandomSource, SeededRandom, ThreadRandom};
use attendance_core::{Predictor, RunStatus, run};

/// Reads one JSON object from stdin and prints a mock attendance prediction.
#[derive(Debug, Parser)]
#[command(name = "attendance-predict", version, about)]
struct Cli {
    /// Seed the random source so the same input yields the same output.
    #[arg(long)]
    seed: Option<u64>,
}

/// ログは stderr のみ（stdout は JSON 1 行だけにする）
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn execute<S: RandomSource>(source: S) -> io::Result<RunStatus> {
    let mut predictor = Predictor::with_defaults(source);
    run(io::stdin().lock(), io::stdout().lock(), &mut predictor)
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.seed {
        Some(seed) => execute(SeededRandom::new(seed)),
        None => execute(ThreadRandom::new()),
    };

    match result {
        Ok(status) => ExitCode::from(status.exit_code()),
        Err(e) => {
            // stdout に書けなかったので stderr に残すしかない
            error!(error = %e, "failed to write response");
            ExitCode::FAILURE
        }
    }
}
