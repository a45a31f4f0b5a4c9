//! Arena bot binary.
//!
//! Reads one JSON arena payload from a file or standard input and writes the
//! chosen action code (`F`, `L`, `R` or `T`) to standard output.
//!
//! # Examples
//!
//! ```bash
//! # Payload on stdin
//! arena-bot < arena.json
//!
//! # Replayable run with decision logs
//! arena-bot --input arena.json --seed 42 --log tactics=debug
//! ```

use std::process::ExitCode;

use anyhow::Result;
use arena_bot::{Args, BotConfig, logging};
use clap::Parser;

fn main() -> Result<ExitCode> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let config = args.apply(BotConfig::from_env());

    logging::setup_logging(&config.log_filter)?;

    tracing::info!(
        input = ?config.input,
        seed = ?config.seed,
        "arena bot starting"
    );

    let mut stdout = std::io::stdout().lock();
    match arena_bot::run(&config, &mut stdout) {
        Ok(decision) => {
            tracing::info!(action = %decision.action, rule = %decision.rule, "{}", decision.summary());
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            // Reported here only; returning `Err` would print it again.
            tracing::error!(code = arena_bot::error_code(&err), "request rejected: {err:#}");
            Ok(ExitCode::FAILURE)
        }
    }
}
