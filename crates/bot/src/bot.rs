//! One request in, one action out.
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use arena_core::{ArenaRequest, EntropyRng, PcgRng, RandomSource};
use tactics::{Decision, TacticalEngine, TacticsError};

use crate::config::BotConfig;

/// Parses the arena service payload.
pub fn decode_request(payload: &str) -> Result<ArenaRequest> {
    serde_json::from_str(payload).context("malformed arena payload")
}

/// Reads the payload from `path`, or from standard input when `None`.
pub fn read_payload(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read payload from {}", path.display())),
        None => {
            let mut payload = String::new();
            io::stdin()
                .read_to_string(&mut payload)
                .context("failed to read payload from stdin")?;
            Ok(payload)
        }
    }
}

/// Random stream for this run: replayable when seeded.
pub fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(PcgRng::new(seed)),
        None => Box::new(EntropyRng::new()),
    }
}

/// Decides for one raw payload.
pub fn respond(
    engine: &TacticalEngine,
    payload: &str,
    rng: &mut dyn RandomSource,
) -> Result<Decision> {
    let request = decode_request(payload)?;
    let decision = engine.decide(&request, rng)?;
    Ok(decision)
}

/// Stable code logged for a failed run.
pub fn error_code(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<TacticsError>()
        .map_or("BOT_INVALID_INPUT", TacticsError::error_code)
}

/// Reads the configured payload, decides, and writes the action code to
/// `out`.
pub fn run(config: &BotConfig, out: &mut impl Write) -> Result<Decision> {
    let payload = read_payload(config.input.as_deref())?;
    let mut rng = random_source(config.seed);
    let decision = respond(&TacticalEngine::new(), &payload, &mut *rng)?;

    write!(out, "{}", decision.action).context("failed to write action")?;
    out.flush().context("failed to write action")?;

    Ok(decision)
}
