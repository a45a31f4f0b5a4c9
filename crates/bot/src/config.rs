//! Process configuration for the bot binary.
use std::env;
use std::path::PathBuf;

/// Settings that shape how the binary runs, never what it decides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Payload file; `None` reads standard input.
    pub input: Option<PathBuf>,
    /// Seed for a replayable random stream; `None` draws from thread entropy.
    pub seed: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            log_filter: Self::DEFAULT_LOG_FILTER.to_owned(),
            input: None,
            seed: None,
        }
    }
}

impl BotConfig {
    pub const DEFAULT_LOG_FILTER: &'static str = "info";

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_BOT_LOG` - log filter directive (default: `info`)
    /// - `ARENA_BOT_INPUT` - path of the JSON payload (default: stdin)
    /// - `ARENA_BOT_SEED` - `u64` seed for deterministic tie-breaks
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(filter) = lookup("ARENA_BOT_LOG").filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }
        if let Some(path) = lookup("ARENA_BOT_INPUT").filter(|p| !p.is_empty()) {
            config.input = Some(PathBuf::from(path));
        }
        config.seed = read_env(&lookup, "ARENA_BOT_SEED");

        config
    }
}

fn read_env<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            // Logging is not up yet when the environment is read.
            eprintln!("ignoring {key}={raw:?}: not a valid value");
            None
        }
    }
}
