//! Command line arguments.
use std::path::PathBuf;

use clap::Parser;

use crate::config::BotConfig;

/// Decide one arena move: reads the JSON payload, prints F, L, R or T.
#[derive(Debug, Parser)]
#[command(name = "arena-bot")]
#[command(about = "Tactical decision engine for the grid arena", long_about = None)]
#[command(version)]
pub struct Args {
    /// JSON payload to read instead of standard input
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Seed for a replayable random stream (overrides ARENA_BOT_SEED)
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Log filter directive, e.g. `debug` or `tactics=trace` (overrides ARENA_BOT_LOG)
    #[arg(short, long, value_name = "FILTER")]
    pub log: Option<String>,
}

impl Args {
    /// Layers the flags over configuration read from the environment.
    pub fn apply(self, mut config: BotConfig) -> BotConfig {
        if let Some(input) = self.input {
            config.input = Some(input);
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(log) = self.log {
            config.log_filter = log;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_environment() {
        let env = BotConfig {
            log_filter: "warn".into(),
            input: Some("env.json".into()),
            seed: Some(1),
        };
        let args = Args::try_parse_from(["arena-bot", "--seed", "9", "-l", "debug"]).unwrap();

        let config = args.apply(env);

        assert_eq!(config.seed, Some(9));
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.input, Some(PathBuf::from("env.json")));
    }

    #[test]
    fn no_flags_keep_environment() {
        let args = Args::try_parse_from(["arena-bot"]).unwrap();
        assert_eq!(args.apply(BotConfig::default()), BotConfig::default());
    }

    #[test]
    fn seed_must_be_numeric() {
        assert!(Args::try_parse_from(["arena-bot", "--seed", "abc"]).is_err());
    }
}
