//! Arena bot: reads one arena payload, prints one action code.
//!
//! The library half holds everything the binary does apart from process
//! setup, so it can be driven from tests.
pub mod bot;
pub mod cli;
pub mod config;
pub mod logging;

pub use bot::{decode_request, error_code, random_source, read_payload, respond, run};
pub use cli::Args;
pub use config::BotConfig;
