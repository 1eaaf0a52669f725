//! Command-line interface for pivot-tetris.
//!
//! Every flag falls back to a `TETRIS_*` environment variable, then to the
//! built-in default.

use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::{Args, Parser};

use crate::core::{derive_skin_seed, SessionConfig};
use crate::types::DEFAULT_TICK_MS;

/// Options that decide how a session plays out.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SessionArgs {
    /// Seed for the piece sequence
    #[arg(long, env = "TETRIS_SEED", default_value_t = 1)]
    pub seed: u32,

    /// Seed for piece skins (derived from --seed when omitted)
    #[arg(long, env = "TETRIS_SKIN_SEED")]
    pub skin_seed: Option<u32>,

    /// Gravity interval in milliseconds
    #[arg(long, env = "TETRIS_TICK_MS", default_value_t = DEFAULT_TICK_MS)]
    pub tick_ms: u32,
}

impl SessionArgs {
    /// Validate the options and build a session config.
    pub fn session_config(&self) -> Result<SessionConfig> {
        ensure!(self.tick_ms > 0, "tick interval must be positive, got {}", self.tick_ms);
        Ok(SessionConfig {
            seed: self.seed,
            skin_seed: self.skin_seed.unwrap_or_else(|| derive_skin_seed(self.seed)),
            tick_ms: self.tick_ms,
        })
    }
}

/// Pivot Tetris - terminal falling-block puzzle
#[derive(Parser, Debug)]
#[command(name = "pivot-tetris")]
#[command(about = "Terminal falling-block puzzle", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Write logs to this file (logging is off when omitted)
    #[arg(long, env = "TETRIS_LOG_PATH")]
    pub log_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_built_in_session_config() {
        let cli = Cli::try_parse_from(["pivot-tetris"]).unwrap();
        let config = cli.session.session_config().unwrap();
        assert_eq!(config, SessionConfig::new(1));
        assert!(cli.log_path.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "pivot-tetris",
            "--seed",
            "42",
            "--skin-seed",
            "7",
            "--tick-ms",
            "250",
            "--log-path",
            "game.log",
        ])
        .unwrap();
        let config = cli.session.session_config().unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.skin_seed, 7);
        assert_eq!(config.tick_ms, 250);
        assert_eq!(cli.log_path, Some(PathBuf::from("game.log")));
    }

    #[test]
    fn zero_tick_interval_is_rejected() {
        let cli = Cli::try_parse_from(["pivot-tetris", "--tick-ms", "0"]).unwrap();
        assert!(cli.session.session_config().is_err());
    }

    #[test]
    fn non_numeric_seed_fails_to_parse() {
        assert!(Cli::try_parse_from(["pivot-tetris", "--seed", "abc"]).is_err());
    }
}
