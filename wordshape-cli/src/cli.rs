//! Top-level argument parsing and engine wiring

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{ArgAction, Args, Parser};
use wordshape_core::{Engine, OverridesStore};

use crate::commands::Commands;
use crate::config::CliConfig;

/// Reshape words and sentences: plurals, tenses, negation, questions and more
#[derive(Debug, Parser)]
#[command(name = "wordshape", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every subcommand
#[derive(Debug, Args, Default)]
pub struct GlobalArgs {
    /// Language tag (en, en-US, de, ...); overrides the config file
    #[arg(short, long, global = true, value_name = "TAG", env = "WORDSHAPE_LANGUAGE")]
    pub language: Option<String>,

    /// Configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding persisted overrides
    #[arg(long, global = true, value_name = "DIR", env = "WORDSHAPE_OVERRIDES_DIR")]
    pub overrides_dir: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Execute the selected command, printing to stdout
    pub fn run(&self) -> Result<()> {
        self.global.init_logging();
        log::debug!("Arguments: {:?}", self);

        let engine = self.global.build_engine()?;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.command.execute(&engine, &mut out)?;
        out.flush()?;
        Ok(())
    }
}

impl GlobalArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // a logger installed earlier in the process wins
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }

    /// Engine for the requested language backed by the configured store
    pub fn build_engine(&self) -> Result<Engine> {
        let config = CliConfig::resolve(self.config.as_deref())?;
        let language = self.language.clone().unwrap_or(config.engine.language);

        let store = match self.overrides_dir.clone().or(config.overrides.directory) {
            Some(directory) => {
                log::info!("Reading overrides from {}", directory.display());
                OverridesStore::with_directory(directory)
            }
            None => OverridesStore::in_memory(),
        };

        let engine = Engine::new(&language, Arc::new(store));
        log::info!("Using language '{}' ({})", engine.code(), engine.language().name());
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["wordshape", "word", "plural", "child", "-l", "en-GB", "-vv"])
            .unwrap();
        assert_eq!(cli.global.language.as_deref(), Some("en-GB"));
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn test_build_engine_uses_language_flag() {
        let global = GlobalArgs {
            language: Some("de-AT".to_string()),
            ..GlobalArgs::default()
        };
        let engine = global.build_engine().unwrap();
        assert_eq!(engine.code(), "de");
    }

    #[test]
    fn test_build_engine_reads_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[engine]\nlanguage = \"fr\"\n").unwrap();

        let global = GlobalArgs {
            config: Some(path),
            ..GlobalArgs::default()
        };
        assert_eq!(global.build_engine().unwrap().code(), "fr");
    }
}
