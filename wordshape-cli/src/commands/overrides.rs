//! Override management commands

use std::io::Write;

use anyhow::Result;
use clap::Subcommand;
use wordshape_core::{Engine, OverrideKind};

/// Override subcommands
#[derive(Debug, Subcommand)]
pub enum OverrideCommands {
    /// Add or replace an override ("set plural octopus octopodes")
    Set {
        /// Override map (plural, past, third-person, determiner, ...)
        kind: OverrideKind,
        /// Word or phrase the override applies to
        key: String,
        /// Form to produce instead
        value: String,
    },

    /// Remove one override
    Remove { kind: OverrideKind, key: String },

    /// Exempt a word from every transformation
    Keep { word: String },

    /// Print the overrides record as JSON
    Show,

    /// Delete every override for the language
    Reset,
}

impl OverrideCommands {
    /// Execute the override command
    pub fn execute(&self, engine: &Engine, out: &mut impl Write) -> Result<()> {
        match self {
            OverrideCommands::Set { kind, key, value } => {
                engine.update_overrides(|overrides| overrides.set(*kind, key, value.as_str()));
                log::info!("Set {kind} override '{key}' → '{value}' for '{}'", engine.code());
            }
            OverrideCommands::Remove { kind, key } => {
                let mut removed = None;
                engine.update_overrides(|overrides| removed = overrides.remove(*kind, key));
                if removed.is_none() {
                    log::warn!("No {kind} override for '{key}' in '{}'", engine.code());
                }
            }
            OverrideCommands::Keep { word } => {
                engine.update_overrides(|overrides| overrides.keep(word));
            }
            OverrideCommands::Show => {
                let overrides = engine.overrides();
                serde_json::to_writer_pretty(&mut *out, &overrides)?;
                writeln!(out)?;
            }
            OverrideCommands::Reset => {
                engine.reset_overrides();
                log::info!("Reset overrides for '{}'", engine.code());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(command: OverrideCommands, engine: &Engine) -> String {
        let mut out = Vec::new();
        command.execute(engine, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_set_remove_and_keep() {
        let engine = Engine::in_memory("en");
        run(
            OverrideCommands::Set {
                kind: OverrideKind::Past,
                key: "Go".to_string(),
                value: "goed".to_string(),
            },
            &engine,
        );
        assert_eq!(engine.to_past("go"), "goed");

        run(
            OverrideCommands::Remove {
                kind: OverrideKind::Past,
                key: "go".to_string(),
            },
            &engine,
        );
        assert_eq!(engine.to_past("go"), "went");

        run(
            OverrideCommands::Keep {
                word: "data".to_string(),
            },
            &engine,
        );
        assert_eq!(engine.singularize("data", false), "data");
    }

    #[test]
    fn test_show_and_reset() {
        let engine = Engine::in_memory("en");
        engine.update_overrides(|overrides| overrides.keep("data"));

        let shown: serde_json::Value =
            serde_json::from_str(&run(OverrideCommands::Show, &engine)).unwrap();
        assert_eq!(shown["do_not_change"][0], "data");

        run(OverrideCommands::Reset, &engine);
        assert!(engine.overrides().is_empty());
    }
}
