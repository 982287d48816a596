//! Determiner command implementation

use std::io::Write;

use anyhow::Result;
use clap::Args;
use wordshape_core::Engine;

use super::DeterminerKindArg;

/// Arguments for the determiner command
#[derive(Debug, Args)]
pub struct DeterminerArgs {
    /// Noun phrase; its last word is the head
    pub phrase: String,

    #[arg(short, long, value_enum, default_value = "indefinite")]
    pub kind: DeterminerKindArg,

    /// Print the determiner together with the phrase
    #[arg(long)]
    pub with_phrase: bool,
}

impl DeterminerArgs {
    /// Execute the determiner command
    pub fn execute(&self, engine: &Engine, out: &mut impl Write) -> Result<()> {
        let determiner = engine.determiner(&self.phrase, self.kind.into());
        if self.with_phrase && !determiner.is_empty() {
            writeln!(out, "{determiner} {}", self.phrase.trim())?;
        } else if self.with_phrase {
            writeln!(out, "{}", self.phrase.trim())?;
        } else {
            writeln!(out, "{determiner}")?;
        }
        Ok(())
    }
}
