//! Text command implementation

use std::io::Write;

use anyhow::Result;
use clap::Args;
use wordshape_core::{Engine, WordOperation, WordTarget};

/// Arguments for the text command
#[derive(Debug, Args)]
pub struct TextArgs {
    /// Operation to apply (see `wordshape list operations`)
    #[arg(value_name = "OPERATION")]
    pub operation: WordOperation,

    /// Free text; punctuation around the target word is kept
    pub text: String,

    /// Zero-based index of the word to reshape (default: last word)
    #[arg(short, long, value_name = "N")]
    pub index: Option<usize>,

    /// Reshape every word
    #[arg(long, conflicts_with = "index")]
    pub every: bool,

    /// Leave capitalized words that look like proper names alone
    #[arg(long)]
    pub conservative: bool,
}

impl TextArgs {
    pub fn target(&self) -> WordTarget {
        match (self.every, self.index) {
            (true, _) => WordTarget::Every,
            (false, Some(index)) => WordTarget::At(index),
            (false, None) => WordTarget::Last,
        }
    }

    /// Execute the text command
    pub fn execute(&self, engine: &Engine, out: &mut impl Write) -> Result<()> {
        let engine = engine.clone().with_conservative(self.conservative);
        let result = engine.apply_text(self.operation, &self.text, self.target());
        writeln!(out, "{result}")?;
        Ok(())
    }
}
