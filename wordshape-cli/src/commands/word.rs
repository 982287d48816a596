//! Word command implementation

use std::io::Write;

use anyhow::Result;
use clap::Args;
use wordshape_core::{Engine, WordOperation};

/// Arguments for the word command
#[derive(Debug, Args)]
pub struct WordArgs {
    /// Operation to apply (see `wordshape list operations`)
    #[arg(value_name = "OPERATION")]
    pub operation: WordOperation,

    /// Word to reshape
    pub word: String,

    /// Leave capitalized words that look like proper names alone
    #[arg(long)]
    pub conservative: bool,
}

impl WordArgs {
    /// Execute the word command
    pub fn execute(&self, engine: &Engine, out: &mut impl Write) -> Result<()> {
        log::debug!("Applying {} to '{}'", self.operation, self.word);

        if self.operation == WordOperation::Pronouns {
            for variant in engine.pronoun_variants(&self.word) {
                writeln!(out, "{variant}")?;
            }
            return Ok(());
        }

        let engine = engine.clone().with_conservative(self.conservative);
        writeln!(out, "{}", engine.apply(self.operation, &self.word))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(operation: WordOperation, word: &str, conservative: bool) -> String {
        let args = WordArgs {
            operation,
            word: word.to_string(),
            conservative,
        };
        let mut out = Vec::new();
        args.execute(&Engine::in_memory("en"), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_word_operations() {
        assert_eq!(run(WordOperation::Plural, "Child", false), "Children\n");
        assert_eq!(run(WordOperation::Base, "running", false), "run\n");
        assert_eq!(run(WordOperation::Superlative, "happy", false), "happiest\n");
    }

    #[test]
    fn test_conservative_flag() {
        assert_eq!(run(WordOperation::Plural, "Smith", true), "Smith\n");
        assert_eq!(run(WordOperation::Plural, "Smith", false), "Smiths\n");
    }

    #[test]
    fn test_pronouns_one_per_line() {
        assert_eq!(
            run(WordOperation::Pronouns, "him", false),
            "he\nhim\nhis\nhis\nhimself\n"
        );
    }
}
