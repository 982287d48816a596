//! Sentence command implementation

use std::io::Write;

use anyhow::Result;
use clap::{Args, ValueEnum};
use wordshape_core::Engine;

use crate::error::CliError;

/// Arguments for the sentence command
#[derive(Debug, Args)]
pub struct SentenceArgs {
    /// Clause transformation
    #[arg(value_enum)]
    pub operation: ClauseOperation,

    /// Sentence to transform
    pub text: String,

    /// Use contractions ("isn't", "doesn't") when negating
    #[arg(long)]
    pub contracted: bool,

    /// Question word for wh-question
    #[arg(long, value_name = "WORD")]
    pub wh: Option<String>,
}

/// Clause-level transformations
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClauseOperation {
    /// "He goes." → "He does not go."
    Negate,
    /// "He goes." → "Does he go?"
    Question,
    /// "He goes." → "Where does he go?" (needs --wh)
    WhQuestion,
}

impl SentenceArgs {
    /// Execute the sentence command
    pub fn execute(&self, engine: &Engine, out: &mut impl Write) -> Result<()> {
        let result = match self.operation {
            ClauseOperation::Negate => engine.negate_text(&self.text, self.contracted),
            ClauseOperation::Question => engine.yes_no_question_text(&self.text),
            ClauseOperation::WhQuestion => {
                let wh = self.wh.as_deref().ok_or_else(|| {
                    CliError::InvalidArgument("wh-question needs --wh <WORD>".to_string())
                })?;
                engine.wh_question_text(&self.text, wh)
            }
        };
        writeln!(out, "{result}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(operation: ClauseOperation, text: &str) -> SentenceArgs {
        SentenceArgs {
            operation,
            text: text.to_string(),
            contracted: false,
            wh: None,
        }
    }

    fn run(args: &SentenceArgs) -> Result<String> {
        let mut out = Vec::new();
        args.execute(&Engine::in_memory("en"), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_negate() {
        let mut negate = args(ClauseOperation::Negate, "She is here.");
        assert_eq!(run(&negate).unwrap(), "She is not here.\n");
        negate.contracted = true;
        assert_eq!(run(&negate).unwrap(), "She isn't here.\n");
    }

    #[test]
    fn test_question() {
        let question = args(ClauseOperation::Question, "He likes pizza.");
        assert_eq!(run(&question).unwrap(), "Does he like pizza?\n");
    }

    #[test]
    fn test_wh_question_requires_word() {
        let mut wh = args(ClauseOperation::WhQuestion, "She is going.");
        assert!(run(&wh).is_err());

        wh.wh = Some("where".to_string());
        assert_eq!(run(&wh).unwrap(), "Where is she going?\n");
    }
}
