//! CLI command implementations

use std::io::Write;

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use wordshape_core::language::Language;
use wordshape_core::{DeterminerKind, Engine, Number, Person};

pub mod conjugate;
pub mod determiner;
pub mod overrides;
pub mod sentence;
pub mod text;
pub mod word;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply a word operation to a single word
    Word(word::WordArgs),

    /// Negate a sentence or turn it into a question
    Sentence(sentence::SentenceArgs),

    /// Apply a word operation to one word of free text
    Text(text::TextArgs),

    /// Conjugate a verb
    Conjugate(conjugate::ConjugateArgs),

    /// Choose a determiner for a noun phrase
    Determiner(determiner::DeterminerArgs),

    /// Inspect and edit overrides for the selected language
    Override {
        #[command(subcommand)]
        subcommand: overrides::OverrideCommands,
    },

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List languages with their rule sets
    Languages,

    /// List word operations
    Operations,
}

impl Commands {
    /// Execute the command against `engine`, writing results to `out`
    pub fn execute(&self, engine: &Engine, out: &mut impl Write) -> Result<()> {
        match self {
            Commands::Word(args) => args.execute(engine, out),
            Commands::Sentence(args) => args.execute(engine, out),
            Commands::Text(args) => args.execute(engine, out),
            Commands::Conjugate(args) => args.execute(engine, out),
            Commands::Determiner(args) => args.execute(engine, out),
            Commands::Override { subcommand } => subcommand.execute(engine, out),
            Commands::List { subcommand } => subcommand.execute(out),
        }
    }
}

impl ListCommands {
    pub fn execute(&self, out: &mut impl Write) -> Result<()> {
        match self {
            ListCommands::Languages => {
                for language in Language::ALL {
                    let rules = if language.has_grammar() {
                        "full rules"
                    } else {
                        "overrides only"
                    };
                    writeln!(
                        out,
                        "{:<4}{:<10}{rules}",
                        language.code().unwrap_or("-"),
                        language.name()
                    )?;
                }
                writeln!(out, "Any other tag uses overrides only.")?;
            }
            ListCommands::Operations => {
                for operation in wordshape_core::WordOperation::ALL {
                    writeln!(out, "{operation}")?;
                }
            }
        }
        Ok(())
    }
}

/// Grammatical person
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PersonArg {
    First,
    Second,
    Third,
}

impl From<PersonArg> for Person {
    fn from(value: PersonArg) -> Self {
        match value {
            PersonArg::First => Person::First,
            PersonArg::Second => Person::Second,
            PersonArg::Third => Person::Third,
        }
    }
}

/// Grammatical number
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NumberArg {
    Singular,
    Plural,
}

impl From<NumberArg> for Number {
    fn from(value: NumberArg) -> Self {
        match value {
            NumberArg::Singular => Number::Singular,
            NumberArg::Plural => Number::Plural,
        }
    }
}

/// Determiner kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DeterminerKindArg {
    /// "the"
    Definite,
    /// "a", "an" or "some"
    Indefinite,
    /// No determiner
    None,
}

impl From<DeterminerKindArg> for DeterminerKind {
    fn from(value: DeterminerKindArg) -> Self {
        match value {
            DeterminerKindArg::Definite => DeterminerKind::Definite,
            DeterminerKindArg::Indefinite => DeterminerKind::Indefinite,
            DeterminerKindArg::None => DeterminerKind::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(command: ListCommands) -> String {
        let mut out = Vec::new();
        command.execute(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_languages() {
        let listing = output(ListCommands::Languages);
        assert!(listing.contains("en  English   full rules"));
        assert!(listing.contains("es  Spanish   overrides only"));
        assert!(listing.contains("Any other tag"));
    }

    #[test]
    fn test_list_operations() {
        let listing = output(ListCommands::Operations);
        assert_eq!(listing.lines().count(), wordshape_core::WordOperation::ALL.len());
        assert!(listing.lines().any(|line| line == "third-person"));
    }

    #[test]
    fn test_value_enum_conversions() {
        assert_eq!(Person::from(PersonArg::First), Person::First);
        assert_eq!(Number::from(NumberArg::Plural), Number::Plural);
        assert_eq!(
            DeterminerKind::from(DeterminerKindArg::None),
            DeterminerKind::None
        );
    }
}
