//! Conjugate command implementation

use std::io::Write;

use anyhow::Result;
use clap::{Args, ValueEnum};
use wordshape_core::{Aspect, ConjugationRequest, Engine, Tense, Voice};

use super::{NumberArg, PersonArg};

/// Arguments for the conjugate command
#[derive(Debug, Args)]
pub struct ConjugateArgs {
    /// Verb lemma ("go", "write")
    pub lemma: String,

    #[arg(short, long, value_enum, default_value = "third")]
    pub person: PersonArg,

    #[arg(short, long, value_enum, default_value = "singular")]
    pub number: NumberArg,

    #[arg(short, long, value_enum, default_value = "present")]
    pub tense: TenseArg,

    #[arg(short, long, value_enum, default_value = "simple")]
    pub aspect: AspectArg,

    #[arg(long, value_enum, default_value = "active")]
    pub voice: VoiceArg,

    /// Print every tense, aspect and voice for the person and number
    #[arg(long)]
    pub table: bool,

    /// Print the table as JSON
    #[arg(long, requires = "table")]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TenseArg {
    Present,
    Past,
    Future,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AspectArg {
    Simple,
    Progressive,
    Perfect,
    PerfectProgressive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VoiceArg {
    Active,
    Passive,
}

impl From<TenseArg> for Tense {
    fn from(value: TenseArg) -> Self {
        match value {
            TenseArg::Present => Tense::Present,
            TenseArg::Past => Tense::Past,
            TenseArg::Future => Tense::Future,
        }
    }
}

impl From<AspectArg> for Aspect {
    fn from(value: AspectArg) -> Self {
        match value {
            AspectArg::Simple => Aspect::Simple,
            AspectArg::Progressive => Aspect::Progressive,
            AspectArg::Perfect => Aspect::Perfect,
            AspectArg::PerfectProgressive => Aspect::PerfectProgressive,
        }
    }
}

impl From<VoiceArg> for Voice {
    fn from(value: VoiceArg) -> Self {
        match value {
            VoiceArg::Active => Voice::Active,
            VoiceArg::Passive => Voice::Passive,
        }
    }
}

impl ConjugateArgs {
    pub fn request(&self) -> ConjugationRequest {
        ConjugationRequest::new(self.lemma.as_str())
            .person(self.person.into())
            .number(self.number.into())
            .tense(self.tense.into())
            .aspect(self.aspect.into())
            .voice(self.voice.into())
    }

    /// Execute the conjugate command
    pub fn execute(&self, engine: &Engine, out: &mut impl Write) -> Result<()> {
        if !self.table {
            writeln!(out, "{}", engine.conjugate(&self.request()))?;
            return Ok(());
        }

        let rows = engine.conjugation_table(&self.lemma, self.person.into(), self.number.into());
        if self.json {
            serde_json::to_writer_pretty(&mut *out, &rows)?;
            writeln!(out)?;
            return Ok(());
        }

        for row in rows {
            writeln!(
                out,
                "{:<8}{:<20}{:<8}{}",
                row.tense.as_str(),
                row.aspect.as_str(),
                row.voice.as_str(),
                row.form
            )?;
        }
        Ok(())
    }
}
