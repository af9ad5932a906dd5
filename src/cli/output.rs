//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, ValidatorArgs};
use crate::error::Result;
use crate::knowledge::KnowledgeEntry;
use crate::report::Report;

/// Result structure for the vocabulary command.
#[derive(Debug, Serialize, Deserialize)]
pub struct VocabularySummary {
    pub size: usize,
    pub terms: Vec<String>,
}

/// Print a report.
pub fn output_report(report: &Report, args: &ValidatorArgs) -> Result<()> {
    let mut out = io::stdout().lock();
    match args.output_format {
        OutputFormat::Human => writeln!(out, "{report}")?,
        OutputFormat::Json => write_json(&mut out, report, args)?,
    }
    Ok(())
}

/// Print the knowledge base.
pub fn output_sectors(entries: &[KnowledgeEntry], args: &ValidatorArgs) -> Result<()> {
    let mut out = io::stdout().lock();
    match args.output_format {
        OutputFormat::Human => write_sectors_human(&mut out, entries, args)?,
        OutputFormat::Json => write_json(&mut out, entries, args)?,
    }
    Ok(())
}

/// Print a vocabulary summary.
pub fn output_vocabulary(summary: &VocabularySummary, args: &ValidatorArgs) -> Result<()> {
    let mut out = io::stdout().lock();
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                writeln!(out, "Vocabulary size: {}", summary.size)?;
                writeln!(out)?;
            }
            for (idx, term) in summary.terms.iter().enumerate() {
                writeln!(out, "{idx:>4}  {term}")?;
            }
        }
        OutputFormat::Json => write_json(&mut out, summary, args)?,
    }
    Ok(())
}

fn write_sectors_human<W: Write>(
    out: &mut W,
    entries: &[KnowledgeEntry],
    args: &ValidatorArgs,
) -> Result<()> {
    for entry in entries {
        writeln!(out, "{}", entry.label)?;
        if args.verbosity() > 0 {
            writeln!(out, "  Market Trend: {}", entry.trend)?;
            writeln!(out, "  Potential Challenges: {}", entry.challenge)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
    args: &ValidatorArgs,
) -> Result<()> {
    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
