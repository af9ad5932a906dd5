//! Command line argument parsing for the idea validator using clap.

use clap::{Parser, Subcommand, ValueEnum};

use crate::validator::IdeaSubmission;

/// Idea Validator - classify startup ideas into market sectors
#[derive(Parser, Debug, Clone)]
#[command(name = "idea-validator")]
#[command(about = "Classify a startup idea into a market sector and print an advisory report")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ValidatorArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        default_value = "human",
        env = "IDEA_VALIDATOR_FORMAT",
        global = true
    )]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ValidatorArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify a free-text idea and print its report
    Validate(ValidateArgs),

    /// Classify a structured idea submission
    Submit(SubmitArgs),

    /// List every sector with its market knowledge
    Sectors,

    /// Show the vocabulary learned from the training corpus
    Vocabulary,
}

/// Arguments for validating a free-text idea
#[derive(Parser, Debug, Clone)]
pub struct ValidateArgs {
    /// The idea text; multiple words are joined with spaces
    #[arg(value_name = "IDEA", num_args = 0..)]
    pub idea: Vec<String>,
}

impl ValidateArgs {
    /// The idea as a single string.
    pub fn idea_text(&self) -> String {
        self.idea.join(" ")
    }
}

/// Arguments for a structured submission
#[derive(Parser, Debug, Clone)]
pub struct SubmitArgs {
    /// Short name of the idea
    #[arg(long)]
    pub title: String,

    /// Description of the idea
    #[arg(long)]
    pub description: String,

    /// Intended customers
    #[arg(long)]
    pub target_market: Option<String>,

    /// What makes the idea valuable
    #[arg(long)]
    pub value_proposition: Option<String>,

    /// Known competitors
    #[arg(long)]
    pub competitors: Option<String>,
}

impl From<SubmitArgs> for IdeaSubmission {
    fn from(args: SubmitArgs) -> Self {
        IdeaSubmission {
            title: args.title,
            description: args.description,
            target_market: args.target_market,
            value_proposition: args.value_proposition,
            competitors: args.competitors,
        }
    }
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
