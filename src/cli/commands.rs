//! Command implementations for the idea validator CLI.

use log::debug;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::knowledge::KnowledgeBase;
use crate::validator::{IdeaSubmission, IdeaValidator, initialize};

/// Execute a CLI command.
pub fn execute_command(args: ValidatorArgs) -> Result<()> {
    match &args.command {
        Command::Validate(validate_args) => validate_idea(validate_args, &args),
        Command::Submit(submit_args) => submit_idea(submit_args.clone(), &args),
        Command::Sectors => list_sectors(&args),
        Command::Vocabulary => show_vocabulary(&args),
    }
}

/// Classify a free-text idea.
fn validate_idea(args: &ValidateArgs, cli_args: &ValidatorArgs) -> Result<()> {
    let validator = IdeaValidator::new()?;
    let idea = args.idea_text();
    debug!("validating idea: {idea:?}");

    let report = validator.validate(&idea)?;
    output_report(&report, cli_args)
}

/// Classify a structured submission.
fn submit_idea(args: SubmitArgs, cli_args: &ValidatorArgs) -> Result<()> {
    let validator = IdeaValidator::new()?;
    let submission = IdeaSubmission::from(args);
    debug!("validating submission: {:?}", submission.title);

    let report = validator.validate_submission(&submission)?;
    output_report(&report, cli_args)
}

/// List sector knowledge.
fn list_sectors(cli_args: &ValidatorArgs) -> Result<()> {
    let kb = KnowledgeBase::new();
    kb.verify()?;
    output_sectors(kb.entries(), cli_args)
}

/// Print the vocabulary learned at startup.
fn show_vocabulary(cli_args: &ValidatorArgs) -> Result<()> {
    let (vocabulary, _, _) = initialize()?;
    let summary = VocabularySummary {
        size: vocabulary.len(),
        terms: vocabulary.terms().to_vec(),
    };
    output_vocabulary(&summary, cli_args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ValidationError, ValidatorError};
    use clap::Parser;

    #[test]
    fn test_blank_idea_is_a_validation_error() {
        let args = ValidatorArgs::try_parse_from(["idea-validator", "validate", "   "]).unwrap();
        match execute_command(args) {
            Err(ValidatorError::Validation(ValidationError::EmptyInput)) => {}
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_idea_is_a_validation_error() {
        let args = ValidatorArgs::try_parse_from(["idea-validator", "validate"]).unwrap();
        let err = execute_command(args).unwrap_err();
        assert!(err.is_validation());
    }
}
