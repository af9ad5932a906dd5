//! Entry points used by the hosting process.
//!
//! [`initialize`] trains the classifier and loads the knowledge base once at
//! startup. [`classify_and_report`] is the request-scoped operation; it only
//! reads the state built by `initialize`, so that state can be shared by
//! reference across concurrent handlers.
//!
//! [`IdeaValidator`] bundles the same state into a single context object.
//!
//! # Examples
//!
//! ```
//! use idea_validator::validator::{classify_and_report, initialize};
//! use idea_validator::ml::sector_classifier::SectorLabel;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let (vocabulary, model, kb) = initialize()?;
//! let idea = "AI-based chatbot for customer service";
//! let report = classify_and_report(idea, &vocabulary, &model, &kb)?;
//! assert_eq!(report.sector, SectorLabel::Ai);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::{Normalizer, normalize};
use crate::error::{ConfigurationError, ValidationError};
use crate::knowledge::KnowledgeBase;
use crate::ml::sector_classifier::{
    NaiveBayesModel, NaiveBayesSectorClassifier, SectorClassifier, SectorLabel, Vocabulary,
    reference_corpus,
};
use crate::report::{Report, ReportGenerator};

/// Build the vocabulary, train the model and load the knowledge base.
pub fn initialize() -> Result<(Vocabulary, NaiveBayesModel, KnowledgeBase), ConfigurationError> {
    let corpus = reference_corpus();
    if corpus.is_empty() {
        return Err(ConfigurationError::EmptyTrainingSet);
    }

    let vocabulary = Vocabulary::build(corpus.iter().map(|example| normalize(&example.text)));
    let model = NaiveBayesModel::train(&corpus, &vocabulary)?;

    let kb = KnowledgeBase::new();
    kb.verify()?;

    info!(
        "initialized sector classifier: {} examples, {} terms",
        corpus.len(),
        vocabulary.len()
    );

    Ok((vocabulary, model, kb))
}

/// Classify `idea_text` and build its report.
///
/// Fails only when the text is empty or whitespace. Text that normalizes to
/// nothing is still classified, on priors alone.
pub fn classify_and_report(
    idea_text: &str,
    vocabulary: &Vocabulary,
    model: &NaiveBayesModel,
    kb: &KnowledgeBase,
) -> Result<Report, ValidationError> {
    if idea_text.trim().is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let normalized = normalize(idea_text);
    if normalized.is_empty() {
        debug!("idea has no informative terms after normalization");
    }

    let label = model.predict(&vocabulary.vectorize(&normalized));
    Ok(ReportGenerator::new().generate(idea_text, label, kb.lookup(label)))
}

/// A structured idea as collected by a submission form.
///
/// Every non-blank field contributes to classification; the title is the
/// idea text shown in the report, falling back to the description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaSubmission {
    /// Short name of the idea.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Intended customers.
    #[serde(default)]
    pub target_market: Option<String>,
    /// What makes the idea valuable.
    #[serde(default)]
    pub value_proposition: Option<String>,
    /// Known competitors.
    #[serde(default)]
    pub competitors: Option<String>,
}

impl IdeaSubmission {
    /// Create a submission with a title and a description.
    pub fn new<S: Into<String>, D: Into<String>>(title: S, description: D) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Set the target market.
    pub fn with_target_market<S: Into<String>>(mut self, target_market: S) -> Self {
        self.target_market = Some(target_market.into());
        self
    }

    /// Set the value proposition.
    pub fn with_value_proposition<S: Into<String>>(mut self, value_proposition: S) -> Self {
        self.value_proposition = Some(value_proposition.into());
        self
    }

    /// Set the competitors.
    pub fn with_competitors<S: Into<String>>(mut self, competitors: S) -> Self {
        self.competitors = Some(competitors.into());
        self
    }

    /// All non-blank fields joined into one text.
    pub fn combined_text(&self) -> String {
        [
            Some(self.title.as_str()),
            Some(self.description.as_str()),
            self.target_market.as_deref(),
            self.value_proposition.as_deref(),
            self.competitors.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Text shown as the idea in the report.
    pub fn display_text(&self) -> &str {
        let title = self.title.trim();
        if title.is_empty() {
            self.description.trim()
        } else {
            title
        }
    }
}

/// Process-wide validation context: classifier, knowledge and report generator.
#[derive(Clone)]
pub struct IdeaValidator {
    classifier: Arc<dyn SectorClassifier>,
    knowledge: KnowledgeBase,
    generator: ReportGenerator,
}

impl std::fmt::Debug for IdeaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdeaValidator")
            .field("classifier", &self.classifier.name())
            .field("knowledge", &self.knowledge.entries().len())
            .finish()
    }
}

impl IdeaValidator {
    /// Run [`initialize`] and wrap the result.
    pub fn new() -> Result<Self, ConfigurationError> {
        let (vocabulary, model, knowledge) = initialize()?;
        let classifier = NaiveBayesSectorClassifier::from_parts(
            Normalizer::new(),
            Arc::new(vocabulary),
            Arc::new(model),
        );
        Ok(Self::with_classifier(Arc::new(classifier), knowledge))
    }

    /// Use a custom classifier.
    pub fn with_classifier(
        classifier: Arc<dyn SectorClassifier>,
        knowledge: KnowledgeBase,
    ) -> Self {
        Self {
            classifier,
            knowledge,
            generator: ReportGenerator::new(),
        }
    }

    /// Predict the sector of `idea_text`.
    pub fn classify(&self, idea_text: &str) -> Result<SectorLabel, ValidationError> {
        if idea_text.trim().is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        Ok(self.classifier.predict(idea_text))
    }

    /// Classify `idea_text` and build its report.
    pub fn validate(&self, idea_text: &str) -> Result<Report, ValidationError> {
        let label = self.classify(idea_text)?;
        Ok(self
            .generator
            .generate(idea_text, label, self.knowledge.lookup(label)))
    }

    /// Classify a structured submission and build its report.
    pub fn validate_submission(
        &self,
        submission: &IdeaSubmission,
    ) -> Result<Report, ValidationError> {
        let label = self.classify(&submission.combined_text())?;
        Ok(self.generator.generate(
            submission.display_text(),
            label,
            self.knowledge.lookup(label),
        ))
    }

    /// Get the knowledge base.
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Get the classifier.
    pub fn classifier(&self) -> &Arc<dyn SectorClassifier> {
        &self.classifier
    }
}
