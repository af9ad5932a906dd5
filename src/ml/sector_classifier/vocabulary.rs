//! Vocabulary and count vectorization.
//!
//! A [`Vocabulary`] is learned once from the normalized training texts and
//! then shared by every vectorization in the process, so that training and
//! inference vectors live in the same index space. Terms the vocabulary has
//! never seen are dropped silently.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// Mapping from normalized term to vector position.
///
/// Indices are assigned in lexicographic term order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    /// Terms in index order.
    terms: Vec<String>,
    /// Term -> index mapping.
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary from normalized texts.
    ///
    /// Each text is split on whitespace; duplicate terms collapse to one entry.
    pub fn build<I, S>(normalized_texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut distinct = BTreeSet::new();
        for text in normalized_texts {
            for term in text.as_ref().split_whitespace() {
                distinct.insert(term.to_string());
            }
        }

        let terms: Vec<String> = distinct.into_iter().collect();
        let index = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();

        Self { terms, index }
    }

    /// Count occurrences of each known term of `normalized_text`.
    pub fn vectorize(&self, normalized_text: &str) -> DocumentVector {
        let mut counts = vec![0u32; self.terms.len()];
        for term in normalized_text.split_whitespace() {
            if let Some(&idx) = self.index.get(term) {
                counts[idx] += 1;
            }
        }
        DocumentVector { counts }
    }

    /// Index of `term`, if it is known.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Term stored at `index`.
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    /// Terms in index order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Get the size of the vocabulary.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Fixed-width term count vector over a [`Vocabulary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentVector {
    counts: Vec<u32>,
}

impl DocumentVector {
    /// Create a vector from raw counts.
    pub fn from_counts(counts: Vec<u32>) -> Self {
        Self { counts }
    }

    /// Count at `index`, zero when out of range.
    pub fn get(&self, index: usize) -> u32 {
        self.counts.get(index).copied().unwrap_or(0)
    }

    /// Positions with a non-zero count, paired with the count.
    pub fn nonzero(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(idx, &count)| (idx, count))
    }

    /// Total number of counted terms.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// True when no vocabulary term occurred in the document.
    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Width of the vector (the vocabulary size).
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the vector has zero width.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Vocabulary {
        Vocabulary::build([
            "mobile wallet seamless transactions",
            "online learning platform interactive features",
            "ecommerce platform personalized recommendations",
        ])
    }

    #[test]
    fn test_build_deduplicates_and_sorts() {
        let vocab = vocabulary();
        assert_eq!(vocab.len(), 12);
        assert_eq!(vocab.term(0), Some("ecommerce"));
        assert_eq!(vocab.index_of("wallet"), Some(11));
        assert_eq!(vocab.index_of("platform"), Some(7));

        let mut sorted = vocab.terms().to_vec();
        sorted.sort();
        assert_eq!(vocab.terms(), sorted.as_slice());
    }

    #[test]
    fn test_vectorize_counts_occurrences() {
        let vocab = vocabulary();
        let vector = vocab.vectorize("platform wallet platform");

        assert_eq!(vector.len(), vocab.len());
        assert_eq!(vector.get(7), 2);
        assert_eq!(vector.get(11), 1);
        assert_eq!(vector.total(), 3);
        assert_eq!(vector.nonzero().collect::<Vec<_>>(), vec![(7, 2), (11, 1)]);
    }

    #[test]
    fn test_out_of_vocabulary_terms_are_dropped() {
        let vocab = vocabulary();
        let vector = vocab.vectorize("quantum robotics");

        assert_eq!(vector.len(), vocab.len());
        assert!(vector.is_zero());

        let empty = vocab.vectorize("");
        assert!(empty.is_zero());
        assert_eq!(empty.len(), vocab.len());
    }

    #[test]
    fn test_indices_stay_inside_vocabulary() {
        let vocab = vocabulary();
        let vector = vocab.vectorize("online online features unknown wallet");
        assert!(vector.nonzero().all(|(idx, _)| idx < vocab.len()));
    }

    #[test]
    fn test_empty_vocabulary() {
        let vocab = Vocabulary::build(Vec::<String>::new());
        assert!(vocab.is_empty());
        assert!(vocab.vectorize("anything").is_empty());
    }
}
