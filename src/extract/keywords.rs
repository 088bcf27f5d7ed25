//! Extraction results

use indexmap::IndexSet;

use crate::diagnostics::Diagnostic;

/// Literals of one keyword source, flattened across its documents.
///
/// Literals are kept in order with duplicates; see [`unique`](Self::unique).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedKeywords {
    pub literals: Vec<String>,
    pub split_literals: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl ExtractedKeywords {
    pub fn new(split_literals: bool) -> Self {
        Self {
            split_literals,
            ..Self::default()
        }
    }

    /// Literals with duplicates removed, first occurrence wins.
    pub fn unique(&self) -> Vec<&str> {
        self.literals
            .iter()
            .map(String::as_str)
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// Literals as words: multiword literals are split on whitespace when
    /// `split_literals` is set. Duplicates are removed.
    pub fn words(&self) -> Vec<&str> {
        let words: IndexSet<&str> = if self.split_literals {
            self.literals.iter().flat_map(|literal| literal.split_ascii_whitespace()).collect()
        } else {
            self.literals.iter().map(String::as_str).collect()
        };
        words.into_iter().collect()
    }
}

/// Keywords of one vendor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorKeywords {
    pub vendor: String,
    pub commands: ExtractedKeywords,
    pub keywords: ExtractedKeywords,
}
