//! The embedded vendor table run against in-memory documents.

#![allow(clippy::unwrap_used)]

use std::sync::atomic::{AtomicUsize, Ordering};

use sqlkw::error::FetchError;
use sqlkw::{DocumentProvider, KeywordExtractor, StaticProvider, VendorTable};

use crate::helpers::grammar_fixtures::{FOUNDATION_EXCERPT, FOUNDATION_GRAMMAR_URL};

/// Counts fetches per call so tests can check each document is requested once per source.
struct CountingProvider {
    inner: StaticProvider,
    fetches: AtomicUsize,
}

impl DocumentProvider for CountingProvider {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch(url)
    }
}

fn provider() -> CountingProvider {
    CountingProvider {
        inner: StaticProvider::new().with_document(FOUNDATION_GRAMMAR_URL, FOUNDATION_EXCERPT),
        fetches: AtomicUsize::new(0),
    }
}

#[test]
fn test_builtin_table_extracts_standard_only() {
    let table = VendorTable::builtin().unwrap();
    let extractor = KeywordExtractor::new(provider());

    let results = extractor.extract_all(&table).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].vendor, "standard");
    assert_eq!(extractor.provider().fetches.load(Ordering::SeqCst), 2);
}

#[test]
fn test_builtin_standard_commands_pass_cleanup() {
    let table = VendorTable::builtin().unwrap();
    let extractor = KeywordExtractor::new(provider());

    let results = extractor.extract_all(&table).unwrap();
    let commands = &results[0].commands;

    // Literals still holding lower-case rule references fail the upper-case check.
    assert_eq!(commands.literals, vec!["COMMIT [ WORK ] [ AND [ NO ] CHAIN ]"]);
    assert!(commands.split_literals);
    assert_eq!(
        commands.words(),
        vec!["COMMIT", "[", "WORK", "]", "AND", "NO", "CHAIN"]
    );
}

#[test]
fn test_builtin_standard_keywords() {
    let table = VendorTable::builtin().unwrap();
    let extractor = KeywordExtractor::new(provider());

    let results = extractor.extract_all(&table).unwrap();
    let keywords = &results[0].keywords;

    assert_eq!(keywords.literals.len(), 24);
    assert_eq!(keywords.unique().len(), 24);
    assert!(keywords.literals.contains(&"BERNOULLI".to_string()));
    assert!(keywords.diagnostics.is_empty());
}
