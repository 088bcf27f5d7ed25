//! Per-vendor keyword extraction pipeline.
//!
//! ```text
//! SourceConfig.urls ──fetch (parallel)──→ documents (URL order)
//!     ↓ grammar                         ↓ markup
//! Grammar::parse + expand_selectors     MarkupParser + extract_literals
//!     ↓                                 ↓
//!     └──────────── LiteralCleanup ─────┘
//!                        ↓
//!               ExtractedKeywords (flattened)
//! ```

mod keywords;
mod provider;

pub use keywords::{ExtractedKeywords, VendorKeywords};
pub use provider::{DocumentProvider, StaticProvider};

use rayon::prelude::*;

use crate::config::{ParserKind, SourceConfig, VendorConfig, VendorTable};
use crate::diagnostics::Diagnostic;
use crate::error::{Error, Result};
use crate::grammar::Grammar;
use crate::markup::{self, MarkupParser};

/// Runs keyword sources against a document provider.
pub struct KeywordExtractor<P> {
    provider: P,
    markup: Option<Box<dyn MarkupParser>>,
}

impl<P: DocumentProvider> KeywordExtractor<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            markup: None,
        }
    }

    /// Install the parser used for markup sources.
    pub fn with_markup_parser(mut self, parser: impl MarkupParser + 'static) -> Self {
        self.markup = Some(Box::new(parser));
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Extract keywords for every vendor not marked `skip`, in table order.
    pub fn extract_all(&self, table: &VendorTable) -> Result<Vec<VendorKeywords>> {
        let mut results = Vec::new();
        for (name, vendor) in table.iter() {
            if let Some(keywords) = self.extract_vendor(name, vendor)? {
                results.push(keywords);
            }
        }
        Ok(results)
    }

    /// Extract both sources of one vendor. Skipped vendors yield `None`.
    pub fn extract_vendor(&self, name: &str, vendor: &VendorConfig) -> Result<Option<VendorKeywords>> {
        if vendor.skip {
            tracing::debug!("Skipping vendor {}", name);
            return Ok(None);
        }

        let commands = vendor.commands.as_ref().map(|source| self.extract_source(source)).transpose()?;
        let keywords = vendor.keywords.as_ref().map(|source| self.extract_source(source)).transpose()?;

        Ok(Some(VendorKeywords {
            vendor: name.to_string(),
            commands: commands.unwrap_or_default(),
            keywords: keywords.unwrap_or_default(),
        }))
    }

    /// Fetch every document of a source and flatten the cleaned literals in
    /// URL order.
    pub fn extract_source(&self, source: &SourceConfig) -> Result<ExtractedKeywords> {
        let documents = self.fetch_documents(&source.urls)?;

        let mut extracted = ExtractedKeywords::new(source.policy.split_literals);
        for document in &documents {
            let (literals, diagnostics) = match source.parser {
                ParserKind::Grammar => extract_from_grammar(source, document)?,
                ParserKind::Markup => (self.extract_from_markup(source, document)?, Vec::new()),
            };
            extracted.diagnostics.extend(diagnostics);

            let cleaned = source.cleanup.apply_all(literals);
            extracted.literals.extend(cleaned.literals);
            extracted.diagnostics.extend(cleaned.diagnostics);
        }

        tracing::debug!(
            "Extracted {} literals from {} documents ({} diagnostics)",
            extracted.literals.len(),
            documents.len(),
            extracted.diagnostics.len()
        );
        Ok(extracted)
    }

    fn fetch_documents(&self, urls: &[String]) -> Result<Vec<String>> {
        urls.par_iter()
            .map(|url| {
                tracing::debug!("Fetching {}", url);
                self.provider.fetch(url).map_err(|source| Error::fetch(url.as_str(), source))
            })
            .collect()
    }

    fn extract_from_markup(&self, source: &SourceConfig, document: &str) -> Result<Vec<String>> {
        let parser = self
            .markup
            .as_ref()
            .ok_or_else(|| Error::MissingMarkupParser(source.selectors.join(", ")))?;
        let query = parser.parse(document)?;
        Ok(markup::extract_literals(query.as_ref(), &source.selectors))
    }
}

/// Parse the document once and expand every selector.
fn extract_from_grammar(source: &SourceConfig, document: &str) -> Result<(Vec<String>, Vec<Diagnostic>)> {
    let grammar = Grammar::parse(document);
    let expansion = grammar.expand_selectors(&source.selectors, &source.policy)?;

    let mut diagnostics = grammar.diagnostics().to_vec();
    diagnostics.extend(expansion.diagnostics());
    Ok((expansion.into_literals(), diagnostics))
}
