//! # sql-keywords
//!
//! Extracts SQL statement names and reserved words from BNF grammars and
//! vendor documentation.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! extract     → Per-vendor pipeline over a DocumentProvider
//!   ↓
//! config      → Vendor table (YAML), compiled sources
//!   ↓
//! markup      → Injected selector queries over HTML documents
//! cleanup     → Match / replace / upper-case filter for literals
//!   ↓
//! grammar     → Block parser, logos body lexer, rule expander
//!   ↓
//! diagnostics → Codes, severities, non-fatal reports
//!   ↓
//! base        → Primitives (RuleName, whitespace helpers)
//! ```

// ============================================================================
// MODULES (dependency order: base → diagnostics → grammar → cleanup/markup → config → extract)
// ============================================================================

/// Foundation types: RuleName, whitespace helpers
pub mod base;

/// Diagnostics: codes, severity, non-fatal reports
pub mod diagnostics;

/// Grammar: document parser, body lexer, rule expansion
pub mod grammar;

/// Literal cleanup shared by grammar and markup sources
pub mod cleanup;

/// Markup extraction through injected selector queries
pub mod markup;

/// Vendor configuration table
pub mod config;

/// Keyword extraction pipeline
pub mod extract;

/// Fatal errors
pub mod error;

// Re-export commonly needed items
pub use base::RuleName;
pub use config::{ParserKind, SourceConfig, VendorConfig, VendorTable};
pub use diagnostics::{Diagnostic, DiagnosticCode, Severity};
pub use error::{Error, Result};
pub use extract::{DocumentProvider, ExtractedKeywords, KeywordExtractor, StaticProvider, VendorKeywords};
pub use grammar::{Expansion, ExpansionPolicy, Grammar, Outcome, TerminalTrim};
