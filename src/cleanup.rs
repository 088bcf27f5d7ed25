//! Literal cleanup shared by grammar and markup sources.
//!
//! Each literal goes through, in order:
//! 1. the match pattern, keeping capture group 1 (or the whole match);
//! 2. the find/replace rewrite;
//! 3. the empty check;
//! 4. the upper-case check.
//!
//! Rejected literals are dropped and reported as diagnostics.

use regex::Regex;

use crate::diagnostics::{Diagnostic, DiagnosticCode};
use crate::error::{Error, Result};

/// Compile a configured pattern.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// A find/replace rewrite applied to every occurrence.
#[derive(Debug, Clone)]
pub struct Replacement {
    pub find: Regex,
    /// Replacement text; `$1`-style group references are expanded.
    pub with: String,
}

impl Replacement {
    pub fn new(find: &str, with: impl Into<String>) -> Result<Self> {
        Ok(Self {
            find: compile_pattern(find)?,
            with: with.into(),
        })
    }

    pub fn apply(&self, literal: &str) -> String {
        self.find.replace_all(literal, self.with.as_str()).into_owned()
    }
}

/// Cleanup settings for one keyword source.
#[derive(Debug, Clone, Default)]
pub struct LiteralCleanup {
    pub pattern: Option<Regex>,
    pub replace: Option<Replacement>,
}

/// Result of cleaning a batch of literals
#[derive(Debug, Clone, Default)]
pub struct Cleaned {
    pub literals: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl LiteralCleanup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn with_replacement(mut self, replacement: Replacement) -> Self {
        self.replace = Some(replacement);
        self
    }

    /// Clean one literal, or explain why it was dropped.
    pub fn apply(&self, literal: &str) -> Result<String, Diagnostic> {
        let mut result = match &self.pattern {
            Some(pattern) => extract_match(pattern, literal)?,
            None => literal.to_string(),
        };

        if let Some(replace) = &self.replace {
            result = replace.apply(&result);
        }

        if result.trim().is_empty() {
            return Err(Diagnostic::new(
                DiagnosticCode::G0303,
                format!("Empty literal: {literal:?}"),
            ));
        }

        if result.to_uppercase() != result {
            return Err(Diagnostic::new(
                DiagnosticCode::G0302,
                format!("Upper case error: {result}"),
            ));
        }

        Ok(result)
    }

    /// Clean a batch of literals, keeping order.
    pub fn apply_all<I, S>(&self, literals: I) -> Cleaned
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cleaned = Cleaned::default();
        for literal in literals {
            match self.apply(literal.as_ref()) {
                Ok(literal) => cleaned.literals.push(literal),
                Err(diagnostic) => {
                    diagnostic.emit();
                    cleaned.diagnostics.push(diagnostic);
                }
            }
        }
        cleaned
    }
}

fn extract_match(pattern: &Regex, literal: &str) -> Result<String, Diagnostic> {
    let captures = pattern.captures(literal).ok_or_else(|| {
        Diagnostic::new(
            DiagnosticCode::G0301,
            format!("Match error: {literal} !~ {pattern}"),
        )
    })?;

    let extracted = if captures.len() > 1 {
        captures.get(1).map_or("", |m| m.as_str())
    } else {
        captures.get(0).map_or("", |m| m.as_str())
    };
    Ok(extracted.to_string())
}
