//! Diagnostic record and severity

use crate::base::RuleName;

use super::codes::DiagnosticCode;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Part of the requested output is missing because of this problem
    Warning,
    /// A value was filtered out on purpose
    Info,
}

/// A non-fatal problem found while building a keyword list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Human-readable message
    pub message: String,
    /// Categorized code
    pub code: DiagnosticCode,
    /// Severity, defaults to the code's severity
    pub severity: Severity,
    /// Rule the problem concerns, if any
    pub rule: Option<RuleName>,
}

impl Diagnostic {
    pub fn new(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code,
            severity: code.default_severity(),
            rule: None,
        }
    }

    /// Attach the rule this diagnostic concerns
    pub fn with_rule(mut self, rule: RuleName) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Log this diagnostic through `tracing` at its severity.
    pub fn emit(&self) {
        let category = self.code.category_description();
        let rule = self.rule.as_ref().map(RuleName::as_str);
        match self.severity {
            Severity::Warning => tracing::warn!(code = %self.code, category, rule, "{}", self.message),
            Severity::Info => tracing::info!(code = %self.code, category, rule, "{}", self.message),
        }
    }
}
