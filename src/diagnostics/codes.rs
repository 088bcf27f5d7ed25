//! Diagnostic code definitions
//!
//! Codes follow a naming convention: G{category}{number}
//! - G01xx: Grammar document errors (definition blocks)
//! - G02xx: Expansion errors (references, cycles)
//! - G03xx: Literal cleanup rejections

use std::fmt;

use super::diagnostic::Severity;

/// Codes for non-fatal diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    // =========================================================================
    // G01xx: Grammar document errors
    // =========================================================================
    /// A rule was defined more than once; the last definition wins
    G0101,

    // =========================================================================
    // G02xx: Expansion errors
    // =========================================================================
    /// Reference to a rule with no definition
    G0201,
    /// Reference in a position the expansion policy cannot resolve
    G0202,
    /// Rule transitively references itself
    G0203,
    /// Expansion path exceeded the depth bound
    G0204,
    /// Expansion stopped after resolving the maximum number of references
    G0205,

    // =========================================================================
    // G03xx: Literal cleanup rejections
    // =========================================================================
    /// Literal does not match the configured pattern
    G0301,
    /// Literal is not entirely upper-case
    G0302,
    /// Literal is empty after cleanup
    G0303,
}

impl DiagnosticCode {
    /// Get the string representation of the code (e.g., "G0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::G0101 => "G0101",
            Self::G0201 => "G0201",
            Self::G0202 => "G0202",
            Self::G0203 => "G0203",
            Self::G0204 => "G0204",
            Self::G0205 => "G0205",
            Self::G0301 => "G0301",
            Self::G0302 => "G0302",
            Self::G0303 => "G0303",
        }
    }

    /// Get a short description of the code category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::G0101 => "grammar error",
            Self::G0201 | Self::G0202 | Self::G0203 | Self::G0204 | Self::G0205 => "expansion error",
            Self::G0301 | Self::G0302 | Self::G0303 => "cleanup rejection",
        }
    }

    /// Severity a diagnostic with this code is reported at
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::G0301 | Self::G0302 | Self::G0303 => Severity::Info,
            _ => Severity::Warning,
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
