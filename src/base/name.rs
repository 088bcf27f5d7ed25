//! Normalized grammar rule names.

use std::borrow::Borrow;
use std::fmt;

use smol_str::SmolStr;

use super::text::collapse_whitespace;

/// Marker text used by grammar documents for rules left to implementors.
const IMPLEMENTATION_DEFINED: &str = "implementation-defined";

/// A normalized rule name - cheap to clone (rule names are short and inline).
///
/// The bracketed text of a `<rule name>` token is trimmed and every internal
/// whitespace run is collapsed to one space, so `<foo  bar>` and `<foo bar>`
/// name the same rule. Normalizing an already normalized name is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleName(SmolStr);

impl RuleName {
    /// Normalize raw bracketed text into a rule name.
    pub fn new(raw: &str) -> Self {
        Self(SmolStr::new(collapse_whitespace(raw)))
    }

    /// Build a rule name from a `<...>` reference token, brackets included.
    pub fn from_reference(token: &str) -> Option<Self> {
        let inner = token.strip_prefix('<')?.strip_suffix('>')?;
        let name = Self::new(inner);
        (!name.is_empty()).then_some(name)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Placeholder rules such as `<implementation-defined statement>` have no
    /// enumerable content.
    pub fn is_implementation_defined(&self) -> bool {
        self.0.contains(IMPLEMENTATION_DEFINED)
    }
}

impl Borrow<str> for RuleName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for RuleName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for RuleName {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_inner_whitespace() {
        assert_eq!(RuleName::new("foo  bar"), RuleName::new("foo bar"));
        assert_eq!(RuleName::new(" foo\n\tbar ").as_str(), "foo bar");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let name = RuleName::new("  SQL   executable\nstatement ");
        assert_eq!(RuleName::new(name.as_str()), name);
    }

    #[test]
    fn test_from_reference() {
        assert_eq!(
            RuleName::from_reference("<set  catalog statement>"),
            Some(RuleName::new("set catalog statement"))
        );
        assert_eq!(RuleName::from_reference("set catalog"), None);
        assert_eq!(RuleName::from_reference("<  >"), None);
    }

    #[test]
    fn test_implementation_defined() {
        assert!(RuleName::new("implementation-defined character set name").is_implementation_defined());
        assert!(!RuleName::new("commit statement").is_implementation_defined());
    }

    #[test]
    fn test_display_wraps_in_brackets() {
        assert_eq!(RuleName::new("reserved word").to_string(), "<reserved word>");
    }
}
