//! Rule expansion
//!
//! Expands a rule body into the ordered literals it can generate. Bodies are
//! split into `|` alternatives; a reference leading an alternative is resolved
//! recursively, everything else is a literal. This approximates a flat keyword
//! list from a full grammar without building a parser.
//!
//! Expansion is a pure function of `(body, grammar, policy, visited)`. Every
//! problem becomes a tagged [`Outcome`] in the result and is also logged.

use rustc_hash::FxHashSet;

use super::lexer::{Lexer, TokenKind, has_reference, leading_reference};
use super::parser::Grammar;
use crate::base::text::is_space;
use crate::base::{RuleName, collapse_whitespace};
use crate::diagnostics::{Diagnostic, DiagnosticCode};
use crate::error::{Error, Result};

/// Maximum number of rules on one expansion path.
pub const MAX_EXPANSION_DEPTH: usize = 256;

/// Maximum number of references resolved by one expansion.
///
/// Densely mutual-recursive grammars have factorially many acyclic paths;
/// the visited set alone does not keep their expansion small.
pub const MAX_EXPANSION_STEPS: usize = 20_000;

/// Rule names on the current expansion path.
pub type Visited = FxHashSet<RuleName>;

/// How terminals found in alternative position are trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalTrim {
    /// Keep the alternative as split: the whitespace around its `|` markers
    /// is gone, inner whitespace and line breaks survive verbatim. The first
    /// inner whitespace run is not removed.
    #[default]
    LeadingRun,
    /// Trim and collapse all whitespace, like a whole-body terminal.
    Collapse,
}

/// Expansion policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionPolicy {
    /// Resolve only a reference leading each alternative; all other text is literal.
    pub after_first_literal: bool,
    /// Passed through to callers; multiword literals may be split into words.
    pub split_literals: bool,
    pub terminal_trim: TerminalTrim,
}

impl Default for ExpansionPolicy {
    fn default() -> Self {
        Self {
            after_first_literal: false,
            split_literals: true,
            terminal_trim: TerminalTrim::default(),
        }
    }
}

impl ExpansionPolicy {
    /// Policy for statement lists (`<SQL executable statement>` and friends).
    pub fn statements() -> Self {
        Self {
            after_first_literal: true,
            ..Self::default()
        }
    }

    /// Policy for flat word lists (`<reserved word>`, `<non-reserved word>`).
    pub fn words() -> Self {
        Self::default()
    }

    pub fn with_terminal_trim(mut self, terminal_trim: TerminalTrim) -> Self {
        self.terminal_trim = terminal_trim;
        self
    }
}

/// One step of an expansion result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Literal(String),
    /// Leading reference to a rule with no definition
    UndefinedReference(RuleName),
    /// Alternative holding a reference the policy cannot resolve
    UnsupportedConstruct(String),
    /// Leading reference to a rule already on the expansion path
    CycleDetected(RuleName),
    /// Leading reference past [`MAX_EXPANSION_DEPTH`]
    DepthExceeded(RuleName),
    /// First reference left unresolved once [`MAX_EXPANSION_STEPS`] were
    /// used; the rest of the expansion stops without further outcomes
    StepLimitReached(RuleName),
    /// Leading reference to an implementation-defined placeholder
    Suppressed(RuleName),
}

impl Outcome {
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    /// Diagnostic for this outcome. Literals and suppressions have none.
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        let diagnostic = match self {
            Self::Literal(_) | Self::Suppressed(_) => return None,
            Self::UndefinedReference(name) => {
                Diagnostic::new(DiagnosticCode::G0201, format!("\"{}\" not defined", name.as_str()))
                    .with_rule(name.clone())
            }
            Self::UnsupportedConstruct(alternative) => Diagnostic::new(
                DiagnosticCode::G0202,
                format!("Literal expansion not supported: {alternative:?}"),
            ),
            Self::CycleDetected(name) => {
                Diagnostic::new(DiagnosticCode::G0203, format!("{name} references itself"))
                    .with_rule(name.clone())
            }
            Self::DepthExceeded(name) => Diagnostic::new(
                DiagnosticCode::G0204,
                format!("{name} is nested deeper than {MAX_EXPANSION_DEPTH} rules"),
            )
            .with_rule(name.clone()),
            Self::StepLimitReached(name) => Diagnostic::new(
                DiagnosticCode::G0205,
                format!("Expansion stopped at {name} after {MAX_EXPANSION_STEPS} references"),
            )
            .with_rule(name.clone()),
        };
        Some(diagnostic)
    }
}

/// Ordered outcomes of an expansion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    outcomes: Vec<Outcome>,
}

impl Expansion {
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Literals in order, duplicates included.
    pub fn literals(&self) -> Vec<&str> {
        self.outcomes.iter().filter_map(Outcome::as_literal).collect()
    }

    pub fn into_literals(self) -> Vec<String> {
        self.outcomes
            .into_iter()
            .filter_map(|outcome| match outcome {
                Outcome::Literal(literal) => Some(literal),
                _ => None,
            })
            .collect()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.outcomes.iter().filter_map(Outcome::diagnostic).collect()
    }

    pub fn has_diagnostics(&self) -> bool {
        self.outcomes
            .iter()
            .any(|outcome| !matches!(outcome, Outcome::Literal(_) | Outcome::Suppressed(_)))
    }

    fn push(&mut self, outcome: Outcome) {
        if let Some(diagnostic) = outcome.diagnostic() {
            diagnostic.emit();
        }
        self.outcomes.push(outcome);
    }

    fn extend(&mut self, other: Expansion) {
        self.outcomes.extend(other.outcomes);
    }
}

/// Expand a rule body.
///
/// `visited` holds the rules on the path leading to this body; a leading
/// reference to any of them yields [`Outcome::CycleDetected`] for that
/// alternative only. At most [`MAX_EXPANSION_STEPS`] references are resolved
/// per call.
pub fn expand(body: &str, grammar: &Grammar, policy: &ExpansionPolicy, visited: Visited) -> Expansion {
    Expander::new(grammar, policy).expand_body(body, visited)
}

/// State shared by every branch of one expansion.
struct Expander<'a> {
    grammar: &'a Grammar,
    policy: &'a ExpansionPolicy,
    steps: usize,
    exhausted: bool,
}

impl<'a> Expander<'a> {
    fn new(grammar: &'a Grammar, policy: &'a ExpansionPolicy) -> Self {
        Self {
            grammar,
            policy,
            steps: 0,
            exhausted: false,
        }
    }

    fn expand_body(&mut self, body: &str, visited: Visited) -> Expansion {
        let mut expansion = Expansion::default();

        if self.policy.after_first_literal && leading_reference(body).is_none() {
            expansion.push(Outcome::Literal(collapse_whitespace(body)));
            return expansion;
        }

        for alternative in split_alternatives(body) {
            if alternative.is_empty() {
                tracing::trace!("Skipping empty alternative");
                continue;
            }

            if !self.policy.after_first_literal {
                if has_reference(alternative) {
                    expansion.push(Outcome::UnsupportedConstruct(alternative.to_string()));
                } else {
                    expansion.push(Outcome::Literal(alternative.to_string()));
                }
                continue;
            }

            match leading_reference(alternative) {
                Some(name) => {
                    let nested = self.expand_reference(name, &visited);
                    expansion.extend(nested);
                }
                None => expansion.push(Outcome::Literal(trim_terminal(alternative, self.policy.terminal_trim))),
            }
        }

        expansion
    }

    fn expand_reference(&mut self, name: RuleName, visited: &Visited) -> Expansion {
        let mut expansion = Expansion::default();

        if self.exhausted {
            return expansion;
        }

        if name.is_implementation_defined() {
            tracing::trace!("Suppressing placeholder {}", name);
            expansion.push(Outcome::Suppressed(name));
            return expansion;
        }

        let grammar = self.grammar;
        let Some(body) = grammar.get(name.as_str()) else {
            expansion.push(Outcome::UndefinedReference(name));
            return expansion;
        };

        if visited.contains(&name) {
            expansion.push(Outcome::CycleDetected(name));
            return expansion;
        }

        if visited.len() >= MAX_EXPANSION_DEPTH {
            expansion.push(Outcome::DepthExceeded(name));
            return expansion;
        }

        if self.steps >= MAX_EXPANSION_STEPS {
            self.exhausted = true;
            expansion.push(Outcome::StepLimitReached(name));
            return expansion;
        }
        self.steps += 1;

        tracing::trace!("Expanding {} at depth {}", name, visited.len());
        let mut path = visited.clone();
        path.insert(name);
        self.expand_body(body, path)
    }
}

/// Alternatives arrive already trimmed from [`split_alternatives`], so
/// `LeadingRun` keeps them as they are.
fn trim_terminal(alternative: &str, trim: TerminalTrim) -> String {
    match trim {
        TerminalTrim::LeadingRun => alternative.to_string(),
        TerminalTrim::Collapse => collapse_whitespace(alternative),
    }
}

/// Split a body into `|` alternatives, consuming whitespace around each marker.
pub fn split_alternatives(body: &str) -> Vec<&str> {
    let body = body.trim_matches(is_space);
    let mut alternatives = Vec::new();
    let mut start = 0;

    for token in Lexer::new(body) {
        if token.kind == TokenKind::Bar {
            alternatives.push(trim_alternative(&body[start..token.offset]));
            start = token.offset + token.text.len();
        }
    }
    alternatives.push(trim_alternative(&body[start..]));

    alternatives
}

fn trim_alternative(text: &str) -> &str {
    text.trim_matches(is_space)
}

impl Grammar {
    /// Expand one selector rule. Fails if the selector has no definition.
    pub fn expand_rule(&self, selector: &str, policy: &ExpansionPolicy) -> Result<Expansion> {
        let name = RuleName::new(selector);
        let body = self
            .get(name.as_str())
            .ok_or_else(|| Error::UnknownSelector(name.clone()))?;

        let mut visited = Visited::default();
        visited.insert(name);
        Ok(expand(body, self, policy, visited))
    }

    /// Expand each selector independently and concatenate the results in order.
    pub fn expand_selectors<S: AsRef<str>>(&self, selectors: &[S], policy: &ExpansionPolicy) -> Result<Expansion> {
        let mut expansion = Expansion::default();
        for selector in selectors {
            expansion.extend(self.expand_rule(selector.as_ref(), policy)?);
        }
        Ok(expansion)
    }
}
