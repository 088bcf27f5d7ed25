//! Grammar document parser
//!
//! A grammar document is a sequence of blocks separated by blank lines. A
//! block whose first line is exactly `<rule name> ::=` defines that rule; the
//! rest of the block is the rule body. Everything else is ignored.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::base::RuleName;
use crate::base::text::{is_space, line_content, lines_with_offsets};
use crate::diagnostics::{Diagnostic, DiagnosticCode};

/// Rule definitions parsed from one grammar document.
///
/// Rules keep document order. Redefinitions overwrite the earlier body in
/// place and are recorded as [`DiagnosticCode::G0101`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grammar {
    rules: IndexMap<RuleName, String>,
    diagnostics: Vec<Diagnostic>,
}

impl Grammar {
    /// Parse a grammar document. Never fails; malformed blocks are dropped.
    pub fn parse(text: &str) -> Self {
        parse(text)
    }

    /// Body of a rule. The name is normalized before lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        match self.rules.get(name) {
            Some(body) => Some(body.as_str()),
            None => self.rules.get(RuleName::new(name).as_str()).map(String::as_str),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over `(name, body)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&RuleName, &str)> {
        self.rules.iter().map(|(name, body)| (name, body.as_str()))
    }

    /// Diagnostics produced while parsing.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    fn define(&mut self, name: RuleName, body: &str) {
        match self.rules.entry(name) {
            Entry::Occupied(mut entry) => {
                let diagnostic = Diagnostic::new(
                    DiagnosticCode::G0101,
                    format!("{} is defined more than once, keeping the last definition", entry.key()),
                )
                .with_rule(entry.key().clone());
                diagnostic.emit();
                self.diagnostics.push(diagnostic);
                entry.insert(body.to_string());
            }
            Entry::Vacant(entry) => {
                entry.insert(body.to_string());
            }
        }
    }
}

/// Parse a grammar document into rule definitions.
pub fn parse(text: &str) -> Grammar {
    let mut grammar = Grammar::default();

    for block in split_blocks(text) {
        let (header, body) = match block.split_once('\n') {
            Some((header, body)) => (header, body),
            None => (block, ""),
        };

        match parse_header(header) {
            Some(name) => grammar.define(name, body),
            None => tracing::trace!("Skipping non-definition block: {:?}", line_content(header)),
        }
    }

    tracing::debug!("Parsed {} grammar rules", grammar.len());
    grammar
}

/// Split a document into blocks.
///
/// A boundary is a run of one or more empty lines followed by a line that
/// starts with a non-whitespace character. Blank lines followed by an
/// indented line stay inside the current block.
pub fn split_blocks(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut start = 0;
    let mut blank_run: Option<usize> = None;

    for (offset, line) in lines_with_offsets(text) {
        let content = line_content(line);
        if content.is_empty() {
            blank_run.get_or_insert(offset);
            continue;
        }

        if let Some(blank_start) = blank_run.take() {
            if !content.starts_with(is_space) {
                push_block(&mut blocks, &text[start..blank_start]);
                start = offset;
            }
        }
    }

    push_block(&mut blocks, &text[start..]);
    blocks
}

fn push_block<'a>(blocks: &mut Vec<&'a str>, block: &'a str) {
    let block = block.trim_end_matches(['\n', '\r']);
    if !block.is_empty() {
        blocks.push(block);
    }
}

/// Parse a definition header line: `<name>`, whitespace, `::=`, optional
/// trailing whitespace, and nothing else.
fn parse_header(line: &str) -> Option<RuleName> {
    let line = line.trim_end_matches(is_space);
    let rest = line.strip_suffix("::=")?;
    let head = rest.trim_end_matches(is_space);
    if head.len() == rest.len() {
        return None;
    }

    let inner = head.strip_prefix('<')?.strip_suffix('>')?;
    if inner.contains('>') {
        return None;
    }

    let name = RuleName::new(inner);
    (!name.is_empty()).then_some(name)
}
