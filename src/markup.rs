//! Keyword extraction from markup documents.
//!
//! No HTML engine is bundled. Callers inject one through [`MarkupParser`],
//! which turns document text into a [`DocumentQuery`]: the
//! `query_selector` / `query_selector_all` capability over the parsed tree.

use crate::error::Result;

/// Snapshot of a matched element: the text of its direct text-node
/// children, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupNode {
    text_children: Vec<String>,
}

impl MarkupNode {
    pub fn new<I, S>(text_children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text_children: text_children.into_iter().map(Into::into).collect(),
        }
    }

    /// First direct text child with non-blank content, untrimmed.
    pub fn first_text(&self) -> Option<&str> {
        self.text_children
            .iter()
            .map(String::as_str)
            .find(|text| !text.trim().is_empty())
    }
}

/// Selector queries over a parsed document.
pub trait DocumentQuery {
    /// All elements matching `selector`, in document order.
    fn query_selector_all(&self, selector: &str) -> Vec<MarkupNode>;

    /// First element matching `selector`.
    fn query_selector(&self, selector: &str) -> Option<MarkupNode> {
        self.query_selector_all(selector).into_iter().next()
    }
}

/// Parses document text into a queryable tree.
pub trait MarkupParser: Send + Sync {
    fn parse(&self, text: &str) -> Result<Box<dyn DocumentQuery>>;
}

/// Raw literals of a markup document: the first non-blank direct text of
/// every element matched by each selector. Elements without one are skipped.
pub fn extract_literals<S: AsRef<str>>(document: &dyn DocumentQuery, selectors: &[S]) -> Vec<String> {
    let mut literals = Vec::new();
    for selector in selectors {
        let nodes = document.query_selector_all(selector.as_ref());
        tracing::debug!("Selector {:?} matched {} elements", selector.as_ref(), nodes.len());
        literals.extend(nodes.iter().filter_map(MarkupNode::first_text).map(str::to_string));
    }
    literals
}
