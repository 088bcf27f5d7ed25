//! BNF grammar parsing and keyword expansion
//!
//! ## Architecture
//!
//! ```text
//! Grammar document text
//!     ↓
//! parser → Grammar (rule name → body, document order)
//!     ↓
//! lexer (logos) → references, bars, whitespace, text
//!     ↓
//! expand → Expansion (literals + tagged diagnostics)
//! ```

pub mod expand;
pub mod lexer;
mod parser;

pub use expand::{
    Expansion, ExpansionPolicy, MAX_EXPANSION_DEPTH, MAX_EXPANSION_STEPS, Outcome, TerminalTrim, Visited, expand,
    split_alternatives,
};
pub use parser::{Grammar, parse, split_blocks};
