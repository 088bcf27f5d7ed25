//! Foundation types for the keyword toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`RuleName`] - Normalized grammar rule identifiers
//! - Whitespace helpers shared by the grammar parser, the expander and cleanup
//!
//! This module has NO dependencies on other sqlkw modules.

mod name;
pub mod text;

pub use name::RuleName;
pub use text::collapse_whitespace;
