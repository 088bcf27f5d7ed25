//! Diagnostic reporting for grammar parsing, expansion and literal cleanup.
//!
//! Every problem the keyword pipeline can recover from is reported as a
//! [`Diagnostic`] rather than an error:
//! - Categorized codes for filtering and assertions in tests
//! - Severity levels mirroring how loudly the problem is logged
//! - The rule the problem was found in, when there is one

mod codes;
mod diagnostic;

pub use codes::DiagnosticCode;
pub use diagnostic::{Diagnostic, Severity};
