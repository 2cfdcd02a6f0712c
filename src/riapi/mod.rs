//! Query string parsing for thumbnail requests.
//!
//! Parses URL query strings like `?w=800&h=600&mode=crop` into typed
//! [`Instructions`] and turns those into [`Thumbnail`](crate::Thumbnail)
//! requests for layout computation.
//!
//! # Example
//!
//! ```
//! use zenthumb::riapi;
//!
//! let result = riapi::parse("w=400&h=300&mode=crop");
//! assert!(result.warnings.is_empty());
//!
//! let layout = result.instructions
//!     .to_thumbnail()
//!     .compute(1600, 1200)
//!     .expect("valid layout");
//!
//! assert_eq!(layout.canvas.width, 400);
//! assert_eq!(layout.canvas.height, 300);
//! ```
//!
//! # Non-layout parameters
//!
//! Keys not relevant to geometry (format, quality, cache hints) are preserved
//! in [`Instructions::extras()`] for downstream consumers without generating
//! warnings. Only truly unrecognized keys produce [`ParseWarning::KeyNotRecognized`].

mod color;
mod convert;
pub mod instructions;
mod parse;

pub use instructions::Instructions;

use alloc::string::String;
use alloc::vec::Vec;

/// Result of parsing a thumbnail query string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed layout instructions.
    pub instructions: Instructions,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from query string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// A key was not recognized as either a layout or known non-layout parameter.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse a thumbnail query string (with or without leading `?`).
///
/// Returns parsed instructions and any non-fatal warnings. Parsing itself
/// never fails; a degenerate request surfaces later, when the resulting
/// [`Thumbnail`](crate::Thumbnail) computes a layout.
pub fn parse(query: &str) -> ParseResult {
    let (instructions, warnings) = parse::parse_query(query);
    ParseResult {
        instructions,
        warnings,
    }
}
