//! Import extraction.
//!
//! Turns the text of one file into the raw specifiers it references. Each
//! dialect has its own extractor behind the [`ImportExtractor`] trait; the
//! resolver picks one per call with [`extractor_for`] and never mixes them.
//!
//! Extraction is all-or-nothing: if the parser reports any error the whole
//! file fails with a single [`ExtractError`] carrying the position of the
//! first problem.
//!
//! # Example
//!
//! ```rust
//! use probe_graph::extract::extract_imports;
//! use probe_graph::Dialect;
//!
//! let source = "const { login } = require('./auth');\nconst axios = require('axios');";
//! let specifiers = extract_imports(source, Dialect::Dynamic).unwrap();
//! assert_eq!(specifiers, vec!["./auth", "axios"]);
//!
//! let err = extract_imports("import { x from './x'", Dialect::TypedSuperset).unwrap_err();
//! assert!(err.to_string().contains("(1:"));
//! ```

mod dynamic;
mod line_index;
mod typed;

pub use dynamic::RequireExtractor;
pub use typed::DeclarationExtractor;

use oxc_allocator::Allocator;
use oxc_parser::{ParseOptions, Parser, ParserReturn};
use oxc_span::SourceType;

use crate::dialect::Dialect;
use line_index::LineIndex;

/// Error produced when a file cannot be turned into a syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// The parser rejected the source. Diagnostics without a location are
    /// placed at the end of the file.
    #[error("{message} ({line}:{column})")]
    Syntax {
        message: String,
        /// 1-based line
        line: u32,
        /// 0-based column, in characters
        column: u32,
    },

    /// The file bytes are not UTF-8.
    #[error("Invalid UTF-8 sequence ({line}:{column})")]
    InvalidUtf8 { line: u32, column: u32 },
}

impl ExtractError {
    /// Build an error for bytes that failed UTF-8 decoding, positioned at
    /// the first invalid byte.
    pub fn invalid_utf8(bytes: &[u8], err: &std::str::Utf8Error) -> Self {
        let valid = &bytes[..err.valid_up_to()];
        // valid_up_to guarantees this prefix decodes
        let prefix = std::str::from_utf8(valid).unwrap_or_default();
        let (line, column) = LineIndex::new(prefix).line_column(prefix.len() as u32, prefix);
        ExtractError::InvalidUtf8 { line, column }
    }

    /// Build a syntax error at byte `offset`, or at the end of `source`
    /// when the parser gave no location.
    fn syntax(message: impl Into<String>, offset: Option<usize>, source: &str) -> Self {
        let offset = offset.unwrap_or(source.len()) as u32;
        let (line, column) = LineIndex::new(source).line_column(offset, source);
        ExtractError::Syntax {
            message: message.into(),
            line,
            column,
        }
    }

    /// `(line, column)` of the error: 1-based line, 0-based column.
    pub fn position(&self) -> (u32, u32) {
        match self {
            ExtractError::Syntax { line, column, .. }
            | ExtractError::InvalidUtf8 { line, column } => (*line, *column),
        }
    }
}

/// One capability: extract raw specifiers from source text.
pub trait ImportExtractor: Send + Sync {
    /// Dialect this extractor parses.
    fn dialect(&self) -> Dialect;

    /// Specifiers in source order. Duplicates are kept.
    fn extract(&self, source: &str) -> Result<Vec<String>, ExtractError>;
}

/// The extractor for a dialect.
pub fn extractor_for(dialect: Dialect) -> &'static dyn ImportExtractor {
    match dialect {
        Dialect::Dynamic => &RequireExtractor,
        Dialect::TypedSuperset => &DeclarationExtractor,
    }
}

/// Extract specifiers from `source` parsed as `dialect`.
pub fn extract_imports(source: &str, dialect: Dialect) -> Result<Vec<String>, ExtractError> {
    extractor_for(dialect).extract(source)
}

/// Parse a whole file, failing on the first reported error.
///
/// Scripts are parsed as modules with top-level `return` allowed, so
/// one-off check files that bail out early still parse.
pub(crate) fn parse_program<'a>(
    allocator: &'a Allocator,
    source: &'a str,
    source_type: SourceType,
) -> Result<ParserReturn<'a>, ExtractError> {
    let options = ParseOptions {
        allow_return_outside_function: true,
        ..ParseOptions::default()
    };
    let ret = Parser::new(allocator, source, source_type)
        .with_options(options)
        .parse();

    if let Some(error) = ret.errors.first() {
        let offset = error
            .labels
            .as_ref()
            .and_then(|labels| labels.first())
            .map(|label| label.offset());
        return Err(ExtractError::syntax(error.message.to_string(), offset, source));
    }

    if ret.panicked {
        return Err(ExtractError::syntax("Parser aborted", None, source));
    }

    Ok(ret)
}
