//! Source location tracking for parse failures.
//!
//! Input to the parser is a single line of caller-owned text, so a span is a
//! plain byte range into that text. Spans exist solely so diagnostics can
//! point at the exact character that terminated the scan.

use serde::{Deserialize, Serialize};

/// A byte range into the parsed input.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// An empty span at a single position, used when the problem is the
    /// absence of input rather than a particular character.
    pub fn at(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Converts a numeral `Span` to a miette `SourceSpan` for error reporting.
pub fn to_source_span(span: Span) -> miette::SourceSpan {
    miette::SourceSpan::from(span.start..span.end)
}
