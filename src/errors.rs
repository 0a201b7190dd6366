//! Numeral Error Handling - Unified Encapsulated API
//!
//! Every failure the parser can produce is represented here. The error type
//! carries three things: what went wrong (`ErrorKind`), where in the input it
//! happened (`SourceInfo`), and how to help the caller (`DiagnosticInfo`).
//! All construction goes through `ParseError::report` so no caller assembles
//! the pieces by hand.

use std::fmt;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::span::{to_source_span, Span};

// ============================================================================
// ERROR KIND - what went wrong
// ============================================================================

/// All failure modes of the parser as a clean enum - no duplicate fields.
///
/// Every error is terminal for the call: there is no retry and no partial
/// value. `Empty` and `InvalidChar` are structural; `Overflow` and
/// `Underflow` are range failures detected before the accumulator is
/// combined, so a failing parse never wraps or saturates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum ErrorKind {
    /// No characters remained after the optional leading sign.
    #[error("empty input: no digits after the optional sign")]
    Empty,

    /// A character outside `0`-`9` appeared before end of input.
    #[error("invalid character '{found}' in integer literal")]
    InvalidChar { found: char },

    /// Appending the next digit would exceed the maximum representable value.
    #[error("integer overflow: appending digit {digit} exceeds {max}", max = i64::MAX)]
    Overflow { digit: u8 },

    /// Appending the next digit would go below the minimum representable value.
    #[error("integer underflow: appending digit {digit} goes below {min}", min = i64::MIN)]
    Underflow { digit: u8 },
}

impl ErrorKind {
    /// Get the error category for test assertions.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Empty | Self::InvalidChar { .. } => ErrorCategory::Parse,
            Self::Overflow { .. } | Self::Underflow { .. } => ErrorCategory::Range,
        }
    }

    /// Get error code suffix for diagnostic codes.
    pub const fn code_suffix(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::InvalidChar { .. } => "invalid_char",
            Self::Overflow { .. } => "overflow",
            Self::Underflow { .. } => "underflow",
        }
    }
}

/// Coarse classification of failures: malformed text vs. well-formed text
/// denoting a value outside the representable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Parse,
    Range,
}

// ============================================================================
// SOURCE AND DIAGNOSTIC CONTEXT - where it happened, how to help
// ============================================================================

/// Where in the input the failure occurred.
#[derive(Debug, Clone)]
pub struct SourceInfo {
    pub source: Arc<NamedSource<String>>,
    pub primary_span: SourceSpan,
}

/// Diagnostic enhancement data.
#[derive(Debug, Clone)]
pub struct DiagnosticInfo {
    pub help: Option<String>,
    pub error_code: String,
}

// ============================================================================
// PARSE ERROR - the single error type
// ============================================================================

/// The single error type - no wrapper, no variants, just essential data.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct ParseError {
    /// What went wrong (type-specific data)
    pub kind: ErrorKind,
    /// Where it happened (span into the parsed input)
    pub source_info: SourceInfo,
    /// How to help (auto-populated based on the kind)
    pub diagnostic_info: DiagnosticInfo,
}

impl ParseError {
    /// Creates a fully contextualized error for a failure at `span` while
    /// parsing `input`. The input itself becomes the diagnostic source so
    /// rendered reports can point at the offending character.
    pub fn report(kind: ErrorKind, input: &str, span: Span) -> Self {
        let source = Arc::new(NamedSource::new("input", input.to_string()));
        let error_code = format!("numeral::parse::{}", kind.code_suffix());

        Self {
            kind,
            source_info: SourceInfo {
                source,
                primary_span: to_source_span(span),
            },
            diagnostic_info: DiagnosticInfo {
                help: kind_help(&kind),
                error_code,
            },
        }
    }

    fn primary_label(&self) -> String {
        match &self.kind {
            ErrorKind::Empty => "expected a digit here".into(),
            ErrorKind::InvalidChar { .. } => "not a digit".into(),
            ErrorKind::Overflow { .. } => "this digit overflows".into(),
            ErrorKind::Underflow { .. } => "this digit underflows".into(),
        }
    }
}

impl PartialEq for ParseError {
    /// Two errors are equal when they report the same failure at the same
    /// place; the diagnostic dressing is not part of identity.
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.source_info.primary_span == other.source_info.primary_span
    }
}

fn kind_help(kind: &ErrorKind) -> Option<String> {
    match kind {
        ErrorKind::Empty => {
            Some("provide at least one decimal digit after the optional '-' sign".into())
        }
        ErrorKind::InvalidChar { .. } => {
            Some("only the characters '0' through '9', with an optional leading '-', are accepted".into())
        }
        ErrorKind::Overflow { .. } => Some(format!(
            "the largest representable value is {}",
            i64::MAX
        )),
        ErrorKind::Underflow { .. } => Some(format!(
            "the smallest representable value is {}",
            i64::MIN
        )),
    }
}

impl Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(&self.diagnostic_info.error_code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diagnostic_info
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = vec![LabeledSpan::new_with_span(
            Some(self.primary_label()),
            self.source_info.primary_span,
        )];
        Some(Box::new(labels.into_iter()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&*self.source_info.source)
    }
}

// ============================================================================
// ERROR FORMATTING UTILITIES
// ============================================================================

/// Prints a ParseError with full miette diagnostics.
///
/// This provides rich error formatting with source spans, labels, and help
/// text. Use this for user-facing error display.
pub fn print_error(error: ParseError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}
