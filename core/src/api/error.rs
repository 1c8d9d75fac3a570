//! Public error types for the tally API.
//!
//! Internal errors are converted to these public types at API boundaries.

use core::fmt;

use thiserror::Error;

use crate::{
    analyzer::AnalyzeError,
    evaluator::{ArithmeticError, ResourceExceeded},
    parser::{ParseError, Span},
};

/// Public error type for all tally operations.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Compilation errors (parse errors, type errors).
    ///
    /// Contains one or more diagnostics with source locations and context.
    #[error("Compilation failed with {} error(s)", count_errors(.diagnostics))]
    Compilation {
        diagnostics: Vec<Diagnostic>,
        src: String,
    },

    /// A well-typed expression with no result (division or remainder by zero).
    #[error("Runtime error: {error}")]
    Runtime {
        error: ArithmeticError,
        diagnostic: Diagnostic,
        src: String,
    },

    /// Resource limits exceeded (evaluation stack depth).
    #[error("Resource limit exceeded: {0}")]
    ResourceExceeded(ResourceExceeded),
}

fn count_errors(diagnostics: &[Diagnostic]) -> usize {
    diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count()
}

impl Error {
    /// The diagnostics carried by this error, if any.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Error::Compilation { diagnostics, .. } => diagnostics,
            Error::Runtime { diagnostic, .. } => core::slice::from_ref(diagnostic),
            Error::ResourceExceeded(_) => &[],
        }
    }

    /// Source text the diagnostics point into.
    pub fn source_text(&self) -> Option<&str> {
        match self {
            Error::Compilation { src, .. } | Error::Runtime { src, .. } => Some(src),
            Error::ResourceExceeded(_) => None,
        }
    }
}

/// A diagnostic message with source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Hints suggesting how to fix the issue.
    pub help: Vec<String>,

    /// Optional error code (e.g., "E001") for documentation lookup.
    pub code: Option<String>,
}

/// Severity level for diagnostics.
///
/// The language has no lints, so every diagnostic is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - compilation or execution cannot succeed.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

// ============================================================================
// Conversion from internal errors
// ============================================================================

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Compilation {
            diagnostics: vec![err.to_diagnostic()],
            src: err.src,
        }
    }
}

impl From<AnalyzeError> for Error {
    fn from(err: AnalyzeError) -> Self {
        Error::Compilation {
            diagnostics: vec![err.to_diagnostic()],
            src: err.src,
        }
    }
}

impl From<ResourceExceeded> for Error {
    fn from(err: ResourceExceeded) -> Self {
        Error::ResourceExceeded(err)
    }
}

impl Error {
    /// A runtime failure of the statement at `span` in `source`.
    pub(crate) fn runtime(error: ArithmeticError, source: &str, span: Span) -> Self {
        let help = match error {
            ArithmeticError::DivisionByZero => "The divisor evaluated to 0",
            ArithmeticError::RemainderByZero => "The right operand of `%` evaluated to 0",
        };
        Error::Runtime {
            error,
            diagnostic: Diagnostic {
                severity: Severity::Error,
                message: error.to_string(),
                span,
                help: vec![help.to_string()],
                code: Some(error.code().to_string()),
            },
            src: source.to_string(),
        }
    }
}
