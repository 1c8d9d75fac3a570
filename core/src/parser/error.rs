use pest::error::{ErrorVariant, InputLocation};
use thiserror::Error;

use crate::api::{Diagnostic, Severity};
use crate::parser::{Rule, Span};

/// Parser error with the source it refers to
#[derive(Debug, Clone, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub src: String,
    pub span: Span,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Unexpected token
    #[error("Expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    /// Integer literal that does not fit in 64 bits
    #[error("Invalid number literal '{text}'")]
    InvalidNumber { text: String },
    /// Maximum nesting depth exceeded
    #[error("Expression nesting depth exceeds maximum of {max_depth} levels")]
    MaxDepthExceeded { depth: usize, max_depth: usize },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, src: &str, span: Span) -> Self {
        Self {
            kind,
            src: src.to_string(),
            span,
        }
    }

    /// Build from a pest error, describing the expected rules in plain words.
    pub(crate) fn from_pest(err: pest::error::Error<Rule>, src: &str) -> Self {
        let (start, end) = match err.location {
            InputLocation::Pos(pos) => (pos, pos),
            InputLocation::Span(span) => span,
        };
        let next = src.get(start..).and_then(|rest| rest.chars().next());
        let found = match next {
            Some(c) => format!("'{}'", c),
            None => "end of input".to_string(),
        };
        let expected = match &err.variant {
            ErrorVariant::ParsingError { positives, .. } if !positives.is_empty() => {
                let mut names: Vec<&str> = positives.iter().map(|r| describe(*r)).collect();
                names.sort_unstable();
                names.dedup();
                names.join(" or ")
            }
            ErrorVariant::ParsingError { .. } => "something else".to_string(),
            ErrorVariant::CustomError { message } => message.clone(),
        };
        // Point at one character when pest gives a bare position.
        let end = if end == start {
            start + next.map_or(0, char::len_utf8)
        } else {
            end
        };
        Self::new(
            ParseErrorKind::UnexpectedToken { expected, found },
            src,
            Span::new(start, end),
        )
    }

    pub fn code(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => "P001",
            ParseErrorKind::InvalidNumber { .. } => "P002",
            ParseErrorKind::MaxDepthExceeded { .. } => "P003",
        }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let help = match &self.kind {
            ParseErrorKind::UnexpectedToken { .. } => vec![],
            ParseErrorKind::InvalidNumber { .. } => {
                vec!["Integers must fit in a signed 64-bit value".to_string()]
            }
            ParseErrorKind::MaxDepthExceeded { .. } => {
                vec!["Reduce nesting or simplify the expression".to_string()]
            }
        };
        Diagnostic {
            severity: Severity::Error,
            message: self.kind.to_string(),
            span: self.span.clone(),
            help,
            code: Some(self.code().to_string()),
        }
    }
}

fn describe(rule: Rule) -> &'static str {
    match rule {
        Rule::expression | Rule::grouped => "expression",
        Rule::boolean => "boolean",
        Rule::bin_int | Rule::hex_int | Rule::dec_int => "integer",
        Rule::neg | Rule::not => "unary operator",
        Rule::cond_op
        | Rule::or_else
        | Rule::or
        | Rule::xor
        | Rule::and_then
        | Rule::and
        | Rule::eq
        | Rule::neq
        | Rule::le
        | Rule::ge
        | Rule::lt
        | Rule::gt
        | Rule::add
        | Rule::sub
        | Rule::mul
        | Rule::div
        | Rule::rem => "operator",
        Rule::EOI => "end of input",
        _ => "token",
    }
}
