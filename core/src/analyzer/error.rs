use core::fmt;

use thiserror::Error;

use crate::api::{Diagnostic, Severity};
use crate::parser::{Operator, Span};
use crate::types::Type;

/// Which operand of an operator a rule talks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The single operand of a unary operator.
    Only,
    Left,
    Right,
    Condition,
    Then,
    Else,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Only => write!(f, "operand"),
            Operand::Left => write!(f, "left operand"),
            Operand::Right => write!(f, "right operand"),
            Operand::Condition => write!(f, "condition"),
            Operand::Then => write!(f, "then branch"),
            Operand::Else => write!(f, "else branch"),
        }
    }
}

/// The typing rule an operator's operands violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRule {
    /// An operand has a fixed required type.
    OperandMustBe {
        operand: Operand,
        expected: Type,
        found: Type,
    },
    /// Two operands must share a type.
    OperandsMustMatch {
        first: Operand,
        second: Operand,
        first_ty: Type,
        second_ty: Type,
    },
}

impl fmt::Display for TypeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRule::OperandMustBe {
                operand,
                expected,
                found,
            } => write!(f, "{} must be {}, found {}", operand, expected, found),
            TypeRule::OperandsMustMatch {
                first,
                second,
                first_ty,
                second_ty,
            } => write!(
                f,
                "{} and {} must have the same type, found {} and {}",
                first, second, first_ty, second_ty
            ),
        }
    }
}

/// Raised when a node is constructed from operands its operator does not accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("type error in {op}: {rule}")]
pub struct TypeError {
    pub op: Operator,
    pub rule: TypeRule,
}

impl TypeError {
    pub fn new(op: Operator, rule: TypeRule) -> Self {
        Self { op, rule }
    }

    /// Stable diagnostic code for this error.
    pub fn code(&self) -> &'static str {
        match self.rule {
            TypeRule::OperandMustBe { .. } => "E001",
            TypeRule::OperandsMustMatch { .. } => "E002",
        }
    }
}

/// A [`TypeError`] located in source text.
#[derive(Debug, Clone, Error)]
#[error("{error}")]
pub struct AnalyzeError {
    #[source]
    pub error: TypeError,
    pub src: String,
    pub span: Span,
}

impl AnalyzeError {
    pub fn new(error: TypeError, src: String, span: Span) -> Self {
        Self { error, src, span }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let help = match &self.error.rule {
            TypeRule::OperandMustBe { expected, .. } => {
                format!("`{}` expects {} here", self.error.op.symbol(), expected)
            }
            TypeRule::OperandsMustMatch { .. } => {
                "Both sides must be Int or both must be Bool".to_string()
            }
        };
        Diagnostic {
            severity: Severity::Error,
            message: self.error.to_string(),
            span: self.span.clone(),
            help: vec![help],
            code: Some(self.error.code().to_string()),
        }
    }
}
