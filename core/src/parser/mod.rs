mod parsed_expr;
pub mod parser;
mod syntax;
pub mod error;

// Re-export the parser and rule enum for external use
pub use parser::ExpressionParser;
pub use parser::Rule;
pub use parser::{DEFAULT_MAX_DEPTH, parse, parse_line, parse_line_with_max_depth, parse_with_max_depth};

pub use parsed_expr::{Expr, Literal, ParsedExpr, ParsedLine};
pub use syntax::AnnotatedSource;
pub use syntax::{BinaryOp, BoolOp, ComparisonOp, Operator, Span, UnaryOp};
pub use error::{ParseError, ParseErrorKind};


#[cfg(test)]
mod parse_test;
