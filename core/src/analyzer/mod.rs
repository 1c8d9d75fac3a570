pub mod analyzer;
pub mod error;
pub mod rules;
pub mod typed_expr;



pub use analyzer::analyze;
pub use error::{AnalyzeError, Operand, TypeError, TypeRule};
pub use typed_expr::{Expr, ExprInner};
