use bumpalo::Bump;
use lazy_static::lazy_static;
use pest::Parser;
use pest::iterators::{Pair, Pairs};
use pest::pratt_parser::{Assoc, Op, PrattParser};
use pest_derive::Parser;
use tracing::trace;

use crate::parser::{
    BinaryOp, BoolOp, ComparisonOp, Expr, Literal, ParseError, ParseErrorKind, ParsedExpr,
    ParsedLine, Span, UnaryOp, syntax::AnnotatedSource,
};

/// Default limit on the depth of a parsed tree.
pub const DEFAULT_MAX_DEPTH: usize = 500;

lazy_static! {
    // Note: precedence is defined lowest to highest.
    static ref PRATT_PARSER: PrattParser<Rule> = PrattParser::new()
        // (lowest precedence)
        .op(Op::infix(Rule::cond_op, Assoc::Right))      // `c ? a : b`
        .op(
            Op::infix(Rule::or, Assoc::Left) |
            Op::infix(Rule::or_else, Assoc::Left)
        )                                                // `|`, `||`
        .op(Op::infix(Rule::xor, Assoc::Left))           // `^`
        .op(
            Op::infix(Rule::and, Assoc::Left) |
            Op::infix(Rule::and_then, Assoc::Left)
        )                                                // `&`, `&&`
        .op(
            Op::infix(Rule::eq, Assoc::Left) |
            Op::infix(Rule::neq, Assoc::Left)
        )                                                // `==`, `!=`
        .op(
            Op::infix(Rule::lt, Assoc::Left) |
            Op::infix(Rule::gt, Assoc::Left) |
            Op::infix(Rule::le, Assoc::Left) |
            Op::infix(Rule::ge, Assoc::Left)
        )                                                // `<`, `>`, `<=`, `>=`
        .op(
            Op::infix(Rule::add, Assoc::Left) |
            Op::infix(Rule::sub, Assoc::Left)
        )                                                // `+`, `-`
        .op(
            Op::infix(Rule::mul, Assoc::Left) |
            Op::infix(Rule::div, Assoc::Left) |
            Op::infix(Rule::rem, Assoc::Left)
        )                                                // `*`, `/`, `%`
        .op(Op::prefix(Rule::neg) | Op::prefix(Rule::not)) // `-`, `!`
        // (highest precedence)
        ;
}

#[derive(Parser)]
#[grammar = "parser/expression.pest"]
pub struct ExpressionParser;

/// A freshly built node together with what its parent needs to know.
#[derive(Clone)]
struct Node<'a> {
    expr: &'a Expr<'a>,
    span: Span,
    depth: usize,
}

struct ParseContext<'a> {
    arena: &'a Bump,
    ann: &'a AnnotatedSource<'a, Expr<'a>>,
    max_depth: usize,
}

impl<'a> ParseContext<'a> {
    fn error(&self, kind: ParseErrorKind, span: Span) -> ParseError {
        ParseError::new(kind, self.ann.source, span)
    }

    fn alloc(&self, expr: Expr<'a>, span: Span, depth: usize) -> Result<Node<'a>, ParseError> {
        if depth > self.max_depth {
            return Err(self.error(
                ParseErrorKind::MaxDepthExceeded {
                    depth,
                    max_depth: self.max_depth,
                },
                span,
            ));
        }
        let expr = self.arena.alloc(expr);
        self.ann.add_span(expr, span.clone());
        Ok(Node { expr, span, depth })
    }

    fn parse_expression(&self, pairs: Pairs<'a, Rule>) -> Result<Node<'a>, ParseError> {
        PRATT_PARSER
            .map_primary(|primary| self.parse_primary(primary))
            .map_prefix(|op, rhs| {
                let rhs = rhs?;
                let op_span = Span::from(op.as_span());
                let op = match op.as_rule() {
                    Rule::neg => UnaryOp::Neg,
                    Rule::not => UnaryOp::Not,
                    rule => unreachable!("Unknown prefix operator: {:?}", rule),
                };
                let span = Span::combine(&op_span, &rhs.span);
                self.alloc(Expr::Unary { op, expr: rhs.expr }, span, rhs.depth + 1)
            })
            .map_infix(|lhs, op, rhs| {
                let lhs = lhs?;
                let rhs = rhs?;
                let span = Span::combine(&lhs.span, &rhs.span);
                let (left, right) = (lhs.expr, rhs.expr);
                let mut depth = lhs.depth.max(rhs.depth) + 1;
                let expr = match op.as_rule() {
                    Rule::cond_op => {
                        let inner = op.into_inner().next().ok_or_else(|| {
                            self.error(missing("conditional branch"), span.clone())
                        })?;
                        let then_branch = self.parse_expression(inner.into_inner())?;
                        depth = depth.max(then_branch.depth + 1);
                        Expr::If {
                            cond: left,
                            then_branch: then_branch.expr,
                            else_branch: right,
                        }
                    }
                    Rule::or_else => Expr::OrElse {
                        primary: left,
                        fallback: right,
                    },
                    Rule::or => boolean(BoolOp::Or, left, right),
                    Rule::xor => boolean(BoolOp::Xor, left, right),
                    Rule::and => boolean(BoolOp::And, left, right),
                    Rule::and_then => boolean(BoolOp::AndThen, left, right),
                    Rule::eq => comparison(ComparisonOp::Eq, left, right),
                    Rule::neq => comparison(ComparisonOp::Neq, left, right),
                    Rule::lt => comparison(ComparisonOp::Lt, left, right),
                    Rule::gt => comparison(ComparisonOp::Gt, left, right),
                    Rule::le => comparison(ComparisonOp::Le, left, right),
                    Rule::ge => comparison(ComparisonOp::Ge, left, right),
                    Rule::add => binary(BinaryOp::Add, left, right),
                    Rule::sub => binary(BinaryOp::Sub, left, right),
                    Rule::mul => binary(BinaryOp::Mul, left, right),
                    Rule::div => binary(BinaryOp::Div, left, right),
                    Rule::rem => binary(BinaryOp::Rem, left, right),
                    rule => unreachable!("Unknown binary operator: {:?}", rule),
                };
                self.alloc(expr, span, depth)
            })
            .parse(pairs)
    }

    fn parse_primary(&self, pair: Pair<'a, Rule>) -> Result<Node<'a>, ParseError> {
        let span = Span::from(pair.as_span());
        match pair.as_rule() {
            Rule::grouped => {
                let inner = pair
                    .into_inner()
                    .next()
                    .ok_or_else(|| self.error(missing("expression"), span.clone()))?;
                // Parentheses only group: same node and depth, wider span.
                let node = self.parse_expression(inner.into_inner())?;
                Ok(Node { span, ..node })
            }
            Rule::boolean => {
                let value = pair.as_str() == "true";
                self.alloc(Expr::Literal(Literal::Bool(value)), span, 1)
            }
            Rule::dec_int => self.parse_int(pair.as_str(), pair.as_str(), 10, span),
            Rule::bin_int => self.parse_int(pair.as_str(), &pair.as_str()[2..], 2, span),
            Rule::hex_int => self.parse_int(pair.as_str(), &pair.as_str()[2..], 16, span),
            rule => unreachable!("Unknown primary: {:?}", rule),
        }
    }

    fn parse_int(
        &self,
        text: &str,
        digits: &str,
        radix: u32,
        span: Span,
    ) -> Result<Node<'a>, ParseError> {
        let value = i64::from_str_radix(digits, radix).map_err(|_| {
            self.error(
                ParseErrorKind::InvalidNumber {
                    text: text.to_string(),
                },
                span.clone(),
            )
        })?;
        self.alloc(Expr::Literal(Literal::Int(value)), span, 1)
    }
}

fn binary<'a>(op: BinaryOp, left: &'a Expr<'a>, right: &'a Expr<'a>) -> Expr<'a> {
    Expr::Binary { op, left, right }
}

fn boolean<'a>(op: BoolOp, left: &'a Expr<'a>, right: &'a Expr<'a>) -> Expr<'a> {
    Expr::Boolean { op, left, right }
}

fn comparison<'a>(op: ComparisonOp, left: &'a Expr<'a>, right: &'a Expr<'a>) -> Expr<'a> {
    Expr::Comparison { op, left, right }
}

fn missing(what: &str) -> ParseErrorKind {
    ParseErrorKind::UnexpectedToken {
        expected: what.to_string(),
        found: "nothing".to_string(),
    }
}

/// Reject input whose nesting exceeds the limit before the grammar and the
/// Pratt parser recurse into it.
///
/// The estimate never undercounts. A `(` opens a level closed only by its
/// `)`. Every `?` deepens the current level until that `)` (or a top-level
/// `;`), because a `:` starts a right-nested branch rather than closing one.
/// A run of prefix operators deepens its operand by the run's length.
fn check_nesting(source: &str, max_depth: usize) -> Result<(), ParseError> {
    // Depth outside each open parenthesis.
    let mut outer = Vec::new();
    let mut base = 0usize;
    let mut prefixes = 0usize;
    // Whether an operand comes next, which makes `-` and `!` prefixes.
    let mut operand = true;
    let mut in_comment = false;

    for (pos, c) in source.char_indices() {
        if in_comment {
            in_comment = c != '\n';
            continue;
        }
        let depth = match c {
            '#' => {
                in_comment = true;
                continue;
            }
            c if c.is_whitespace() => continue,
            '-' | '!' if operand => {
                prefixes += 1;
                base + prefixes
            }
            '(' => {
                outer.push(base);
                base += prefixes + 1;
                prefixes = 0;
                operand = true;
                base
            }
            '?' => {
                base += 1;
                prefixes = 0;
                operand = true;
                base
            }
            ')' => {
                base = outer.pop().unwrap_or(0);
                prefixes = 0;
                operand = false;
                continue;
            }
            ';' if outer.is_empty() => {
                base = 0;
                prefixes = 0;
                operand = true;
                continue;
            }
            c if c.is_ascii_alphanumeric() || c == '_' => {
                prefixes = 0;
                operand = false;
                continue;
            }
            _ => {
                prefixes = 0;
                operand = true;
                continue;
            }
        };
        if depth > max_depth {
            return Err(ParseError::new(
                ParseErrorKind::MaxDepthExceeded { depth, max_depth },
                source,
                Span::new(pos, pos + c.len_utf8()),
            ));
        }
    }
    Ok(())
}

fn context<'a>(arena: &'a Bump, source: &'a str, max_depth: usize) -> ParseContext<'a> {
    ParseContext {
        arena,
        ann: arena.alloc(AnnotatedSource::new(arena, source)),
        max_depth,
    }
}

/// Parse exactly one expression.
pub fn parse<'a>(arena: &'a Bump, source: &'a str) -> Result<ParsedExpr<'a>, ParseError> {
    parse_with_max_depth(arena, source, DEFAULT_MAX_DEPTH)
}

pub fn parse_with_max_depth<'a>(
    arena: &'a Bump,
    source: &'a str,
    max_depth: usize,
) -> Result<ParsedExpr<'a>, ParseError> {
    trace!(source, "parsing expression");
    check_nesting(source, max_depth)?;
    let ctx = context(arena, source, max_depth);
    let mut pairs = ExpressionParser::parse(Rule::main, source)
        .map_err(|e| ParseError::from_pest(e, source))?;
    let expression = pairs
        .next()
        .and_then(|main| main.into_inner().next())
        .ok_or_else(|| ctx.error(missing("expression"), Span::new(0, source.len())))?;
    let node = ctx.parse_expression(expression.into_inner())?;
    Ok(ParsedExpr {
        expr: node.expr,
        ann: ctx.ann,
    })
}

/// Parse a line of `;`-separated expressions. An empty line yields no expressions.
pub fn parse_line<'a>(arena: &'a Bump, source: &'a str) -> Result<ParsedLine<'a>, ParseError> {
    parse_line_with_max_depth(arena, source, DEFAULT_MAX_DEPTH)
}

pub fn parse_line_with_max_depth<'a>(
    arena: &'a Bump,
    source: &'a str,
    max_depth: usize,
) -> Result<ParsedLine<'a>, ParseError> {
    trace!(source, "parsing line");
    check_nesting(source, max_depth)?;
    let ctx = context(arena, source, max_depth);
    let mut pairs = ExpressionParser::parse(Rule::line, source)
        .map_err(|e| ParseError::from_pest(e, source))?;
    let line = pairs
        .next()
        .ok_or_else(|| ctx.error(missing("line"), Span::new(0, source.len())))?;

    let mut exprs = Vec::new();
    for pair in line.into_inner() {
        if pair.as_rule() == Rule::expression {
            exprs.push(ctx.parse_expression(pair.into_inner())?.expr);
        }
    }

    Ok(ParsedLine {
        exprs: arena.alloc_slice_copy(&exprs),
        ann: ctx.ann,
    })
}
