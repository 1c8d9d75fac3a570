use super::parser::{parse, parse_line, parse_line_with_max_depth, parse_with_max_depth};
use crate::parser::{BinaryOp, BoolOp, ComparisonOp, Expr, Literal, ParseErrorKind, Span};
use bumpalo::Bump;

#[test]
fn test_spans() {
    let arena = Bump::new();
    let input = "1 + 22";
    let parsed = parse(&arena, input).unwrap();

    assert_eq!(parsed.span_of(parsed.expr), Some(Span::new(0, 6)));
    let Expr::Binary { left, right, .. } = parsed.expr else {
        panic!("Expected binary expression, got {:?}", parsed.expr);
    };
    assert_eq!(parsed.span_of(left), Some(Span::new(0, 1)));
    assert_eq!(parsed.span_of(right), Some(Span::new(4, 6)));
}

#[test]
fn test_spans_include_parentheses() {
    let arena = Bump::new();
    let input = "(1 + 2) * 3";
    let parsed = parse(&arena, input).unwrap();

    assert_eq!(parsed.span_of(parsed.expr), Some(Span::new(0, 11)));
}

#[test]
fn test_comment() {
    let arena = Bump::new();
    let input = "# leading comment\n1 + 2 # trailing";
    let parsed = parse(&arena, input).unwrap();

    assert_eq!(
        *parsed.expr,
        Expr::Binary {
            op: BinaryOp::Add,
            left: arena.alloc(Expr::Literal(Literal::Int(1))),
            right: arena.alloc(Expr::Literal(Literal::Int(2))),
        }
    );
    assert_eq!(parsed.span_of(parsed.expr), Some(Span::new(18, 23)));
}

#[test]
fn test_all_operators_parse() {
    let arena = Bump::new();
    let cases = [
        "1 + 2",
        "1 - 2",
        "1 * 2",
        "1 / 2",
        "1 % 2",
        "true & false",
        "true | false",
        "true ^ false",
        "true && false",
        "1 || 2",
        "1 == 2",
        "1 != 2",
        "1 < 2",
        "1 > 2",
        "1 <= 2",
        "1 >= 2",
        "-1",
        "!true",
        "true ? 1 : 2",
        "((1))",
    ];
    for input in cases {
        assert!(parse(&arena, input).is_ok(), "Failed to parse: {}", input);
    }
}

#[test]
fn test_tokens_are_longest_match() {
    let arena = Bump::new();
    let parsed = parse(&arena, "1 <= 2").unwrap();
    assert!(matches!(
        parsed.expr,
        Expr::Comparison {
            op: ComparisonOp::Le,
            ..
        }
    ));

    let parsed = parse(&arena, "true && false").unwrap();
    assert!(matches!(
        parsed.expr,
        Expr::Boolean {
            op: BoolOp::AndThen,
            ..
        }
    ));

    let parsed = parse(&arena, "1 || 2").unwrap();
    assert!(matches!(parsed.expr, Expr::OrElse { .. }));
}

#[test]
fn test_syntax_errors() {
    let arena = Bump::new();
    for input in ["", "1 +", "(1 + 2", "1 + 2)", "1 2", "? 1 : 2", "true ? 1", "1 ~ 2", "1; 2"] {
        let err = parse(&arena, input).unwrap_err();
        assert_eq!(err.code(), "P001", "Unexpected error for {:?}: {}", input, err);
    }
}

#[test]
fn test_syntax_error_location() {
    let arena = Bump::new();
    let err = parse(&arena, "1 + * 2").unwrap_err();
    assert_eq!(err.span, Span::new(4, 5));
    let ParseErrorKind::UnexpectedToken { found, .. } = &err.kind else {
        panic!("Expected unexpected token, got {:?}", err.kind);
    };
    assert_eq!(found, "'*'");
}

#[test]
fn test_parse_line() {
    let arena = Bump::new();
    // Typing happens later, so an ill-typed statement still parses.
    assert_eq!(parse_line(&arena, "1 + 2; true; 3 ? 4 : 5;").unwrap().exprs.len(), 3);

    let line = parse_line(&arena, "1 + 2; true;  0x10").unwrap();
    assert_eq!(line.exprs.len(), 3);
    let spans: Vec<_> = line
        .statements()
        .map(|stmt| stmt.span_of(stmt.expr).unwrap())
        .collect();
    assert_eq!(spans, vec![Span::new(0, 5), Span::new(7, 11), Span::new(14, 18)]);
}

#[test]
fn test_parse_line_trailing_separator_and_empty() {
    let arena = Bump::new();
    assert_eq!(parse_line(&arena, "1;").unwrap().exprs.len(), 1);
    assert_eq!(parse_line(&arena, "").unwrap().exprs.len(), 0);
    assert_eq!(parse_line(&arena, "   # only a comment").unwrap().exprs.len(), 0);
    assert!(parse_line(&arena, "1;;2").is_err());
}

#[test]
fn test_max_depth_unary_chain() {
    let arena = Bump::new();
    let source = format!("{}1", "-".repeat(20));
    assert!(parse_with_max_depth(&arena, &source, 21).is_ok());

    let err = parse_with_max_depth(&arena, &source, 20).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::MaxDepthExceeded {
            depth: 21,
            max_depth: 20
        }
    );
    assert_eq!(err.code(), "P003");
}

#[test]
fn test_max_depth_nested_parentheses() {
    let arena = Bump::new();
    let source = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    let err = parse(&arena, &source).unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::MaxDepthExceeded { .. }));
}

#[test]
fn test_max_depth_long_prefix_runs() {
    let arena = Bump::new();
    for prefix in ["!", "-"] {
        let source = format!("{}1", prefix.repeat(100_000));
        let err = parse(&arena, &source).unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::MaxDepthExceeded {
                depth: 501,
                max_depth: 500
            }
        );
        assert_eq!(err.span, Span::new(500, 501));
    }
}

#[test]
fn test_max_depth_prefixes_inside_parentheses() {
    let arena = Bump::new();
    let source = format!("{}true{}", "!(".repeat(100_000), ")".repeat(100_000));
    let err = parse(&arena, &source).unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::MaxDepthExceeded { .. }));
}

#[test]
fn test_max_depth_chained_conditionals() {
    let arena = Bump::new();
    let source = format!("{}1", "true ? 1 : ".repeat(100_000));
    let err = parse(&arena, &source).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::MaxDepthExceeded {
            depth: 501,
            max_depth: 500
        }
    );
    // The 501st `?`.
    assert_eq!(err.span, Span::new(500 * 11 + 5, 500 * 11 + 6));

    let source = format!("{}1{}", "true ? ".repeat(100_000), " : 1".repeat(100_000));
    let err = parse_line(&arena, &source).unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::MaxDepthExceeded { .. }));
}

#[test]
fn test_max_depth_counts_each_operand_separately() {
    let arena = Bump::new();

    // Prefix runs in sibling operands do not add up.
    let source = format!("{}1", "-1 + ".repeat(300));
    assert!(parse(&arena, &source).is_ok());

    // Conditionals closed by their parentheses do not add up.
    let source = format!("{}0", "(true ? 1 : 2) + ".repeat(300));
    assert!(parse(&arena, &source).is_ok());

    // Each statement starts from zero.
    let source = "true ? 1 : 2; ".repeat(1000);
    assert_eq!(parse_line(&arena, &source).unwrap().exprs.len(), 1000);

    // `!=` and binary `-` are not prefixes.
    let source = format!("{}1", "1 != 1 - ".repeat(100));
    assert!(parse(&arena, &source).is_ok());
}

#[test]
fn test_max_depth_applies_to_lines() {
    let arena = Bump::new();
    let source = "1 + 2 + 3 + 4; 5";
    assert!(parse_line_with_max_depth(&arena, source, 4).is_ok());
    assert!(parse_line_with_max_depth(&arena, source, 3).is_err());
}
