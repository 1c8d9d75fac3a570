use super::*;
use crate::{
    evaluator::ResourceExceeded,
    parser::Span,
    types::Type,
};
use pretty_assertions::assert_eq;

fn engine() -> Engine {
    Engine::new(EngineOptions::default())
}

fn codes(err: &Error) -> Vec<&str> {
    err.diagnostics()
        .iter()
        .filter_map(|d| d.code.as_deref())
        .collect()
}

#[test]
fn test_compile_and_run() {
    let expr = engine().compile("(1 + 2) * 3").unwrap();
    assert_eq!(expr.return_type(), Type::Int);
    assert_eq!(expr.run().unwrap(), 9);
    // Runs are independent.
    assert_eq!(expr.run().unwrap(), 9);
}

#[test]
fn test_boolean_results_are_zero_or_one() {
    let expr = engine().compile("1 < 2").unwrap();
    assert_eq!(expr.return_type(), Type::Bool);
    assert_eq!(expr.run().unwrap(), 1);
}

#[test]
fn test_compile_line() {
    let exprs = engine().compile_line("1 + 1; true ^ true;  -4").unwrap();
    let results: Vec<i64> = exprs.iter().map(|e| e.run().unwrap()).collect();
    assert_eq!(results, vec![2, 0, -4]);

    let snippets: Vec<&str> = exprs.iter().map(|e| e.snippet()).collect();
    assert_eq!(snippets, vec!["1 + 1", "true ^ true", "-4"]);
    assert!(exprs.iter().all(|e| e.source() == "1 + 1; true ^ true;  -4"));
}

#[test]
fn test_empty_line_compiles_to_nothing() {
    assert!(engine().compile_line("").unwrap().is_empty());
    assert!(engine().compile_line("  # nothing here").unwrap().is_empty());
}

#[test]
fn test_parse_error_diagnostic() {
    let err = engine().compile("1 +").unwrap_err();
    let Error::Compilation { diagnostics, src } = &err else {
        panic!("Expected compilation error, got {:?}", err);
    };
    assert_eq!(src, "1 +");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert_eq!(codes(&err), vec!["P001"]);
    assert_eq!(err.to_string(), "Compilation failed with 1 error(s)");
}

#[test]
fn test_type_error_diagnostic() {
    let err = engine().compile_line("1; 2 + true").unwrap_err();
    assert_eq!(codes(&err), vec!["E001"]);
    assert_eq!(err.diagnostics()[0].span, Span::new(3, 11));
    assert_eq!(err.source_text(), Some("1; 2 + true"));
}

#[test]
fn test_runtime_error_diagnostic() {
    let exprs = engine().compile_line("1; 8 / (4 - 4)").unwrap();
    assert_eq!(exprs[0].run().unwrap(), 1);

    let err = exprs[1].run().unwrap_err();
    assert!(matches!(
        err,
        Error::Runtime {
            error: crate::evaluator::ArithmeticError::DivisionByZero,
            ..
        }
    ));
    assert_eq!(codes(&err), vec!["R001"]);
    assert_eq!(err.diagnostics()[0].span, Span::new(3, 14));

    let err = engine().compile("1 % 0").unwrap().run().unwrap_err();
    assert_eq!(codes(&err), vec!["R002"]);
}

#[test]
fn test_every_diagnostic_is_an_error() {
    let errors = [
        engine().compile("(1").unwrap_err(),
        engine().compile("99999999999999999999").unwrap_err(),
        engine().compile("true < 1").unwrap_err(),
        engine().compile("1 == true").unwrap_err(),
        engine().compile("1 / 0").unwrap().run().unwrap_err(),
    ];
    for err in &errors {
        assert_eq!(err.diagnostics().len(), 1, "{:?}", err);
        assert_eq!(err.diagnostics()[0].severity, Severity::Error);
    }
    assert_eq!(Severity::Error.to_string(), "error");
}

#[test]
fn test_compilation_depth_limit() {
    let engine = Engine::new(EngineOptions {
        default_compilation_options: CompilationOptions { max_depth: 3 },
        ..Default::default()
    });
    assert!(engine.compile("1 + 2 + 3").is_ok());
    let err = engine.compile("1 + 2 + 3 + 4").unwrap_err();
    assert_eq!(codes(&err), vec!["P003"]);

    let err = engine
        .compile_with_options(CompilationOptions { max_depth: 1 }, "-1")
        .unwrap_err();
    assert_eq!(codes(&err), vec!["P003"]);
}

#[test]
fn test_execution_depth_limit() {
    let engine = Engine::new(EngineOptions {
        default_execution_options: ExecutionOptions { max_depth: 2 },
        ..Default::default()
    });
    let expr = engine.compile("---1").unwrap();
    assert_eq!(
        expr.run().unwrap_err().to_string(),
        "Resource limit exceeded: Evaluation stack overflow: depth 3 exceeds maximum of 2"
    );
    assert!(matches!(
        expr.run().unwrap_err(),
        Error::ResourceExceeded(ResourceExceeded::StackOverflow { .. })
    ));
    assert_eq!(
        expr.run_with_options(ExecutionOptions { max_depth: 4 }).unwrap(),
        -1
    );
}
