#![allow(dead_code)]

//! Shared harness for the integration tests.
//!
//! Each test file declares `mod cases;` and then a list of `test_case!`s.
//! A case compiles its `input` as one line through the public engine and
//! checks one of:
//!
//! - `values`: the result of every statement, in order;
//! - `ty`: the result type of a single statement;
//! - `error`: the diagnostic code, plus fragments the rendered report must contain.

use tally::{CompiledExpression, Engine, EngineOptions, Error, Type, render_error_to_string_no_color};

pub fn compile(input: &str) -> Result<Vec<CompiledExpression>, Error> {
    Engine::new(EngineOptions::default()).compile_line(input)
}

pub fn run(input: &str) -> Result<Vec<i64>, Error> {
    compile(input)?.iter().map(|expr| expr.run()).collect()
}

pub fn check_values(input: &str, expected: &[i64]) {
    match run(input) {
        Ok(values) => pretty_assertions::assert_eq!(values, expected, "input: {:?}", input),
        Err(err) => panic!(
            "Expected {:?} for {:?}, got:\n{}",
            expected,
            input,
            render_error_to_string_no_color(&err)
        ),
    }
}

pub fn check_type(input: &str, expected: Type) {
    let exprs = compile(input)
        .unwrap_or_else(|err| panic!("{}", render_error_to_string_no_color(&err)));
    assert_eq!(exprs.len(), 1, "Expected a single statement in {:?}", input);
    assert_eq!(exprs[0].return_type(), expected, "input: {:?}", input);
}

pub fn check_error(input: &str, code: &str, fragments: &[&str]) {
    let err = match run(input) {
        Ok(values) => panic!("Expected error {} for {:?}, got {:?}", code, input, values),
        Err(err) => err,
    };
    let codes: Vec<_> = err
        .diagnostics()
        .iter()
        .filter_map(|d| d.code.as_deref())
        .collect();
    assert_eq!(codes, vec![code], "input: {:?}", input);

    let rendered = render_error_to_string_no_color(&err);
    for fragment in fragments {
        assert!(
            rendered.contains(fragment),
            "Rendered error for {:?} lacks {:?}:\n{}",
            input,
            fragment,
            rendered
        );
    }
}

#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        values: [$($value:expr),* $(,)?] $(,)?
    ) => {
        #[test]
        fn $name() {
            $crate::cases::check_values($input, &[$($value),*]);
        }
    };
    (
        name: $name:ident,
        input: $input:expr,
        ty: $ty:ident,
        values: [$($value:expr),* $(,)?] $(,)?
    ) => {
        #[test]
        fn $name() {
            $crate::cases::check_type($input, tally::Type::$ty);
            $crate::cases::check_values($input, &[$($value),*]);
        }
    };
    (
        name: $name:ident,
        input: $input:expr,
        error: $code:literal $(, contains: [$($fragment:expr),* $(,)?])? $(,)?
    ) => {
        #[test]
        fn $name() {
            $crate::cases::check_error($input, $code, &[$($($fragment),*)?]);
        }
    };
}
