mod cases;

test_case! {
    name: arithmetic,
    input: "2 + 3; 2 - 3; 2 * 3; 7 / 2; 7 % 2",
    values: [5, -1, 6, 3, 1],
}

test_case! {
    name: precedence,
    input: "1 + 2 * 3; (1 + 2) * 3; 10 - 2 - 3; 2 * 3 % 4",
    values: [7, 9, 5, 2],
}

test_case! {
    name: unary_binds_tightest,
    input: "-2 * 3; 1 - -1; --1",
    values: [-6, 2, 1],
}

test_case! {
    name: truncating_division,
    input: "-7 / 2; -7 % 2; 7 / -2; 7 % -2",
    values: [-3, -1, -3, 1],
}

test_case! {
    name: wrapping_overflow,
    input: "9223372036854775807 + 1; 9223372036854775807 * 2; -(-9223372036854775807 - 1)",
    values: [i64::MIN, -2, i64::MIN],
}

test_case! {
    name: min_divided_by_minus_one_wraps,
    input: "(-9223372036854775807 - 1) / -1; (-9223372036854775807 - 1) % -1",
    values: [i64::MIN, 0],
}

test_case! {
    name: comparisons,
    input: "1 < 2; 2 > 1; 2 <= 2; 1 >= 2; 3 == 3; 3 != 3",
    values: [1, 1, 1, 0, 1, 0],
}

test_case! {
    name: equality_on_booleans,
    input: "true == true; true != false; (1 < 2) == (2 < 1)",
    values: [1, 1, 0],
}

test_case! {
    name: or_else_keeps_nonzero,
    input: "5 || 7; 0 || 7; false || true; true || false",
    values: [5, 7, 1, 1],
}

test_case! {
    name: or_else_skips_fallback,
    input: "1 || 1 / 0",
    values: [1],
}

test_case! {
    name: logical_precedence,
    input: "true | false & false; true ^ true | true; 1 == 1 & 2 == 2",
    values: [1, 1, 1],
}

test_case! {
    name: comments,
    input: "1 + # one\n 2",
    values: [3],
}

test_case! {
    name: division_by_zero,
    input: "1 + 5 / (2 - 2)",
    error: "R001",
    contains: ["Division by zero", "1 + 5 / (2 - 2)"],
}

test_case! {
    name: remainder_by_zero,
    input: "5 % 0",
    error: "R002",
    contains: ["Remainder by zero"],
}

test_case! {
    name: unknown_operator,
    input: "1 ~ 2",
    error: "P001",
}
