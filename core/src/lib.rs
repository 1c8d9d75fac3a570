//! Core of the tally expression language: a typed expression tree whose
//! nodes are type-checked as they are built, and a tree-walking evaluator
//! that reduces such a tree to an `i64`.
//!
//! The pipeline is `parser` -> `analyzer` -> `evaluator`, wrapped by the
//! [`api`] module for library users.

pub mod analyzer;
pub mod api;
pub mod evaluator;
pub mod parser;
pub mod types;
