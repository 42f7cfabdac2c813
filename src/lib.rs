//! # reckon
//!
//! reckon evaluates arithmetic expressions that have already been parsed into
//! a tree, such as `3 + 4 * sin(PI / 2)`. It resolves function, constant and
//! variable names against a mutable [`context::Context`] and reports failures
//! as typed [`error::EvalError`]s.
//!
//! Parsing expression text is left to an external grammar; trees are built
//! with [`ast::AstBuilder`] or loaded from the parser's JSON output with
//! [`ast::Ast::from_json`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the tree the evaluator consumes: node kinds, token
/// payloads, and the arena that owns all nodes and records parent links.
///
/// # Responsibilities
/// - Defines the closed set of node kinds and token classes.
/// - Stores nodes in an arena addressed by [`ast::NodeId`], with non-owning
///   parent links.
/// - Builds trees programmatically and decodes them from the parser's JSON
///   output.
pub mod ast;
/// Names available to an expression.
///
/// This module defines the symbol context: the function, constant and variable
/// tables an evaluation resolves names against, and the default library loaded
/// into a fresh context.
///
/// # Responsibilities
/// - Stores functions with their accepted arities, constants, and variable
///   suppliers.
/// - Provides the default function library and constant table.
/// - Resolves host-environment constants.
pub mod context;
/// Provides unified error types for loading and evaluation.
///
/// # Responsibilities
/// - Defines the evaluation error taxonomy.
/// - Carries the offending name or operand for every failure.
/// - Separates tree decoding failures from evaluation failures.
pub mod error;
/// Walks trees and computes their value.
///
/// # Responsibilities
/// - Implements one evaluation rule per node kind.
/// - Corrects the right-nesting of `+`/`-` chains produced by the grammar.
/// - Enforces the depth limit and cooperative cancellation.
pub mod evaluator;
/// General utilities for number literals and safe numeric conversion.
pub mod util;

use crate::{ast::Ast, context::Context, error::EvalResult, evaluator::Evaluator};

/// Evaluates a tree against a context with the default options.
///
/// # Errors
/// Returns the first error raised while walking the tree, such as an unknown
/// function or a division by zero.
///
/// # Examples
/// ```
/// use reckon::{ast::Ast, context::Context, error::EvalError, evaluate};
///
/// // 3 + 4 * 2
/// let ast = Ast::from_json(
///     r##"{ "id": "#addition", "children": [
///         { "id": "token", "token": "number", "value": "3" },
///         { "id": "#multiplication", "children": [
///             { "id": "token", "token": "number", "value": "4" },
///             { "id": "token", "token": "number", "value": "2" }
///         ] }
///     ] }"##,
/// ).unwrap();
///
/// let context = Context::new();
/// assert_eq!(evaluate(&ast, &context), Ok(11.0));
///
/// // 1 / 0
/// let ast = Ast::from_json(
///     r##"{ "id": "#division", "children": [
///         { "id": "token", "token": "number", "value": "1" },
///         { "id": "token", "token": "number", "value": "0" }
///     ] }"##,
/// ).unwrap();
///
/// assert_eq!(evaluate(&ast, &context),
///            Err(EvalError::DivisionByZero { numerator: 1.0 }));
/// ```
pub fn evaluate(ast: &Ast, context: &Context) -> EvalResult<f64> {
    Evaluator::new(context).evaluate(ast)
}
