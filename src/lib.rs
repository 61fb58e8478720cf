//! # minipas
//!
//! minipas is an interpreter for a small Pascal-like teaching language written
//! in Rust. A program declares typed variables and runs a block of
//! assignments; the interpreter reports the final value of every variable.
//!
//! Source text passes through four phases, each of which aborts on the first
//! error it detects:
//!
//! 1. the lexer turns characters into positioned tokens,
//! 2. the parser builds a syntax tree,
//! 3. the semantic analyzer checks declarations and variable references,
//! 4. the evaluator executes the tree.
//!
//! ## Example
//! ```
//! use minipas::{interpreter::value::core::Value, run};
//!
//! let memory = run("PROGRAM Demo;
//!                   VAR x: INTEGER; greeting: STRING;
//!                   BEGIN
//!                       x := 2 + 3 * 4;
//!                       greeting := 'Hello, ' + 'World'
//!                   END.").unwrap();
//!
//! assert_eq!(memory["X"], Value::Integer(14));
//! assert_eq!(memory["GREETING"], Value::Text("Hello, World".to_string()));
//! ```

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

use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    ast::Program,
    error::Error,
    interpreter::{
        analyzer::SemanticAnalyzer, evaluator::core::Interpreter, lexer::Lexer,
        parser::core::Parser, value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the node types produced by the parser and the
/// `Visitor` trait through which later phases walk them. Every node keeps the
/// token it was built from, so errors can point back into the source.
///
/// # Responsibilities
/// - Defines program, declaration, statement and expression nodes.
/// - Attaches source tokens to nodes for error reporting.
/// - Provides double dispatch for tree traversals.
pub mod ast;
/// Provides unified error types for every phase.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// semantic analysis or evaluation. Each error carries the line and column of
/// the construct that caused it.
///
/// # Responsibilities
/// - Defines one error enum per phase.
/// - Collapses them into the single [`Error`](error::Error) returned by
///   [`run`].
/// - Supports integration with `std::error::Error` and `Display`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together the lexer, parser, semantic analyzer, evaluator
/// and runtime values.
pub mod interpreter;
/// Rendering of the final variable mapping.
///
/// Produces the JSON report and the boxed text table printed by the command
/// line tool.
pub mod output;
/// General utilities for numeric conversion.
pub mod util;

/// Parses `source` into a syntax tree without analyzing or running it.
///
/// # Errors
/// Returns `Error::Lex` or `Error::Syntax` for the first problem found.
///
/// # Examples
/// ```
/// use minipas::parse;
///
/// let program = parse("program p; begin end.").unwrap();
/// assert_eq!(program.name, "P");
///
/// // Missing final dot.
/// assert!(parse("PROGRAM P; BEGIN END").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, Error> {
    let parser = Parser::new(Lexer::new(source))?;
    parser.parse()
}

/// Runs `source` through every phase and returns the final value of each
/// declared variable, ordered by name.
///
/// Semantic analysis completes before any statement executes, so a program
/// that references an undeclared variable fails without performing any of
/// its assignments, even those that come earlier in the source.
///
/// # Errors
/// Returns the first error of whichever phase fails.
///
/// # Examples
/// ```
/// use minipas::{error::Error, run};
///
/// let memory = run("PROGRAM P; VAR r: REAL; BEGIN r := 7 / 2 END.").unwrap();
/// assert_eq!(memory["R"].to_string(), "3.5");
///
/// // Rejected before the division is attempted.
/// let error = run("PROGRAM P; VAR x: REAL; BEGIN x := 1 / 0; x := y END.").unwrap_err();
/// assert!(matches!(error, Error::Semantic(_)));
/// ```
pub fn run(source: &str) -> Result<BTreeMap<String, Value>, Error> {
    let program = parse(source)?;
    debug!(program = %program.name, "parsed");

    SemanticAnalyzer::new().analyze(&program)?;

    let memory = Interpreter::new().interpret(&program)?;
    debug!(program = %program.name, variables = memory.len(), "finished");

    Ok(memory)
}
