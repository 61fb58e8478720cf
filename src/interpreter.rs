/// The semantic analyzer validates a program before it runs.
///
/// The analyzer walks the syntax tree over its own scope chain and rejects
/// duplicate declarations and references to undeclared variables. Nothing is
/// executed, so a program that fails analysis has no observable effect.
///
/// # Responsibilities
/// - Records every declaration in the current scope.
/// - Resolves every variable reference through the scope chain.
/// - Reports semantic errors with the position of the offending identifier.
pub mod analyzer;
/// The evaluator module executes a validated syntax tree.
///
/// The evaluator walks the tree, computes expression values, applies the
/// assignment coercion rules and stores results in the symbol table. When the
/// program completes it hands back the final value of every declared variable.
///
/// # Responsibilities
/// - Evaluates arithmetic and text concatenation.
/// - Widens and truncates numbers on assignment according to the target type.
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces one token per request:
/// numbers, identifiers, keywords, string literals and punctuation, each with
/// the line and column where it starts. Keywords and identifiers are
/// case-insensitive.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Resolves reserved words and normalizes identifier case.
/// - Reports lexical errors for invalid or unterminated input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser with a single token of
/// lookahead. It consumes tokens from the lexer on demand and constructs the
/// tree described in [`crate::ast`].
///
/// # Responsibilities
/// - Converts tokens into program, declaration, statement and expression nodes.
/// - Enforces operator precedence and left associativity.
/// - Validates the grammar, reporting syntax errors with location info.
pub mod parser;
/// Scoped name-to-value storage shared by the analyzer and the evaluator.
pub mod symbol_table;
/// Token kinds and the token record produced by the lexer.
pub mod token;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and its kind tags.
/// - Provides the defaults of freshly declared variables.
/// - Serializes values for the JSON report.
pub mod value;
