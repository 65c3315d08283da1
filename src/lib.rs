//! # pseudocod
//!
//! pseudocod is an interpreter for the Romanian classroom pseudocode used in
//! algorithm exercises (`daca/atunci/altfel/sf`, `pentru`, `cat timp`,
//! `repeta/pana cand`, `citeste/scrie`). It normalizes, parses, and executes
//! one source text against standard input and output.

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
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        io::Io,
        lexer::{LexerExtras, Token},
        parser::core::parse_program,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Stmt` and `Expr` enums and related types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator and the printer.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Renders expressions back to source form for the printer.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and
/// source lines for debugging and user feedback.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, the environment, and the I/O port to provide a complete
/// runtime for pseudocode execution.
pub mod interpreter;
/// Normalizes raw source text before lexing.
///
/// Folds the Unicode forms found in textbooks and scans (`≤`, `←`, smart
/// quotes, indentation bars, Romanian diacritics) into the plain forms the
/// lexer recognizes.
pub mod linter;
/// Renders a parsed program back to canonical pseudocode source.
pub mod printer;

/// Parses a source text into a program.
///
/// The source is normalized first, then lexed and parsed. No statement is
/// executed; lex and parse errors are therefore always reported before any
/// output is produced.
///
/// # Errors
/// Returns a [`ParseError`] when the source contains an unrecognized
/// character or does not match the grammar.
///
/// # Examples
/// ```
/// let program = pseudocod::parse("scrie 1 + 2").unwrap();
/// assert_eq!(program.statements.len(), 1);
///
/// assert!(pseudocod::parse("daca 1 atunci scrie 1").is_err()); // missing 'sf'
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let normalized = linter::normalize(source);

    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(&normalized, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            return Err(ParseError::UnrecognizedCharacter { character: lexer.slice().to_string(),
                                                           line:      lexer.extras.line, });
        }
    }

    let mut iter = tokens.iter().peekable();
    parse_program(&mut iter)
}

/// Parses and executes a source text against the given I/O port.
///
/// This is the main entry point of the crate. The source is normalized,
/// lexed, and parsed in full before execution starts; a program that fails
/// to parse produces no output. Execution then proceeds statement by
/// statement until the program ends or the first runtime error aborts it.
///
/// # Errors
/// Returns an error if parsing fails or if any runtime error occurs.
///
/// # Examples
/// ```
/// use pseudocod::interpreter::io::BufferedIo;
///
/// let mut io = BufferedIo::new("");
/// pseudocod::run("x <- 3; y <- 4\nscrie x + y", &mut io).unwrap();
/// assert_eq!(io.output(), "7\n");
/// ```
pub fn run(source: &str, io: &mut dyn Io) -> Result<(), Box<dyn std::error::Error>> {
    let program = parse(source)?;

    let mut context = Context::new(io);
    context.run(&program)?;

    Ok(())
}
