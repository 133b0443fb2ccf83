//! # turtle-logo
//!
//! turtle-logo is an interpreter for a small Logo-like turtle-graphics
//! language written in Rust. It validates a program against the grammar,
//! evaluates its postfix arithmetic and unrolls its loops while parsing, and
//! turns the resulting flat instruction list into the path a turtle walks.

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

use log::trace;

use crate::{
    error::ParseFailure,
    interpreter::{
        lexer::{DELIMITERS, tokenize},
        parser::core::Parser,
    },
    turtle::{path::PointPath, point::Point2},
};

/// Defines the desugared program.
///
/// This module declares the command keywords and the flat instruction list a
/// successful parse produces. Loops and variables are gone by this point:
/// every instruction carries a concrete number.
pub mod ast;
/// Provides unified error types for parsing, evaluation and drawing.
///
/// # Responsibilities
/// - Collects the diagnostics of a failed parse into one error value.
/// - Describes POLISH calculator failures.
/// - Reports view configurations that cannot be drawn.
pub mod error;
/// Turns source text into an instruction list.
///
/// This module ties together tokenizing, lexeme classification, the
/// recursive-descent parser, the POLISH calculator, the variable store and
/// diagnostics.
///
/// # Responsibilities
/// - Splits source text into tokens.
/// - Validates the token list against the grammar.
/// - Evaluates expressions and unrolls loops while validating.
pub mod interpreter;
/// Draws paths as SVG documents.
pub mod render;
/// Turtles and the paths they walk.
///
/// # Responsibilities
/// - Keeps the position and heading of planar and spatial turtles.
/// - Replays an instruction list and samples the turtle's positions.
pub mod turtle;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64`, `usize`, and `f64` without silent data
///   loss.
pub mod util;
/// Fits paths into a window.
///
/// Computes the scale and offset that centre a path in a window and maps path
/// coordinates to screen coordinates, with zoom and rotation steps.
pub mod view;

pub use interpreter::parser::core::Program;
pub use turtle::path::{build_fan, build_path, build_path_3d};

/// Parses a program using the default whitespace delimiters.
///
/// # Parameters
/// - `source`: The program text.
///
/// # Returns
/// The validated [`Program`] with its instruction list and any warnings.
///
/// # Errors
/// Returns a [`ParseFailure`] if the source holds no tokens or does not
/// match the grammar. The failure lists every diagnostic.
///
/// # Example
/// ```
/// use turtle_logo::parse;
///
/// let program = parse("{ SET A := 3 4 + ; FD A }").unwrap();
/// assert_eq!(program.instructions.len(), 1);
///
/// assert!(parse("{ FD }").is_err());
/// assert!(parse("   ").unwrap_err().is_empty_program());
/// ```
pub fn parse(source: &str) -> Result<Program, ParseFailure> {
    parse_with_delimiters(source, DELIMITERS)
}

/// Parses a program, splitting tokens on any of `delimiters`.
///
/// # Errors
/// Same as [`parse`].
pub fn parse_with_delimiters(source: &str, delimiters: &[char]) -> Result<Program, ParseFailure> {
    let tokens = tokenize(source, delimiters);
    trace!("tokens: {tokens:?}");
    if tokens.is_empty() {
        return Err(ParseFailure::empty_program());
    }
    Parser::new(tokens).parse()
}

/// Parses a program and walks it with a single planar turtle.
///
/// # Errors
/// Returns the [`ParseFailure`] if the program does not parse.
///
/// # Example
/// ```
/// use turtle_logo::get_path;
///
/// let path = get_path("{ DO A FROM 1 TO 4 { FD 10 RT 90 } }").unwrap();
/// assert_eq!(path.len(), 5);
/// assert!(path.first().unwrap().distance_max(path.last().unwrap()) < 0.001);
/// ```
pub fn get_path(source: &str) -> Result<PointPath<Point2>, ParseFailure> {
    let program = parse(source)?;
    let path = build_path(&program.instructions);
    trace!("path has {} points", path.len());
    Ok(path)
}
