/// The error reporter.
///
/// Structured diagnostics keyed to a token position, the grammar productions
/// they refer to, and the append-only error list a parse session fills.
///
/// # Responsibilities
/// - Captures the failing token and the one before it.
/// - Separates warnings, which leave a parse successful, from errors.
/// - Formats messages only when they are displayed.
pub mod diagnostics;
/// The POLISH calculator.
///
/// A LIFO stack of floats with the five binary operators of the language.
/// The parser evaluates `SET` expressions on it while reading them.
pub mod evaluator;
/// The tokenizer and lexeme classification.
///
/// # Responsibilities
/// - Splits program text into whitespace-delimited tokens.
/// - Tells the parser what a token means when it asks.
pub mod lexer;
/// The recursive-descent parser.
///
/// Walks the token list with a program counter, evaluating expressions and
/// unrolling loops as it goes, and emits the desugared instruction list.
///
/// # Responsibilities
/// - Implements every production of the grammar.
/// - Records diagnostics instead of stopping at the first problem.
/// - Owns all per-parse state in an explicit session value.
pub mod parser;
/// The 26 single-letter variables.
pub mod variables;
