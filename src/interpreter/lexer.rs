use logos::Logos;

use crate::{ast::Command, interpreter::evaluator::Operator};

/// The delimiters a program file is split on: space, tab, carriage return,
/// line feed, vertical tab and form feed.
pub const DELIMITERS: &[char] = &[' ', '\t', '\r', '\n', '\u{0B}', '\u{0C}'];

/// Splits `source` into tokens at every run of `delimiters`.
///
/// Tokens are slices of `source` in left-to-right order. Empty fragments
/// between adjacent delimiters are dropped, and so is any fragment made only
/// of whitespace, which matters when `delimiters` does not cover every kind
/// of whitespace in the text.
///
/// # Example
/// ```
/// use turtle_logo::interpreter::lexer::{DELIMITERS, tokenize};
///
/// assert_eq!(tokenize("break this string up", &[' ']),
///            ["break", "this", "string", "up"]);
/// assert_eq!(tokenize("\tbreak\nthis string\tup\r\n", DELIMITERS),
///            ["break", "this", "string", "up"]);
/// assert!(tokenize(" \n\t ", DELIMITERS).is_empty());
/// ```
#[must_use]
pub fn tokenize<'src>(source: &'src str, delimiters: &[char]) -> Vec<&'src str> {
    source.split(|c: char| delimiters.contains(&c))
          .filter(|fragment| !fragment.trim().is_empty())
          .collect()
}

/// What a single token means.
///
/// Tokens carry no type of their own; the parser asks for a token's lexeme
/// with [`classify`] when it needs to decide what to do with it.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Lexeme {
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `FD`, `LT`, `RT`, `DO` or `SET`.
    #[token("FD", |_| Command::Forward)]
    #[token("LT", |_| Command::Left)]
    #[token("RT", |_| Command::Right)]
    #[token("DO", |_| Command::Do)]
    #[token("SET", |_| Command::Set)]
    Command(Command),
    /// `FROM`
    #[token("FROM")]
    From,
    /// `TO`
    #[token("TO")]
    To,
    /// `:=`
    #[token(":=")]
    Assign,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `+`, `-`, `*`, `/` or `^`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("^", |_| Operator::Pow)]
    Operator(Operator),
    /// Numeric literals such as `20`, `-120`, `2.5`, `.5` or `1e3`.
    #[regex(r"-?[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"-?\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// A variable, `A` to `Z`.
    #[regex("[A-Z]", |lex| lex.slice().chars().next())]
    Variable(char),
    /// A negated variable, `-A` to `-Z`.
    #[regex("-[A-Z]", |lex| lex.slice().chars().nth(1))]
    NegatedVariable(char),
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Classifies a whole token.
///
/// A token has a lexeme only if exactly one lexeme spans all of it, so `FD`
/// is a command but `FDX`, `fd` and `A1` are not anything.
///
/// # Example
/// ```
/// use turtle_logo::{
///     ast::Command,
///     interpreter::lexer::{Lexeme, classify},
/// };
///
/// assert_eq!(classify("FD"), Some(Lexeme::Command(Command::Forward)));
/// assert_eq!(classify("-120"), Some(Lexeme::Number(-120.0)));
/// assert_eq!(classify("-S"), Some(Lexeme::NegatedVariable('S')));
/// assert_eq!(classify("FDX"), None);
/// ```
#[must_use]
pub fn classify(token: &str) -> Option<Lexeme> {
    let mut lexer = Lexeme::lexer(token);
    let lexeme = lexer.next()?.ok()?;
    lexer.next().is_none().then_some(lexeme)
}
