use log::{debug, trace};

use crate::{
    ast::{Command, Instruction, InstructionList},
    error::ParseFailure,
    interpreter::{
        diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Production, Severity},
        evaluator::PolishStack,
        lexer::{Lexeme, classify},
        variables::VariableStore,
    },
};

/// Why a production stopped matching.
///
/// The diagnostics explaining it have already been recorded by the time a
/// `Halt` is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// A required part of a production did not match.
    Syntax,
    /// The program counter could not move past the last token.
    EndOfInput,
}

/// Result type of every production.
///
/// Optional alternatives return `Ok(false)` or `Ok(None)` when they do not
/// apply; `Err` means the parse is unwinding.
pub type ParseResult<T> = Result<T, Halt>;

/// The output of a successful parse.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The desugared instructions, ready for a path builder.
    pub instructions: InstructionList,
    /// Non-fatal diagnostics, such as redundant instructions.
    pub warnings:     Vec<Diagnostic>,
    /// Variable values when parsing finished.
    pub variables:    VariableStore,
}

/// One parse session.
///
/// Owns everything a parse mutates: the program counter, the variables, the
/// POLISH stack, the error list and the instruction list being built. Two
/// sessions never share state, so independent parses may run side by side.
#[derive(Debug)]
pub struct Parser<'src> {
    pub(super) tokens:       Vec<&'src str>,
    pub(super) at:           usize,
    pub(super) variables:    VariableStore,
    pub(super) stack:        PolishStack,
    pub(super) diagnostics:  Diagnostics,
    pub(super) instructions: InstructionList,
}

impl<'src> Parser<'src> {
    /// Creates a session over an already tokenized program.
    #[must_use]
    pub fn new(tokens: Vec<&'src str>) -> Self {
        Self { tokens,
               at: 0,
               variables: VariableStore::new(),
               stack: PolishStack::new(),
               diagnostics: Diagnostics::new(),
               instructions: InstructionList::new() }
    }

    /// Parses the whole program.
    ///
    /// # Errors
    /// Returns a [`ParseFailure`] holding every diagnostic if the program is
    /// empty, does not match the grammar, or ends before its closing brace.
    /// Warnings alone do not fail a parse.
    pub fn parse(mut self) -> Result<Program, ParseFailure> {
        if self.tokens.is_empty() {
            return Err(ParseFailure::empty_program());
        }
        debug!("parsing {} tokens: {:?}", self.tokens.len(), self.tokens);

        let outcome = self.parse_main();
        if outcome.is_ok() && !self.diagnostics.has_errors() {
            debug!("program was validated successfully: {} instructions",
                   self.instructions.len());
            return Ok(Program { instructions: self.instructions,
                                warnings:     self.diagnostics.into_vec(),
                                variables:    self.variables, });
        }
        debug!("parsing failed with {} diagnostics", self.diagnostics.len());
        Err(ParseFailure::new(self.diagnostics.into_vec(), self.instructions))
    }

    /// Parses `<MAIN> ::= "{" <INSTRCTLST>`.
    ///
    /// Tokens after the closing brace are ignored with a warning.
    pub(crate) fn parse_main(&mut self) -> ParseResult<()> {
        if self.lexeme() != Some(Lexeme::LBrace) {
            return self.fail(Production::Main, "Expected to begin program with \"{\".");
        }
        self.advance()?;
        self.parse_instruction_list()?;

        let trailing = self.tokens.len() - self.at - 1;
        if trailing > 0 {
            self.diagnostics.push(Diagnostic::at(&self.tokens,
                                                 self.at + 1,
                                                 Severity::Warning,
                                                 DiagnosticKind::TrailingTokens { count:
                                                                                      trailing }));
        }
        Ok(())
    }

    /// Moves the program counter to the next token.
    ///
    /// # Errors
    /// Fails with [`Halt::EndOfInput`] when the counter is already on the last
    /// token, recording that the program should have ended with `}`.
    pub(crate) fn advance(&mut self) -> ParseResult<()> {
        if self.at + 1 < self.tokens.len() {
            self.at += 1;
            trace!("moved to token {} [{}]", self.at, self.tokens[self.at]);
            Ok(())
        } else {
            self.record(Severity::Fatal, DiagnosticKind::UnexpectedEnd);
            Err(Halt::EndOfInput)
        }
    }

    /// Current program counter.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.at
    }

    /// Puts the program counter back to a position returned by
    /// [`Parser::position`].
    pub(crate) fn seek(&mut self, position: usize) {
        debug_assert!(position < self.tokens.len());
        self.at = position;
    }

    /// The current token.
    #[must_use]
    pub fn token(&self) -> Option<&'src str> {
        self.tokens.get(self.at).copied()
    }

    /// What the current token means, if anything.
    #[must_use]
    pub fn lexeme(&self) -> Option<Lexeme> {
        self.token().and_then(classify)
    }

    #[must_use]
    pub const fn variables(&self) -> &VariableStore {
        &self.variables
    }

    #[must_use]
    pub const fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    #[must_use]
    pub const fn instructions(&self) -> &InstructionList {
        &self.instructions
    }

    /// Records a diagnostic at the current token.
    pub(crate) fn record(&mut self, severity: Severity, kind: DiagnosticKind) {
        self.diagnostics.push(Diagnostic::at(&self.tokens, self.at, severity, kind));
    }

    /// Records a positional syntax error at the current token.
    pub(crate) fn syntax_error(&mut self, message: impl Into<String>) {
        self.record(Severity::Error, DiagnosticKind::Syntax(message.into()));
    }

    /// Records what `production` expected and a syntax error, then unwinds.
    pub(crate) fn fail<T>(&mut self,
                          production: Production,
                          message: impl Into<String>)
                          -> ParseResult<T> {
        self.record(Severity::Error, DiagnosticKind::Expected(production));
        self.syntax_error(message);
        Err(Halt::Syntax)
    }

    /// Appends a movement command to the instruction list.
    ///
    /// Anything other than `FD`, `LT` or `RT` is a defect in the parser and is
    /// recorded as an internal error instead.
    pub(crate) fn emit(&mut self, command: Command, value: f64) {
        match Instruction::from_command(command, value) {
            Some(instruction) => {
                self.instructions.push(instruction);
            },
            None => {
                self.record(Severity::Internal,
                            DiagnosticKind::Internal(format!("{command} cannot be placed on \
                                                              the instruction list.")));
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::{DELIMITERS, tokenize};

    fn session(source: &str) -> Parser<'_> {
        Parser::new(tokenize(source, DELIMITERS))
    }

    #[test]
    fn advance_stops_on_last_token() {
        let mut parser = session("0 1 2 3 4 5 6 7 8 9");
        for _ in 0..9 {
            assert_eq!(parser.advance(), Ok(()));
        }
        assert_eq!(parser.position(), 9);
        assert_eq!(parser.advance(), Err(Halt::EndOfInput));
        assert_eq!(parser.position(), 9);
        assert!(parser.diagnostics()
                      .iter()
                      .any(|d| d.kind == DiagnosticKind::UnexpectedEnd));
    }

    #[test]
    fn new_session_is_blank() {
        let parser = session("{ }");
        assert_eq!(parser.position(), 0);
        assert!(parser.diagnostics().is_empty());
        assert!(parser.instructions().is_empty());
        assert!(parser.variables().iter().all(|(_, v)| v == 0.0));
    }

    #[test]
    fn emit_refuses_loop_and_assignment() {
        let mut parser = session("{ }");
        parser.emit(Command::Forward, 1.0);
        parser.emit(Command::Right, 90.0);
        parser.emit(Command::Do, 1.0);
        parser.emit(Command::Set, 1.0);
        assert_eq!(parser.instructions().len(), 2);
        assert_eq!(parser.diagnostics()
                         .iter()
                         .filter(|d| d.severity == Severity::Internal)
                         .count(),
                   2);
    }

    #[test]
    fn program_must_open_with_brace() {
        let failure = session("FD 10 }").parse().unwrap_err();
        let text = failure.to_string();
        assert!(text.contains("Expected: <MAIN>"), "{text}");
        assert!(text.contains("begin program"), "{text}");
    }

    #[test]
    fn trailing_tokens_are_a_warning() {
        let program = session("{ FD 1 } FD 2").parse().unwrap();
        assert_eq!(program.instructions.len(), 1);
        assert!(program.warnings
                       .iter()
                       .any(|d| d.kind == DiagnosticKind::TrailingTokens { count: 2 }));
    }

    #[test]
    fn empty_token_list_is_fatal() {
        let failure = Parser::new(Vec::new()).parse().unwrap_err();
        assert!(failure.is_empty_program());
    }

    #[test]
    fn sessions_are_independent() {
        let first = session("{ SET A := 5 ; FD A }");
        let second = session("{ FD A }");
        let first = first.parse().unwrap();
        let second = second.parse().unwrap();
        assert_eq!(first.instructions.as_slice(), [Instruction::Forward(5.0)]);
        assert_eq!(second.instructions.as_slice(), [Instruction::Forward(0.0)]);
    }
}
