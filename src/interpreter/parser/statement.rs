use crate::{
    ast::Command,
    interpreter::{
        diagnostics::{DiagnosticKind, Production, Severity},
        lexer::Lexeme,
        parser::core::{Halt, ParseResult, Parser},
    },
};

/// One alternative of `<INSTRUCTION>`.
type Alternative<'src> = fn(&mut Parser<'src>) -> ParseResult<bool>;

impl<'src> Parser<'src> {
    /// Parses `<INSTRUCTION> ::= <FD> | <LT> | <RT> | <DO> | <SET>`.
    ///
    /// Alternatives are tried in that order. An alternative that does not
    /// apply returns `Ok(false)` and the program counter is put back before
    /// the next one is tried, so only the caller reports an instruction that
    /// matched nothing.
    pub(crate) fn parse_instruction(&mut self) -> ParseResult<bool> {
        let alternatives: [Alternative<'src>; 5] = [Self::parse_forward,
                                                    Self::parse_left,
                                                    Self::parse_right,
                                                    Self::parse_do,
                                                    Self::parse_set];
        for alternative in alternatives {
            let start = self.position();
            if alternative(self)? {
                return Ok(true);
            }
            self.seek(start);
        }
        Ok(false)
    }

    /// `<FD> ::= "FD" <VARNUM>`
    pub(crate) fn parse_forward(&mut self) -> ParseResult<bool> {
        self.parse_movement(Command::Forward)
    }

    /// `<LT> ::= "LT" <VARNUM>`
    pub(crate) fn parse_left(&mut self) -> ParseResult<bool> {
        self.parse_movement(Command::Left)
    }

    /// `<RT> ::= "RT" <VARNUM>`
    pub(crate) fn parse_right(&mut self) -> ParseResult<bool> {
        self.parse_movement(Command::Right)
    }

    /// Parses a movement command and emits its instruction.
    ///
    /// An operand of zero is legal but redundant: a warning is recorded and
    /// the instruction is still emitted. A non-finite operand is an error.
    fn parse_movement(&mut self, command: Command) -> ParseResult<bool> {
        if self.lexeme() != Some(Lexeme::Command(command)) {
            return Ok(false);
        }
        let production = Production::for_command(command);
        self.advance()?;
        let value = self.require_varnum(production, "Could not read <VARNUM>.")?;

        if !value.is_finite() {
            self.record(Severity::Error, DiagnosticKind::Expected(production));
            self.record(Severity::Error,
                        DiagnosticKind::NonFinite { context: format!("The operand of {command}"),
                                                    value });
            return Err(Halt::Syntax);
        }
        if value == 0.0 {
            self.record(Severity::Warning, DiagnosticKind::Redundant(command));
        }
        self.emit(command, value);
        Ok(true)
    }

    /// Parses `<SET> ::= "SET" <VAR> ":=" <POLISH>` and binds the variable.
    ///
    /// The calculator stack is cleared first. A result that is infinite or
    /// NaN is still bound, with a warning.
    pub(crate) fn parse_set(&mut self) -> ParseResult<bool> {
        if self.lexeme() != Some(Lexeme::Command(Command::Set)) {
            return Ok(false);
        }
        self.advance()?;
        let variable = self.parse_target_var(Production::Set)?;
        self.expect(Lexeme::Assign, Production::Set, "Could not read \":=\".")?;

        self.stack.clear();
        let value = self.parse_polish()?;
        if !value.is_finite() {
            self.record(Severity::Warning,
                        DiagnosticKind::NonFinite { context: format!("SET {variable}"),
                                                    value });
        }
        self.variables.set(variable, value);
        Ok(true)
    }
}
