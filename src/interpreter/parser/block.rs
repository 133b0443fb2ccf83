use log::debug;

use crate::{
    ast::Command,
    interpreter::{
        diagnostics::{DiagnosticKind, Production, Severity},
        lexer::Lexeme,
        parser::core::{Halt, ParseResult, Parser},
    },
    util::num::{i64_to_f64_checked, truncate_to_i64},
};

impl Parser<'_> {
    /// Parses `<INSTRCTLST> ::= <INSTRUCTION> <INSTRCTLST> | "}"`.
    ///
    /// Instructions are parsed until the current token is `}`. The closing
    /// brace is left for the caller: `<MAIN>` ends on it and `DO` steps over
    /// it once its loop is done.
    ///
    /// # Errors
    /// A token that starts no instruction, or an instruction that fails,
    /// records that an instruction or `}` was expected. Running out of tokens
    /// unwinds without further diagnostics.
    pub(crate) fn parse_instruction_list(&mut self) -> ParseResult<()> {
        while self.lexeme() != Some(Lexeme::RBrace) {
            match self.parse_instruction() {
                Ok(true) => {},
                Ok(false) => {
                    self.record(Severity::Error, DiagnosticKind::Expected(Production::Instruction));
                    return self.fail(Production::InstructionList,
                                     "Expected to read an instruction or a \"}\".");
                },
                Err(Halt::Syntax) => {
                    self.syntax_error("Expected to read an instruction or a \"}\".");
                    return Err(Halt::Syntax);
                },
                Err(Halt::EndOfInput) => return Err(Halt::EndOfInput),
            }
        }
        Ok(())
    }

    /// Parses `<DO> ::= "DO" <VAR> "FROM" <VARNUM> "TO" <VARNUM> "{"
    /// <INSTRCTLST>` and unrolls the loop.
    ///
    /// The counter starts at `FROM` truncated toward zero and steps by one
    /// while it is not greater than `TO`. Before every pass the loop variable
    /// is bound to the counter and the program counter is put back to the
    /// start of the block, so the block is parsed once per pass. A loop that
    /// runs zero times still checks its block once, keeping none of its
    /// instructions or assignments.
    pub(crate) fn parse_do(&mut self) -> ParseResult<bool> {
        if self.lexeme() != Some(Lexeme::Command(Command::Do)) {
            return Ok(false);
        }
        self.advance()?;
        let variable = self.parse_target_var(Production::Do)?;
        self.expect(Lexeme::From, Production::Do, "Could not read \"FROM\".")?;
        let from = self.require_varnum(Production::Do, "Could not read 1st <VARNUM>.")?;
        self.expect(Lexeme::To, Production::Do, "Could not read \"TO\".")?;
        let to = self.require_varnum(Production::Do, "Could not read 2nd <VARNUM>.")?;
        self.expect(Lexeme::LBrace, Production::Do, "Could not read \"{\".")?;

        let first = self.loop_bound(from, "The FROM bound of DO")?;
        let last = self.loop_bound(to.floor(), "The TO bound of DO")?;
        let body = self.position();
        debug!("DO {variable} FROM {first} TO {last}, block at token {body}");

        if first > last {
            self.check_block(body)?;
        } else {
            for counter in first..=last {
                let value = i64_to_f64_checked(counter, Halt::Syntax)?;
                self.variables.set(variable, value);
                self.seek(body);
                self.parse_instruction_list()?;
            }
        }

        // Step over the block's closing brace.
        self.advance()?;
        Ok(true)
    }

    /// Converts a `DO` bound to the integer the loop counter starts or stops
    /// at.
    fn loop_bound(&mut self, value: f64, context: &str) -> ParseResult<i64> {
        if let Ok(bound) = truncate_to_i64(value, ()) {
            return Ok(bound);
        }
        self.record(Severity::Error, DiagnosticKind::Expected(Production::Do));
        self.record(Severity::Error,
                    DiagnosticKind::NonFinite { context: context.to_string(),
                                                value });
        Err(Halt::Syntax)
    }

    /// Parses the block at `body` without keeping its effects.
    ///
    /// Diagnostics are kept, so a mistake in a block that never runs is
    /// still reported.
    fn check_block(&mut self, body: usize) -> ParseResult<()> {
        let variables = self.variables.clone();
        let emitted = self.instructions.len();
        self.seek(body);
        let outcome = self.parse_instruction_list();
        self.variables = variables;
        self.instructions.truncate(emitted);
        outcome
    }
}
