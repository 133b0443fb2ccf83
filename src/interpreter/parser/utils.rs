use crate::interpreter::{
    diagnostics::Production,
    lexer::Lexeme,
    parser::core::{ParseResult, Parser},
    variables::{Variable, VariableStore},
};

/// A variable as it appears in an operand, possibly negated (`-S`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarRef {
    pub variable: Variable,
    pub negated:  bool,
}

impl VarRef {
    /// The value this reference reads from `store`.
    #[must_use]
    pub const fn value(self, store: &VariableStore) -> f64 {
        let value = store.get(self.variable);
        if self.negated { -value } else { value }
    }
}

impl Parser<'_> {
    /// Parses `<VAR>`: a single uppercase letter, optionally fused to a
    /// leading `-`.
    ///
    /// Returns `Ok(None)` without consuming anything if the current token is
    /// not a variable.
    pub(crate) fn parse_var(&mut self) -> ParseResult<Option<VarRef>> {
        let (name, negated) = match self.lexeme() {
            Some(Lexeme::Variable(name)) => (name, false),
            Some(Lexeme::NegatedVariable(name)) => (name, true),
            _ => return Ok(None),
        };
        let Some(variable) = Variable::new(name) else {
            return Ok(None);
        };
        self.advance()?;
        Ok(Some(VarRef { variable,
                         negated }))
    }

    /// Parses `<VARNUM>`: a numeric literal or a variable, either of them
    /// optionally negated.
    ///
    /// Variables that were never bound read as `0`. Returns `Ok(None)`
    /// without consuming anything if the current token is neither.
    pub(crate) fn parse_varnum(&mut self) -> ParseResult<Option<f64>> {
        if let Some(Lexeme::Number(value)) = self.lexeme() {
            self.advance()?;
            return Ok(Some(value));
        }
        Ok(self.parse_var()?.map(|var| var.value(&self.variables)))
    }

    /// Parses a `<VARNUM>` that `production` cannot do without.
    pub(crate) fn require_varnum(&mut self,
                                 production: Production,
                                 message: &str)
                                 -> ParseResult<f64> {
        match self.parse_varnum()? {
            Some(value) => Ok(value),
            None => self.fail(production, message),
        }
    }

    /// Parses the variable a `DO` loop counts with or a `SET` assigns to.
    ///
    /// Negated variables read fine but cannot be written.
    pub(crate) fn parse_target_var(&mut self, production: Production) -> ParseResult<Variable> {
        match self.parse_var()? {
            Some(VarRef { variable,
                          negated: false, }) => Ok(variable),
            Some(VarRef { variable,
                          negated: true, }) => {
                self.fail(production, format!("Cannot assign to the negated variable -{variable}."))
            },
            None => self.fail(production, "Could not read <VAR>."),
        }
    }

    /// Consumes `expected` or fails `production` with `message`.
    pub(crate) fn expect(&mut self,
                         expected: Lexeme,
                         production: Production,
                         message: &str)
                         -> ParseResult<()> {
        if self.lexeme() == Some(expected) {
            self.advance()
        } else {
            self.fail(production, message)
        }
    }
}
