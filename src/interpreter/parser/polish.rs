use crate::interpreter::{
    diagnostics::Production,
    evaluator::Operator,
    lexer::Lexeme,
    parser::core::{ParseResult, Parser},
};

impl Parser<'_> {
    /// Parses and evaluates `<POLISH> ::= <OP> <POLISH> | <VARNUM> <POLISH> |
    /// ";"`.
    ///
    /// Operands are pushed onto the session's calculator stack as they are
    /// read, operators are applied immediately, and `;` ends the expression.
    /// The caller clears the stack beforehand.
    ///
    /// # Returns
    /// The single value left on the stack.
    ///
    /// # Errors
    /// Fails the production if a token is neither an operand, an operator nor
    /// `;`, if an operator finds fewer than two values, or if `;` leaves
    /// anything other than one value on the stack.
    pub(crate) fn parse_polish(&mut self) -> ParseResult<f64> {
        loop {
            if self.lexeme() == Some(Lexeme::Semicolon) {
                return match self.stack.finish() {
                    Ok(value) => {
                        self.advance()?;
                        Ok(value)
                    },
                    Err(e) => self.fail(Production::Polish, e.to_string()),
                };
            }

            if let Some(value) = self.parse_varnum()? {
                self.stack.push(value);
                continue;
            }

            if let Some(op) = self.parse_op() {
                if let Err(e) = self.stack.pop_to_operator(op) {
                    return self.fail(Production::Op, e.to_string());
                }
                self.advance()?;
                continue;
            }

            return self.fail(Production::Polish, "Could not read <VARNUM> or <OP>.");
        }
    }

    /// Parses `<OP> ::= "+" | "-" | "*" | "/" | "^"`.
    ///
    /// Only looks at the current token; the caller advances once the operator
    /// has been applied, so an error cites the operator itself.
    pub(crate) fn parse_op(&self) -> Option<Operator> {
        match self.lexeme() {
            Some(Lexeme::Operator(op)) => Some(op),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::{
        diagnostics::DiagnosticKind,
        lexer::{DELIMITERS, tokenize},
        parser::core::{Halt, Parser},
        variables::Variable,
    };

    const EPSILON: f64 = 0.001;

    fn evaluate(source: &str) -> (Result<f64, Halt>, Parser<'_>) {
        let mut parser = Parser::new(tokenize(source, DELIMITERS));
        let result = parser.parse_polish();
        (result, parser)
    }

    #[test]
    fn postfix_arithmetic() {
        let cases = [("3 4 + ; }", 7.0),
                     ("10 4 - ; }", 6.0),
                     ("2 3 4 * + ; }", 14.0),
                     ("2 3 + 4 * ; }", 20.0),
                     ("1 4 / ; }", 0.25),
                     ("2 8 ^ ; }", 256.0),
                     ("5 ; }", 5.0),
                     ("-5 -2 * ; }", 10.0)];
        for (source, expected) in cases {
            let (result, _) = evaluate(source);
            let value = result.unwrap_or_else(|_| panic!("{source} failed"));
            assert!((value - expected).abs() < EPSILON, "{source} gave {value}");
        }
    }

    #[test]
    fn variables_are_read_during_evaluation() {
        let mut parser = Parser::new(tokenize("A -A * ; }", DELIMITERS));
        parser.variables.set(Variable::new('A').unwrap(), 3.0);
        assert_eq!(parser.parse_polish(), Ok(-9.0));
    }

    #[test]
    fn leftover_values_are_malformed() {
        let (result, parser) = evaluate("1 2 ; }");
        assert_eq!(result, Err(Halt::Syntax));
        assert!(parser.diagnostics().has_errors());
    }

    #[test]
    fn operator_needs_two_values() {
        let (result, parser) = evaluate("1 + ; }");
        assert_eq!(result, Err(Halt::Syntax));
        assert_eq!(parser.position(), 1);
    }

    #[test]
    fn empty_expression_is_malformed() {
        let (result, _) = evaluate("; }");
        assert_eq!(result, Err(Halt::Syntax));
    }

    #[test]
    fn foreign_token_is_reported() {
        let (result, parser) = evaluate("1 FD ; }");
        assert_eq!(result, Err(Halt::Syntax));
        assert!(parser.diagnostics()
                      .iter()
                      .any(|d| matches!(&d.kind, DiagnosticKind::Syntax(m) if m.contains("<OP>"))));
    }

    #[test]
    fn missing_semicolon_runs_out_of_tokens() {
        let (result, _) = evaluate("1 2 +");
        assert_eq!(result, Err(Halt::EndOfInput));
    }
}
