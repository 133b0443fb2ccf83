use crate::interpreter::evaluator::Operator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors the POLISH calculator can raise.
pub enum EvalError {
    /// An operator was applied with fewer than two values on the stack.
    StackUnderflow {
        /// The operator that was applied.
        operator: Operator,
        /// How many values the stack held.
        depth:    usize,
    },
    /// An expression was terminated with `;` while the stack did not hold
    /// exactly one value.
    MalformedExpression {
        /// How many values the stack held.
        depth: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StackUnderflow { operator, depth } => write!(f,
                                                               "Operator '{operator}' needs two values but the stack holds {depth}."),
            Self::MalformedExpression { depth } => write!(f,
                                                          "Polish expression incorrectly formatted: {depth} values left on the stack, expected 1."),
        }
    }
}

impl std::error::Error for EvalError {}
