use std::fmt;

use log::trace;

use crate::error::EvalError;

/// Result type used by the POLISH calculator.
pub type EvalResult<T> = Result<T, EvalError>;

/// A binary operator of a POLISH expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    /// Applies the operator to two operands.
    ///
    /// Plain IEEE arithmetic: dividing by zero gives an infinity or NaN, which
    /// the caller is free to inspect.
    ///
    /// # Example
    /// ```
    /// use turtle_logo::interpreter::evaluator::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(3.0, 4.0), -1.0);
    /// assert_eq!(Operator::Pow.apply(2.0, 10.0), 1024.0);
    /// assert!(Operator::Div.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{symbol}")
    }
}

/// The LIFO value stack of the POLISH calculator.
///
/// Lives only while one expression is evaluated: the parser clears it before
/// every `SET`. A well-formed expression leaves exactly one value behind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolishStack {
    values: Vec<f64>,
}

impl PolishStack {
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Pushes an operand.
    pub fn push(&mut self, value: f64) {
        trace!("polish push {value}");
        self.values.push(value);
    }

    /// Pops the top two values, applies `op`, and pushes the result.
    ///
    /// The topmost value is the right-hand operand. On success the stack is
    /// one value shorter.
    ///
    /// # Errors
    /// Returns [`EvalError::StackUnderflow`] if fewer than two values are on
    /// the stack; the stack is left untouched.
    ///
    /// # Example
    /// ```
    /// use turtle_logo::interpreter::evaluator::{Operator, PolishStack};
    ///
    /// let mut stack = PolishStack::new();
    /// stack.push(3.0);
    /// stack.push(4.0);
    /// stack.pop_to_operator(Operator::Add).unwrap();
    /// assert_eq!(stack.finish(), Ok(7.0));
    /// ```
    pub fn pop_to_operator(&mut self, op: Operator) -> EvalResult<()> {
        let depth = self.values.len();
        if depth < 2 {
            return Err(EvalError::StackUnderflow { operator: op,
                                                   depth });
        }
        let rhs = self.values[depth - 1];
        let lhs = self.values[depth - 2];
        self.values.truncate(depth - 2);
        let result = op.apply(lhs, rhs);
        trace!("polish {lhs} {rhs} {op} = {result}");
        self.values.push(result);
        Ok(())
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The value on top of the stack, if any.
    #[must_use]
    pub fn top(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Returns the result of a complete expression.
    ///
    /// # Errors
    /// Returns [`EvalError::MalformedExpression`] unless exactly one value is
    /// on the stack.
    pub fn finish(&self) -> EvalResult<f64> {
        match self.values.as_slice() {
            [value] => Ok(*value),
            values => Err(EvalError::MalformedExpression { depth: values.len() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.001;

    fn evaluate(a: f64, b: f64, op: Operator) -> f64 {
        let mut stack = PolishStack::new();
        stack.push(a);
        stack.push(b);
        stack.pop_to_operator(op).unwrap();
        assert_eq!(stack.len(), 1);
        stack.top().unwrap()
    }

    #[test]
    fn binary_operators_take_lhs_from_below() {
        let pairs = [(3.0, 4.0), (-2.5, 8.0), (10.0, 0.5), (1e3, -7.25)];
        for (a, b) in pairs {
            assert!((evaluate(a, b, Operator::Add) - (a + b)).abs() < EPSILON);
            assert!((evaluate(a, b, Operator::Sub) - (a - b)).abs() < EPSILON);
            assert!((evaluate(a, b, Operator::Mul) - (a * b)).abs() < EPSILON);
            assert!((evaluate(a, b, Operator::Div) - (a / b)).abs() < EPSILON);
        }
    }

    #[test]
    fn power_uses_top_as_exponent() {
        assert!((evaluate(2.0, 3.0, Operator::Pow) - 8.0).abs() < EPSILON);
        assert!((evaluate(9.0, 0.5, Operator::Pow) - 3.0).abs() < EPSILON);
    }

    #[test]
    fn underflow_leaves_stack_alone() {
        let mut stack = PolishStack::new();
        stack.push(1.0);
        let err = stack.pop_to_operator(Operator::Mul).unwrap_err();
        assert_eq!(err,
                   EvalError::StackUnderflow { operator: Operator::Mul,
                                               depth:    1, });
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn finish_requires_exactly_one_value() {
        let mut stack = PolishStack::new();
        assert_eq!(stack.finish(), Err(EvalError::MalformedExpression { depth: 0 }));
        stack.push(1.0);
        stack.push(2.0);
        assert_eq!(stack.finish(), Err(EvalError::MalformedExpression { depth: 2 }));
        stack.clear();
        assert!(stack.is_empty());
    }

    #[test]
    fn division_by_zero_propagates() {
        assert!(evaluate(1.0, 0.0, Operator::Div).is_infinite());
        assert!(evaluate(0.0, 0.0, Operator::Div).is_nan());
    }
}
