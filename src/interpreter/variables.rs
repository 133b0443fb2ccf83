use std::fmt;

/// Number of variables the language has, one per uppercase letter.
pub const VARIABLE_COUNT: usize = 26;

/// The name of one of the 26 variables, `A` to `Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(u8);

impl Variable {
    /// Returns the variable named by `name`, or `None` unless it is `A`..=`Z`.
    ///
    /// # Example
    /// ```
    /// use turtle_logo::interpreter::variables::Variable;
    ///
    /// assert_eq!(Variable::new('C').map(Variable::index), Some(2));
    /// assert!(Variable::new('c').is_none());
    /// ```
    #[must_use]
    pub const fn new(name: char) -> Option<Self> {
        if name.is_ascii_uppercase() {
            Some(Self(name as u8 - b'A'))
        } else {
            None
        }
    }

    /// Slot index, `0` for `A` through `25` for `Z`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn name(self) -> char {
        (b'A' + self.0) as char
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The 26 variable slots of one parse session.
///
/// Every slot exists from the start and reads as `0.0` until it is bound;
/// there are no declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableStore {
    values: [f64; VARIABLE_COUNT],
}

impl Default for VariableStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableStore {
    #[must_use]
    pub const fn new() -> Self {
        Self { values: [0.0; VARIABLE_COUNT] }
    }

    #[must_use]
    pub const fn get(&self, variable: Variable) -> f64 {
        self.values[variable.index()]
    }

    /// Binds `variable` to `value` and returns the value.
    pub const fn set(&mut self, variable: Variable, value: f64) -> f64 {
        self.values[variable.index()] = value;
        value
    }

    /// All variables with their current values, in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, f64)> + '_ {
        self.values
            .iter()
            .zip(0u8..)
            .map(|(value, index)| (Variable(index), *value))
    }
}
