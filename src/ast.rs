use std::fmt;

/// A language keyword that starts an instruction.
///
/// Only the first three produce [`Instruction`]s; `DO` and `SET` are
/// expanded away while parsing and never reach the instruction list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `FD <VARNUM>`
    Forward,
    /// `LT <VARNUM>`
    Left,
    /// `RT <VARNUM>`
    Right,
    /// `DO <VAR> FROM <VARNUM> TO <VARNUM> { ... }`
    Do,
    /// `SET <VAR> := <POLISH>`
    Set,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Self::Forward => "FD",
            Self::Left => "LT",
            Self::Right => "RT",
            Self::Do => "DO",
            Self::Set => "SET",
        };
        f.pad(keyword)
    }
}

/// A single desugared turtle operation.
///
/// The payload is a signed distance for [`Instruction::Forward`] and a signed
/// angle in degrees for the two turns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    /// Move along the current heading.
    Forward(f64),
    /// Turn clockwise on screen (the heading angle grows).
    TurnRight(f64),
    /// Turn anticlockwise on screen (the heading angle shrinks).
    TurnLeft(f64),
}

impl Instruction {
    /// Builds the instruction a movement command stands for.
    ///
    /// Returns `None` for `DO` and `SET`, which have no instruction of their
    /// own.
    ///
    /// # Example
    /// ```
    /// use turtle_logo::ast::{Command, Instruction};
    ///
    /// assert_eq!(Instruction::from_command(Command::Forward, 5.0),
    ///            Some(Instruction::Forward(5.0)));
    /// assert_eq!(Instruction::from_command(Command::Set, 5.0), None);
    /// ```
    #[must_use]
    pub const fn from_command(command: Command, value: f64) -> Option<Self> {
        match command {
            Command::Forward => Some(Self::Forward(value)),
            Command::Left => Some(Self::TurnLeft(value)),
            Command::Right => Some(Self::TurnRight(value)),
            Command::Do | Command::Set => None,
        }
    }

    /// The command keyword this instruction was written with.
    #[must_use]
    pub const fn command(&self) -> Command {
        match self {
            Self::Forward(_) => Command::Forward,
            Self::TurnLeft(_) => Command::Left,
            Self::TurnRight(_) => Command::Right,
        }
    }

    /// The operand: a distance or an angle in degrees.
    #[must_use]
    pub const fn value(&self) -> f64 {
        match self {
            Self::Forward(v) | Self::TurnLeft(v) | Self::TurnRight(v) => *v,
        }
    }

    /// Returns `true` for [`Instruction::Forward`].
    #[must_use]
    pub const fn is_forward(&self) -> bool {
        matches!(self, Self::Forward(_))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<4} {:.6}", self.command(), self.value())
    }
}

/// The ordered output of a successful parse.
///
/// Append-only while the parser owns it. Once handed to a path builder it is
/// consumed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstructionList {
    instructions: Vec<Instruction>,
}

impl InstructionList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { instructions: Vec::new() }
    }

    /// Appends an instruction and returns the new length.
    pub fn push(&mut self, instruction: Instruction) -> usize {
        self.instructions.push(instruction);
        self.instructions.len()
    }

    /// Drops everything after the first `len` instructions.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.instructions.truncate(len);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Number of [`Instruction::Forward`] entries, which is also the number of
    /// samples a path builder adds after the starting point.
    #[must_use]
    pub fn forward_count(&self) -> usize {
        self.instructions.iter().filter(|i| i.is_forward()).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Instruction] {
        &self.instructions
    }
}

impl From<Vec<Instruction>> for InstructionList {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }
}

impl FromIterator<Instruction> for InstructionList {
    fn from_iter<T: IntoIterator<Item = Instruction>>(iter: T) -> Self {
        Self { instructions: iter.into_iter().collect() }
    }
}

impl IntoIterator for InstructionList {
    type IntoIter = std::vec::IntoIter<Instruction>;
    type Item = Instruction;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.into_iter()
    }
}

impl<'a> IntoIterator for &'a InstructionList {
    type IntoIter = std::slice::Iter<'a, Instruction>;
    type Item = &'a Instruction;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

impl fmt::Display for InstructionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for instruction in &self.instructions {
            writeln!(f, "    {instruction}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn do_and_set_have_no_instruction() {
        assert!(Instruction::from_command(Command::Do, 1.0).is_none());
        assert!(Instruction::from_command(Command::Set, 1.0).is_none());
        assert_eq!(Instruction::from_command(Command::Left, 90.0),
                   Some(Instruction::TurnLeft(90.0)));
    }

    #[test]
    fn forward_count_ignores_turns() {
        let list: InstructionList = vec![Instruction::Forward(1.0),
                                         Instruction::TurnRight(90.0),
                                         Instruction::Forward(2.0),
                                         Instruction::TurnLeft(45.0)].into();
        assert_eq!(list.len(), 4);
        assert_eq!(list.forward_count(), 2);
    }

    #[test]
    fn display_lists_one_instruction_per_line() {
        let list: InstructionList = vec![Instruction::Forward(20.0),
                                         Instruction::TurnRight(90.0)].into();
        let text = list.to_string();
        assert!(text.starts_with("{\n"));
        assert!(text.contains("FD   20.000000"));
        assert!(text.contains("RT   90.000000"));
        assert!(text.ends_with('}'));
    }
}
