use crate::{
    ast::InstructionList,
    interpreter::diagnostics::{Diagnostic, DiagnosticKind, Severity},
};

#[derive(Debug, Clone, PartialEq)]
/// A parse that did not produce a complete instruction list.
///
/// Holds every diagnostic of the session in the order it was recorded, and
/// the instructions that were emitted before parsing stopped. The partial
/// list is for display only; it must never be turned into a path.
pub struct ParseFailure {
    diagnostics: Vec<Diagnostic>,
    partial:     InstructionList,
}

impl ParseFailure {
    pub(crate) const fn new(diagnostics: Vec<Diagnostic>, partial: InstructionList) -> Self {
        Self { diagnostics,
               partial }
    }

    /// The failure for a program with no tokens at all.
    #[must_use]
    pub fn empty_program() -> Self {
        Self::new(vec![Diagnostic::detached(Severity::Fatal, DiagnosticKind::EmptyProgram)],
                  InstructionList::new())
    }

    /// Every diagnostic, warnings included.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The diagnostics that are worse than a warning.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_error())
    }

    /// Instructions emitted before parsing stopped.
    #[must_use]
    pub const fn partial_instructions(&self) -> &InstructionList {
        &self.partial
    }

    /// Returns `true` if the program text contained no tokens.
    #[must_use]
    pub fn is_empty_program(&self) -> bool {
        self.diagnostics.iter().any(|d| d.kind == DiagnosticKind::EmptyProgram)
    }

    /// Returns `true` if parsing stopped because the tokens ran out.
    #[must_use]
    pub fn ran_out_of_tokens(&self) -> bool {
        self.diagnostics.iter().any(|d| d.kind == DiagnosticKind::UnexpectedEnd)
    }
}

impl std::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.partial.is_empty() {
            writeln!(f, "{}", self.partial)?;
        }
        write!(f, "Parsing failed. There were {} errors:", self.diagnostics.len())?;
        for diagnostic in &self.diagnostics {
            write!(f, "\n{diagnostic}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseFailure {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Instruction;

    #[test]
    fn empty_program_failure() {
        let failure = ParseFailure::empty_program();
        assert!(failure.is_empty_program());
        assert_eq!(failure.errors().count(), 1);
        assert!(failure.to_string().contains("the program is empty"));
    }

    #[test]
    fn display_shows_partial_list_before_errors() {
        let partial: InstructionList = vec![Instruction::Forward(3.0)].into();
        let failure =
            ParseFailure::new(vec![Diagnostic::detached(Severity::Fatal,
                                                        DiagnosticKind::UnexpectedEnd)],
                              partial);
        let text = failure.to_string();
        let list_at = text.find("FD").unwrap();
        let errors_at = text.find("Parsing failed").unwrap();
        assert!(list_at < errors_at);
        assert!(text.contains("There were 1 errors"));
        assert!(failure.ran_out_of_tokens());
    }
}
