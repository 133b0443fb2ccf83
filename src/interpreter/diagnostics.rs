use std::fmt;

use log::{debug, warn};

use crate::ast::Command;

/// A grammar production, named in "what did we expect" messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Production {
    Main,
    InstructionList,
    Instruction,
    Forward,
    Left,
    Right,
    Do,
    Set,
    Var,
    VarNum,
    Polish,
    Op,
}

impl Production {
    /// Every production, in grammar order.
    pub const ALL: [Self; 12] = [Self::Main,
                                 Self::InstructionList,
                                 Self::Instruction,
                                 Self::Forward,
                                 Self::Left,
                                 Self::Right,
                                 Self::Do,
                                 Self::Set,
                                 Self::Var,
                                 Self::VarNum,
                                 Self::Polish,
                                 Self::Op];

    /// The production's rule, as shown to the user.
    #[must_use]
    pub const fn rule(self) -> &'static str {
        match self {
            Self::Main => r#"<MAIN>        ::= "{" <INSTRCTLST>"#,
            Self::InstructionList => r#"<INSTRCTLST>  ::= <INSTRUCTION> <INSTRCTLST> | "}""#,
            Self::Instruction => "<INSTRUCTION> ::= <FD> | <LT> | <RT> | <DO> | <SET>",
            Self::Forward => r#"<FD>          ::= "FD" <VARNUM>"#,
            Self::Left => r#"<LT>          ::= "LT" <VARNUM>"#,
            Self::Right => r#"<RT>          ::= "RT" <VARNUM>"#,
            Self::Do => {
                r#"<DO>          ::= "DO" <VAR> "FROM" <VARNUM> "TO" <VARNUM> "{" <INSTRCTLST>"#
            },
            Self::Set => r#"<SET>         ::= "SET" <VAR> ":=" <POLISH>"#,
            Self::Var => "<VAR>         ::= [A-Z]",
            Self::VarNum => "<VARNUM>      ::= number | <VAR>",
            Self::Polish => r#"<POLISH>      ::= <OP> <POLISH> | <VARNUM> <POLISH> | ";""#,
            Self::Op => r#"<OP>          ::= "+" | "-" | "*" | "/" | "^""#,
        }
    }

    /// The production that parses a movement command.
    #[must_use]
    pub const fn for_command(command: Command) -> Self {
        match command {
            Command::Forward => Self::Forward,
            Command::Left => Self::Left,
            Command::Right => Self::Right,
            Command::Do => Self::Do,
            Command::Set => Self::Set,
        }
    }
}

/// How serious a diagnostic is.
///
/// Only [`Severity::Warning`] leaves a parse successful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
    Fatal,
    Internal,
}

impl Severity {
    #[must_use]
    pub const fn is_error(self) -> bool {
        !matches!(self, Self::Warning)
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Warning => "WARNING",
            Self::Error | Self::Fatal => "ERROR",
            Self::Internal => "INTERNAL ERROR",
        }
    }
}

/// What a diagnostic is about.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    /// The rule that was being matched when parsing failed.
    Expected(Production),
    /// A grammar mismatch, with a short explanation.
    Syntax(String),
    /// A movement command with an operand of exactly zero.
    Redundant(Command),
    /// A value that is infinite or NaN.
    NonFinite {
        /// What the value was used for.
        context: String,
        /// The offending value.
        value:   f64,
    },
    /// The program counter ran off the last token.
    UnexpectedEnd,
    /// The program text holds no tokens.
    EmptyProgram,
    /// Tokens follow the closing brace of the program.
    TrailingTokens {
        /// How many tokens were ignored.
        count: usize,
    },
    /// A defect in the parser itself.
    Internal(String),
}

/// One entry of the error list.
///
/// The text of the failing token and the one before it are captured when the
/// entry is recorded; the message itself is produced by `Display`.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Program counter when the entry was recorded.
    pub token_index: usize,
    /// The token at `token_index`, if there is one.
    pub token:       Option<String>,
    /// The token before `token_index`, if there is one.
    pub previous:    Option<String>,
    pub severity:    Severity,
    pub kind:        DiagnosticKind,
}

impl Diagnostic {
    /// Records a diagnostic at `token_index`, capturing the surrounding tokens.
    #[must_use]
    pub fn at<S: AsRef<str>>(tokens: &[S],
                             token_index: usize,
                             severity: Severity,
                             kind: DiagnosticKind)
                             -> Self {
        let token = tokens.get(token_index).map(|t| t.as_ref().to_string());
        let previous = token_index.checked_sub(1)
                                  .and_then(|i| tokens.get(i))
                                  .map(|t| t.as_ref().to_string());
        Self { token_index,
               token,
               previous,
               severity,
               kind }
    }

    /// A diagnostic with no token context, such as an empty program.
    #[must_use]
    pub const fn detached(severity: Severity, kind: DiagnosticKind) -> Self {
        Self { token_index: 0,
               token: None,
               previous: None,
               severity,
               kind }
    }

    fn write_position(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(token), Some(previous)) = (&self.token, &self.previous) {
            let what = if self.severity.is_error() { "invalid syntax at" } else { "at" };
            write!(f,
                   "{}: {what} token {} \"{token}\" previous token {} \"{previous}\". ",
                   self.severity.label(),
                   self.token_index,
                   self.token_index - 1)?;
        } else if !self.severity.is_error() {
            write!(f, "{}: ", self.severity.label())?;
        }
        Ok(())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::Expected(production) => write!(f, "Expected: {}", production.rule()),
            DiagnosticKind::UnexpectedEnd => {
                write!(f, "{}: expected program to end with a \"}}\".", self.severity.label())
            },
            DiagnosticKind::EmptyProgram => {
                write!(f, "{}: the program is empty.", self.severity.label())
            },
            DiagnosticKind::Syntax(message) => {
                self.write_position(f)?;
                write!(f, "{message}")
            },
            DiagnosticKind::Redundant(command) => {
                self.write_position(f)?;
                write!(f, "{command} 0 is a redundant instruction.")
            },
            DiagnosticKind::NonFinite { context, value } => {
                self.write_position(f)?;
                write!(f, "{context} evaluated to {value}, which is not a finite number.")
            },
            DiagnosticKind::TrailingTokens { count } => {
                self.write_position(f)?;
                write!(f, "{count} token(s) after the closing \"}}\" were ignored.")
            },
            DiagnosticKind::Internal(message) => {
                write!(f, "{}: {message}", self.severity.label())
            },
        }
    }
}

/// The error list of one parse session.
///
/// Append-only. Recording never stops the parser; deciding whether to stop is
/// left to the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Appends an entry and returns the new number of entries.
    pub fn push(&mut self, diagnostic: Diagnostic) -> usize {
        if diagnostic.severity.is_error() {
            debug!("recorded: {diagnostic}");
        } else {
            warn!("{diagnostic}");
        }
        self.entries.push(diagnostic);
        self.entries.len()
    }

    /// Removes every entry recorded after the first `len`.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.entries.truncate(len);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if any entry is worse than a warning.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|d| d.severity.is_error())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}
