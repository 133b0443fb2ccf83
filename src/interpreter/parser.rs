/// Parser session state and the entry production.
///
/// Defines the [`core::Parser`] session, the program counter, error recording
/// helpers and `<MAIN>`.
pub mod core;

/// Blocks and loops.
///
/// `<INSTRCTLST>` and the `DO` loop, which replays its block once per loop
/// counter value.
pub mod block;

/// Single instructions.
///
/// The `<INSTRUCTION>` dispatch over `FD`, `LT`, `RT`, `DO` and `SET`.
pub mod statement;

/// POLISH expressions.
///
/// Postfix arithmetic evaluated on the session's calculator stack.
pub mod polish;

/// Operand helpers.
///
/// `<VAR>`, `<VARNUM>` and keyword expectations shared by the other
/// productions.
pub mod utils;
