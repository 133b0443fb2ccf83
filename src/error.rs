/// Evaluation errors.
///
/// Failures of the POLISH stack calculator: applying an operator with too few
/// operands, or finishing an expression with the wrong number of values left.
pub mod eval_error;
/// Parse failures.
///
/// The value returned by a parse that did not produce a complete instruction
/// list. It owns every diagnostic the session recorded, together with the
/// instructions emitted before the failure.
pub mod parse_error;
/// Viewport errors.
///
/// Raised when a view configuration cannot map a path onto a window.
pub mod view_error;

pub use eval_error::EvalError;
pub use parse_error::ParseFailure;
pub use view_error::ViewError;
