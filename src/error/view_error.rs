#[derive(Debug, Clone, Copy, PartialEq)]
/// Represents all errors that can occur while fitting a path to a window.
pub enum ViewError {
    /// The window has no area.
    InvalidWindow {
        /// Window width in pixels.
        width:  u32,
        /// Window height in pixels.
        height: u32,
    },
    /// The fraction of the window the path should fill is not in `(0, 1]`.
    InvalidFillFraction {
        /// The rejected fraction.
        fraction: f64,
    },
    /// There is no path to fit.
    EmptyPath,
}

impl std::fmt::Display for ViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidWindow { width, height } => {
                write!(f, "Window size {width}x{height} has no drawable area.")
            },
            Self::InvalidFillFraction { fraction } => {
                write!(f, "Fill fraction {fraction} must be greater than 0 and at most 1.")
            },
            Self::EmptyPath => write!(f, "There are no points to draw."),
        }
    }
}

impl std::error::Error for ViewError {}
