use thiserror::Error;

/// Errors raised by the orthogonal polynomial core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The three coefficient vectors do not describe the same degree.
    ///
    /// A valid model has `coeffs = alpha + 1` and `norm2 = alpha + 2` entries.
    #[error("size mismatch: coeffs {coeffs}, norm2 {norm2}, alpha {alpha}")]
    SizeMismatch {
        coeffs: usize,
        norm2: usize,
        alpha: usize,
    },

    /// A basis function index outside `[-1, degree - 1]` was requested.
    #[error("basis function {requested} does not exist for a degree {degree} model")]
    DegreeOutOfRange { requested: i32, degree: usize },
}

/// Error surfaced by the `orthopoly` binary: a message plus the process exit code.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
