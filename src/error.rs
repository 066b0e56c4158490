use thiserror::Error;

/// Top-level error type for the geometry kernel.
#[derive(Debug, Error)]
pub enum KernelError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Unsupported(#[from] UnsupportedError),

    #[error(transparent)]
    Numeric(#[from] NumericError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while building a value from caller-supplied arguments.
#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("illegal parameters for {shape}: {reason}")]
    IllegalParameters { shape: &'static str, reason: String },

    #[error("record names `{found}`, expected `{expected}`")]
    NameMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

/// Operations a shape deliberately does not define.
#[derive(Debug, Error)]
pub enum UnsupportedError {
    #[error("method not implemented: {shape}::{operation}")]
    NotImplemented {
        shape: &'static str,
        operation: &'static str,
    },
}

/// Errors related to numerical computations.
#[derive(Debug, Error)]
pub enum NumericError {
    #[error("matrix is not invertible (determinant = {determinant})")]
    SingularMatrix { determinant: f64 },
}

/// Errors related to kernel configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
}

impl ConstructionError {
    pub(crate) fn illegal(shape: &'static str, reason: impl Into<String>) -> Self {
        Self::IllegalParameters {
            shape,
            reason: reason.into(),
        }
    }
}

impl UnsupportedError {
    pub(crate) fn not_implemented(shape: &'static str, operation: &'static str) -> Self {
        Self::NotImplemented { shape, operation }
    }
}

/// Convenience type alias for results using [`KernelError`].
pub type Result<T> = std::result::Result<T, KernelError>;
