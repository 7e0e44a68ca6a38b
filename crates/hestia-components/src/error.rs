//! Error types for component operations.

use thiserror::Error;

/// Errors a component may raise from its simulate hook.
///
/// The components shipped here are total functions of their inputs and
/// never fail; the type exists so the host contract stays uniform for
/// variants whose update can go wrong.
#[derive(Error, Debug, Clone)]
pub enum ComponentError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Backend error: {message}")]
    Backend { message: String },
}

pub type ComponentResult<T> = Result<T, ComponentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ComponentError::NonPhysical { what: "temperature" };
        assert!(err.to_string().contains("temperature"));
    }
}
