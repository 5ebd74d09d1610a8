//! Common error types for the option spread workbench

use thiserror::Error;

/// Common error type used across workspace crates
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input was provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias using the common Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symbol;

    #[test]
    fn test_symbol_errors_are_invalid_input() {
        let Error::InvalidInput(message) = Symbol::new("IO C").unwrap_err();
        assert!(message.contains("IO C"), "{message}");
        assert_eq!(
            Error::invalid_input("empty").to_string(),
            "Invalid input: empty"
        );
    }
}
