//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use relink::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),

    /// Semantic failure (e.g., validation failed) - exit code 1.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (e.g., an input cannot be resolved)
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::Library(lib_err) => match lib_err {
                LibError::UnresolvableInput { .. } => 1,
                LibError::Io(_) => 5,
                LibError::Validation { .. }
                | LibError::Configuration(_)
                | LibError::InvalidPattern { .. } => 7,
                _ => 6,
            },
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let unresolvable = LibError::UnresolvableInput {
            input: "@x".into(),
        };
        assert_eq!(CliError::from(unresolvable).exit_code(), 1);
        assert_eq!(CliError::SemanticFailure("x".into()).exit_code(), 1);
        assert_eq!(CliError::InvalidArguments("x".into()).exit_code(), 4);
        assert_eq!(
            CliError::from(std::io::Error::other("boom")).exit_code(),
            5
        );
        assert_eq!(CliError::Config("x".into()).exit_code(), 7);

        let validation = LibError::Validation {
            field: "match".into(),
            message: "bad".into(),
        };
        assert_eq!(CliError::from(validation).exit_code(), 7);

        let yaml = serde_yaml::from_str::<serde_yaml::Value>("a: [b").unwrap_err();
        assert_eq!(CliError::from(LibError::from(yaml)).exit_code(), 7);

        let unknown = LibError::UnknownDocument { path: "a".into() };
        assert_eq!(CliError::from(unknown).exit_code(), 6);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            CliError::InvalidArguments("empty path".into()).to_string(),
            "Invalid arguments: empty path"
        );
        assert_eq!(
            CliError::Config("bad".into()).to_string(),
            "Configuration error: bad"
        );
    }
}
