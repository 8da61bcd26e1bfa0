//! Error types for the protodoc core library
//!
//! Each stage owns its error enum; [`Error`] gathers them for callers that
//! drive a whole run.
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the Apache-2.0 license

use crate::documentation::GeneratorError;
use crate::loader::LoaderError;
use crate::samples::SampleError;
use thiserror::Error;

/// Main error type for protodoc operations
#[derive(Error, Debug)]
pub enum Error {
    /// Reading or parsing a schema document failed
    #[error(transparent)]
    Loader(#[from] LoaderError),

    /// Synthesizing or encoding a sample failed
    #[error(transparent)]
    Sample(#[from] SampleError),

    /// Rendering documentation failed
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

impl Error {
    /// Whether the error was caused by the caller's input rather than the
    /// environment
    pub fn is_user_error(&self) -> bool {
        match self {
            Error::Loader(e) => e.is_content_error() || matches!(e, LoaderError::UnsupportedFormat { .. }),
            Error::Sample(SampleError::MessageNotFound { .. }) => true,
            Error::Sample(SampleError::Encode(_)) => false,
            Error::Generator(GeneratorError::UnknownRenderType { .. }) => true,
            Error::Generator(GeneratorError::Sample(SampleError::MessageNotFound { .. })) => true,
            Error::Generator(_) => false,
        }
    }
}

/// Result type alias for protodoc operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_wrapped_errors_keep_message() {
        let err: Error = SampleError::message_not_found("a.B").into();
        assert_eq!(err.to_string(), "Message not found: a.B");
        assert!(err.is_user_error());

        let err: Error = LoaderError::io_error(
            PathBuf::from("x.json"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        )
        .into();
        assert!(!err.is_user_error());
    }
}
