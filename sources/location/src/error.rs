use enum_as_inner::EnumAsInner;
use thiserror::Error;

/// Raised when the location of a class cannot be determined. Terminal for the call.
#[derive(Error, Debug, EnumAsInner)]
pub enum InvalidLocationError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("invalid suffix was detected in {0}")]
    InvalidSuffix(String),

    #[error("malformed location {0}")]
    Malformed(String, #[source] url::ParseError),

    #[error("invalid URL -> {0}")]
    InvalidUrl(String),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("class reference must not be null")]
pub struct NullUnitError;
