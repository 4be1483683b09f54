//! Error types for report validation and message derivation

use thiserror::Error;

/// Errors produced while validating an API payload or deriving a status
/// message from a homework record
#[derive(Debug, Error)]
pub enum ReportError {
    /// Payload root is not a JSON object
    #[error("response is not a JSON object")]
    NotAnObject,

    /// A documented key is absent from the payload
    #[error("response is missing key `{0}`")]
    MissingKey(&'static str),

    /// A value has the wrong JSON type
    #[error("unexpected type: {0}")]
    WrongType(&'static str),

    /// A homework record lacks a required field
    #[error("homework record is missing field `{0}`")]
    MissingField(&'static str),

    /// Status value outside the documented set
    #[error("unknown homework status `{0}`")]
    UnknownStatus(String),
}
