//! Failure taxonomy of the presentation layer.
//!
//! - [`TransportFailure`]: whatever the data provider reports (network,
//!   timeout, protocol, non-success status with a body).
//! - [`DomainError`]: structured error decoded from a failure's response body.
//! - [`TranslationFailure`]: why a transport failure could not be decoded.
//!   Logged by the [`ErrorTranslator`], never surfaced.

mod domain;
mod transport;
mod translator;

pub use domain::{DomainError, ErrorKind, ErrorResponse, FieldError};
pub use transport::TransportFailure;
pub use translator::{ErrorTranslator, TranslationFailure};
