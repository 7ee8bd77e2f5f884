use thiserror::Error;

/// Failure reported by a data provider call.
///
/// Values are cheap to clone so the same failure can be handed back to the
/// caller and published to failure observers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportFailure {
    /// Connection could not be established or was dropped.
    #[error("Network error: {0}")]
    Network(String),

    /// The provider gave up waiting for a response.
    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Malformed response or unexpected payload shape.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// The server answered with a non-success status.
    #[error("Server responded with status {status}")]
    Status { status: u16, body: Vec<u8> },
}

impl TransportFailure {
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportFailure::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body, if the failure carries a non-empty one.
    pub fn response_body(&self) -> Option<&[u8]> {
        match self {
            TransportFailure::Status { body, .. } if !body.is_empty() => Some(body),
            _ => None,
        }
    }

    /// Short machine-readable name, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            TransportFailure::Network(_) => "network",
            TransportFailure::Timeout { .. } => "timeout",
            TransportFailure::Protocol(_) => "protocol",
            TransportFailure::Status { .. } => "status",
        }
    }
}
