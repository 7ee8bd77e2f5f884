use thiserror::Error;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

use super::domain::{DomainError, ErrorResponse};
use super::transport::TransportFailure;
use crate::activity::TrackedFailure;

/// Why a transport failure could not be turned into a [`DomainError`].
#[derive(Debug, Error)]
pub enum TranslationFailure {
    #[error("failure carries no response body")]
    MissingBody,

    #[error("response body is not an error document: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Best-effort enrichment of transport failures.
pub struct ErrorTranslator;

impl ErrorTranslator {
    /// Decode the failure's response body into a [`DomainError`].
    pub fn try_translate(failure: &TransportFailure) -> Result<DomainError, TranslationFailure> {
        let (status, body) = match (failure.status(), failure.response_body()) {
            (Some(status), Some(body)) => (status, body),
            _ => return Err(TranslationFailure::MissingBody),
        };
        let response: ErrorResponse = serde_json::from_slice(body)?;
        Ok(DomainError::from_response(status, response))
    }

    /// Like [`try_translate`](Self::try_translate), but logs and swallows
    /// the reason a failure could not be translated.
    pub fn translate(failure: &TransportFailure) -> Option<DomainError> {
        match Self::try_translate(failure) {
            Ok(error) => Some(error),
            Err(TranslationFailure::MissingBody) => {
                tracing::debug!(kind = failure.kind(), "No response body to translate");
                None
            }
            Err(reason) => {
                tracing::warn!(
                    kind = failure.kind(),
                    status = ?failure.status(),
                    "Dropping untranslatable failure: {}",
                    reason
                );
                None
            }
        }
    }

    /// Standing subscription: every tracked failure is translated and the
    /// successful ones republished on `parsed`.
    ///
    /// Runs until the failure channel closes. Lagging is logged and skipped.
    pub async fn run(
        mut failures: broadcast::Receiver<TrackedFailure>,
        parsed: broadcast::Sender<DomainError>,
    ) {
        loop {
            match failures.recv().await {
                Ok(tracked) => {
                    if let Some(error) = Self::translate(&tracked.failure) {
                        // No subscribers is fine.
                        let _ = parsed.send(error);
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Error translator lagged behind failure channel");
                }
                Err(RecvError::Closed) => break,
            }
        }
        tracing::debug!("Error translator stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn status(status: u16, body: &str) -> TransportFailure {
        TransportFailure::Status {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn decodes_error_document() {
        let failure = status(
            422,
            r#"{"message":"Validation Failed","documentation_url":"https://docs.example.com/v3","errors":[{"resource":"Issue","field":"title","code":"missing_field"}]}"#,
        );
        let error = ErrorTranslator::translate(&failure).expect("should translate");
        assert_eq!(error.kind, ErrorKind::Validation);
        assert_eq!(error.status, 422);
        assert_eq!(error.message, "Validation Failed");
        assert_eq!(
            error.documentation_url.as_deref(),
            Some("https://docs.example.com/v3")
        );
        assert_eq!(error.details.len(), 1);
        assert_eq!(error.details[0].field.as_deref(), Some("title"));
    }

    #[test]
    fn malformed_body_yields_none() {
        assert!(ErrorTranslator::translate(&status(500, "<html>oops</html>")).is_none());
        assert!(matches!(
            ErrorTranslator::try_translate(&status(500, "{\"nope\":1}")),
            Err(TranslationFailure::Decode(_))
        ));
    }

    #[test]
    fn failures_without_body_yield_none() {
        let failure = TransportFailure::Timeout { seconds: 30 };
        assert!(matches!(
            ErrorTranslator::try_translate(&failure),
            Err(TranslationFailure::MissingBody)
        ));
        assert!(ErrorTranslator::translate(&failure).is_none());
    }
}
