use thiserror::Error;

/// Failures raised by a [`ChatTransport`](crate::ChatTransport) round trip.
///
/// Malformed-but-parsable bodies are not represented here; the envelope
/// decoder absorbs those leniently (see
/// [`ChatExchange::from_api`](crate::ChatExchange::from_api)).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("failed to build chat request: {0}")]
    Request(String),

    #[error("network error reaching the chat endpoint: {0}")]
    Network(String),

    #[error("chat endpoint returned status {0}")]
    Status(u16),

    #[error("could not decode chat response body: {0}")]
    Decode(String),
}
