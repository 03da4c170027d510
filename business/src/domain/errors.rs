/// Errors surfaced by the remote resource gateway.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    /// The request could not be sent or the response could not be received.
    #[error("gateway.network")]
    Network(String),
    /// The service answered with a non-2xx status.
    #[error("gateway.http")]
    Http {
        status: u16,
        message: Option<String>,
    },
    /// The payload did not have the expected shape.
    #[error("gateway.decode")]
    Decode(String),
}

impl GatewayError {
    pub fn network(detail: impl Into<String>) -> Self {
        GatewayError::Network(detail.into())
    }
    pub fn http(status: u16, message: Option<String>) -> Self {
        GatewayError::Http { status, message }
    }
    pub fn decode(detail: impl Into<String>) -> Self {
        GatewayError::Decode(detail.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::Http { status: 404, .. })
    }
}
