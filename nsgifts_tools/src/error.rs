use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum NsGiftsApiError {
    #[error("Could not initialize client: {0}")]
    Initialization(String),
    #[error("The vendor rejected the configured credentials")]
    BadCredentials,
    #[error("Network error talking to the vendor: {0}")]
    NetworkError(String),
    #[error("Could not make sense of the vendor response: {0}")]
    ProtocolError(String),
    #[error("The vendor rejected the request payload: {0}")]
    ValidationError(String),
    #[error("Vendor query failed. Error {status}. {message}")]
    QueryError { status: u16, message: String },
}
