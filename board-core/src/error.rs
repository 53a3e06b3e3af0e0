use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Not found")]
    NotFound,
    #[error("Login required")]
    Unauthenticated,
    #[error("Request cancelled")]
    Cancelled,
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl BoardError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, BoardError::Cancelled)
    }
}
