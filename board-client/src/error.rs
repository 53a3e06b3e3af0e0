use board_core::BoardError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("HTTP error {status}: {message}")]
    Status { status: u16, message: String },
}

impl HttpError {
    pub async fn from_http_response(resp: reqwest::Response) -> Self {
        let status = resp.status().as_u16();
        let message = resp.text().await.unwrap_or_default();
        HttpError::Status { status, message }
    }
}

impl From<HttpError> for BoardError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::RequestError(e) if e.is_decode() => BoardError::Decode(e.to_string()),
            HttpError::RequestError(e) => BoardError::Transport(e.to_string()),
            HttpError::Status { status: 401, .. } => BoardError::Unauthenticated,
            HttpError::Status { status: 404, .. } => BoardError::NotFound,
            HttpError::Status { status, message } => BoardError::Http { status, message },
        }
    }
}
