use board_core::BoardError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlooClientError {
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error(transparent)]
    RequestError(#[from] gloo_net::Error),
}

impl From<GlooClientError> for BoardError {
    fn from(err: GlooClientError) -> Self {
        match err {
            GlooClientError::Http { status: 401, .. } => BoardError::Unauthenticated,
            GlooClientError::Http { status: 404, .. } => BoardError::NotFound,
            GlooClientError::Http { status, message } => BoardError::Http { status, message },
            GlooClientError::RequestError(gloo_net::Error::SerdeError(e)) => {
                BoardError::Decode(e.to_string())
            }
            GlooClientError::RequestError(e) => BoardError::Transport(e.to_string()),
        }
    }
}
