//! Native HTTP client for the board backend.

mod config;
mod error;
mod http_client;

pub use board_core;
pub use config::{ClientConfig, DEFAULT_API_URL};
pub use error::HttpError;
pub use http_client::BoardClientHttp;
