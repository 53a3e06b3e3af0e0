//! Board domain shared by every front end: wire model, the `BoardApi` seam,
//! and the list/detail/comment view logic driven over it.

pub mod api;
pub mod cancel;
pub mod datetime;
pub mod error;
pub mod locale;
pub mod model;
pub mod notice;
pub mod sanitize;
pub mod session;
pub mod view;

#[cfg(test)]
mod fake;

pub use api::BoardApi;
pub use error::BoardError;
pub use locale::Locale;
pub use model::{Author, Comment, Direction, PostDetail, PostId, PostSummary, UserId};
pub use notice::Notice;
pub use session::UserSession;
pub use tokio_util::sync::CancellationToken;
