use crate::error::BoardError;
use futures_util::future::{Either, select};
use std::future::Future;
use std::pin::pin;
use tokio_util::sync::CancellationToken;

/// Runs `call` unless `token` fires first, in which case the call is dropped
/// and `BoardError::Cancelled` is returned.
pub async fn guarded<T, F>(token: &CancellationToken, call: F) -> Result<T, BoardError>
where
    F: Future<Output = Result<T, BoardError>>,
{
    if token.is_cancelled() {
        return Err(BoardError::Cancelled);
    }

    let cancelled = pin!(token.cancelled());
    let call = pin!(call);
    match select(call, cancelled).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(BoardError::Cancelled),
    }
}
