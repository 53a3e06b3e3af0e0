use crate::error::BoardError;
use crate::model::{Comment, Direction, PostDetail, PostId, PostSummary, UserId};
use async_trait::async_trait;

/// REST backend of the board. One method per endpoint, no business logic.
///
/// Futures are `?Send` so the trait can be implemented on top of browser
/// fetch as well as `reqwest`.
#[async_trait(?Send)]
pub trait BoardApi {
    /// `GET /posts`
    async fn list_posts(&self) -> Result<Vec<PostSummary>, BoardError>;

    /// `GET /posts/{id}`. `None` when the backend answers `null` or 404.
    async fn get_post(&self, id: &PostId) -> Result<Option<PostDetail>, BoardError>;

    /// `POST /posts/{id}/view`
    async fn increment_view(&self, id: &PostId) -> Result<(), BoardError>;

    /// `GET /posts/{id}/recommendation?userId=`
    async fn check_recommendation(&self, id: &PostId, user: &UserId)
    -> Result<bool, BoardError>;

    /// `POST /posts/{id}/recommendation`
    async fn update_recommendation(
        &self,
        id: &PostId,
        user: &UserId,
        direction: Direction,
    ) -> Result<(), BoardError>;

    /// `GET /posts/{id}/comments`
    async fn list_comments(&self, id: &PostId) -> Result<Vec<Comment>, BoardError>;

    /// `POST /posts/{id}/comments`
    async fn create_comment(
        &self,
        id: &PostId,
        user: &UserId,
        content: &str,
    ) -> Result<Comment, BoardError>;
}

/// Endpoint URLs, shared by every transport.
pub mod endpoints {
    use crate::error::BoardError;
    use crate::model::PostId;
    use url::Url;

    /// Parses the backend base URL. A trailing slash is not required.
    pub fn base(raw: &str) -> Result<Url, BoardError> {
        let url = Url::parse(raw.trim())
            .map_err(|e| BoardError::InvalidRequest(format!("bad base url {raw:?}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(BoardError::InvalidRequest(format!(
                "base url {raw:?} cannot carry paths"
            )));
        }
        Ok(url)
    }

    fn join(base: &Url, segments: &[&str]) -> Url {
        let mut url = base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub fn posts(base: &Url) -> Url {
        join(base, &["posts"])
    }

    pub fn post(base: &Url, id: &PostId) -> Url {
        join(base, &["posts", id.as_str()])
    }

    pub fn view(base: &Url, id: &PostId) -> Url {
        join(base, &["posts", id.as_str(), "view"])
    }

    pub fn recommendation(base: &Url, id: &PostId) -> Url {
        join(base, &["posts", id.as_str(), "recommendation"])
    }

    pub fn comments(base: &Url, id: &PostId) -> Url {
        join(base, &["posts", id.as_str(), "comments"])
    }

}
