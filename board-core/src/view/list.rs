use crate::api::BoardApi;
use crate::cancel::guarded;
use crate::error::BoardError;
use crate::model::{PostId, PostSummary};
use tokio_util::sync::CancellationToken;

pub const EXCERPT_CHARS: usize = 150;

/// Summary card of the post grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PostCard {
    pub id: PostId,
    pub title: String,
    pub excerpt: String,
}

impl PostCard {
    pub fn from_summary(post: &PostSummary) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            excerpt: excerpt(&post.content, EXCERPT_CHARS),
        }
    }

    /// Route of the detail page.
    pub fn href(&self) -> String {
        post_href(&self.id)
    }
}

pub fn post_href(id: &PostId) -> String {
    format!("/post/{id}")
}

fn excerpt(content: &str, max: usize) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(max).collect();
    if chars.next().is_some() {
        format!("{}...", head.trim_end())
    } else {
        head
    }
}

/// The post grid. A failed or empty fetch leaves it empty; nothing is
/// surfaced to the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostListView {
    cards: Vec<PostCard>,
}

impl PostListView {
    pub fn from_posts(posts: &[PostSummary]) -> Self {
        Self {
            cards: posts.iter().map(PostCard::from_summary).collect(),
        }
    }

    /// Fetches the posts. `Err` only when `token` was cancelled, so a torn
    /// down page never gets a late update.
    pub async fn load<A>(api: &A, token: &CancellationToken) -> Result<Self, BoardError>
    where
        A: BoardApi + ?Sized,
    {
        match guarded(token, api.list_posts()).await {
            Ok(posts) => {
                tracing::debug!(count = posts.len(), "fetched post list");
                Ok(Self::from_posts(&posts))
            }
            Err(e) if e.is_cancelled() => Err(e),
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch post list");
                Ok(Self::default())
            }
        }
    }

    pub fn cards(&self) -> &[PostCard] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
