use crate::api::BoardApi;
use crate::cancel::guarded;
use crate::datetime::format_relative;
use crate::error::BoardError;
use crate::locale::Locale;
use crate::model::{Comment, PostId};
use crate::notice::Notice;
use crate::session::UserSession;
use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;

pub const MAX_COMMENT_CHARS: usize = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedComment {
    pub id: String,
    pub author: String,
    /// Plain text; never injected as markup.
    pub content: String,
    pub created_ago: String,
}

/// Comments under a post, oldest first as the backend sends them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentListView {
    comments: Vec<Comment>,
}

impl CommentListView {
    /// A failed fetch degrades to an empty list. `Err` only on cancellation.
    pub async fn load<A>(
        api: &A,
        post_id: &PostId,
        token: &CancellationToken,
    ) -> Result<Self, BoardError>
    where
        A: BoardApi + ?Sized,
    {
        match guarded(token, api.list_comments(post_id)).await {
            Ok(comments) => Ok(Self { comments }),
            Err(e) if e.is_cancelled() => Err(e),
            Err(e) => {
                tracing::warn!(%post_id, error = %e, "failed to fetch comments");
                Ok(Self::default())
            }
        }
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn render(&self, now: DateTime<Utc>, locale: Locale) -> Vec<RenderedComment> {
        self.comments
            .iter()
            .map(|c| RenderedComment {
                id: c.id.clone(),
                author: c
                    .author
                    .as_ref()
                    .map(|a| a.name.clone())
                    .unwrap_or_default(),
                content: c.content.clone(),
                created_ago: format_relative(c.created_at, now, locale),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Rejected(Notice),
    /// Comment stored; carries the refreshed list.
    Posted(CommentListView),
}

/// Validates and submits a comment, then re-fetches the list.
pub async fn submit_comment<A>(
    api: &A,
    session: &UserSession,
    post_id: &PostId,
    draft: &str,
    token: &CancellationToken,
) -> Result<SubmitOutcome, BoardError>
where
    A: BoardApi + ?Sized,
{
    let Some(user_id) = session.user_id() else {
        return Ok(SubmitOutcome::Rejected(Notice::LoginRequired));
    };
    let content = match validate_draft(draft) {
        Ok(content) => content,
        Err(notice) => return Ok(SubmitOutcome::Rejected(notice)),
    };

    match guarded(token, api.create_comment(post_id, user_id, content)).await {
        Ok(comment) => tracing::info!(%post_id, comment_id = %comment.id, "comment posted"),
        Err(e) if e.is_cancelled() => return Err(e),
        Err(e) => {
            tracing::error!(%post_id, error = %e, "failed to post comment");
            return Ok(SubmitOutcome::Rejected(Notice::ActionFailed));
        }
    }

    CommentListView::load(api, post_id, token)
        .await
        .map(SubmitOutcome::Posted)
}

fn validate_draft(draft: &str) -> Result<&str, Notice> {
    let content = draft.trim();
    if content.is_empty() {
        return Err(Notice::EmptyComment);
    }
    if content.chars().count() > MAX_COMMENT_CHARS {
        return Err(Notice::CommentTooLong {
            max: MAX_COMMENT_CHARS,
        });
    }
    Ok(content)
}
