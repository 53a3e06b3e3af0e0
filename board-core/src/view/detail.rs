//! Post detail page: `Loading -> Loaded | NotFound`, view counting and the
//! like toggle.

use crate::api::BoardApi;
use crate::cancel::guarded;
use crate::datetime::{format_absolute, format_relative};
use crate::error::BoardError;
use crate::locale::Locale;
use crate::model::{Direction, PostDetail, PostId, UserId};
use crate::notice::Notice;
use crate::sanitize::sanitize_html;
use crate::session::UserSession;
use chrono::{DateTime, FixedOffset, Utc};
use derive_more::Display;
use std::str::FromStr;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// The backend answered with no post.
    Missing,
    /// The fetch itself failed.
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(PostDetail),
    NotFound(NotFoundReason),
}

/// Which direction a click on the like button sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum LikeMode {
    /// Always `increase`, leaving removal to the backend.
    #[default]
    #[display("increase-only")]
    IncreaseOnly,
    /// `increase` when not liked yet, `decrease` when already liked.
    #[display("toggle")]
    Toggle,
}

impl FromStr for LikeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "toggle" => Ok(LikeMode::Toggle),
            "increase-only" | "increase_only" | "increase" => Ok(LikeMode::IncreaseOnly),
            other => Err(format!("unknown like mode: {other}")),
        }
    }
}

/// Pending `POST /posts/{id}/view` for one successful load. Sending consumes
/// it, so a load is counted at most once however often the page re-renders.
#[derive(Debug)]
#[must_use = "the view is only counted once the increment is sent"]
pub struct ViewIncrement {
    post_id: PostId,
}

impl ViewIncrement {
    pub fn post_id(&self) -> &PostId {
        &self.post_id
    }

    pub async fn send<A>(self, api: &A, token: &CancellationToken) -> Result<(), BoardError>
    where
        A: BoardApi + ?Sized,
    {
        let result = guarded(token, api.increment_view(&self.post_id)).await;
        match &result {
            Ok(()) => tracing::debug!(post_id = %self.post_id, "view counted"),
            Err(e) if e.is_cancelled() => {}
            Err(e) => tracing::warn!(post_id = %self.post_id, error = %e, "failed to count view"),
        }
        result
    }
}

/// Result of [`PostDetailView::load`].
#[derive(Debug)]
pub struct DetailLoad {
    pub view: PostDetailView,
    /// Present only when the post was found.
    pub view_increment: Option<ViewIncrement>,
}

/// A validated click on the like button, ready to be sent.
#[derive(Debug, Clone)]
pub struct LikeRequest {
    pub post_id: PostId,
    pub user_id: UserId,
    pub direction: Direction,
}

impl LikeRequest {
    /// Updates the recommendation, then re-fetches the post for the
    /// authoritative count.
    pub async fn send<A>(
        &self,
        api: &A,
        token: &CancellationToken,
    ) -> Result<Option<PostDetail>, BoardError>
    where
        A: BoardApi + ?Sized,
    {
        guarded(
            token,
            api.update_recommendation(&self.post_id, &self.user_id, self.direction),
        )
        .await?;
        tracing::info!(
            post_id = %self.post_id,
            user_id = %self.user_id,
            direction = %self.direction,
            "recommendation updated"
        );
        guarded(token, api.get_post(&self.post_id)).await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LikeOutcome {
    /// The page was not showing a post; nothing happened.
    Ignored,
    /// Nothing was sent; show the notice instead.
    Rejected(Notice),
    Updated { liked: bool, recommend_count: i64 },
    /// The re-fetch came back empty; the page now shows the empty state.
    Vanished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeIcon {
    Filled,
    Outline,
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub now: DateTime<Utc>,
    pub offset: FixedOffset,
    pub locale: Locale,
}

/// Display-ready fields of a loaded post.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPost {
    pub id: PostId,
    pub title: String,
    pub author: String,
    /// Sanitized, safe to inject as markup.
    pub content_html: String,
    pub created_at: String,
    pub created_ago: String,
    pub view_count: u64,
    pub recommend_count: i64,
    pub like_icon: LikeIcon,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostDetailView {
    state: DetailState,
    liked: bool,
}

impl Default for PostDetailView {
    fn default() -> Self {
        Self::loading()
    }
}

impl PostDetailView {
    pub fn loading() -> Self {
        Self {
            state: DetailState::Loading,
            liked: false,
        }
    }

    /// Fetches the post and, for a signed-in user, whether they already
    /// recommended it. Any fetch failure ends in `NotFound`; `Err` is only
    /// returned when `token` was cancelled.
    pub async fn load<A>(
        api: &A,
        session: &UserSession,
        post_id: &PostId,
        token: &CancellationToken,
    ) -> Result<DetailLoad, BoardError>
    where
        A: BoardApi + ?Sized,
    {
        let post = match guarded(token, api.get_post(post_id)).await {
            Ok(Some(post)) => post,
            Ok(None) => {
                tracing::info!(%post_id, "post not found");
                return Ok(DetailLoad {
                    view: Self::not_found(NotFoundReason::Missing),
                    view_increment: None,
                });
            }
            Err(e) if e.is_cancelled() => return Err(e),
            Err(e) => {
                tracing::error!(%post_id, error = %e, "error fetching post");
                return Ok(DetailLoad {
                    view: Self::not_found(NotFoundReason::Failed),
                    view_increment: None,
                });
            }
        };

        let liked = match session.user_id() {
            Some(user_id) => {
                match guarded(token, api.check_recommendation(post_id, user_id)).await {
                    Ok(liked) => liked,
                    Err(e) if e.is_cancelled() => return Err(e),
                    Err(e) => {
                        tracing::warn!(%post_id, error = %e, "failed to check recommendation");
                        false
                    }
                }
            }
            None => false,
        };

        Ok(DetailLoad {
            view: Self {
                state: DetailState::Loaded(post),
                liked,
            },
            view_increment: Some(ViewIncrement {
                post_id: post_id.clone(),
            }),
        })
    }

    fn not_found(reason: NotFoundReason) -> Self {
        Self {
            state: DetailState::NotFound(reason),
            liked: false,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn post(&self) -> Option<&PostDetail> {
        match &self.state {
            DetailState::Loaded(post) => Some(post),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DetailState::Loading)
    }

    pub fn is_liked(&self) -> bool {
        self.liked
    }

    /// Decides what a click on the like button sends, without sending it.
    pub fn like_request(
        &self,
        session: &UserSession,
        mode: LikeMode,
    ) -> Result<Option<LikeRequest>, Notice> {
        let Some(post) = self.post() else {
            return Ok(None);
        };
        let Some(user_id) = session.user_id() else {
            return Err(Notice::LoginRequired);
        };

        let direction = match (mode, self.liked) {
            (LikeMode::Toggle, true) => Direction::Decrease,
            _ => Direction::Increase,
        };
        Ok(Some(LikeRequest {
            post_id: post.id.clone(),
            user_id: user_id.clone(),
            direction,
        }))
    }

    /// Applies the re-fetched post of a sent [`LikeRequest`], flipping the
    /// liked flag once.
    pub fn apply_like(&mut self, refetched: Option<PostDetail>) -> LikeOutcome {
        match refetched {
            Some(post) => {
                let recommend_count = post.recommend_count;
                self.state = DetailState::Loaded(post);
                self.liked = !self.liked;
                LikeOutcome::Updated {
                    liked: self.liked,
                    recommend_count,
                }
            }
            None => {
                self.state = DetailState::NotFound(NotFoundReason::Missing);
                LikeOutcome::Vanished
            }
        }
    }

    /// Full click handling: validate, send, re-fetch, apply. A failed request
    /// leaves the view untouched and yields [`Notice::ActionFailed`].
    pub async fn toggle_like<A>(
        &mut self,
        api: &A,
        session: &UserSession,
        mode: LikeMode,
        token: &CancellationToken,
    ) -> Result<LikeOutcome, BoardError>
    where
        A: BoardApi + ?Sized,
    {
        let request = match self.like_request(session, mode) {
            Ok(Some(request)) => request,
            Ok(None) => return Ok(LikeOutcome::Ignored),
            Err(notice) => return Ok(LikeOutcome::Rejected(notice)),
        };

        match request.send(api, token).await {
            Ok(refetched) => Ok(self.apply_like(refetched)),
            Err(e) if e.is_cancelled() => Err(e),
            Err(e) => {
                tracing::error!(post_id = %request.post_id, error = %e, "like failed");
                Ok(LikeOutcome::Rejected(Notice::ActionFailed))
            }
        }
    }

    pub fn render(&self, options: &RenderOptions) -> Option<RenderedPost> {
        let post = self.post()?;
        Some(RenderedPost {
            id: post.id.clone(),
            title: post.title.clone(),
            author: post.author.name.clone(),
            content_html: sanitize_html(&post.content),
            created_at: format_absolute(post.created_at, options.offset),
            created_ago: format_relative(post.created_at, options.now, options.locale),
            view_count: post.view_count,
            recommend_count: post.recommend_count,
            like_icon: if self.liked {
                LikeIcon::Filled
            } else {
                LikeIcon::Outline
            },
        })
    }
}
