pub mod comments;
pub mod detail;
pub mod list;

pub use comments::{CommentListView, RenderedComment, SubmitOutcome, submit_comment};
pub use detail::{
    DetailLoad, DetailState, LikeIcon, LikeMode, LikeOutcome, LikeRequest, NotFoundReason,
    PostDetailView, RenderOptions, RenderedPost, ViewIncrement,
};
pub use list::{PostCard, PostListView, post_href};
