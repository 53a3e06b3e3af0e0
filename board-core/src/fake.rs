//! In-memory `BoardApi` that records every call, for view tests.

use crate::api::BoardApi;
use crate::error::BoardError;
use crate::model::{Author, Comment, Direction, PostDetail, PostId, PostSummary, UserId};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

#[derive(Default)]
pub(crate) struct FakeBoard {
    pub summaries: RefCell<Vec<PostSummary>>,
    pub posts: RefCell<HashMap<PostId, PostDetail>>,
    pub recommended: RefCell<HashSet<(PostId, UserId)>>,
    pub comments: RefCell<Vec<Comment>>,
    pub offline: Cell<bool>,
    pub failing: RefCell<HashSet<&'static str>>,
    pub calls: RefCell<Vec<String>>,
}

pub(crate) fn detail(id: &str, title: &str) -> PostDetail {
    PostDetail {
        id: PostId::new(id),
        title: title.to_string(),
        content: format!("<p>{title} body</p>"),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
        view_count: 10,
        recommend_count: 2,
        author: Author {
            id: None,
            name: "writer".to_string(),
        },
    }
}

impl FakeBoard {
    pub fn with_post(post: PostDetail) -> Self {
        let fake = Self::default();
        fake.posts.borrow_mut().insert(post.id.clone(), post);
        fake
    }

    pub fn calls_to(&self, name: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.split(':').next() == Some(name))
            .count()
    }

    pub fn fail(&self, name: &'static str) {
        self.failing.borrow_mut().insert(name);
    }

    fn record(&self, call: String) -> Result<(), BoardError> {
        let name = call.split(':').next().unwrap_or_default().to_string();
        self.calls.borrow_mut().push(call);
        if self.offline.get() || self.failing.borrow().contains(name.as_str()) {
            Err(BoardError::Transport("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl BoardApi for FakeBoard {
    async fn list_posts(&self) -> Result<Vec<PostSummary>, BoardError> {
        self.record("list_posts".to_string())?;
        Ok(self.summaries.borrow().clone())
    }

    async fn get_post(&self, id: &PostId) -> Result<Option<PostDetail>, BoardError> {
        self.record(format!("get_post:{id}"))?;
        Ok(self.posts.borrow().get(id).cloned())
    }

    async fn increment_view(&self, id: &PostId) -> Result<(), BoardError> {
        self.record(format!("increment_view:{id}"))?;
        if let Some(post) = self.posts.borrow_mut().get_mut(id) {
            post.view_count += 1;
        }
        Ok(())
    }

    async fn check_recommendation(&self, id: &PostId, user: &UserId) -> Result<bool, BoardError> {
        self.record(format!("check_recommendation:{id}:{user}"))?;
        Ok(self
            .recommended
            .borrow()
            .contains(&(id.clone(), user.clone())))
    }

    async fn update_recommendation(
        &self,
        id: &PostId,
        user: &UserId,
        direction: Direction,
    ) -> Result<(), BoardError> {
        self.record(format!("update_recommendation:{id}:{user}:{direction}"))?;
        let key = (id.clone(), user.clone());
        let changed = match direction {
            Direction::Increase => self.recommended.borrow_mut().insert(key),
            Direction::Decrease => self.recommended.borrow_mut().remove(&key),
        };
        if let Some(post) = self.posts.borrow_mut().get_mut(id) {
            match direction {
                Direction::Increase if changed => post.recommend_count += 1,
                Direction::Decrease if changed => post.recommend_count -= 1,
                _ => {}
            }
        }
        Ok(())
    }

    async fn list_comments(&self, id: &PostId) -> Result<Vec<Comment>, BoardError> {
        self.record(format!("list_comments:{id}"))?;
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter(|c| &c.post_id == id)
            .cloned()
            .collect())
    }

    async fn create_comment(
        &self,
        id: &PostId,
        user: &UserId,
        content: &str,
    ) -> Result<Comment, BoardError> {
        self.record(format!("create_comment:{id}:{user}"))?;
        let comment = Comment {
            id: format!("c{}", self.comments.borrow().len() + 1),
            post_id: id.clone(),
            content: content.to_string(),
            author: Some(Author {
                id: Some(user.to_string()),
                name: user.to_string(),
            }),
            created_at: Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap(),
        };
        self.comments.borrow_mut().push(comment.clone());
        Ok(comment)
    }
}
