use crate::error::GlooClientError;
use async_trait::async_trait;
use board_core::api::endpoints;
use board_core::model::{NewComment, RecommendationUpdate};
use board_core::{BoardApi, BoardError, Comment, Direction, PostDetail, PostId, PostSummary, UserId};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

/// `BoardApi` over the browser's fetch.
#[derive(Clone, PartialEq)]
pub struct BoardClientGloo {
    base_url: Url,
}

impl BoardClientGloo {
    pub fn connect(endpoint: &str) -> Result<Self, BoardError> {
        Ok(Self {
            base_url: endpoints::base(endpoint)?,
        })
    }

    // Универсальная отправка запроса
    async fn send(request: Request) -> Result<Response, GlooClientError> {
        let response = request.send().await?;

        if response.ok() {
            Ok(response)
        } else {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            Err(GlooClientError::Http {
                status,
                message: text,
            })
        }
    }

    async fn send_json<T: DeserializeOwned>(request: Request) -> Result<T, GlooClientError> {
        let response = Self::send(request).await?;
        Ok(response.json().await?)
    }

    fn get(url: Url) -> RequestBuilder {
        Request::get(url.as_str()).header("Accept", "application/json")
    }

    fn post(url: Url) -> RequestBuilder {
        Request::post(url.as_str()).header("Accept", "application/json")
    }
}

#[async_trait(?Send)]
impl BoardApi for BoardClientGloo {
    async fn list_posts(&self) -> Result<Vec<PostSummary>, BoardError> {
        let request = Self::get(endpoints::posts(&self.base_url))
            .build()
            .map_err(GlooClientError::from)?;
        let posts: Option<Vec<PostSummary>> = Self::send_json(request).await?;
        Ok(posts.unwrap_or_default())
    }

    async fn get_post(&self, id: &PostId) -> Result<Option<PostDetail>, BoardError> {
        let request = Self::get(endpoints::post(&self.base_url, id))
            .build()
            .map_err(GlooClientError::from)?;
        match Self::send_json(request).await {
            Ok(post) => Ok(post),
            Err(GlooClientError::Http { status: 404, .. }) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn increment_view(&self, id: &PostId) -> Result<(), BoardError> {
        let request = Self::post(endpoints::view(&self.base_url, id))
            .build()
            .map_err(GlooClientError::from)?;
        Self::send(request).await?;
        Ok(())
    }

    async fn check_recommendation(&self, id: &PostId, user: &UserId) -> Result<bool, BoardError> {
        let request = Self::get(endpoints::recommendation(&self.base_url, id))
            .query([("userId", user.as_str())])
            .build()
            .map_err(GlooClientError::from)?;
        Ok(Self::send_json(request).await?)
    }

    async fn update_recommendation(
        &self,
        id: &PostId,
        user: &UserId,
        direction: Direction,
    ) -> Result<(), BoardError> {
        let request = Self::post(endpoints::recommendation(&self.base_url, id))
            .json(&RecommendationUpdate {
                user_id: user,
                direction,
            })
            .map_err(GlooClientError::from)?;
        Self::send(request).await?;
        Ok(())
    }

    async fn list_comments(&self, id: &PostId) -> Result<Vec<Comment>, BoardError> {
        let request = Self::get(endpoints::comments(&self.base_url, id))
            .build()
            .map_err(GlooClientError::from)?;
        let comments: Option<Vec<Comment>> = Self::send_json(request).await?;
        Ok(comments.unwrap_or_default())
    }

    async fn create_comment(
        &self,
        id: &PostId,
        user: &UserId,
        content: &str,
    ) -> Result<Comment, BoardError> {
        let request = Self::post(endpoints::comments(&self.base_url, id))
            .json(&NewComment {
                user_id: user,
                content,
            })
            .map_err(GlooClientError::from)?;
        Ok(Self::send_json(request).await?)
    }
}
