use crate::config::ClientConfig;
use crate::error::HttpError;
use async_trait::async_trait;
use board_core::api::endpoints;
use board_core::model::{NewComment, RecommendationUpdate};
use board_core::{BoardApi, BoardError, Comment, Direction, PostDetail, PostId, PostSummary, UserId};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

#[derive(Clone)]
pub struct BoardClientHttp {
    client: Arc<Client>,
    base_url: Url,
}

impl BoardClientHttp {
    pub fn connect(endpoint: &str) -> Result<Self, BoardError> {
        Self::from_config(&ClientConfig {
            api_url: endpoint.to_string(),
            ..ClientConfig::default()
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, BoardError> {
        let base_url = endpoints::base(&config.api_url)?;
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(HttpError::from)?;
        Ok(Self {
            client: Arc::new(client),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response, HttpError> {
        let req = req
            .header(reqwest::header::ACCEPT, "application/json")
            .build()?;
        let (method, url) = (req.method().clone(), req.url().clone());
        let resp = self.client.execute(req).await?;
        tracing::debug!(%method, %url, status = resp.status().as_u16(), "board api call");

        if resp.status().is_success() {
            Ok(resp)
        } else {
            Err(HttpError::from_http_response(resp).await)
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, HttpError> {
        let resp = self.send(req).await?;
        Ok(resp.json().await?)
    }
}

#[async_trait(?Send)]
impl BoardApi for BoardClientHttp {
    async fn list_posts(&self) -> Result<Vec<PostSummary>, BoardError> {
        let req = self.client.get(endpoints::posts(&self.base_url));
        // Older backends answer `null` for an empty board.
        let posts: Option<Vec<PostSummary>> = self.send_json(req).await?;
        Ok(posts.unwrap_or_default())
    }

    async fn get_post(&self, id: &PostId) -> Result<Option<PostDetail>, BoardError> {
        let req = self.client.get(endpoints::post(&self.base_url, id));
        match self.send_json(req).await {
            Ok(post) => Ok(post),
            Err(HttpError::Status { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn increment_view(&self, id: &PostId) -> Result<(), BoardError> {
        let req = self.client.post(endpoints::view(&self.base_url, id));
        self.send(req).await?;
        Ok(())
    }

    async fn check_recommendation(&self, id: &PostId, user: &UserId) -> Result<bool, BoardError> {
        let req = self
            .client
            .get(endpoints::recommendation(&self.base_url, id))
            .query(&[("userId", user.as_str())]);
        Ok(self.send_json(req).await?)
    }

    async fn update_recommendation(
        &self,
        id: &PostId,
        user: &UserId,
        direction: Direction,
    ) -> Result<(), BoardError> {
        let req = self
            .client
            .post(endpoints::recommendation(&self.base_url, id))
            .json(&RecommendationUpdate {
                user_id: user,
                direction,
            });
        self.send(req).await?;
        Ok(())
    }

    async fn list_comments(&self, id: &PostId) -> Result<Vec<Comment>, BoardError> {
        let req = self.client.get(endpoints::comments(&self.base_url, id));
        let comments: Option<Vec<Comment>> = self.send_json(req).await?;
        Ok(comments.unwrap_or_default())
    }

    async fn create_comment(
        &self,
        id: &PostId,
        user: &UserId,
        content: &str,
    ) -> Result<Comment, BoardError> {
        let req = self
            .client
            .post(endpoints::comments(&self.base_url, id))
            .json(&NewComment {
                user_id: user,
                content,
            });
        Ok(self.send_json(req).await?)
    }
}
