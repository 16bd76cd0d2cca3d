use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use shared::{
    domain::{Comment, CommentId, Post, PostId},
    protocol::{CommentUpdateBody, NewCommentBody, PostBody},
};
use tracing::{debug, warn};
use url::Url;

use crate::{error::BackendError, resource::Resource, PostsBackend};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// `PostsBackend` over plain REST/JSON.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let base_url = normalize_base_url(base_url)?;
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url<R: Resource>(&self) -> String {
        format!("{}/{}", self.base_url, R::route())
    }

    fn record_url<R: Resource>(&self, id: R::Id) -> String {
        format!("{}/{}/{id}", self.base_url, R::route())
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, BackendError> {
        let res = request.send().await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(res)
    }

    async fn fetch_all<R: Resource>(&self) -> Result<Vec<R>, BackendError> {
        let url = self.collection_url::<R>();
        debug!(%url, "fetching collection");
        let values: Vec<serde_json::Value> = self.send(self.http.get(url)).await?.json().await?;
        let records = values
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<R>(value) {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!(kind = R::KIND, error = %err, "skipping malformed record");
                    None
                }
            })
            .collect();
        Ok(records)
    }

    async fn create<R: Resource>(&self, body: &R::Create) -> Result<R, BackendError> {
        let url = self.collection_url::<R>();
        debug!(%url, kind = R::KIND, "creating record");
        let record: R = self.send(self.http.post(url).json(body)).await?.json().await?;
        Ok(record)
    }

    async fn replace<R: Resource>(&self, id: R::Id, body: &R::Update) -> Result<(), BackendError> {
        let url = self.record_url::<R>(id);
        debug!(%url, kind = R::KIND, "replacing record");
        self.send(self.http.put(url).json(body)).await?;
        Ok(())
    }

    async fn remove<R: Resource>(&self, id: R::Id) -> Result<(), BackendError> {
        let url = self.record_url::<R>(id);
        debug!(%url, kind = R::KIND, "deleting record");
        self.send(self.http.delete(url)).await?;
        Ok(())
    }
}

#[async_trait]
impl PostsBackend for HttpBackend {
    async fn list_posts(&self) -> Result<Vec<Post>, BackendError> {
        self.fetch_all::<Post>().await
    }

    async fn list_comments(&self) -> Result<Vec<Comment>, BackendError> {
        self.fetch_all::<Comment>().await
    }

    async fn create_post(&self, body: &PostBody) -> Result<Post, BackendError> {
        self.create::<Post>(body).await
    }

    async fn replace_post(&self, id: PostId, body: &PostBody) -> Result<(), BackendError> {
        self.replace::<Post>(id, body).await
    }

    async fn delete_post(&self, id: PostId) -> Result<(), BackendError> {
        self.remove::<Post>(id).await
    }

    async fn create_comment(&self, body: &NewCommentBody) -> Result<Comment, BackendError> {
        self.create::<Comment>(body).await
    }

    async fn replace_comment(
        &self,
        id: CommentId,
        body: &CommentUpdateBody,
    ) -> Result<(), BackendError> {
        self.replace::<Comment>(id, body).await
    }

    async fn delete_comment(&self, id: CommentId) -> Result<(), BackendError> {
        self.remove::<Comment>(id).await
    }
}

fn normalize_base_url(raw: &str) -> Result<String, BackendError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|err| BackendError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: err.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(BackendError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "tests/http_tests.rs"]
mod http_tests;
