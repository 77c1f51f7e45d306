//! HTTP Gateway
//!
//! reqwest client for the bucket REST API. In the browser reqwest uses
//! `fetch`, and every request carries the session cookie.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

use super::BucketGateway;
use crate::config::GatewayConfig;
use crate::domain::{BucketError, BucketResult, Item, ItemId, Operation};

/// RFC 3986 unreserved characters stay as they are in a path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

// ========================
// Wire Types
// ========================

#[derive(Deserialize)]
struct BucketBody {
    items: Vec<Item>,
}

#[derive(Serialize)]
struct NewItemBody<'a> {
    description: &'a str,
}

#[derive(Serialize)]
struct CompletedBody {
    completed: bool,
}

// ========================
// Gateway
// ========================

#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    config: GatewayConfig,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    fn item_path(id: &ItemId) -> String {
        format!("/api/bucket/items/{}", utf8_percent_encode(id.as_str(), PATH_SEGMENT))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.config.url(path));
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    /// Send and reject any non-2xx status
    async fn send(&self, operation: Operation, builder: RequestBuilder) -> BucketResult<Response> {
        let response = builder
            .send()
            .await
            .map_err(|source| BucketError::Transport { operation, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BucketError::Status {
                operation,
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

#[async_trait(?Send)]
impl BucketGateway for HttpGateway {
    async fn list_items(&self) -> BucketResult<Vec<Item>> {
        let operation = Operation::List;
        let response = self.send(operation, self.request(Method::GET, "/api/bucket")).await?;
        let body: BucketBody = response
            .json()
            .await
            .map_err(|source| BucketError::Decode { operation, source })?;
        Ok(body.items)
    }

    async fn create_item(&self, description: &str) -> BucketResult<Item> {
        let operation = Operation::Create;
        let builder = self
            .request(Method::POST, "/api/bucket/items")
            .json(&NewItemBody { description });
        let response = self.send(operation, builder).await?;
        response
            .json()
            .await
            .map_err(|source| BucketError::Decode { operation, source })
    }

    async fn set_completed(&self, id: &ItemId, completed: bool) -> BucketResult<()> {
        // The response body (updated item or whole bucket) is not needed
        let path = format!("{}/completed", Self::item_path(id));
        let builder = self.request(Method::POST, &path).json(&CompletedBody { completed });
        self.send(Operation::SetCompleted, builder).await?;
        Ok(())
    }

    async fn delete_item(&self, id: &ItemId) -> BucketResult<()> {
        let builder = self.request(Method::DELETE, &Self::item_path(id));
        self.send(Operation::Delete, builder).await?;
        Ok(())
    }
}
