//! Gateway Layer
//!
//! The backend contract the list state depends on.
//! `HttpGateway` talks to the real service; tests substitute in-memory fakes.

mod http;

use async_trait::async_trait;

use crate::domain::{BucketResult, Item, ItemId};

pub use http::HttpGateway;

/// Backend operations on the signed-in user's bucket list
///
/// Futures are not `Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait BucketGateway {
    /// Fetch the whole collection, in server order
    async fn list_items(&self) -> BucketResult<Vec<Item>>;

    /// Create an item; the server assigns its id
    async fn create_item(&self, description: &str) -> BucketResult<Item>;

    /// Store a new completion flag for an item
    async fn set_completed(&self, id: &ItemId, completed: bool) -> BucketResult<()>;

    async fn delete_item(&self, id: &ItemId) -> BucketResult<()>;
}

#[async_trait(?Send)]
impl<G: BucketGateway + ?Sized> BucketGateway for &G {
    async fn list_items(&self) -> BucketResult<Vec<Item>> {
        (**self).list_items().await
    }

    async fn create_item(&self, description: &str) -> BucketResult<Item> {
        (**self).create_item(description).await
    }

    async fn set_completed(&self, id: &ItemId, completed: bool) -> BucketResult<()> {
        (**self).set_completed(id, completed).await
    }

    async fn delete_item(&self, id: &ItemId) -> BucketResult<()> {
        (**self).delete_item(id).await
    }
}
