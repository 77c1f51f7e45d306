//! Actions
//!
//! Each action makes one gateway call and turns a successful response into a
//! `Change`. Failures are logged here and returned; the caller decides
//! whether to look at them. Nothing is retried.

use crate::domain::{BucketError, BucketResult, ItemId};
use crate::gateway::BucketGateway;

use super::Change;

/// Fetch the current collection
pub async fn load<G: BucketGateway + ?Sized>(gateway: &G) -> BucketResult<Change> {
    match gateway.list_items().await {
        Ok(items) => {
            log::debug!("Loaded {} items", items.len());
            Ok(Change::Replaced(items))
        }
        Err(err) => Err(report(err)),
    }
}

/// Create an item from the editor's text
///
/// Blank text is rejected before any request is made. The text is sent as typed.
pub async fn create<G: BucketGateway + ?Sized>(gateway: &G, description: &str) -> BucketResult<Change> {
    if description.trim().is_empty() {
        log::debug!("Ignoring empty submission");
        return Err(BucketError::EmptyDescription);
    }
    match gateway.create_item(description).await {
        Ok(item) => {
            log::debug!("Created item {}", item.id);
            Ok(Change::Appended(item))
        }
        Err(err) => Err(report(err)),
    }
}

/// Send the negation of `current` for one item
pub async fn toggle_complete<G: BucketGateway + ?Sized>(
    gateway: &G,
    id: &ItemId,
    current: bool,
) -> BucketResult<Change> {
    let completed = !current;
    match gateway.set_completed(id, completed).await {
        Ok(()) => Ok(Change::CompletedSet { id: id.clone(), completed }),
        Err(err) => Err(report(err)),
    }
}

pub async fn delete<G: BucketGateway + ?Sized>(gateway: &G, id: &ItemId) -> BucketResult<Change> {
    match gateway.delete_item(id).await {
        Ok(()) => {
            log::debug!("Deleted item {}", id);
            Ok(Change::Removed(id.clone()))
        }
        Err(err) => Err(report(err)),
    }
}

fn report(err: BucketError) -> BucketError {
    log::error!("{}", err);
    err
}
