//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The dashboard page
//! owns the store and hands it to its children as a prop; the functions below
//! are the only way components change it.

use leptos::prelude::*;
use reactive_stores::Store;

use bucket_core::{actions, BucketGateway, BucketList, BucketResult, Change, ItemId};

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Server-confirmed bucket-list items
    pub list: BucketList,
    /// Pending text of the item editor
    pub draft: String,
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

// ========================
// Store Helper Functions
// ========================

/// Apply a server-confirmed change to the list
pub fn store_apply(store: &DashboardStore, change: Change) {
    store.list().write().apply(change);
}

pub fn store_clear_draft(store: &DashboardStore) {
    store.draft().set(String::new());
}

// ========================
// List Operations
// ========================

/// Replace the list with the server's collection
pub async fn load_items<G: BucketGateway + ?Sized>(store: &DashboardStore, gateway: &G) -> BucketResult<()> {
    let change = actions::load(gateway).await?;
    store_apply(store, change);
    Ok(())
}

/// Create an item from the draft; the draft is cleared only when the server accepts it
pub async fn submit_draft<G: BucketGateway + ?Sized>(store: &DashboardStore, gateway: &G) -> BucketResult<()> {
    let draft = store.draft().get_untracked();
    let change = actions::create(gateway, &draft).await?;
    store_apply(store, change);
    store_clear_draft(store);
    Ok(())
}

pub async fn toggle_item<G: BucketGateway + ?Sized>(
    store: &DashboardStore,
    gateway: &G,
    id: &ItemId,
    current: bool,
) -> BucketResult<()> {
    let change = actions::toggle_complete(gateway, id, current).await?;
    store_apply(store, change);
    Ok(())
}

pub async fn delete_item<G: BucketGateway + ?Sized>(
    store: &DashboardStore,
    gateway: &G,
    id: &ItemId,
) -> BucketResult<()> {
    let change = actions::delete(gateway, id).await?;
    store_apply(store, change);
    Ok(())
}
