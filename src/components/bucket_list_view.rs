//! Bucket List View Component
//!
//! Renders the store's items in order and wires the row actions to the gateway.

use leptos::prelude::*;
use leptos::task::spawn_local;

use bucket_core::{BucketList, Item, ItemId};

use crate::components::BucketItemRow;
use crate::gateway::GatewayHandle;
use crate::store::{delete_item, toggle_item, DashboardStateStoreFields, DashboardStore};

/// Rows paired with their position in the list
fn indexed_rows(list: &BucketList) -> Vec<(usize, Item)> {
    list.items().iter().cloned().enumerate().collect()
}

/// Position keeps repeated ids apart; completion makes a toggled row re-render
fn row_key((position, item): &(usize, Item)) -> (usize, ItemId, bool) {
    (*position, item.id.clone(), item.completed)
}

#[component]
pub fn BucketListView(store: DashboardStore, gateway: GatewayHandle) -> impl IntoView {
    let on_toggle = Callback::new(move |(id, completed): (ItemId, bool)| {
        spawn_local(async move {
            let gateway = gateway.get_value();
            let _ = toggle_item(&store, &gateway, &id, completed).await;
        });
    });

    let on_delete = Callback::new(move |id: ItemId| {
        spawn_local(async move {
            let gateway = gateway.get_value();
            let _ = delete_item(&store, &gateway, &id).await;
        });
    });

    view! {
        <div class="bucket-list-header">
            <h3 class="grow">"BucketList Item"</h3>
            <h3>"Actions"</h3>
        </div>

        <ul class="bucket-list">
            <For
                each=move || indexed_rows(&store.list().read())
                key=row_key
                children=move |(_, item)| {
                    view! {
                        <BucketItemRow item=item on_toggle=on_toggle on_delete=on_delete />
                    }
                }
            />
        </ul>

        <p class="item-count">
            {move || {
                let list = store.list().read();
                format!("{} items, {} completed", list.len(), list.completed_count())
            }}
        </p>
    }
}
