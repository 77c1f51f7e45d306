//! Item Editor Component
//!
//! Form for adding a bucket-list item.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::gateway::GatewayHandle;
use crate::store::{submit_draft, DashboardStateStoreFields, DashboardStore};

/// Text field bound to the store's draft
///
/// Blank drafts never reach the server. The field is cleared only after the
/// server has created the item.
#[component]
pub fn ItemEditor(store: DashboardStore, gateway: GatewayHandle) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let gateway = gateway.get_value();
            let _ = submit_draft(&store, &gateway).await;
        });
    };

    view! {
        <form class="item-editor" on:submit=submit>
            <div class="item-editor-row">
                <input
                    type="text"
                    required
                    placeholder="Something you'd like to do"
                    prop:value=move || store.draft().get()
                    on:input=move |ev| store.draft().set(event_target_value(&ev))
                />
                <button type="submit">"Add to List"</button>
            </div>
        </form>
    }
}
