//! Bucket Item Row Component

use leptos::prelude::*;

use bucket_core::{Item, ItemId};

/// One row: completion toggle, description, delete button
///
/// `on_toggle` receives the id and the completion state the row was rendered with.
#[component]
pub fn BucketItemRow(
    item: Item,
    #[prop(into)] on_toggle: Callback<(ItemId, bool)>,
    #[prop(into)] on_delete: Callback<ItemId>,
) -> impl IntoView {
    let Item { id, description, completed } = item;
    let delete_id = id.clone();

    view! {
        <li class="bucket-row">
            <button
                class="toggle-btn"
                title={if completed { "Mark as not done" } else { "Mark as done" }}
                on:click=move |_| on_toggle.run((id.clone(), completed))
            >
                {if completed { "☑" } else { "☐" }}
            </button>

            <span class={if completed { "bucket-text completed" } else { "bucket-text" }}>
                {description}
            </span>

            <button class="delete-btn" title="Delete" on:click=move |_| on_delete.run(delete_id.clone())>
                "🗑"
            </button>
        </li>
    }
}
