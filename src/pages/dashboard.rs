//! Dashboard Page
//!
//! Bucket list on the left, sample flights on the right.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{BucketListView, DiagnosticsPanel, FlightPanel, ItemEditor};
use crate::gateway::create_gateway;
use crate::store::{load_items, DashboardState};

#[component]
pub fn Dashboard() -> impl IntoView {
    let store = Store::new(DashboardState::default());
    let gateway = create_gateway();

    // Load items on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let gateway = gateway.get_value();
            let _ = load_items(&store, &gateway).await;
        });
    });

    view! {
        <div class="dashboard">
            <section class="bucket-column">
                <h1>"Your BucketList"</h1>
                <ItemEditor store=store gateway=gateway />
                <BucketListView store=store gateway=gateway />
                <DiagnosticsPanel />
            </section>

            <section class="flight-column">
                <h1>"Real-time Flight Data"</h1>
                <FlightPanel />
            </section>
        </div>
    }
}
