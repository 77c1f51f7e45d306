//! Flight Panel Component

use leptos::prelude::*;

use bucket_core::SAMPLE_OFFERS;

use crate::components::FlightCard;

/// The fixed list of sample offers; no state, no requests
#[component]
pub fn FlightPanel() -> impl IntoView {
    view! {
        <div class="flight-panel">
            {SAMPLE_OFFERS.iter().map(|offer| view! { <FlightCard offer=*offer /> }).collect_view()}
        </div>
    }
}
