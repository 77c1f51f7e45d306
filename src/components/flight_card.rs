//! Flight Card Component

use leptos::prelude::*;

use bucket_core::FlightOffer;

/// Read-only card for one sample offer
#[component]
pub fn FlightCard(offer: FlightOffer) -> impl IntoView {
    let emissions_class = if offer.emissions.is_above_typical() {
        "emissions above-typical"
    } else {
        "emissions below-typical"
    };

    view! {
        <article class="flight-card">
            <img class="airline-logo" src=offer.airline.logo alt=offer.airline.name />
            <div class="flight-summary">
                <span class="flight-time">{offer.time}</span>
                <span class="airline-name">{offer.airline.name}</span>
            </div>
            <span class="flight-duration">{offer.duration}</span>
            <div class=emissions_class>
                <span>{format!("{} kg CO2e", offer.emissions.kg)}</span>
                <span class="emissions-change">{offer.emissions.label()}</span>
            </div>
            <span class="flight-price">{offer.price_label()}</span>
            <ul class="flight-details">
                {offer.details.iter().map(|detail| view! { <li>{*detail}</li> }).collect_view()}
            </ul>
        </article>
    }
}
