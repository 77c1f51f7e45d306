//! Domain Layer
//!
//! Bucket-list items, the static flight offers and the error taxonomy.
//! Nothing here touches the network.

mod error;
mod flight;
mod item;

pub use error::{BucketError, BucketResult, Operation};
pub use flight::{Airline, Emissions, FlightOffer, SAMPLE_OFFERS};
pub use item::{Item, ItemId};
