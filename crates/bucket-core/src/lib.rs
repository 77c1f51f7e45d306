//! Bucket Dashboard Core
//!
//! Target-independent pieces shared by the front end and its tests:
//! - domain: items, flight offers and errors
//! - gateway: the backend contract and its HTTP implementation
//! - store: the list state container and the actions that mutate it

pub mod config;
pub mod domain;
pub mod gateway;
pub mod store;

pub use config::GatewayConfig;
pub use domain::{BucketError, BucketResult, FlightOffer, Item, ItemId, Operation, SAMPLE_OFFERS};
pub use gateway::{BucketGateway, HttpGateway};
pub use store::{actions, BucketList, Change};
