//! Gateway handle shared by the dashboard components.

use leptos::prelude::*;

use bucket_core::{GatewayConfig, HttpGateway};

/// Copyable handle; the gateway itself stays on the UI thread
pub type GatewayHandle = StoredValue<HttpGateway, LocalStorage>;

pub fn create_gateway() -> GatewayHandle {
    let config = GatewayConfig::from_build_env();
    log::info!("Bucket API at {}", config.origin());
    StoredValue::new_local(HttpGateway::new(config))
}
