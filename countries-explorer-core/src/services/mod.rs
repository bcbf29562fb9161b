//! Service layer

mod gateway_client;

pub use gateway_client::{DEFAULT_GATEWAY_URL, GatewayClient};
