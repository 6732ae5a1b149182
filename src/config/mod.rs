// src/config/mod.rs
// Configuration for the generation gateway and HTTP surface

mod env;

pub use env::{
    DEFAULT_API_URL, DEFAULT_HOST, DEFAULT_MODEL, DEFAULT_PORT, GatewayConfig, ServerConfig,
};
