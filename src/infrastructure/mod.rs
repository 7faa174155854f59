// src/infrastructure/mod.rs
pub mod config;
pub mod openkey;

pub use config::{AuthScheme, ClientConfig};
pub use openkey::{normalize_response, OpenKeyClient};
