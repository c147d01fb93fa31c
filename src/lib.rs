pub mod config;
pub mod error;
pub mod gateway;
pub mod logger;
pub mod models;
pub mod params;
pub mod server;
pub mod validate;

pub use config::{Config, Credential, CredentialRank, GatewayConfig};
pub use error::{GatewayError, Result};
pub use gateway::{GatewayClient, ImageClient, TextClient};
pub use models::*;
