use std::fmt;

#[derive(Debug)]
pub enum GatewayError {
    ConfigError(String),
    ValidationError(String),
    RequestError(String),
    UpstreamError(String),
    RateLimited(String),
    QuotaExhausted(String),
    ResponseError(String),
    AllProvidersFailed(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GatewayError::ValidationError(msg) => write!(f, "{}", msg),
            GatewayError::RequestError(msg) => write!(f, "Request error: {}", msg),
            GatewayError::UpstreamError(msg) => write!(f, "Upstream error: {}", msg),
            GatewayError::RateLimited(msg) => write!(f, "Rate limited: {}", msg),
            GatewayError::QuotaExhausted(msg) => write!(f, "Quota exhausted: {}", msg),
            GatewayError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            GatewayError::AllProvidersFailed(msg) => write!(f, "All providers failed: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

pub type Result<T> = std::result::Result<T, GatewayError>;
