use std::env;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialRank {
    Primary,
    Backup,
}

impl CredentialRank {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialRank::Primary => "primary",
            CredentialRank::Backup => "backup",
        }
    }
}

/// One provider API key. The key itself never appears in Debug or Display
/// output.
#[derive(Clone)]
pub struct Credential {
    pub key: String,
    pub rank: CredentialRank,
}

impl Credential {
    pub fn new(key: impl Into<String>, rank: CredentialRank) -> Self {
        Self {
            key: key.into(),
            rank,
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("key", &"<redacted>")
            .field("rank", &self.rank)
            .finish()
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} credential", self.rank.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub backup_api_key: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            base_url: None,
            api_key: None,
            backup_api_key: None,
        }
    }
}

impl GatewayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let base_url = env::var("AI_GATEWAY_URL").ok();
        let api_key = env::var("AI_GATEWAY_API_KEY").ok();
        let backup_api_key = env::var("AI_GATEWAY_API_KEY_BACKUP").ok();

        GatewayConfig {
            base_url,
            api_key,
            backup_api_key,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_backup_key(mut self, backup_api_key: impl Into<String>) -> Self {
        self.backup_api_key = Some(backup_api_key.into());
        self
    }

    /// Ordered fallback list: primary first, backup second. Empty when no
    /// key is configured.
    pub fn credentials(&self) -> Vec<Credential> {
        let mut credentials = Vec::new();
        if let Some(key) = &self.api_key {
            credentials.push(Credential::new(key, CredentialRank::Primary));
        }
        if let Some(key) = &self.backup_api_key {
            credentials.push(Credential::new(key, CredentialRank::Backup));
        }
        credentials
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: Option<u16>,
    pub gateway: Option<GatewayConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: None,
            gateway: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let port = env::var("PORT").ok().and_then(|port| port.parse().ok());

        Config {
            port,
            gateway: Some(GatewayConfig::from_env()),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_gateway(mut self, config: GatewayConfig) -> Self {
        self.gateway = Some(config);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_are_ordered_primary_first() {
        let config = GatewayConfig::new()
            .with_api_key("key-a")
            .with_backup_key("key-b");

        let credentials = config.credentials();
        assert_eq!(credentials.len(), 2);
        assert_eq!(credentials[0].rank, CredentialRank::Primary);
        assert_eq!(credentials[1].rank, CredentialRank::Backup);
        assert_eq!(credentials[0].key, "key-a");
        assert_eq!(credentials[1].key, "key-b");
    }

    #[test]
    fn missing_keys_yield_empty_credential_list() {
        assert!(GatewayConfig::new().credentials().is_empty());
    }

    #[test]
    fn backup_only_is_still_ranked_backup() {
        let credentials = GatewayConfig::new().with_backup_key("key-b").credentials();
        assert_eq!(credentials.len(), 1);
        assert_eq!(credentials[0].rank, CredentialRank::Backup);
    }

    #[test]
    fn debug_output_redacts_the_key() {
        let credential = Credential::new("secret-value", CredentialRank::Primary);
        let printed = format!("{:?}", credential);
        assert!(!printed.contains("secret-value"));
        assert!(printed.contains("redacted"));
    }
}
