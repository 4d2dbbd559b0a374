use chrono::Duration;
use serde::Deserialize;

use crate::token::TokenPurpose;

/// Issuer written into every token unless overridden.
pub const DEFAULT_ISSUER: &str = "Camper";

/// Signing configuration for token issuance and validation.
///
/// Loaded once at process start and injected into each component; nothing in
/// this crate reads ambient global state. Derives `Deserialize` so a host can
/// hydrate it from its own layered configuration.
///
/// # Security Notes
/// - The secret should be at least 256 bits (32 bytes) for HS256
/// - Store secrets in environment variables or secure vaults, never in code
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Symmetric signing secret shared by issuance and validation
    pub secret: String,

    /// Issuer claim value
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// Lifetime of authentication tokens, in seconds
    pub auth_token_ttl_secs: i64,

    /// Lifetime of password-reset tokens, in seconds
    pub password_reset_ttl_secs: i64,
}

fn default_issuer() -> String {
    DEFAULT_ISSUER.to_string()
}

impl AuthConfig {
    /// Create a configuration with the default issuer.
    pub fn new(
        secret: impl Into<String>,
        auth_token_ttl_secs: i64,
        password_reset_ttl_secs: i64,
    ) -> Self {
        Self {
            secret: secret.into(),
            issuer: default_issuer(),
            auth_token_ttl_secs,
            password_reset_ttl_secs,
        }
    }

    /// Override the issuer claim value.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    /// Time-to-live for tokens of the given purpose.
    pub fn ttl(&self, purpose: TokenPurpose) -> Duration {
        let secs = match purpose {
            TokenPurpose::Authentication => self.auth_token_ttl_secs,
            TokenPurpose::PasswordReset => self.password_reset_ttl_secs,
        };
        Duration::seconds(secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_per_purpose() {
        let config = AuthConfig::new("secret_key_at_least_32_bytes_long!!", 3600, 600);

        assert_eq!(
            config.ttl(TokenPurpose::Authentication),
            Duration::seconds(3600)
        );
        assert_eq!(
            config.ttl(TokenPurpose::PasswordReset),
            Duration::seconds(600)
        );
    }

    #[test]
    fn test_default_issuer() {
        let config = AuthConfig::new("secret_key_at_least_32_bytes_long!!", 1, 1);
        assert_eq!(config.issuer, "Camper");

        let config = config.with_issuer("other");
        assert_eq!(config.issuer, "other");
    }

    #[test]
    fn test_deserialize_defaults_issuer() {
        let config: AuthConfig = serde_json::from_str(
            r#"{"secret":"s","auth_token_ttl_secs":10,"password_reset_ttl_secs":20}"#,
        )
        .unwrap();

        assert_eq!(config.issuer, "Camper");
        assert_eq!(config.auth_token_ttl_secs, 10);
        assert_eq!(config.password_reset_ttl_secs, 20);
    }
}
