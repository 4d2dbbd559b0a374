use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::TokenError;

/// Claim set carried by every token this system issues.
///
/// The field names are the wire format: collaborators reading claims directly
/// depend on these exact keys. The schema is identical across purposes; only
/// `exp` differs. `jti` is set equal to `sub` and is a correlation identifier,
/// not a uniqueness guarantee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: user id, string-encoded
    pub sub: String,

    /// Email address of the subject
    pub username: String,

    /// Issuing system
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration (Unix timestamp)
    pub exp: i64,

    /// Token id, equal to `sub`
    pub jti: String,
}

impl Claims {
    /// Build the claim set for a token issued at `issued_at` that lives `ttl`.
    pub fn new(
        user_id: i64,
        username: &str,
        issuer: &str,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        let expires_at = issued_at + ttl;

        Self {
            sub: user_id.to_string(),
            username: username.to_string(),
            iss: issuer.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            jti: user_id.to_string(),
        }
    }

    /// Parse the subject claim back into a numeric user id.
    ///
    /// # Errors
    /// * `MalformedSubject` - Subject is not a valid `i64`
    pub fn subject_id(&self) -> Result<i64, TokenError> {
        self.sub
            .parse()
            .map_err(|_| TokenError::MalformedSubject(self.sub.clone()))
    }

    /// Whether the token is expired at `now` (Unix timestamp).
    ///
    /// The boundary is exclusive: a token is still live at the exact `exp`
    /// instant and dead strictly after it.
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp < now
    }
}
