use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;
use super::TokenPurpose;
use crate::config::AuthConfig;
use crate::principal::Principal;

/// Issues and validates the compact signed tokens of this system.
///
/// Signs with HS256 over a symmetric secret; the same secret is required to
/// verify. Stateless: every operation is a function of the token string, the
/// injected configuration, and the clock, so a single handler is safe for
/// unlimited concurrent use.
pub struct TokenHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    issuer: String,
    auth_token_ttl: Duration,
    password_reset_ttl: Duration,
}

impl TokenHandler {
    /// Create a handler from signing configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            algorithm: Algorithm::HS256,
            issuer: config.issuer.clone(),
            auth_token_ttl: config.ttl(TokenPurpose::Authentication),
            password_reset_ttl: config.ttl(TokenPurpose::PasswordReset),
        }
    }

    /// Issue a session-authentication token for a verified principal.
    pub fn issue_auth_token(&self, principal: &Principal) -> Result<String, TokenError> {
        self.issue(
            TokenPurpose::Authentication,
            principal.user_id(),
            principal.email(),
        )
    }

    /// Issue a one-time password-reset token.
    pub fn issue_password_reset_token(
        &self,
        user_id: i64,
        email: &str,
    ) -> Result<String, TokenError> {
        self.issue(TokenPurpose::PasswordReset, user_id, email)
    }

    fn issue(
        &self,
        purpose: TokenPurpose,
        user_id: i64,
        username: &str,
    ) -> Result<String, TokenError> {
        let ttl = match purpose {
            TokenPurpose::Authentication => self.auth_token_ttl,
            TokenPurpose::PasswordReset => self.password_reset_ttl,
        };
        let claims = Claims::new(user_id, username, &self.issuer, Utc::now(), ttl);

        let header = Header::new(self.algorithm);
        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    /// Verify signature and expiry, returning the decoded claim set.
    ///
    /// # Errors
    /// * `NotValid` - Malformed shape, decode failure, or signature mismatch
    /// * `Expired` - Signature valid but the expiration claim has passed
    /// * `Unsupported` - Header declares an algorithm this system does not use
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            let error = match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                    TokenError::Unsupported
                }
                // Everything else fails closed as a plain invalid token.
                _ => TokenError::NotValid,
            };
            tracing::debug!("token rejected: {}", error);
            error
        })?;

        Ok(token_data.claims)
    }

    /// Validate a token and extract the principal it encodes.
    ///
    /// # Errors
    /// Everything `validate` fails with, plus `MalformedSubject` when the
    /// subject claim is not a numeric user id.
    pub fn principal(&self, token: &str) -> Result<Principal, TokenError> {
        let claims = self.validate(token)?;
        let user_id = claims.subject_id()?;
        Ok(Principal::new(user_id, claims.username))
    }

    /// Validate a token and return its expiration instant.
    ///
    /// An already-expired token fails with `Expired` here too; expiry
    /// inspection is not a way around validation.
    pub fn expires_at(&self, token: &str) -> Result<DateTime<Utc>, TokenError> {
        let claims = self.validate(token)?;
        DateTime::from_timestamp(claims.exp, 0).ok_or(TokenError::NotValid)
    }
}

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    use super::*;

    const SECRET: &str = "test_secret_key_at_least_32_bytes!";

    fn handler() -> TokenHandler {
        TokenHandler::new(&AuthConfig::new(SECRET, 3600, 600))
    }

    fn encode_raw(claims: &Claims, algorithm: Algorithm) -> String {
        encode(
            &Header::new(algorithm),
            claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .expect("Failed to encode token")
    }

    /// Replace one character of the given segment with a different one.
    fn tamper_segment(token: &str, segment: usize) -> String {
        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        let target = &parts[segment];
        let flipped = if target.starts_with('A') { "B" } else { "A" };
        parts[segment] = format!("{}{}", flipped, &target[1..]);
        parts.join(".")
    }

    #[test]
    fn test_issue_and_validate_round_trip() {
        let handler = handler();
        let principal = Principal::new(42, "a@b.com");

        let token = handler
            .issue_auth_token(&principal)
            .expect("Failed to issue token");
        let claims = handler.validate(&token).expect("Failed to validate token");

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.username, "a@b.com");
        assert_eq!(claims.iss, "Camper");
        assert_eq!(claims.jti, "42");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_purpose_isolation() {
        let handler = handler();
        let principal = Principal::new(42, "a@b.com");

        let auth_token = handler.issue_auth_token(&principal).unwrap();
        let reset_token = handler.issue_password_reset_token(42, "a@b.com").unwrap();

        let auth_claims = handler.validate(&auth_token).unwrap();
        let reset_claims = handler.validate(&reset_token).unwrap();

        assert_eq!(auth_claims.sub, reset_claims.sub);
        assert_eq!(auth_claims.username, reset_claims.username);
        assert_eq!(auth_claims.exp - auth_claims.iat, 3600);
        assert_eq!(reset_claims.exp - reset_claims.iat, 600);
    }

    #[test]
    fn test_wire_format() {
        let handler = handler();
        let token = handler
            .issue_auth_token(&Principal::new(42, "a@b.com"))
            .unwrap();

        let parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3);

        let header: serde_json::Value =
            serde_json::from_slice(&URL_SAFE_NO_PAD.decode(parts[0]).unwrap()).unwrap();
        assert_eq!(header["typ"], "JWT");
        assert_eq!(header["alg"], "HS256");

        let payload: serde_json::Value =
            serde_json::from_slice(&URL_SAFE_NO_PAD.decode(parts[1]).unwrap()).unwrap();
        let keys: Vec<&str> = payload.as_object().unwrap().keys().map(|k| &**k).collect();
        for key in ["sub", "username", "iss", "iat", "exp", "jti"] {
            assert!(keys.contains(&key), "missing claim key {}", key);
        }
        assert_eq!(payload["sub"], "42");
        assert_eq!(payload["jti"], payload["sub"]);
    }

    #[test]
    fn test_validate_empty_token() {
        assert_eq!(handler().validate(""), Err(TokenError::NotValid));
    }

    #[test]
    fn test_validate_garbage_token() {
        let handler = handler();
        assert_eq!(handler.validate("not.a.token"), Err(TokenError::NotValid));
        assert_eq!(handler.validate("no-dots-at-all"), Err(TokenError::NotValid));
    }

    #[test]
    fn test_validate_wrong_secret() {
        let issuing = handler();
        let verifying =
            TokenHandler::new(&AuthConfig::new("another_secret_key_32_bytes_long!!", 3600, 600));

        let token = issuing
            .issue_auth_token(&Principal::new(42, "a@b.com"))
            .unwrap();
        assert_eq!(verifying.validate(&token), Err(TokenError::NotValid));
    }

    #[test]
    fn test_tampered_payload_and_signature() {
        let handler = handler();
        let token = handler
            .issue_auth_token(&Principal::new(42, "a@b.com"))
            .unwrap();

        assert_eq!(
            handler.validate(&tamper_segment(&token, 1)),
            Err(TokenError::NotValid)
        );
        assert_eq!(
            handler.validate(&tamper_segment(&token, 2)),
            Err(TokenError::NotValid)
        );
    }

    #[test]
    fn test_validate_expired() {
        let handler = handler();

        let issued_at = Utc::now() - Duration::seconds(120);
        let claims = Claims::new(42, "a@b.com", "Camper", issued_at, Duration::seconds(60));
        let token = encode_raw(&claims, Algorithm::HS256);

        assert_eq!(handler.validate(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_validate_not_yet_expired() {
        let handler = handler();

        let issued_at = Utc::now() - Duration::seconds(55);
        let claims = Claims::new(42, "a@b.com", "Camper", issued_at, Duration::seconds(60));
        let token = encode_raw(&claims, Algorithm::HS256);

        assert!(handler.validate(&token).is_ok());
    }

    #[test]
    fn test_validate_unsupported_algorithm() {
        let handler = handler();

        let claims = Claims::new(42, "a@b.com", "Camper", Utc::now(), Duration::seconds(60));
        let token = encode_raw(&claims, Algorithm::HS384);

        assert_eq!(handler.validate(&token), Err(TokenError::Unsupported));
    }

    #[test]
    fn test_principal_extraction() {
        let handler = handler();
        let token = handler
            .issue_auth_token(&Principal::new(42, "a@b.com"))
            .unwrap();

        let principal = handler.principal(&token).expect("Failed to get principal");
        assert_eq!(principal, Principal::new(42, "a@b.com"));
    }

    #[test]
    fn test_principal_malformed_subject() {
        let handler = handler();

        let mut claims = Claims::new(42, "a@b.com", "Camper", Utc::now(), Duration::seconds(60));
        claims.sub = "forty-two".to_string();
        let token = encode_raw(&claims, Algorithm::HS256);

        assert_eq!(
            handler.principal(&token),
            Err(TokenError::MalformedSubject("forty-two".to_string()))
        );
    }

    #[test]
    fn test_expires_at() {
        let handler = handler();
        let token = handler
            .issue_auth_token(&Principal::new(42, "a@b.com"))
            .unwrap();

        let claims = handler.validate(&token).unwrap();
        let expires_at = handler.expires_at(&token).unwrap();
        assert_eq!(expires_at.timestamp(), claims.exp);
    }

    #[test]
    fn test_expires_at_expired_token() {
        let handler = handler();

        let issued_at = Utc::now() - Duration::seconds(120);
        let claims = Claims::new(42, "a@b.com", "Camper", issued_at, Duration::seconds(60));
        let token = encode_raw(&claims, Algorithm::HS256);

        // Expiry cannot be read off a token that no longer validates.
        assert_eq!(handler.expires_at(&token), Err(TokenError::Expired));
    }
}
