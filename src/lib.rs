//! Stateless authentication core
//!
//! Verifies user credentials and issues, parses, and validates the signed
//! bearer tokens that authenticate subsequent requests and authorize one-time
//! actions (password reset). Tokens are self-contained HS256 JWTs; nothing is
//! stored, so a token's lifecycle is entirely implicit in its expiration
//! claim.
//!
//! Storage and the HTTP layer live elsewhere: this crate consumes a
//! [`CredentialRepository`] lookup capability and a [`PasswordVerifier`]
//! comparator, both injected, and hands back typed results the outer layers
//! map to responses.
//!
//! # Examples
//!
//! ## Issuing and validating tokens
//! ```
//! use camper_auth::{AuthConfig, Principal, TokenHandler};
//!
//! let config = AuthConfig::new("secret_key_at_least_32_bytes_long!", 3600, 600);
//! let tokens = TokenHandler::new(&config);
//!
//! let token = tokens.issue_auth_token(&Principal::new(42, "a@b.com")).unwrap();
//! let principal = tokens.principal(&token).unwrap();
//! assert_eq!(principal.user_id(), 42);
//! ```
//!
//! ## Sign-in flow
//! ```no_run
//! use std::sync::Arc;
//! use camper_auth::{Argon2Verifier, AuthConfig, Authenticator};
//!
//! # async fn example(repository: Arc<impl camper_auth::CredentialRepository>) {
//! let config = AuthConfig::new("secret_key_at_least_32_bytes_long!", 3600, 600);
//! let auth = Authenticator::new(&config, repository, Argon2Verifier::new());
//!
//! let result = auth.sign_in("a@b.com", "password123").await.unwrap();
//! println!("Token: {}", result.access_token);
//! # }
//! ```

pub mod authenticator;
pub mod config;
pub mod credentials;
pub mod password;
pub mod principal;
pub mod token;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use authenticator::SignInError;
pub use authenticator::SignInResult;
pub use config::AuthConfig;
pub use config::DEFAULT_ISSUER;
pub use credentials::CredentialError;
pub use credentials::CredentialRepository;
pub use credentials::CredentialVerifier;
pub use credentials::StoredCredential;
pub use password::Argon2Verifier;
pub use password::PasswordError;
pub use password::PasswordVerifier;
pub use principal::Principal;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenHandler;
pub use token::TokenPurpose;
pub use token::AUTHORIZATION_HEADER;
pub use token::BEARER_PREFIX;
