pub mod claims;
pub mod errors;
pub mod handler;

pub use claims::Claims;
pub use errors::TokenError;
pub use handler::TokenHandler;

/// Request header carrying the bearer token.
///
/// This crate never parses the header itself; the constants are exported so
/// outer request layers stay byte-for-byte consistent with each other.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Value prefix in front of the token, single space included.
pub const BEARER_PREFIX: &str = "Bearer ";

/// What a token authorizes.
///
/// Each purpose maps to its own TTL in [`crate::AuthConfig`]; the claim schema
/// is otherwise identical across purposes. Closed set: adding a purpose means
/// adding a TTL entry and an issuance method, not changing the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPurpose {
    /// Session authentication after sign-in
    Authentication,
    /// One-time password-reset action
    PasswordReset,
}
