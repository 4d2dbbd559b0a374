use thiserror::Error;

/// Error type for credential verification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialError {
    /// Unknown email or wrong password. Deliberately a single kind for both,
    /// so callers cannot enumerate which half of the credential was wrong.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// The repository lookup itself failed. Carries no indication of whether
    /// the record exists.
    #[error("Credential lookup failed: {0}")]
    Lookup(String),
}
