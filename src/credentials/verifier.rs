use std::sync::Arc;

use super::errors::CredentialError;
use super::ports::CredentialRepository;
use crate::password::PasswordVerifier;
use crate::principal::Principal;

/// Verifies an email/password pair against stored credentials.
///
/// Both collaborators are injected: the repository resolves the credential,
/// the password verifier compares the plaintext against its one-way hash.
/// Read-only; no side effects on success or failure.
pub struct CredentialVerifier<R, P>
where
    R: CredentialRepository,
    P: PasswordVerifier,
{
    repository: Arc<R>,
    passwords: P,
}

impl<R, P> CredentialVerifier<R, P>
where
    R: CredentialRepository,
    P: PasswordVerifier,
{
    /// Create a verifier with injected dependencies.
    pub fn new(repository: Arc<R>, passwords: P) -> Self {
        Self {
            repository,
            passwords,
        }
    }

    /// Verify credentials and return the authenticated principal.
    ///
    /// Inputs are assumed non-empty; request-shape validation happens
    /// upstream.
    ///
    /// # Errors
    /// * `AuthenticationFailed` - Email not found or password mismatch,
    ///   indistinguishably
    /// * `Lookup` - Repository access failed
    pub async fn verify(&self, email: &str, password: &str) -> Result<Principal, CredentialError> {
        let Some(credential) = self.repository.find_by_email(email).await? else {
            tracing::debug!("sign-in rejected: credential not verified");
            return Err(CredentialError::AuthenticationFailed);
        };

        if !self.passwords.matches(password, &credential.password_hash) {
            tracing::debug!("sign-in rejected: credential not verified");
            return Err(CredentialError::AuthenticationFailed);
        }

        Ok(Principal::new(credential.user_id, credential.email))
    }
}
