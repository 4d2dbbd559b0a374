use std::sync::Arc;

use crate::config::AuthConfig;
use crate::credentials::CredentialError;
use crate::credentials::CredentialRepository;
use crate::credentials::CredentialVerifier;
use crate::password::PasswordVerifier;
use crate::principal::Principal;
use crate::token::TokenError;
use crate::token::TokenHandler;

/// Authentication coordinator combining credential verification and token
/// issuance.
///
/// Wires a [`CredentialVerifier`] and a [`TokenHandler`] into the sign-in
/// flow: verify the credential, then issue the session token the client will
/// present on subsequent requests.
pub struct Authenticator<R, P>
where
    R: CredentialRepository,
    P: PasswordVerifier,
{
    verifier: CredentialVerifier<R, P>,
    tokens: TokenHandler,
}

/// Result of a successful sign-in.
pub struct SignInResult {
    /// Bearer token for subsequent requests
    pub access_token: String,
    /// Identity the token encodes
    pub principal: Principal,
}

/// Sign-in operation errors.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SignInError {
    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl<R, P> Authenticator<R, P>
where
    R: CredentialRepository,
    P: PasswordVerifier,
{
    /// Create an authenticator from signing configuration and injected
    /// collaborators.
    pub fn new(config: &AuthConfig, repository: Arc<R>, passwords: P) -> Self {
        Self {
            verifier: CredentialVerifier::new(repository, passwords),
            tokens: TokenHandler::new(config),
        }
    }

    /// Verify credentials and issue an authentication token.
    ///
    /// # Errors
    /// * `Credential` - Verification failed or lookup errored
    /// * `Token` - Token signing failed
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignInResult, SignInError> {
        let principal = self.verifier.verify(email, password).await?;
        let access_token = self.tokens.issue_auth_token(&principal)?;

        Ok(SignInResult {
            access_token,
            principal,
        })
    }

    /// Issue a one-time password-reset token for a known user.
    ///
    /// The caller has already established the user's identity through a
    /// recovery flow; no credential check happens here.
    pub fn issue_password_reset_token(
        &self,
        user_id: i64,
        email: &str,
    ) -> Result<String, TokenError> {
        self.tokens.issue_password_reset_token(user_id, email)
    }

    /// Token operations for request-time validation.
    pub fn tokens(&self) -> &TokenHandler {
        &self.tokens
    }
}
