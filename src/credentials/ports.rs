use async_trait::async_trait;

use super::errors::CredentialError;
use super::models::StoredCredential;

/// Lookup-by-email capability backed by the host's user storage.
///
/// The only suspend point in this crate; invoked at most once per sign-in
/// attempt. Failures are propagated, never retried here.
#[async_trait]
pub trait CredentialRepository: Send + Sync + 'static {
    /// Resolve the credential stored for an email address.
    ///
    /// # Returns
    /// Optional credential record (None if no user has this email)
    ///
    /// # Errors
    /// * `Lookup` - Storage access failed
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<StoredCredential>, CredentialError>;
}
