/// Stored credential record, as resolved by the repository port.
///
/// Read-only to this crate. Exactly one credential exists per email.
#[derive(Debug, Clone)]
pub struct StoredCredential {
    pub user_id: i64,
    pub email: String,
    pub password_hash: String,
}
