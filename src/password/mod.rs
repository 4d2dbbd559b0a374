pub mod argon2;
pub mod errors;

pub use argon2::Argon2Verifier;
pub use errors::PasswordError;

/// One-way password comparator capability.
///
/// Injected into the credential verifier; this crate treats it as a trusted
/// primitive and places no constraint on the hash scheme beyond this contract.
pub trait PasswordVerifier: Send + Sync + 'static {
    /// Whether `plaintext` matches the stored `hash`.
    ///
    /// Must return `false` rather than fail for a hash it cannot interpret,
    /// so callers never learn more than match/no-match.
    fn matches(&self, plaintext: &str, hash: &str) -> bool;
}
