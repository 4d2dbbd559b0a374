pub mod errors;
pub mod models;
pub mod ports;
pub mod verifier;

pub use errors::CredentialError;
pub use models::StoredCredential;
pub use ports::CredentialRepository;
pub use verifier::CredentialVerifier;
