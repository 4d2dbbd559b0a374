use thiserror::Error;

/// Error type for token operations.
///
/// Every defect of a presented token is classified into exactly one of these;
/// validation never coerces one kind into another, and anything the underlying
/// library reports that has no row here fails closed as `NotValid`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Malformed shape, undecodable segment, or signature mismatch
    #[error("Token is not valid")]
    NotValid,

    /// Signature checks out but the expiration claim has passed
    #[error("Token is expired")]
    Expired,

    /// Well-formed token of a variant or algorithm this system does not issue
    #[error("Token type or algorithm is not supported")]
    Unsupported,

    /// Subject claim is not the numeric user id this system encodes
    #[error("Token subject is not a valid user id: {0}")]
    MalformedSubject(String),

    /// Signing failed while issuing; not reachable for well-formed inputs
    #[error("Failed to encode token: {0}")]
    Encoding(String),
}
