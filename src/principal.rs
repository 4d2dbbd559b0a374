use std::fmt;

/// Authenticated identity.
///
/// Produced only by successful credential verification or successful token
/// validation; immutable once constructed and never persisted by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    user_id: i64,
    email: String,
}

impl Principal {
    /// Create a principal from a user id and email.
    pub fn new(user_id: i64, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
        }
    }

    /// Numeric user identifier.
    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    /// Email address (also used as the username claim).
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.user_id, self.email)
    }
}
