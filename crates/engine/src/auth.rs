//! Bearer token authentication.
//!
//! The `Authorization` header is split on whitespace and its second segment is
//! the credential. The scheme word is not interpreted. The credential is
//! compared verbatim against the token stored on the user row: no expiry, no
//! revocation beyond a later login replacing it.

use crate::User;

/// Why a request could not be authenticated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthFailure {
    /// No header, or a header without a credential segment.
    MissingToken,
    /// A credential was given but no user holds it.
    InvalidToken,
}

impl AuthFailure {
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingToken => "missing authentication token",
            Self::InvalidToken => "invalid token",
        }
    }
}

/// Outcome of the authentication check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Authentication {
    Authenticated(User),
    Unauthenticated(AuthFailure),
}

/// Extract the credential from an `Authorization` header value.
///
/// Returns `None` when the value has fewer than two whitespace separated
/// segments.
pub fn bearer_credential(header: &str) -> Option<&str> {
    header.split_whitespace().nth(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_segment_is_the_credential() {
        assert_eq!(bearer_credential("Bearer abc123"), Some("abc123"));
    }

    #[test]
    fn extra_whitespace_is_ignored() {
        assert_eq!(bearer_credential("  Bearer \t abc123  "), Some("abc123"));
    }

    #[test]
    fn scheme_is_not_interpreted() {
        assert_eq!(bearer_credential("Token abc123"), Some("abc123"));
    }

    #[test]
    fn header_without_second_segment_has_no_credential() {
        assert_eq!(bearer_credential("Bearer"), None);
        assert_eq!(bearer_credential("Bearer   "), None);
        assert_eq!(bearer_credential(""), None);
    }

    #[test]
    fn credential_keeps_its_case() {
        assert_eq!(bearer_credential("bearer AbC"), Some("AbC"));
    }
}
