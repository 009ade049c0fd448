//! Authenticated identities and identity-provider account records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation failures for [`AuthenticatedIdentity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityValidationError {
    /// The provider returned no subject.
    EmptySubject,
    /// The credential carries no usable email claim.
    MissingEmail,
}

impl fmt::Display for IdentityValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySubject => write!(f, "identity subject must not be empty"),
            Self::MissingEmail => write!(f, "identity must carry an email claim"),
        }
    }
}

impl std::error::Error for IdentityValidationError {}

/// Caller identity established from a verified bearer credential.
///
/// ## Invariants
/// - `uid` and `email` are non-empty.
/// - `email` is compared byte-for-byte with request emails; no case folding.
///
/// # Examples
/// ```
/// use backend::domain::AuthenticatedIdentity;
///
/// let caller = AuthenticatedIdentity::new("uid-1", Some("a@x.com")).unwrap();
/// assert!(caller.owns(Some("a@x.com")));
/// assert!(!caller.owns(Some("b@x.com")));
/// assert!(!caller.owns(None));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    uid: String,
    email: String,
}

impl AuthenticatedIdentity {
    /// Build an identity from a provider subject and optional email claim.
    pub fn new(
        uid: impl Into<String>,
        email: Option<&str>,
    ) -> Result<Self, IdentityValidationError> {
        let uid = uid.into();
        if uid.trim().is_empty() {
            return Err(IdentityValidationError::EmptySubject);
        }
        let email = email
            .filter(|value| !value.trim().is_empty())
            .ok_or(IdentityValidationError::MissingEmail)?;
        Ok(Self {
            uid,
            email: email.to_owned(),
        })
    }

    /// Provider subject identifier.
    #[must_use]
    pub fn uid(&self) -> &str {
        self.uid.as_str()
    }

    /// Verified email claim.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Whether the caller is the owner named by `email`.
    #[must_use]
    pub fn owns(&self, email: Option<&str>) -> bool {
        email == Some(self.email.as_str())
    }
}

/// Account timestamps as reported by the identity provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sign_in_time: Option<String>,
}

/// Per-provider sign-in linked to an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedProvider {
    pub provider_id: String,
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "photoURL", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// One account known to the identity provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRecord {
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub email_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "photoURL", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub disabled: bool,
    pub metadata: IdentityMetadata,
    pub provider_data: Vec<LinkedProvider>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", Some("a@x.com"), IdentityValidationError::EmptySubject)]
    #[case("uid", None, IdentityValidationError::MissingEmail)]
    #[case("uid", Some("  "), IdentityValidationError::MissingEmail)]
    fn rejects_incomplete_identities(
        #[case] uid: &str,
        #[case] email: Option<&str>,
        #[case] expected: IdentityValidationError,
    ) {
        let err = AuthenticatedIdentity::new(uid, email).expect_err("incomplete identity");
        assert_eq!(err, expected);
    }

    #[test]
    fn ownership_is_case_sensitive() {
        let caller = AuthenticatedIdentity::new("uid", Some("a@x.com")).expect("identity");
        assert!(!caller.owns(Some("A@X.COM")));
    }

    #[test]
    fn record_uses_provider_field_names() {
        let record = IdentityRecord {
            uid: "u1".to_owned(),
            photo_url: Some("https://example.invalid/p.png".to_owned()),
            ..IdentityRecord::default()
        };
        let value = serde_json::to_value(record).expect("json");
        assert_eq!(value["photoURL"], "https://example.invalid/p.png");
        assert_eq!(value["emailVerified"], false);
        assert!(value["providerData"].as_array().is_some_and(Vec::is_empty));
    }
}
