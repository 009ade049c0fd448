//! Port for verifying bearer credentials with the identity provider.
//!
//! Inbound adapters hand the raw token to an [`IdentityVerifier`] and never
//! inspect it themselves. Every failure surfaces to callers as the same
//! unauthorised response; the variants only exist for logs.

use async_trait::async_trait;

use crate::domain::AuthenticatedIdentity;

use super::define_port_error;

define_port_error! {
    /// Reasons a credential could not be verified.
    pub enum IdentityVerifierError {
        /// Token is not structurally a credential the provider issues.
        Malformed { message: String } => "credential is malformed: {message}",
        /// Signature, issuer, audience or expiry checks failed.
        Rejected { message: String } => "credential was rejected: {message}",
        /// Signing keys could not be obtained from the provider.
        KeysUnavailable { message: String } =>
            "provider signing keys unavailable: {message}",
        /// A verified credential lacks a claim the service requires.
        MissingClaim { claim: String } => "credential lacks the {claim} claim",
    }
}

/// Verify an opaque bearer token and resolve the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Resolve the identity the token was issued to.
    async fn verify(&self, token: &str) -> Result<AuthenticatedIdentity, IdentityVerifierError>;
}

/// Prefix recognised by [`FixtureIdentityVerifier`].
pub const FIXTURE_TOKEN_PREFIX: &str = "fixture-token:";

/// Development verifier accepting `fixture-token:<email>` tokens.
///
/// The resolved uid is `fixture:<email>`. Never wire this outside local
/// development or tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureIdentityVerifier;

impl FixtureIdentityVerifier {
    /// Token that [`FixtureIdentityVerifier`] resolves to `email`.
    #[must_use]
    pub fn token_for(email: &str) -> String {
        format!("{FIXTURE_TOKEN_PREFIX}{email}")
    }
}

#[async_trait]
impl IdentityVerifier for FixtureIdentityVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedIdentity, IdentityVerifierError> {
        let email = token
            .strip_prefix(FIXTURE_TOKEN_PREFIX)
            .ok_or_else(|| IdentityVerifierError::malformed("not a fixture token"))?;
        AuthenticatedIdentity::new(format!("fixture:{email}"), Some(email))
            .map_err(|_| IdentityVerifierError::missing_claim("email"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[tokio::test]
    async fn fixture_verifier_resolves_email_from_token() {
        let identity = FixtureIdentityVerifier
            .verify(&FixtureIdentityVerifier::token_for("a@x.com"))
            .await
            .expect("fixture identity");
        assert_eq!(identity.email(), "a@x.com");
        assert_eq!(identity.uid(), "fixture:a@x.com");
    }

    #[rstest]
    #[case("eyJhbGciOiJSUzI1NiJ9.e30.sig", IdentityVerifierError::malformed("not a fixture token"))]
    #[case("fixture-token:", IdentityVerifierError::missing_claim("email"))]
    #[tokio::test]
    async fn fixture_verifier_rejects_other_tokens(
        #[case] token: &str,
        #[case] expected: IdentityVerifierError,
    ) {
        let err = FixtureIdentityVerifier
            .verify(token)
            .await
            .expect_err("token should be rejected");
        assert_eq!(err, expected);
    }
}
