//! Firebase ID token verification.

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::domain::AuthenticatedIdentity;
use crate::domain::ports::{IdentityVerifier, IdentityVerifierError};

use super::signing_keys::{FIREBASE_CERTS_URL, SigningKeyCache};

const ISSUER_PREFIX: &str = "https://securetoken.google.com/";

/// Claims read from a verified ID token.
#[derive(Debug, Deserialize)]
struct IdTokenClaims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
}

/// Verifies RS256 ID tokens issued for one Firebase project.
pub struct FirebaseTokenVerifier {
    project_id: String,
    keys: SigningKeyCache,
}

impl FirebaseTokenVerifier {
    /// Verifier for `project_id` using Google's published certificates.
    pub fn new(project_id: impl Into<String>, http: Client) -> Self {
        Self::with_keys(project_id, SigningKeyCache::new(http, FIREBASE_CERTS_URL))
    }

    pub(super) fn with_keys(project_id: impl Into<String>, keys: SigningKeyCache) -> Self {
        Self {
            project_id: project_id.into(),
            keys,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[self.project_id.as_str()]);
        validation.set_issuer(&[format!("{ISSUER_PREFIX}{}", self.project_id)]);
        validation.set_required_spec_claims(&["exp", "aud", "iss", "sub"]);
        validation
    }
}

#[async_trait]
impl IdentityVerifier for FirebaseTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedIdentity, IdentityVerifierError> {
        let header =
            decode_header(token).map_err(|err| IdentityVerifierError::malformed(err.to_string()))?;
        if header.alg != Algorithm::RS256 {
            return Err(IdentityVerifierError::rejected(format!(
                "unexpected algorithm {:?}",
                header.alg
            )));
        }
        let kid = header
            .kid
            .ok_or_else(|| IdentityVerifierError::malformed("token header has no kid"))?;
        let pem = self.keys.key_for(&kid).await?;
        let key = DecodingKey::from_rsa_pem(pem.as_bytes())
            .map_err(|err| IdentityVerifierError::keys_unavailable(err.to_string()))?;
        let data = decode::<IdTokenClaims>(token, &key, &self.validation())
            .map_err(|err| IdentityVerifierError::rejected(err.to_string()))?;
        let claims = data.claims;
        let identity = AuthenticatedIdentity::new(claims.sub.as_str(), claims.email.as_deref())
            .map_err(|err| match claims.email {
                None => IdentityVerifierError::missing_claim("email"),
                Some(_) => IdentityVerifierError::rejected(err.to_string()),
            })?;
        debug!(uid = identity.uid(), "ID token verified");
        Ok(identity)
    }
}

#[cfg(test)]
#[path = "firebase_verifier_tests.rs"]
mod tests;
