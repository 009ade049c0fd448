//! Account listing through the Identity Toolkit REST API.
//!
//! Requests are authorised with an OAuth access token obtained by signing a
//! JWT assertion with the service account's private key. The token is reused
//! until shortly before it expires.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::domain::ports::{IdentityDirectory, IdentityDirectoryError};
use crate::domain::{IdentityMetadata, IdentityRecord, LinkedProvider};

use super::service_account::ServiceAccount;

const IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com/v1";
const SCOPES: &str = "https://www.googleapis.com/auth/cloud-platform \
                      https://www.googleapis.com/auth/identitytoolkit";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
/// Largest page the provider returns.
const PAGE_SIZE: u32 = 1000;
const ASSERTION_LIFETIME_SECS: i64 = 3600;
const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;
/// Account timestamps are rendered the way browsers print UTC dates.
const TIMESTAMP_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Zeroizing<String>,
    #[serde(default)]
    expires_in: Option<i64>,
}

struct CachedToken {
    value: Zeroizing<String>,
    expires_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountPage {
    #[serde(default)]
    users: Vec<ProviderAccount>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderAccount {
    local_id: String,
    email: Option<String>,
    #[serde(default)]
    email_verified: bool,
    display_name: Option<String>,
    photo_url: Option<String>,
    phone_number: Option<String>,
    #[serde(default)]
    disabled: bool,
    created_at: Option<String>,
    last_login_at: Option<String>,
    #[serde(default)]
    provider_user_info: Vec<ProviderLink>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderLink {
    provider_id: String,
    raw_id: Option<String>,
    email: Option<String>,
    display_name: Option<String>,
    photo_url: Option<String>,
}

/// Render a millisecond epoch string as an account timestamp.
fn format_millis(raw: Option<&str>) -> Option<String> {
    let millis = raw?.parse::<i64>().ok()?;
    DateTime::from_timestamp_millis(millis).map(|at| at.format(TIMESTAMP_FORMAT).to_string())
}

impl From<ProviderLink> for LinkedProvider {
    fn from(link: ProviderLink) -> Self {
        Self {
            provider_id: link.provider_id,
            uid: link.raw_id.unwrap_or_default(),
            email: link.email,
            display_name: link.display_name,
            photo_url: link.photo_url,
        }
    }
}

impl From<ProviderAccount> for IdentityRecord {
    fn from(account: ProviderAccount) -> Self {
        let metadata = IdentityMetadata {
            creation_time: format_millis(account.created_at.as_deref()),
            last_sign_in_time: format_millis(account.last_login_at.as_deref()),
        };
        Self {
            uid: account.local_id,
            email: account.email,
            email_verified: account.email_verified,
            display_name: account.display_name,
            photo_url: account.photo_url,
            phone_number: account.phone_number,
            disabled: account.disabled,
            metadata,
            provider_data: account
                .provider_user_info
                .into_iter()
                .map(LinkedProvider::from)
                .collect(),
        }
    }
}

/// Lists accounts of the service account's Firebase project.
pub struct FirebaseUserDirectory {
    account: ServiceAccount,
    http: Client,
    token: RwLock<Option<CachedToken>>,
}

impl FirebaseUserDirectory {
    pub fn new(account: ServiceAccount, http: Client) -> Self {
        Self {
            account,
            http,
            token: RwLock::new(None),
        }
    }

    /// Signed JWT exchanged for an access token.
    fn assertion(&self, now: DateTime<Utc>) -> Result<String, IdentityDirectoryError> {
        let claims = AssertionClaims {
            iss: self.account.client_email.as_str(),
            scope: SCOPES,
            aud: self.account.token_uri.as_str(),
            iat: now.timestamp(),
            exp: now.timestamp() + ASSERTION_LIFETIME_SECS,
        };
        let key = EncodingKey::from_rsa_pem(self.account.private_key().as_bytes())
            .map_err(|err| IdentityDirectoryError::credentials(err.to_string()))?;
        encode(&Header::new(Algorithm::RS256), &claims, &key)
            .map_err(|err| IdentityDirectoryError::credentials(err.to_string()))
    }

    async fn access_token(&self) -> Result<Zeroizing<String>, IdentityDirectoryError> {
        {
            let cached = self.token.read().await;
            if let Some(token) = cached.as_ref().filter(|token| token.expires_at > Utc::now()) {
                return Ok(token.value.clone());
            }
        }

        let now = Utc::now();
        let assertion = self.assertion(now)?;
        debug!(token_uri = %self.account.token_uri, "requesting provider access token");
        let response: TokenResponse = self
            .http
            .post(&self.account.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| IdentityDirectoryError::credentials(err.to_string()))?
            .json()
            .await
            .map_err(|err| IdentityDirectoryError::credentials(err.to_string()))?;

        let lifetime = response.expires_in.unwrap_or(ASSERTION_LIFETIME_SECS);
        let expires_at = now + Duration::seconds(lifetime - TOKEN_REFRESH_MARGIN_SECS);
        let value = response.access_token;
        *self.token.write().await = Some(CachedToken {
            value: value.clone(),
            expires_at,
        });
        info!(%expires_at, "provider access token cached");
        Ok(value)
    }
}

#[async_trait]
impl IdentityDirectory for FirebaseUserDirectory {
    async fn list_users(&self) -> Result<Vec<IdentityRecord>, IdentityDirectoryError> {
        let token = self.access_token().await?;
        let url = format!(
            "{IDENTITY_TOOLKIT_URL}/projects/{}/accounts:batchGet",
            self.account.project_id
        );
        let page: AccountPage = self
            .http
            .get(url)
            .query(&[("maxResults", PAGE_SIZE)])
            .bearer_auth(token.as_str())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| IdentityDirectoryError::request(err.to_string()))?
            .json()
            .await
            .map_err(|err| IdentityDirectoryError::request(err.to_string()))?;
        debug!(accounts = page.users.len(), "listed provider accounts");
        Ok(page.users.into_iter().map(IdentityRecord::from).collect())
    }
}

#[cfg(test)]
#[path = "firebase_directory_tests.rs"]
mod tests;
