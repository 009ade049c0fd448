//! Cache of the identity provider's token signing keys.
//!
//! Google publishes the keys as X.509 certificates keyed by `kid`. Each
//! certificate is reduced to its RSA public key in PEM form once, then held
//! until the `max-age` advertised by the response runs out.

use std::collections::HashMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use reqwest::header::CACHE_CONTROL;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use x509_parser::prelude::*;

use crate::domain::ports::IdentityVerifierError;

/// Certificates signing Firebase ID tokens.
pub const FIREBASE_CERTS_URL: &str =
    "https://www.googleapis.com/robot/v1/metadata/x509/securetoken@system.gserviceaccount.com";

const MIN_CACHE_TTL_SECS: i64 = 300;
const DEFAULT_CACHE_TTL_SECS: i64 = 3600;

struct CachedKeys {
    keys: HashMap<String, String>,
    expires_at: DateTime<Utc>,
}

/// Public keys by `kid`, refreshed on demand.
pub struct SigningKeyCache {
    http: Client,
    certs_url: String,
    cached: RwLock<Option<CachedKeys>>,
}

impl SigningKeyCache {
    /// Cache backed by the given certificate endpoint.
    pub fn new(http: Client, certs_url: impl Into<String>) -> Self {
        Self {
            http,
            certs_url: certs_url.into(),
            cached: RwLock::new(None),
        }
    }

    /// Cache pre-populated with PEM keys valid until `expires_at`.
    #[cfg(test)]
    pub(super) fn preloaded(keys: HashMap<String, String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            http: Client::new(),
            certs_url: String::from("http://127.0.0.1:9/unreachable"),
            cached: RwLock::new(Some(CachedKeys { keys, expires_at })),
        }
    }

    /// PEM public key for `kid`.
    ///
    /// Certificates are fetched only when the cache is empty or expired. An
    /// unknown `kid` against a fresh cache is rejected without a fetch, and
    /// concurrent misses share a single refresh.
    pub async fn key_for(&self, kid: &str) -> Result<String, IdentityVerifierError> {
        {
            let cache = self.cached.read().await;
            if let Some(cached) = cache.as_ref().filter(|cached| cached.is_fresh()) {
                return cached.lookup(kid);
            }
        }
        let mut cache = self.cached.write().await;
        if let Some(cached) = cache.as_ref().filter(|cached| cached.is_fresh()) {
            return cached.lookup(kid);
        }
        let fetched = self.fetch().await?;
        let key = fetched.lookup(kid);
        *cache = Some(fetched);
        key
    }

    async fn fetch(&self) -> Result<CachedKeys, IdentityVerifierError> {
        info!("fetching identity provider signing certificates");
        let response = self
            .http
            .get(&self.certs_url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| {
                warn!(error = %err, "signing certificate fetch failed");
                IdentityVerifierError::keys_unavailable(err.to_string())
            })?;
        let ttl = cache_ttl_secs(
            response
                .headers()
                .get(CACHE_CONTROL)
                .and_then(|value| value.to_str().ok()),
        );
        let certs: HashMap<String, String> = response
            .json()
            .await
            .map_err(|err| IdentityVerifierError::keys_unavailable(err.to_string()))?;
        let keys = keys_from_certificates(certs)?;
        let expires_at = Utc::now() + Duration::seconds(ttl);
        info!(keys = keys.len(), ttl_secs = ttl, %expires_at, "signing keys cached");
        Ok(CachedKeys { keys, expires_at })
    }
}

impl CachedKeys {
    fn is_fresh(&self) -> bool {
        self.expires_at > Utc::now()
    }

    fn lookup(&self, kid: &str) -> Result<String, IdentityVerifierError> {
        self.keys
            .get(kid)
            .cloned()
            .ok_or_else(|| IdentityVerifierError::rejected(format!("unknown signing key {kid}")))
    }
}

/// Seconds to keep a certificate response, from its `Cache-Control` header.
fn cache_ttl_secs(cache_control: Option<&str>) -> i64 {
    cache_control
        .and_then(parse_max_age)
        .unwrap_or(DEFAULT_CACHE_TTL_SECS)
        .max(MIN_CACHE_TTL_SECS)
}

fn parse_max_age(cache_control: &str) -> Option<i64> {
    cache_control
        .split(',')
        .map(str::trim)
        .find_map(|directive| directive.strip_prefix("max-age="))
        .and_then(|seconds| seconds.parse().ok())
}

/// Reduce `kid -> certificate` to `kid -> public key`, skipping certificates
/// that do not parse.
fn keys_from_certificates(
    certs: HashMap<String, String>,
) -> Result<HashMap<String, String>, IdentityVerifierError> {
    let mut keys = HashMap::with_capacity(certs.len());
    for (kid, cert) in certs {
        match public_key_pem(&cert) {
            Ok(pem) => {
                keys.insert(kid, pem);
            }
            Err(message) => warn!(%kid, %message, "skipping unreadable signing certificate"),
        }
    }
    if keys.is_empty() {
        return Err(IdentityVerifierError::keys_unavailable(
            "no usable signing certificates",
        ));
    }
    Ok(keys)
}

/// PEM-encode the subject public key of a PEM certificate.
pub(super) fn public_key_pem(cert_pem: &str) -> Result<String, String> {
    let (_, pem) = parse_x509_pem(cert_pem.as_bytes()).map_err(|err| err.to_string())?;
    let (_, cert) = X509Certificate::from_der(&pem.contents).map_err(|err| err.to_string())?;
    let encoded = STANDARD.encode(cert.public_key().raw);
    let body = encoded
        .as_bytes()
        .chunks(64)
        .map(String::from_utf8_lossy)
        .collect::<Vec<_>>()
        .join("\n");
    debug!("extracted signing key from certificate");
    Ok(format!(
        "-----BEGIN PUBLIC KEY-----\n{body}\n-----END PUBLIC KEY-----\n"
    ))
}
