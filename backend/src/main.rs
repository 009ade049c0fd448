//! Backend entry-point: loads settings, connects backends and serves the API.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use reqwest::Client;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::HttpIdentityPorts;
use backend::outbound::identity::{FirebaseTokenVerifier, FirebaseUserDirectory, ServiceAccount};
use backend::outbound::persistence::MongoStore;
use backend::settings::AppSettings;
use server::{ServerConfig, create_server, drain_on_signal};

/// Connect to MongoDB when a URI is configured.
async fn connect_store(settings: &AppSettings) -> std::io::Result<Option<MongoStore>> {
    match settings.mongo_uri() {
        Some(uri) => MongoStore::connect(&uri)
            .await
            .map(Some)
            .map_err(|e| std::io::Error::other(e.to_string())),
        None if settings.fixtures_allowed() => Ok(None),
        None => Err(std::io::Error::other(
            "MongoDB is not configured; set TUTORS_MONGO_URI or TUTORS_MONGO_USER/TUTORS_MONGO_PASS",
        )),
    }
}

/// Build the Firebase adapters from the service-account key file.
fn load_identity(settings: &AppSettings) -> std::io::Result<Option<HttpIdentityPorts>> {
    let path = settings.firebase_credentials();
    let account = match ServiceAccount::load(&path) {
        Ok(account) => account,
        Err(e) if settings.fixtures_allowed() => {
            warn!(path = %path.display(), error = %e, "Firebase credentials unavailable (dev only)");
            return Ok(None);
        }
        Err(e) => return Err(std::io::Error::other(e.to_string())),
    };
    let http = Client::new();
    info!(project = %account.project_id, "Firebase identity configured");
    Ok(Some(HttpIdentityPorts {
        verifier: Arc::new(FirebaseTokenVerifier::new(
            account.project_id.clone(),
            http.clone(),
        )),
        directory: Arc::new(FirebaseUserDirectory::new(account, http)),
    }))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(|e| std::io::Error::other(e.to_string()))?;
    let store = connect_store(&settings).await?;
    let identity = load_identity(&settings)?;

    let mut config = ServerConfig::new(settings.bind_address());
    if let Some(store) = store.clone() {
        config = config.with_store(store);
    }
    if let Some(identity) = identity {
        config = config.with_identity(identity);
    }
    let (host, port) = config.bind_addr();
    info!(%host, port, "starting HTTP server");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(drain_on_signal(server.handle(), health_state));
    let outcome = server.await;

    if let Some(store) = store {
        store.shutdown().await;
    }
    outcome
}
