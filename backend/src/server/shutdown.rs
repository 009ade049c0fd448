//! Graceful shutdown: flip the health probes, then stop the listener.

use actix_web::dev::ServerHandle;
use actix_web::web;
use tracing::{info, warn};

use backend::inbound::http::health::HealthState;

/// Wait for SIGINT or SIGTERM, then drain the server.
pub async fn drain_on_signal(handle: ServerHandle, health_state: web::Data<HealthState>) {
    shutdown_signal().await;
    drain(&handle, &health_state).await;
}

/// Fail both probes, then stop accepting connections and let in-flight
/// requests finish.
pub(crate) async fn drain(handle: &ServerHandle, health_state: &HealthState) {
    info!("shutdown requested; draining HTTP server");
    health_state.begin_draining();
    handle.stop(true).await;
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Ctrl+C handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{ServerConfig, create_server};

    #[actix_rt::test]
    async fn draining_fails_probes_before_the_listener_stops() {
        let health_state = web::Data::new(HealthState::new());
        let config = ServerConfig::new(("127.0.0.1".to_owned(), 0));
        let server = create_server(health_state.clone(), config).expect("server binds");
        let handle = server.handle();
        let running = actix_rt::spawn(server);
        assert!(health_state.is_alive());
        assert!(health_state.is_ready());

        drain(&handle, &health_state).await;

        assert!(!health_state.is_alive());
        assert!(!health_state.is_ready());
        running
            .await
            .expect("server task joins")
            .expect("server stops cleanly");
    }
}
