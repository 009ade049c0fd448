//! HTTP server configuration object and helpers.

use backend::inbound::http::state::HttpIdentityPorts;
use backend::outbound::persistence::MongoStore;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) store: Option<MongoStore>,
    pub(crate) identity: Option<HttpIdentityPorts>,
}

impl ServerConfig {
    /// Construct a configuration that binds `bind_addr` and uses fixtures
    /// until real backends are attached.
    #[must_use]
    pub fn new(bind_addr: (String, u16)) -> Self {
        Self {
            bind_addr,
            store: None,
            identity: None,
        }
    }

    /// Attach the MongoDB store backing the tutor and booking repositories.
    #[must_use]
    pub fn with_store(mut self, store: MongoStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Attach the identity provider adapters.
    #[must_use]
    pub fn with_identity(mut self, identity: HttpIdentityPorts) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Return the host and port the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> &(String, u16) {
        &self.bind_addr
    }
}
