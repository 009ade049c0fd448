//! Process-wide MongoDB client.

use mongodb::bson::{Document, doc};
use mongodb::{Client, Collection};
use tracing::info;

/// Database and collection holding tutor listings.
pub const TUTORS_NAMESPACE: (&str, &str) = ("tutors", "tutors");
/// Database and collection holding bookings.
pub const BOOKINGS_NAMESPACE: (&str, &str) = ("bookings", "bookings");

/// Errors raised while establishing the MongoDB connection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The connection string could not be parsed or resolved.
    #[error("invalid MongoDB connection string: {message}")]
    InvalidUri { message: String },

    /// The deployment did not answer the initial ping.
    #[error("MongoDB ping failed: {message}")]
    Unreachable { message: String },
}

impl StoreError {
    pub fn invalid_uri(message: impl Into<String>) -> Self {
        Self::InvalidUri {
            message: message.into(),
        }
    }

    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::Unreachable {
            message: message.into(),
        }
    }
}

/// Shared MongoDB client handing out collection handles.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
}

impl MongoStore {
    /// Connect and verify the deployment answers a ping.
    pub async fn connect(uri: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|err| StoreError::invalid_uri(err.to_string()))?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|err| StoreError::unreachable(err.to_string()))?;
        info!("connected to MongoDB");
        Ok(Self { client })
    }

    /// Handle on the tutor listing collection.
    pub fn tutors(&self) -> Collection<Document> {
        let (database, collection) = TUTORS_NAMESPACE;
        self.client.database(database).collection(collection)
    }

    /// Handle on the booking collection.
    pub fn bookings(&self) -> Collection<Document> {
        let (database, collection) = BOOKINGS_NAMESPACE;
        self.client.database(database).collection(collection)
    }

    /// Close pooled connections and end server sessions.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("MongoDB client shut down");
    }
}
