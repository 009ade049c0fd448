//! In-memory repositories.
//!
//! Used by the test-suite and as a development fallback when no MongoDB URI is
//! configured. Documents live in a `tokio::sync::RwLock`ed vector; every
//! mutation takes the write lock once, so conditional updates are atomic.
//! Identifiers are fresh ObjectId hex strings, matching what the MongoDB
//! adapter returns.

mod booking_repository;
mod tutor_repository;

use mongodb::bson::oid::ObjectId;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::domain::{DocumentId, FieldPatch};

pub use booking_repository::InMemoryBookingRepository;
pub use tutor_repository::InMemoryTutorRepository;

fn next_id() -> DocumentId {
    DocumentId::new(ObjectId::new().to_hex())
}

/// Overwrite `patch`'s fields on `document`, reporting whether anything
/// changed.
fn apply_patch<T>(document: &mut T, patch: &FieldPatch) -> Result<bool, serde_json::Error>
where
    T: Serialize + DeserializeOwned + PartialEq,
{
    let mut fields: Map<String, Value> = match serde_json::to_value(&*document)? {
        Value::Object(fields) => fields,
        _ => Map::new(),
    };
    for (key, value) in patch.fields() {
        fields.insert(key.clone(), value.clone());
    }
    let patched: T = serde_json::from_value(Value::Object(fields))?;
    if patched == *document {
        return Ok(false);
    }
    *document = patched;
    Ok(true)
}
