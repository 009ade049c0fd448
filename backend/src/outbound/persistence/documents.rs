//! Translation between BSON documents and domain documents.
//!
//! Domain documents are schema-less serde types, so mapping goes through
//! `serde_json::Value`: reads convert BSON to relaxed extended JSON with the
//! ObjectId `_id` flattened to its hex string; writes convert JSON back to
//! BSON without an `_id`, leaving identifier assignment to the server.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, Bson, Document, doc};
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::{DeleteOutcome, DocumentId, ID_FIELD, InsertOutcome, UpdateOutcome};

/// Integer-valued counters written by other clients may arrive as doubles.
const COUNTER_FIELDS: [&str; 1] = ["reviewCount"];

/// Why a driver call failed, before mapping onto a port error.
pub(super) enum Failure {
    Connection(String),
    Query(String),
}

/// Classify a driver error; network and server-selection failures are
/// connection problems, everything else is a query problem.
pub(super) fn classify(error: &MongoError) -> Failure {
    debug!(error = %error, "MongoDB operation failed");
    match error.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. } => Failure::Connection(error.to_string()),
        _ => Failure::Query(error.to_string()),
    }
}

/// Filter selecting the document with `id`, or `None` when `id` is not an
/// ObjectId and therefore cannot match anything.
pub(super) fn id_filter(id: &DocumentId) -> Option<Document> {
    ObjectId::parse_str(id.as_str())
        .ok()
        .map(|oid| doc! { "_id": oid })
}

/// Serialise a domain document for insertion, dropping any `_id`.
pub(super) fn to_document<T: Serialize>(value: &T) -> Result<Document, String> {
    let json = serde_json::to_value(value).map_err(|err| err.to_string())?;
    let mut fields = match json {
        Value::Object(fields) => fields,
        other => return Err(format!("expected a JSON object, found {other}")),
    };
    fields.remove(ID_FIELD);
    fields_to_document(&fields)
}

/// Convert top-level JSON fields to a BSON document.
pub(super) fn fields_to_document(fields: &Map<String, Value>) -> Result<Document, String> {
    bson::to_document(fields).map_err(|err| err.to_string())
}

/// Deserialise a stored document into a domain type.
pub(super) fn from_document<T: DeserializeOwned>(mut document: Document) -> Result<T, String> {
    if let Some(Bson::ObjectId(oid)) = document.get(ID_FIELD) {
        let hex = oid.to_hex();
        document.insert(ID_FIELD, hex);
    }
    for field in COUNTER_FIELDS {
        match document.get(field) {
            Some(Bson::Double(value)) if value.fract() == 0.0 && *value >= 0.0 => {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "value is integral and non-negative"
                )]
                let integral = *value as i64;
                document.insert(field, integral);
            }
            _ => {}
        }
    }
    let json = Bson::Document(document).into_relaxed_extjson();
    serde_json::from_value(json).map_err(|err| err.to_string())
}

/// Identifier string for whatever the server assigned.
fn bson_id(value: &Bson) -> DocumentId {
    match value {
        Bson::ObjectId(oid) => DocumentId::new(oid.to_hex()),
        Bson::String(raw) => DocumentId::new(raw.clone()),
        other => DocumentId::new(other.to_string()),
    }
}

pub(super) fn insert_outcome(result: &InsertOneResult) -> InsertOutcome {
    InsertOutcome::new(bson_id(&result.inserted_id))
}

pub(super) fn update_outcome(result: &UpdateResult) -> UpdateOutcome {
    let mut outcome = UpdateOutcome::new(result.matched_count, result.modified_count);
    if let Some(upserted) = result.upserted_id.as_ref() {
        outcome.upserted_id = Some(bson_id(upserted));
        outcome.upserted_count = 1;
    }
    outcome
}

pub(super) fn delete_outcome(result: &DeleteResult) -> DeleteOutcome {
    DeleteOutcome::new(result.deleted_count)
}
