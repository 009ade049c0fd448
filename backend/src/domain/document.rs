//! Shared document primitives: storage-assigned identifiers, write
//! acknowledgements and field patches.
//!
//! Acknowledgements mirror the shapes the document store reports natively so
//! HTTP responses can echo them unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding a document's identifier.
pub const ID_FIELD: &str = "_id";

/// Opaque identifier assigned by the storage layer on insert.
///
/// The domain never interprets the value; adapters decide which shapes they
/// can resolve. An identifier an adapter cannot parse simply matches no
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Wrap a raw identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DocumentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Acknowledgement of a single-document insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOutcome {
    pub acknowledged: bool,
    pub inserted_id: DocumentId,
}

impl InsertOutcome {
    /// Acknowledge an insert that produced `inserted_id`.
    #[must_use]
    pub fn new(inserted_id: DocumentId) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

/// Acknowledgement of an update touching zero or more documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<DocumentId>,
    pub upserted_count: u64,
}

impl UpdateOutcome {
    /// Acknowledge an update that matched and modified the given counts.
    #[must_use]
    pub fn new(matched_count: u64, modified_count: u64) -> Self {
        Self {
            acknowledged: true,
            matched_count,
            modified_count,
            upserted_id: None,
            upserted_count: 0,
        }
    }

    /// Acknowledge an update whose filter matched nothing.
    #[must_use]
    pub fn unmatched() -> Self {
        Self::new(0, 0)
    }

    /// Whether at least one document changed.
    #[must_use]
    pub fn modified_any(&self) -> bool {
        self.modified_count > 0
    }
}

/// Acknowledgement of a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteOutcome {
    /// Acknowledge a delete that removed `deleted_count` documents.
    #[must_use]
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}

/// Arbitrary top-level fields to overwrite on an existing document.
///
/// The identifier field is stripped on construction: a document's identity
/// is immutable.
///
/// # Examples
/// ```
/// use backend::domain::FieldPatch;
/// use serde_json::json;
///
/// let patch: FieldPatch = serde_json::from_value(json!({
///     "_id": "ignored",
///     "price": 25,
/// }))
/// .unwrap();
/// assert!(patch.fields().get("_id").is_none());
/// assert_eq!(patch.fields().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct FieldPatch(Map<String, Value>);

impl FieldPatch {
    /// Wrap `fields`, dropping any identifier entry.
    #[must_use]
    pub fn new(mut fields: Map<String, Value>) -> Self {
        fields.remove(ID_FIELD);
        Self(fields)
    }

    /// Fields to overwrite.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Whether the patch would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for FieldPatch {
    fn from(value: Map<String, Value>) -> Self {
        Self::new(value)
    }
}

impl From<FieldPatch> for Map<String, Value> {
    fn from(value: FieldPatch) -> Self {
        value.0
    }
}
