//! Tutor listing documents.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{DocumentId, FieldPatch};

/// Fields the service reads with a fixed type.
const TYPED_FIELDS: [&str; 4] = ["email", "language", "reviewCount", "reviewedUser"];

/// A tutor offering lessons in a language.
///
/// Listings are schema-less beyond the fields the service reads: anything
/// else the creator supplies is carried verbatim in `attributes`.
///
/// ## Invariants
/// - A reviewer appears in `reviewed_user` at most once; the review
///   aggregator only ever copies counts onto listings and never appends
///   reviewers here itself.
///
/// # Examples
/// ```
/// use backend::domain::TutorListing;
/// use serde_json::json;
///
/// let listing: TutorListing = serde_json::from_value(json!({
///     "email": "t@x.com",
///     "language": "Spanish",
///     "price": 20,
/// }))
/// .unwrap();
/// assert_eq!(listing.email.as_deref(), Some("t@x.com"));
/// assert_eq!(listing.attributes["price"], 20);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorListing {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DocumentId>,
    /// Owner of the listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Searchable language label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Review count copied from the tutor's bookings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviewed_user: Vec<String>,
    /// Creator-supplied attributes not interpreted by the service.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl TutorListing {
    /// Whether `email` owns this listing.
    #[must_use]
    pub fn is_owned_by(&self, email: &str) -> bool {
        self.email.as_deref() == Some(email)
    }

    /// Check that `patch` keeps every typed field readable once applied.
    ///
    /// Only the typed fields are inspected; anything else is free-form.
    ///
    /// # Errors
    /// Returns the deserialisation error for the first mistyped field.
    pub fn check_patch(patch: &FieldPatch) -> Result<(), serde_json::Error> {
        let typed: Map<String, Value> = patch
            .fields()
            .iter()
            .filter(|(key, _)| TYPED_FIELDS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        serde_json::from_value::<Self>(Value::Object(typed)).map(|_| ())
    }

    /// Case-insensitive substring match on the language label.
    #[must_use]
    pub fn language_contains(&self, fragment: &str) -> bool {
        self.language
            .as_deref()
            .is_some_and(|language| language.to_lowercase().contains(&fragment.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("spa", true)]
    #[case("SPAN", true)]
    #[case("ish", true)]
    #[case("french", false)]
    fn language_match_ignores_case(#[case] fragment: &str, #[case] expected: bool) {
        let listing = TutorListing {
            language: Some("Spanish".to_owned()),
            ..TutorListing::default()
        };
        assert_eq!(listing.language_contains(fragment), expected);
    }

    #[rstest]
    #[case(json!({ "reviewCount": "five" }))]
    #[case(json!({ "reviewCount": -1 }))]
    #[case(json!({ "language": 7 }))]
    #[case(json!({ "email": ["a@x.com"] }))]
    #[case(json!({ "reviewedUser": "a@x.com" }))]
    #[case(json!({ "reviewedUser": null }))]
    fn patches_breaking_typed_fields_are_rejected(#[case] raw: Value) {
        let patch: FieldPatch = serde_json::from_value(raw).expect("patch");
        assert!(TutorListing::check_patch(&patch).is_err());
    }

    #[rstest]
    #[case(json!({ "price": "free", "photo": 3 }))]
    #[case(json!({ "language": "Thai", "reviewCount": 4, "reviewedUser": ["a@x.com"] }))]
    #[case(json!({ "email": null }))]
    fn patches_keeping_typed_fields_are_accepted(#[case] raw: Value) {
        let patch: FieldPatch = serde_json::from_value(raw).expect("patch");
        assert!(TutorListing::check_patch(&patch).is_ok());
    }

    #[test]
    fn listing_without_language_never_matches() {
        assert!(!TutorListing::default().language_contains(""));
    }

    #[test]
    fn serialisation_preserves_unknown_attributes_and_store_names() {
        let raw = json!({
            "_id": "65f1c0ffee0000000000beef",
            "email": "t@x.com",
            "language": "German",
            "reviewCount": 2,
            "reviewedUser": ["a@x.com", "b@x.com"],
            "photo": "https://example.invalid/t.png",
        });
        let listing: TutorListing = serde_json::from_value(raw.clone()).expect("listing");
        assert_eq!(listing.review_count, Some(2));
        assert_eq!(listing.reviewed_user.len(), 2);
        assert_eq!(serde_json::to_value(&listing).expect("json"), raw);
    }
}
