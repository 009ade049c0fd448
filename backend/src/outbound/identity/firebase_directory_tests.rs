//! Tests for the account directory's pure translation and signing steps.

use jsonwebtoken::{DecodingKey, Validation, decode};
use rstest::rstest;
use serde_json::json;

use super::*;
use crate::outbound::identity::signing_keys::public_key_pem;

const SIGNING_KEY: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/fixtures/identity/signing_key.pem"
));
const SIGNING_CERT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/fixtures/identity/signing_cert.pem"
));

fn directory(private_key: &str) -> FirebaseUserDirectory {
    let account = ServiceAccount::from_json(
        &json!({
            "project_id": "tutor-booking-test",
            "client_email": "svc@tutor-booking-test.iam.gserviceaccount.com",
            "private_key": private_key,
        })
        .to_string(),
    )
    .expect("account");
    FirebaseUserDirectory::new(account, Client::new())
}

#[rstest]
#[case(Some("1700000000000"), Some("Tue, 14 Nov 2023 22:13:20 GMT"))]
#[case(Some("0"), Some("Thu, 01 Jan 1970 00:00:00 GMT"))]
#[case(Some("yesterday"), None)]
#[case(None, None)]
fn account_timestamps_render_as_utc_strings(
    #[case] raw: Option<&str>,
    #[case] expected: Option<&str>,
) {
    assert_eq!(format_millis(raw).as_deref(), expected);
}

#[test]
fn provider_accounts_map_onto_identity_records() {
    let page: AccountPage = serde_json::from_value(json!({
        "users": [{
            "localId": "u1",
            "email": "a@x.com",
            "emailVerified": true,
            "displayName": "Ada",
            "photoUrl": "https://example.invalid/ada.png",
            "createdAt": "1700000000000",
            "providerUserInfo": [{
                "providerId": "google.com",
                "rawId": "g-1",
                "email": "a@x.com",
            }],
        }],
    }))
    .expect("page");

    let records: Vec<IdentityRecord> = page.users.into_iter().map(IdentityRecord::from).collect();
    let [record] = records.as_slice() else {
        panic!("expected one record, got {records:?}");
    };
    assert_eq!(record.uid, "u1");
    assert!(record.email_verified);
    assert!(!record.disabled);
    assert_eq!(record.photo_url.as_deref(), Some("https://example.invalid/ada.png"));
    assert_eq!(
        record.metadata.creation_time.as_deref(),
        Some("Tue, 14 Nov 2023 22:13:20 GMT")
    );
    assert!(record.metadata.last_sign_in_time.is_none());
    assert_eq!(record.provider_data.first().map(|p| p.uid.as_str()), Some("g-1"));
}

#[test]
fn empty_pages_have_no_users() {
    let page: AccountPage = serde_json::from_value(json!({})).expect("page");
    assert!(page.users.is_empty());
}

#[test]
fn assertions_are_signed_for_the_token_endpoint() {
    let directory = directory(SIGNING_KEY);
    let assertion = directory.assertion(Utc::now()).expect("assertion");

    let public = public_key_pem(SIGNING_CERT).expect("public key");
    let key = DecodingKey::from_rsa_pem(public.as_bytes()).expect("decoding key");
    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&["https://oauth2.googleapis.com/token"]);
    let claims = decode::<serde_json::Value>(&assertion, &key, &validation)
        .expect("verifiable assertion")
        .claims;
    assert_eq!(claims["iss"], "svc@tutor-booking-test.iam.gserviceaccount.com");
    assert_eq!(claims["scope"], SCOPES);
}

#[test]
fn unusable_private_keys_are_credential_errors() {
    let err = directory("not a key").assertion(Utc::now()).expect_err("bad key");
    assert!(matches!(err, IdentityDirectoryError::Credentials { .. }));
}
