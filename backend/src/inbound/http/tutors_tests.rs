//! Handler tests for the tutor listing endpoints.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use crate::inbound::http::test_utils::{bearer_for, memory_state, test_app};

async fn add_listing<S>(app: &S, owner: &str, language: &str) -> String
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let req = actix_test::TestRequest::post()
        .uri("/addTutor")
        .insert_header(bearer_for(owner))
        .set_json(json!({ "email": owner, "language": language, "price": 20 }))
        .to_request();
    let res = actix_test::call_service(app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["acknowledged"], true);
    body["insertedId"]
        .as_str()
        .expect("inserted id is a string")
        .to_owned()
}

#[actix_web::test]
async fn guarded_routes_reject_missing_credentials() {
    let app = actix_test::init_service(test_app(memory_state())).await;

    for uri in ["/allTutors", "/myAddedTutorials?email=a@x.com", "/tutorDetails/abc"] {
        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{uri}");
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["message"], "Unauthorized access");
    }
}

#[actix_web::test]
async fn add_tutor_rejects_foreign_email() {
    let app = actix_test::init_service(test_app(memory_state())).await;

    let req = actix_test::TestRequest::post()
        .uri("/addTutor")
        .insert_header(bearer_for("a@x.com"))
        .set_json(json!({ "email": "b@x.com", "language": "Spanish" }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["message"], "You are not authorized to perform this action");
}

#[actix_web::test]
async fn listing_lifecycle_round_trips_through_the_api() {
    let app = actix_test::init_service(test_app(memory_state())).await;
    let id = add_listing(&app, "a@x.com", "Spanish").await;

    let details_req = actix_test::TestRequest::get()
        .uri(&format!("/tutorDetails/{id}"))
        .insert_header(bearer_for("b@x.com"))
        .to_request();
    let details: Value = actix_test::call_and_read_body_json(&app, details_req).await;
    assert_eq!(details["_id"], id.as_str());
    assert_eq!(details["price"], 20);

    let update_req = actix_test::TestRequest::put()
        .uri(&format!("/updateTutorialData/{id}"))
        .set_json(json!({ "_id": "ignored", "price": 35 }))
        .to_request();
    let update: Value = actix_test::call_and_read_body_json(&app, update_req).await;
    assert_eq!(update["matchedCount"], 1);
    assert_eq!(update["modifiedCount"], 1);

    let delete_req = actix_test::TestRequest::delete()
        .uri(&format!("/deleteTutorial/{id}"))
        .to_request();
    let deleted: Value = actix_test::call_and_read_body_json(&app, delete_req).await;
    assert_eq!(deleted, json!({ "acknowledged": true, "deletedCount": 1 }));

    let gone_req = actix_test::TestRequest::get()
        .uri(&format!("/tutorDetails/{id}"))
        .insert_header(bearer_for("a@x.com"))
        .to_request();
    let gone = actix_test::call_service(&app, gone_req).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(gone).await;
    assert_eq!(body["message"], "Tutor not found");
}

#[actix_web::test]
async fn wrongly_typed_patches_are_rejected_and_listings_stay_readable() {
    let app = actix_test::init_service(test_app(memory_state())).await;
    let id = add_listing(&app, "a@x.com", "Spanish").await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/updateTutorialData/{id}"))
            .set_json(json!({ "reviewCount": "five" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");

    let all = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/allTutors")
            .insert_header(bearer_for("b@x.com"))
            .to_request(),
    )
    .await;
    assert_eq!(all.status(), StatusCode::OK);
    let listings: Value = actix_test::read_body_json(all).await;
    assert_eq!(listings.as_array().map(Vec::len), Some(1));
}

#[rstest]
#[case("not-an-object-id")]
#[case("65f1c0ffee0000000000beef")]
#[actix_web::test]
async fn unknown_ids_are_not_found_or_unmatched(#[case] id: &str) {
    let app = actix_test::init_service(test_app(memory_state())).await;

    let details = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/tutorDetails/{id}"))
            .insert_header(bearer_for("a@x.com"))
            .to_request(),
    )
    .await;
    assert_eq!(details.status(), StatusCode::NOT_FOUND);

    let update: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/updateTutorialData/{id}"))
            .set_json(json!({ "price": 1 }))
            .to_request(),
    )
    .await;
    assert_eq!(update["matchedCount"], 0);

    let deleted: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/deleteTutorial/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(deleted["deletedCount"], 0);
}

#[actix_web::test]
async fn owners_only_see_their_own_listings() {
    let app = actix_test::init_service(test_app(memory_state())).await;
    add_listing(&app, "a@x.com", "French").await;
    add_listing(&app, "b@x.com", "German").await;

    let own: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get()
            .uri("/myAddedTutorials?email=a@x.com")
            .insert_header(bearer_for("a@x.com"))
            .to_request(),
    )
    .await;
    let own = own.as_array().expect("array");
    assert_eq!(own.len(), 1);
    assert_eq!(own[0]["email"], "a@x.com");

    let foreign = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/myAddedTutorials?email=b@x.com")
            .insert_header(bearer_for("a@x.com"))
            .to_request(),
    )
    .await;
    assert_eq!(foreign.status(), StatusCode::UNAUTHORIZED);

    let all: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get()
            .uri("/allTutors")
            .insert_header(bearer_for("a@x.com"))
            .to_request(),
    )
    .await;
    assert_eq!(all.as_array().map(Vec::len), Some(2));
}

#[rstest]
#[case("/searchTutors", 3)]
#[case("/searchTutors?language=", 3)]
#[case("/searchTutors?language=%20%20", 3)]
#[case("/searchTutors?language=SPAN", 1)]
#[case("/searchTutors?language=ish", 2)]
#[case("/searchTutors?language=.%2A", 0)]
#[actix_web::test]
async fn search_matches_language_fragments_literally(#[case] uri: &str, #[case] expected: usize) {
    let app = actix_test::init_service(test_app(memory_state())).await;
    add_listing(&app, "a@x.com", "Spanish").await;
    add_listing(&app, "b@x.com", "English").await;
    add_listing(&app, "c@x.com", "Japanese").await;

    let found: Value =
        actix_test::call_and_read_body_json(&app, actix_test::TestRequest::get().uri(uri).to_request())
            .await;
    assert_eq!(found.as_array().map(Vec::len), Some(expected), "{uri}");
}
