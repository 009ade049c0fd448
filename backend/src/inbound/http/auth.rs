//! Bearer credential guard.
//!
//! Keep the HTTP modules focused on request/response mapping by concentrating
//! credential parsing and identity resolution here. Handlers that require a
//! caller take an [`Authenticated`] argument; extraction runs before the
//! handler body and short-circuits with `401` on any failure.

use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;
use tracing::debug;

use crate::domain::ports::IdentityVerifier;
use crate::domain::{AuthenticatedIdentity, Error};

use super::state::HttpState;

/// Message returned for every credential failure.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized access";

/// Outcome of evaluating a request's credential.
#[derive(Debug, Clone, PartialEq)]
pub enum AccessDecision {
    /// The caller is known; continue with this identity.
    Allow(AuthenticatedIdentity),
    /// Stop the request with this error.
    Deny(Error),
}

impl AccessDecision {
    /// Collapse the decision into a handler-friendly result.
    pub fn into_result(self) -> Result<AuthenticatedIdentity, Error> {
        match self {
            Self::Allow(identity) => Ok(identity),
            Self::Deny(error) => Err(error),
        }
    }
}

/// Extract the token from an `Authorization: Bearer <token>` value.
///
/// The scheme is matched case-insensitively; anything after the first token
/// is ignored.
///
/// # Examples
/// ```
/// use backend::inbound::http::auth::bearer_token;
///
/// assert_eq!(bearer_token("Bearer abc.def"), Some("abc.def"));
/// assert_eq!(bearer_token("Basic Zm9v"), None);
/// assert_eq!(bearer_token("Bearer"), None);
/// ```
pub fn bearer_token(header_value: &str) -> Option<&str> {
    let (scheme, rest) = header_value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    rest.split_whitespace().next()
}

/// Decide whether the raw `Authorization` header admits the caller.
pub async fn evaluate(verifier: &dyn IdentityVerifier, header_value: Option<&str>) -> AccessDecision {
    let Some(token) = header_value.and_then(bearer_token) else {
        debug!("request carried no bearer credential");
        return AccessDecision::Deny(Error::unauthorized(UNAUTHORIZED_MESSAGE));
    };
    match verifier.verify(token).await {
        Ok(identity) => AccessDecision::Allow(identity),
        Err(err) => {
            debug!(error = %err, "bearer credential rejected");
            AccessDecision::Deny(Error::unauthorized(UNAUTHORIZED_MESSAGE))
        }
    }
}

/// Extractor yielding the verified caller.
///
/// On success the identity is also stored in the request extensions so
/// middleware running after the handler can read it.
#[derive(Debug, Clone)]
pub struct Authenticated(AuthenticatedIdentity);

impl Authenticated {
    /// Borrow the verified identity.
    #[must_use]
    pub fn identity(&self) -> &AuthenticatedIdentity {
        &self.0
    }

    /// Take ownership of the verified identity.
    #[must_use]
    pub fn into_inner(self) -> AuthenticatedIdentity {
        self.0
    }
}

impl FromRequest for Authenticated {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let verifier = req
                .app_data::<web::Data<HttpState>>()
                .map(|state| state.identity.clone())
                .ok_or_else(|| Error::internal("HTTP state is not registered"))?;
            let header_value = req
                .headers()
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let identity = evaluate(verifier.as_ref(), header_value.as_deref())
                .await
                .into_result()?;
            req.extensions_mut().insert(identity.clone());
            Ok(Self(identity))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{FixtureIdentityVerifier, IdentityVerifierError, MockIdentityVerifier};
    use crate::inbound::http::test_utils::{bearer_for, memory_state};
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test as actix_test};
    use rstest::rstest;

    #[rstest]
    #[case("Bearer token-1", Some("token-1"))]
    #[case("bearer token-1", Some("token-1"))]
    #[case("Bearer   token-1 trailing", Some("token-1"))]
    #[case("Bearer ", None)]
    #[case("Token token-1", None)]
    #[case("token-1", None)]
    fn bearer_parsing(#[case] header_value: &str, #[case] expected: Option<&str>) {
        assert_eq!(bearer_token(header_value), expected);
    }

    #[tokio::test]
    async fn missing_header_is_denied() {
        let decision = evaluate(&FixtureIdentityVerifier, None).await;
        let AccessDecision::Deny(err) = decision else {
            panic!("expected denial");
        };
        assert_eq!(err.code(), ErrorCode::Unauthorized);
        assert_eq!(err.message(), UNAUTHORIZED_MESSAGE);
    }

    #[tokio::test]
    async fn verifier_failures_are_not_leaked() {
        let mut verifier = MockIdentityVerifier::new();
        verifier
            .expect_verify()
            .times(1)
            .return_once(|_| Err(IdentityVerifierError::keys_unavailable("dns failure")));

        let err = evaluate(&verifier, Some("Bearer abc"))
            .await
            .into_result()
            .expect_err("denied");
        assert_eq!(err.message(), UNAUTHORIZED_MESSAGE);
    }

    #[tokio::test]
    async fn verified_callers_are_allowed() {
        let header_value = format!("Bearer {}", FixtureIdentityVerifier::token_for("a@x.com"));
        let identity = evaluate(&FixtureIdentityVerifier, Some(&header_value))
            .await
            .into_result()
            .expect("allowed");
        assert_eq!(identity.email(), "a@x.com");
    }

    async fn whoami(caller: Authenticated, req: HttpRequest) -> HttpResponse {
        let stored = req
            .extensions()
            .get::<AuthenticatedIdentity>()
            .map(|identity| identity.email().to_owned());
        assert_eq!(stored.as_deref(), Some(caller.identity().email()));
        HttpResponse::Ok().body(caller.into_inner().email().to_owned())
    }

    #[actix_web::test]
    async fn extractor_guards_handlers() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(memory_state()))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let denied = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/whoami").to_request(),
        )
        .await;
        assert_eq!(denied.status(), StatusCode::UNAUTHORIZED);

        let allowed = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/whoami")
                .insert_header(bearer_for("a@x.com"))
                .to_request(),
        )
        .await;
        assert_eq!(allowed.status(), StatusCode::OK);
        let body = actix_test::read_body(allowed).await;
        assert_eq!(body.as_ref(), b"a@x.com");
    }
}
