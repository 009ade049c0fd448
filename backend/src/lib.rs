//! Tutor booking backend library.
//!
//! Hexagonal layout: `domain` holds documents, services and ports;
//! `inbound` exposes them over HTTP; `outbound` adapts MongoDB, Firebase
//! and in-memory storage onto the ports.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
