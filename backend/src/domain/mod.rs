//! Domain primitives, ports and services.
//!
//! Purpose: define the tutor and booking documents, the error taxonomy
//! surfaced to adapters, and the services implementing the driving ports.
//! Nothing here depends on actix-web, MongoDB or Firebase.
//!
//! Public surface:
//! - Error / ErrorCode: error payload and stable identifier.
//! - TutorListing / Booking: schema-less documents with typed core fields.
//! - AuthenticatedIdentity: the caller resolved from a bearer credential.
//! - TutorListingService / BookingService / ReviewAggregationService:
//!   driving port implementations.

pub mod booking;
pub mod booking_service;
pub mod document;
pub mod error;
pub mod identity;
pub mod language_category;
pub mod ports;
pub mod review;
pub mod review_service;
pub mod trace_id;
pub mod tutor;
pub mod tutor_listing_service;

pub use self::booking::Booking;
pub use self::booking_service::BookingService;
pub use self::document::{
    DeleteOutcome, DocumentId, FieldPatch, ID_FIELD, InsertOutcome, UpdateOutcome,
};
pub use self::error::{Error, ErrorCode};
pub use self::identity::{
    AuthenticatedIdentity, IdentityMetadata, IdentityRecord, IdentityValidationError,
    LinkedProvider,
};
pub use self::language_category::{LANGUAGE_CATEGORIES, LanguageCategory};
pub use self::review::{ReviewOutcome, ReviewerEmail, ReviewerValidationError};
pub use self::review_service::ReviewAggregationService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::tutor::TutorListing;
pub use self::tutor_listing_service::TutorListingService;
