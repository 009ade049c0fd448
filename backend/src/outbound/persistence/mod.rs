//! MongoDB persistence adapters.
//!
//! Concrete implementations of the tutor and booking repository ports backed
//! by the `tutors.tutors` and `bookings.bookings` collections.
//!
//! # Architecture
//!
//! - **Thin adapters**: repositories only translate between BSON documents
//!   and domain types. No business logic resides here.
//! - **One client**: [`MongoStore`] owns the process-wide client; repositories
//!   hold cheap collection handles cloned from it.
//! - **Opaque ids**: identifiers that are not 24-hex ObjectIds never reach the
//!   server; they match nothing.
//! - **Strongly typed errors**: driver errors are mapped to the ports'
//!   `Connection` and `Query` variants.
//!
//! # Example
//!
//! ```ignore
//! use backend::outbound::persistence::{MongoStore, MongoTutorRepository};
//!
//! let store = MongoStore::connect("mongodb://localhost:27017").await?;
//! let tutors = MongoTutorRepository::new(store.tutors());
//! ```

mod documents;
mod mongo_booking_repository;
mod mongo_tutor_repository;
mod store;

pub use mongo_booking_repository::MongoBookingRepository;
pub use mongo_tutor_repository::MongoTutorRepository;
pub use store::{MongoStore, StoreError};
