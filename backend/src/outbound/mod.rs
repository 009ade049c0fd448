//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: MongoDB-backed tutor and booking repositories
//! - **identity**: Firebase ID token verification and account listing
//! - **memory**: in-process repositories for tests and local development
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod identity;
pub mod memory;
pub mod persistence;
