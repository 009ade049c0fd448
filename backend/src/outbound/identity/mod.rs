//! Firebase identity adapters: ID token verification and account listing.

mod firebase_directory;
mod firebase_verifier;
mod service_account;
mod signing_keys;

pub use firebase_directory::FirebaseUserDirectory;
pub use firebase_verifier::FirebaseTokenVerifier;
pub use service_account::ServiceAccount;
pub use signing_keys::FIREBASE_CERTS_URL;
