//! Port for listing the identity provider's accounts.

use async_trait::async_trait;

use crate::domain::IdentityRecord;

use super::define_port_error;

define_port_error! {
    /// Failures talking to the identity provider's account directory.
    pub enum IdentityDirectoryError as ProviderFailure {
        /// Service credentials could not be loaded or exchanged.
        Credentials { message: String } =>
            "identity provider credentials unusable: {message}",
        /// The provider answered with an error or an unreadable body.
        Request { message: String } => "identity provider request failed: {message}",
    }
}

/// Read access to every account known to the identity provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    /// Return up to the provider's first page of accounts.
    async fn list_users(&self) -> Result<Vec<IdentityRecord>, IdentityDirectoryError>;
}

/// Directory with no accounts, for running without provider credentials.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureIdentityDirectory;

#[async_trait]
impl IdentityDirectory for FixtureIdentityDirectory {
    async fn list_users(&self) -> Result<Vec<IdentityRecord>, IdentityDirectoryError> {
        Ok(Vec::new())
    }
}
