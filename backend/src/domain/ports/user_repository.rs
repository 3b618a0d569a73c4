//! Port abstraction for account persistence.
use async_trait::async_trait;

use crate::domain::Username;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return the stored username if an account exists.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Username>, UserRepositoryError>;

    /// Create an account. Creating an existing account is a no-op.
    async fn create(&self, username: &Username) -> Result<(), UserRepositoryError>;
}

/// Fixture repository in which every account exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Username>, UserRepositoryError> {
        Ok(Some(username.clone()))
    }

    async fn create(&self, _username: &Username) -> Result<(), UserRepositoryError> {
        Ok(())
    }
}
