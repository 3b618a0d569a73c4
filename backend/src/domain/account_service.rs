//! Account sign-up and log-in backed by the user repository.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{AccountService, UserRepository, UserRepositoryError};
use crate::domain::{Error, Username};

/// Account service implementing [`AccountService`].
#[derive(Clone)]
pub struct AccountsService<U> {
    users: Arc<U>,
}

impl<U> AccountsService<U> {
    /// Create a service over the given user repository.
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

fn map_user_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

#[async_trait]
impl<U> AccountService for AccountsService<U>
where
    U: UserRepository,
{
    async fn sign_up(&self, username: &Username) -> Result<(), Error> {
        self.users.create(username).await.map_err(map_user_error)?;
        info!(username = %username, "account signed up");
        Ok(())
    }

    async fn log_in(&self, username: &Username) -> Result<Username, Error> {
        self.users
            .find_by_username(username)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::unauthorized("unknown username"))
    }
}
