//! Driving port for sign-up and log-in.
//!
//! Accounts are identified by username alone; the session layer stores the
//! username returned by [`AccountService::log_in`].

use async_trait::async_trait;

use crate::domain::{Error, Username};

/// Domain use-case port for account management.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Create the account if it does not exist yet.
    async fn sign_up(&self, username: &Username) -> Result<(), Error>;

    /// Confirm the account exists. Unknown accounts yield `unauthorized`.
    async fn log_in(&self, username: &Username) -> Result<Username, Error>;
}

/// Fixture service: `ada` exists, everybody else is unknown.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAccountService;

#[async_trait]
impl AccountService for FixtureAccountService {
    async fn sign_up(&self, _username: &Username) -> Result<(), Error> {
        Ok(())
    }

    async fn log_in(&self, username: &Username) -> Result<Username, Error> {
        if username.as_ref() == "ada" {
            Ok(username.clone())
        } else {
            Err(Error::unauthorized("unknown username"))
        }
    }
}
