//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and only see driving ports, so they
//! can be tested with fixtures or mocks instead of real I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AccountService, DiscoveryQuery, FixtureAccountService, FixtureDiscoveryQuery,
    FixtureFollowsCommand, FixtureFollowsQuery, FollowsCommand, FollowsQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AccountService>,
    pub follows: Arc<dyn FollowsCommand>,
    pub follows_query: Arc<dyn FollowsQuery>,
    pub discovery: Arc<dyn DiscoveryQuery>,
}

impl HttpState {
    /// Bundle port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use song_explorer::domain::ports::{
    ///     FixtureAccountService, FixtureDiscoveryQuery, FixtureFollowsCommand,
    ///     FixtureFollowsQuery,
    /// };
    /// use song_explorer::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureAccountService),
    ///     Arc::new(FixtureFollowsCommand),
    ///     Arc::new(FixtureFollowsQuery),
    ///     Arc::new(FixtureDiscoveryQuery),
    /// );
    /// let _discovery = state.discovery.clone();
    /// ```
    pub fn new(
        accounts: Arc<dyn AccountService>,
        follows: Arc<dyn FollowsCommand>,
        follows_query: Arc<dyn FollowsQuery>,
        discovery: Arc<dyn DiscoveryQuery>,
    ) -> Self {
        Self {
            accounts,
            follows,
            follows_query,
            discovery,
        }
    }

    /// State wired entirely to fixture ports.
    pub fn fixtures() -> Self {
        Self::new(
            Arc::new(FixtureAccountService),
            Arc::new(FixtureFollowsCommand),
            Arc::new(FixtureFollowsQuery),
            Arc::new(FixtureDiscoveryQuery),
        )
    }

    /// Replace the account service.
    #[must_use]
    pub fn with_accounts(mut self, accounts: Arc<dyn AccountService>) -> Self {
        self.accounts = accounts;
        self
    }

    /// Replace the reconciliation command.
    #[must_use]
    pub fn with_follows(mut self, follows: Arc<dyn FollowsCommand>) -> Self {
        self.follows = follows;
        self
    }

    /// Replace the follow-set query.
    #[must_use]
    pub fn with_follows_query(mut self, follows_query: Arc<dyn FollowsQuery>) -> Self {
        self.follows_query = follows_query;
        self
    }

    /// Replace the discovery query.
    #[must_use]
    pub fn with_discovery(mut self, discovery: Arc<dyn DiscoveryQuery>) -> Self {
        self.discovery = discovery;
        self
    }
}
