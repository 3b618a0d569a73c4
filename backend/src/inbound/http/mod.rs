//! HTTP inbound adapter exposing REST endpoints.

pub mod accounts;
pub mod discovery;
pub mod error;
pub mod follows;
pub mod health;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
