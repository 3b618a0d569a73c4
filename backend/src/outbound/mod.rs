//! Outbound adapters implementing driven ports.
//!
//! - **persistence**: PostgreSQL repositories over Diesel
//! - **spotify**: artist catalog over the Spotify Web API
//! - **genius**: lyrics links over the Genius search API
//!
//! Adapters translate between wire or row shapes and domain types. They
//! contain no business rules.

pub mod genius;
pub mod persistence;
pub mod spotify;

#[cfg(test)]
pub(crate) mod test_upstream;
