//! Song explorer backend.
//!
//! Users sign up with a bare username, curate a set of followed artists
//! validated against the Spotify catalog, and receive a random track from one
//! of those artists with a Genius lyrics link.
//!
//! The crate follows a hexagonal layout: [`domain`] holds types, ports and
//! services; [`inbound`] adapts HTTP requests onto driving ports; [`outbound`]
//! implements driven ports over PostgreSQL and the external HTTP APIs.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI.
pub use doc::ApiDoc;
pub use middleware::Trace;
