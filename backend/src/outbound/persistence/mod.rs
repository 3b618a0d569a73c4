//! PostgreSQL persistence adapters.
//!
//! Repositories translate between Diesel rows and domain types; no business
//! rules live here. Row structs and table definitions stay private to this
//! module.
//!
//! ```ignore
//! use song_explorer::outbound::persistence::{DbPool, DieselFollowedArtistsRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/songs")).await?;
//! let follows = DieselFollowedArtistsRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_followed_artists_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_followed_artists_repository::DieselFollowedArtistsRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
