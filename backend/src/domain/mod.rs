//! Domain primitives, ports and services.
//!
//! Purpose: hold the follow reconciliation and discovery logic independent
//! of HTTP, the catalog provider and the database. Adapters talk to the
//! services through the traits in [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error envelope.
//! - Username / ArtistId: validated identifiers.
//! - FollowDiff: minimal add/remove mutation between two follow sets.
//! - FollowsService / DiscoveryService / AccountsService: use-case
//!   implementations of the driving ports.

pub mod account_service;
pub mod artist;
pub mod discovery_service;
pub mod error;
pub mod follows;
pub mod follows_service;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::account_service::AccountsService;
pub use self::artist::{
    ARTIST_ID_MAX, ArtistId, ArtistIdValidationError, LyricsLink, LyricsLinkValidationError,
    TrackSummary,
};
pub use self::discovery_service::DiscoveryService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::follows::{FollowDiff, accepted_in_submission_order};
pub use self::follows_service::{FollowsService, MAX_CANDIDATES, VALIDATION_CONCURRENCY};
pub use self::ports::DiscoveryPayload;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{USERNAME_MAX, Username, UsernameValidationError};

