//! Diesel row structs. Never exposed outside the persistence module.

use diesel::prelude::*;

use super::schema::{followed_artists, users};

/// Insertable account row; `id` and `created_at` come from column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub username: &'a str,
}

/// Insertable follow row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = followed_artists)]
pub(crate) struct NewFollowedArtistRow<'a> {
    pub username: &'a str,
    pub artist_id: &'a str,
}
