//! Diesel table definitions.
//!
//! Must match `backend/migrations` exactly.

diesel::table! {
    /// Registered accounts. `username` is the natural key used everywhere else.
    users (id) {
        id -> Int4,
        username -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// One row per (user, artist) follow. The composite primary key keeps
    /// each user's follow list a set.
    followed_artists (username, artist_id) {
        username -> Varchar,
        artist_id -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, followed_artists);
