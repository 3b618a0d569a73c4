//! PostgreSQL-backed `UserRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::Username;
use crate::domain::ports::{UserRepository, UserRepositoryError};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::NewUserRow;
use super::pool::DbPool;
use super::schema::users;

/// Diesel adapter over the `users` table.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_error(error: diesel::result::Error) -> UserRepositoryError {
    map_diesel_error(
        error,
        UserRepositoryError::query,
        UserRepositoryError::connection,
    )
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Username>, UserRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserRepositoryError::connection))?;

        let stored: Option<String> = users::table
            .filter(users::username.eq(username.as_ref()))
            .select(users::username)
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_error)?;

        stored
            .map(|raw| {
                Username::new(raw)
                    .map_err(|err| UserRepositoryError::query(format!("stored username: {err}")))
            })
            .transpose()
    }

    async fn create(&self, username: &Username) -> Result<(), UserRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserRepositoryError::connection))?;

        diesel::insert_into(users::table)
            .values(NewUserRow {
                username: username.as_ref(),
            })
            .on_conflict(users::username)
            .do_nothing()
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_error)
    }
}
