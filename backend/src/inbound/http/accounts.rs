//! Account handlers.
//!
//! ```text
//! POST /api/v1/signup {"username":"ada"}
//! POST /api/v1/login  {"username":"ada"}
//! POST /api/v1/logout
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, Username, UsernameValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Body for sign-up and log-in.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UsernameRequest {
    #[schema(example = "ada")]
    pub username: String,
}

impl UsernameRequest {
    fn into_username(self) -> Result<Username, Error> {
        Username::new(self.username).map_err(map_username_error)
    }
}

fn map_username_error(err: UsernameValidationError) -> Error {
    let code = match err {
        UsernameValidationError::Empty => "empty_username",
        UsernameValidationError::SurroundingWhitespace => "username_whitespace",
        UsernameValidationError::TooLong { .. } => "username_too_long",
    };
    Error::invalid_request(err.to_string())
        .with_details(json!({ "field": "username", "code": code }))
}

/// Create an account. Signing up twice is harmless.
#[utoipa::path(
    post,
    path = "/api/v1/signup",
    request_body = UsernameRequest,
    responses(
        (status = 204, description = "Account exists"),
        (status = 400, description = "Invalid username", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "signUp",
    security([])
)]
#[post("/signup")]
pub async fn sign_up(
    state: web::Data<HttpState>,
    payload: web::Json<UsernameRequest>,
) -> ApiResult<HttpResponse> {
    let username = payload.into_inner().into_username()?;
    state.accounts.sign_up(&username).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Log in an existing account and start a session.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = UsernameRequest,
    responses(
        (status = 204, description = "Logged in", headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid username", body = Error),
        (status = 401, description = "Unknown username", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "logIn",
    security([])
)]
#[post("/login")]
pub async fn log_in(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<UsernameRequest>,
) -> ApiResult<HttpResponse> {
    let username = payload.into_inner().into_username()?;
    let account = state.accounts.log_in(&username).await?;
    session.persist_username(&account)?;
    Ok(HttpResponse::NoContent().finish())
}

/// End the current session.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses((status = 204, description = "Session cleared")),
    tags = ["accounts"],
    operation_id = "logOut"
)]
#[post("/logout")]
pub async fn log_out(session: SessionContext) -> HttpResponse {
    session.clear();
    HttpResponse::NoContent().finish()
}
