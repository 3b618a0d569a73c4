//! Followed-artist handlers.
//!
//! ```text
//! GET /api/v1/follows
//! PUT /api/v1/follows {"artist_ids":["4Z8W4fKeB5YxbusRsdQVPb","bogus"]}
//! ```

use actix_web::{get, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::ReconcileFollowsRequest;
use crate::domain::{ArtistId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Candidate list submitted by the client.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct FollowsRequest {
    /// Raw identifiers; duplicates and unknown ids are tolerated.
    pub artist_ids: Vec<String>,
}

/// Artist identifiers returned to the client.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct FollowsResponse {
    pub artist_ids: Vec<ArtistId>,
}

/// Current follow set of the logged-in user.
#[utoipa::path(
    get,
    path = "/api/v1/follows",
    responses(
        (status = 200, description = "Followed artists", body = FollowsResponse),
        (status = 401, description = "Login required", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["follows"],
    operation_id = "listFollows"
)]
#[get("/follows")]
pub async fn list_follows(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<FollowsResponse>> {
    let username = session.require_username()?;
    let artist_ids = state.follows_query.followed_artists(&username).await?;
    Ok(web::Json(FollowsResponse { artist_ids }))
}

/// Replace the follow set with the candidates the catalog recognises.
///
/// The response lists the accepted candidates in submission order.
#[utoipa::path(
    put,
    path = "/api/v1/follows",
    request_body = FollowsRequest,
    responses(
        (status = 200, description = "Accepted artists", body = FollowsResponse),
        (status = 400, description = "Too many candidates", body = Error),
        (status = 401, description = "Login required", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["follows"],
    operation_id = "reconcileFollows"
)]
#[put("/follows")]
pub async fn reconcile_follows(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<FollowsRequest>,
) -> ApiResult<web::Json<FollowsResponse>> {
    let username = session.require_username()?;
    let response = state
        .follows
        .reconcile(ReconcileFollowsRequest {
            username,
            artist_ids: payload.into_inner().artist_ids,
        })
        .await?;
    Ok(web::Json(FollowsResponse {
        artist_ids: response.accepted,
    }))
}
