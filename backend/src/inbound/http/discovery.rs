//! Home-page discovery handler.
//!
//! ```text
//! GET /api/v1/discovery
//! ```

use actix_web::{get, web};

use crate::domain::{DiscoveryPayload, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Song drawn from one randomly chosen followed artist.
#[utoipa::path(
    get,
    path = "/api/v1/discovery",
    responses(
        (status = 200, description = "Discovery payload", body = DiscoveryPayload),
        (status = 401, description = "Login required", body = Error),
        (status = 502, description = "Catalog unavailable", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["discovery"],
    operation_id = "discover"
)]
#[get("/discovery")]
pub async fn discover(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<DiscoveryPayload>> {
    let username = session.require_username()?;
    let payload = state.discovery.discover(&username).await?;
    Ok(web::Json(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockDiscoveryQuery;
    use crate::domain::{ArtistId, Username};
    use crate::inbound::http::accounts::log_in;
    use crate::inbound::http::test_utils::{login_cookie, test_session_middleware};
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn test_app(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().app_data(web::Data::new(state)).service(
            web::scope("/api/v1")
                .wrap(test_session_middleware())
                .service(log_in)
                .service(discover),
        )
    }

    #[actix_web::test]
    async fn discovery_requires_a_session() {
        let app = test::init_service(test_app(HttpState::fixtures())).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/v1/discovery").to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["code"], "unauthorized");
    }

    #[actix_web::test]
    async fn user_without_follows_gets_null_song_fields() {
        let app = test::init_service(test_app(HttpState::fixtures())).await;
        let cookie = login_cookie(&app, "ada").await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/discovery")
                .cookie(cookie)
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(
            body,
            json!({
                "username": "ada",
                "artist_ids": [],
                "has_artists_saved": false,
                "song_name": null,
                "song_artist": null,
                "song_image_url": null,
                "preview_url": null,
                "genius_url": null,
            })
        );
    }

    #[actix_web::test]
    async fn discovery_returns_the_query_payload() {
        let mut query = MockDiscoveryQuery::new();
        query
            .expect_discover()
            .withf(|name| name.as_ref() == "ada")
            .times(1)
            .return_once(|username: &Username| {
                Ok(DiscoveryPayload {
                    artist_ids: vec![ArtistId::new("A").expect("valid id")],
                    has_artists_saved: true,
                    song_name: Some("Song".to_owned()),
                    song_artist: Some("Artist".to_owned()),
                    genius_url: Some("https://genius.test/song".to_owned()),
                    ..DiscoveryPayload::empty(username.clone())
                })
            });
        let state = HttpState::fixtures().with_discovery(Arc::new(query));
        let app = test::init_service(test_app(state)).await;
        let cookie = login_cookie(&app, "ada").await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/discovery")
                .cookie(cookie)
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["artist_ids"], json!(["A"]));
        assert_eq!(body["has_artists_saved"], true);
        assert_eq!(body["song_name"], "Song");
        assert_eq!(body["preview_url"], Value::Null);
    }

    #[actix_web::test]
    async fn catalog_failure_maps_to_bad_gateway() {
        let mut query = MockDiscoveryQuery::new();
        query
            .expect_discover()
            .return_once(|_| Err(Error::upstream_unavailable("catalog timed out")));
        let state = HttpState::fixtures().with_discovery(Arc::new(query));
        let app = test::init_service(test_app(state)).await;
        let cookie = login_cookie(&app, "ada").await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/discovery")
                .cookie(cookie)
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["code"], "upstream_unavailable");
    }
}
