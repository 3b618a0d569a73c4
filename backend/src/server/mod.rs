//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::{ServerConfig, UpstreamAdapters};

use state_builders::build_http_state;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use song_explorer::Trace;
use song_explorer::config::SessionSettings;
#[cfg(debug_assertions)]
use song_explorer::doc::ApiDoc;
use song_explorer::inbound::http::accounts::{log_in, log_out, sign_up};
use song_explorer::inbound::http::discovery::discover;
use song_explorer::inbound::http::follows::{list_follows, reconcile_follows};
use song_explorer::inbound::http::health::{HealthState, live, ready};
use song_explorer::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
        same_site,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(actix_web::cookie::time::Duration::hours(2)),
        )
        .build();

    let api = web::scope("/api/v1")
        .wrap(session)
        .service(sign_up)
        .service(log_in)
        .service(log_out)
        .service(list_follows)
        .service(reconcile_follows)
        .service(discover);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind and start the HTTP server, then mark the service ready.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let SessionSettings {
        key,
        cookie_secure,
        same_site,
    } = config.session;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
        })
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{Value, json};

    fn deps() -> AppDependencies {
        let health_state = web::Data::new(HealthState::new());
        health_state.mark_ready();
        AppDependencies {
            health_state,
            http_state: web::Data::new(HttpState::fixtures()),
            key: Key::generate(),
            cookie_secure: false,
            same_site: SameSite::Lax,
        }
    }

    #[actix_web::test]
    async fn fixture_app_serves_the_login_discovery_flow() {
        let app = test::init_service(build_app(deps())).await;

        let login = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/login")
                .set_json(json!({ "username": "ada" }))
                .to_request(),
        )
        .await;
        assert_eq!(login.status(), StatusCode::NO_CONTENT);
        assert!(login.headers().contains_key("trace-id"));
        let cookie = login
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .map(|cookie| cookie.into_owned())
            .expect("session cookie");
        assert!(cookie.http_only().unwrap_or(false));

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
        assert_eq!(body["username"], "ada");
    }

    #[actix_web::test]
    async fn health_probes_are_outside_the_session_scope() {
        let app = test::init_service(build_app(deps())).await;
        for uri in ["/health/ready", "/health/live"] {
            let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(res.status(), StatusCode::OK, "{uri}");
        }
    }

    #[actix_web::test]
    async fn protected_routes_reject_anonymous_requests() {
        let app = test::init_service(build_app(deps())).await;
        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/v1/follows").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
