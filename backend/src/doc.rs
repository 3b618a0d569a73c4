//! OpenAPI documentation.
//!
//! [`ApiDoc`] registers every REST handler, the request and response bodies
//! they exchange, and the session cookie security scheme. Swagger UI serves
//! it at `/docs` in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{DiscoveryPayload, Error, ErrorCode};
use crate::inbound::http::accounts::UsernameRequest;
use crate::inbound::http::follows::{FollowsRequest, FollowsResponse};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Song explorer API",
        description = "Username accounts, followed artists and song discovery."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::accounts::sign_up,
        crate::inbound::http::accounts::log_in,
        crate::inbound::http::accounts::log_out,
        crate::inbound::http::follows::list_follows,
        crate::inbound::http::follows::reconcile_follows,
        crate::inbound::http::discovery::discover,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        UsernameRequest,
        FollowsRequest,
        FollowsResponse,
        DiscoveryPayload
    )),
    tags(
        (name = "accounts", description = "Sign-up, login and logout"),
        (name = "follows", description = "Followed artist reconciliation"),
        (name = "discovery", description = "Random song from a followed artist"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
