//! End-to-end HTTP flow over in-memory driven ports: sign up, log in,
//! reconcile follows and read the discovery payload.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::{Arc, Mutex};

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use async_trait::async_trait;
use rstest::rstest;
use serde_json::{Value, json};
use song_explorer::Trace;
use song_explorer::domain::ports::{
    AccessCredential, AccountService, ArtistCatalog, ArtistCatalogError, DiscoveryQuery,
    FixtureLyricsLinkSource, FollowedArtistsRepository, FollowedArtistsRepositoryError,
    FollowsCommand, FollowsQuery, UserRepository, UserRepositoryError,
};
use song_explorer::domain::{
    AccountsService, ArtistId, DiscoveryService, FollowDiff, FollowsService, TrackSummary,
    Username,
};
use song_explorer::inbound::http::accounts::{log_in, log_out, sign_up};
use song_explorer::inbound::http::discovery::discover;
use song_explorer::inbound::http::follows::{list_follows, reconcile_follows};
use song_explorer::inbound::http::state::HttpState;

#[derive(Default)]
struct InMemoryUsers(Mutex<HashSet<String>>);

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Username>, UserRepositoryError> {
        let users = self.0.lock().expect("users lock");
        Ok(users.contains(username.as_ref()).then(|| username.clone()))
    }

    async fn create(&self, username: &Username) -> Result<(), UserRepositoryError> {
        self.0
            .lock()
            .expect("users lock")
            .insert(username.as_ref().to_owned());
        Ok(())
    }
}

#[derive(Default)]
struct InMemoryFollows(Mutex<HashMap<String, BTreeSet<ArtistId>>>);

#[async_trait]
impl FollowedArtistsRepository for InMemoryFollows {
    async fn load_set(
        &self,
        username: &Username,
    ) -> Result<BTreeSet<ArtistId>, FollowedArtistsRepositoryError> {
        let follows = self.0.lock().expect("follows lock");
        Ok(follows.get(username.as_ref()).cloned().unwrap_or_default())
    }

    async fn apply_diff(
        &self,
        username: &Username,
        diff: &FollowDiff,
    ) -> Result<(), FollowedArtistsRepositoryError> {
        let mut follows = self.0.lock().expect("follows lock");
        let set = follows.entry(username.as_ref().to_owned()).or_default();
        for id in diff.to_remove() {
            set.remove(id);
        }
        set.extend(diff.to_add().iter().cloned());
        Ok(())
    }
}

/// Knows every artist except those whose id starts with `ghost`.
struct PickyCatalog;

#[async_trait]
impl ArtistCatalog for PickyCatalog {
    async fn access_credential(&self) -> Result<AccessCredential, ArtistCatalogError> {
        Ok(AccessCredential::new("token"))
    }

    async fn track_for_artist(
        &self,
        artist_id: &ArtistId,
        _credential: &AccessCredential,
    ) -> Result<TrackSummary, ArtistCatalogError> {
        if artist_id.as_ref().starts_with("ghost") {
            return Err(ArtistCatalogError::unknown_artist(artist_id.as_ref()));
        }
        Ok(TrackSummary {
            name: format!("Song by {artist_id}"),
            artist: format!("Artist {artist_id}"),
            image_url: Some(format!("https://img.test/{artist_id}.jpg")),
            preview_url: None,
        })
    }
}

fn in_memory_state() -> HttpState {
    let users = Arc::new(InMemoryUsers::default());
    let follows_repository = Arc::new(InMemoryFollows::default());
    let catalog = Arc::new(PickyCatalog);
    let follows = Arc::new(FollowsService::new(
        follows_repository.clone(),
        catalog.clone(),
    ));
    HttpState::new(
        Arc::new(AccountsService::new(users)) as Arc<dyn AccountService>,
        follows.clone() as Arc<dyn FollowsCommand>,
        follows as Arc<dyn FollowsQuery>,
        Arc::new(DiscoveryService::new(
            follows_repository,
            catalog,
            Arc::new(FixtureLyricsLinkSource),
        )) as Arc<dyn DiscoveryQuery>,
    )
}

fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build();
    App::new()
        .app_data(web::Data::new(in_memory_state()))
        .wrap(Trace)
        .service(
            web::scope("/api/v1")
                .wrap(session)
                .service(sign_up)
                .service(log_in)
                .service(log_out)
                .service(list_follows)
                .service(reconcile_follows)
                .service(discover),
        )
}

fn post_username(uri: &str, username: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri(uri)
        .set_json(json!({ "username": username }))
}

fn session_cookie(res: &actix_web::dev::ServiceResponse) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .expect("session cookie")
}

#[actix_web::test]
async fn follows_drive_the_discovery_payload() {
    let app = test::init_service(test_app()).await;

    let res = test::call_service(&app, post_username("/api/v1/signup", "ada").to_request()).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let res = test::call_service(&app, post_username("/api/v1/login", "ada").to_request()).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let cookie = session_cookie(&res);

    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/v1/follows")
            .cookie(cookie.clone())
            .set_json(json!({ "artist_ids": ["B", "ghost1", "A", "B", "not valid"] }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({ "artist_ids": ["B", "A"] }));

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/follows")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({ "artist_ids": ["A", "B"] }));

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/discovery")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["username"], "ada");
    assert_eq!(body["artist_ids"], json!(["A", "B"]));
    assert_eq!(body["has_artists_saved"], true);
    let song = body["song_name"].as_str().expect("song name");
    assert!(song == "Song by A" || song == "Song by B", "{song}");
    assert_eq!(body["genius_url"], Value::Null);

    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/v1/follows")
            .cookie(cookie.clone())
            .set_json(json!({ "artist_ids": [] }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/discovery")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["has_artists_saved"], false);
    assert_eq!(body["song_name"], Value::Null);
}

#[actix_web::test]
async fn login_requires_a_prior_sign_up() {
    let app = test::init_service(test_app()).await;

    let res = test::call_service(&app, post_username("/api/v1/login", "grace").to_request()).await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(res.headers().contains_key("trace-id"));
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "unauthorized");
}

#[rstest]
#[case("/api/v1/follows")]
#[case("/api/v1/discovery")]
#[actix_web::test]
async fn logging_out_revokes_access(#[case] uri: &str) {
    let app = test::init_service(test_app()).await;
    test::call_service(&app, post_username("/api/v1/signup", "ada").to_request()).await;
    let res = test::call_service(&app, post_username("/api/v1/login", "ada").to_request()).await;
    let cookie = session_cookie(&res);

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/logout")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert!(res.status().is_success());
    let cleared = session_cookie(&res);

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri(uri).cookie(cleared).to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}
