//! Environment-driven application settings.
//!
//! Everything is read through [`mockable::Env`] so tests can substitute a
//! `MockEnv`. Release builds are strict about session toggles; debug builds
//! fall back to development defaults and log a warning instead.

mod session;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use mockable::Env;
use zeroize::Zeroizing;

pub use session::SessionSettings;

const DATABASE_URL_ENV: &str = "DATABASE_URL";
const BIND_ADDR_ENV: &str = "BIND_ADDR";
const SPOTIFY_CLIENT_ID_ENV: &str = "SPOTIFY_CLIENT_ID";
const SPOTIFY_CLIENT_SECRET_ENV: &str = "SPOTIFY_CLIENT_SECRET";
const SPOTIFY_MARKET_ENV: &str = "SPOTIFY_MARKET";
const GENIUS_ACCESS_TOKEN_ENV: &str = "GENIUS_ACCESS_TOKEN";
const UPSTREAM_TIMEOUT_ENV: &str = "UPSTREAM_TIMEOUT_SECS";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8081";
const DEFAULT_MARKET: &str = "US";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;
const MAX_UPSTREAM_TIMEOUT_SECS: u64 = 120;

/// Build mode used to pick strict or lenient validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Tolerate missing session toggles with warnings.
    Debug,
    /// Require explicit, valid session toggles.
    Release,
}

impl BuildMode {
    /// Derive the mode from `cfg!(debug_assertions)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use song_explorer::config::BuildMode;
    ///
    /// let mode = BuildMode::from_debug_assertions();
    /// assert_eq!(mode == BuildMode::Debug, cfg!(debug_assertions));
    /// ```
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Configuration failures reported at startup.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is missing or blank.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    /// A variable is present but cannot be used.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    /// Reading the session key file failed.
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The session key file is too short for release builds.
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
    /// `SameSite=None` without a secure cookie in release builds.
    #[error("SESSION_SAMESITE=None requires SESSION_COOKIE_SECURE=1")]
    InsecureSameSiteNone,
    /// Ephemeral session keys requested in a release build.
    #[error("SESSION_ALLOW_EPHEMERAL must be 0 in release builds")]
    EphemeralNotAllowed,
}

/// Credentials and market for the Spotify catalog adapter.
#[derive(Clone)]
pub struct SpotifySettings {
    pub client_id: String,
    pub client_secret: Zeroizing<String>,
    pub market: String,
}

/// Credentials for the Genius lyrics adapter.
#[derive(Clone)]
pub struct GeniusSettings {
    pub access_token: Zeroizing<String>,
}

/// Fully validated application settings.
pub struct AppSettings {
    pub bind_addr: SocketAddr,
    pub database_url: Zeroizing<String>,
    pub spotify: SpotifySettings,
    pub genius: GeniusSettings,
    pub upstream_timeout: Duration,
    pub session: SessionSettings,
}

impl AppSettings {
    /// Read and validate every setting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mockable::MockEnv;
    /// use song_explorer::config::{AppSettings, BuildMode};
    ///
    /// let mut env = MockEnv::new();
    /// env.expect_string().returning(|name| match name {
    ///     "DATABASE_URL" => Some("postgres://localhost/songs".to_owned()),
    ///     "SPOTIFY_CLIENT_ID" => Some("id".to_owned()),
    ///     "SPOTIFY_CLIENT_SECRET" => Some("secret".to_owned()),
    ///     "GENIUS_ACCESS_TOKEN" => Some("token".to_owned()),
    ///     _ => None,
    /// });
    ///
    /// let settings = AppSettings::from_env(&env, BuildMode::Debug).expect("valid settings");
    /// assert_eq!(settings.bind_addr.port(), 8081);
    /// assert_eq!(settings.spotify.market, "US");
    /// ```
    pub fn from_env<E: Env>(env: &E, mode: BuildMode) -> Result<Self, ConfigError> {
        let bind_addr = parse_or_default(env, BIND_ADDR_ENV, DEFAULT_BIND_ADDR, "host:port")?;
        let database_url = Zeroizing::new(required(env, DATABASE_URL_ENV)?);
        let spotify = SpotifySettings {
            client_id: required(env, SPOTIFY_CLIENT_ID_ENV)?,
            client_secret: Zeroizing::new(required(env, SPOTIFY_CLIENT_SECRET_ENV)?),
            market: market_from_env(env)?,
        };
        let genius = GeniusSettings {
            access_token: Zeroizing::new(required(env, GENIUS_ACCESS_TOKEN_ENV)?),
        };
        let upstream_timeout = upstream_timeout_from_env(env)?;
        let session = SessionSettings::from_env(env, mode)?;

        Ok(Self {
            bind_addr,
            database_url,
            spotify,
            genius,
            upstream_timeout,
            session,
        })
    }
}

fn required<E: Env>(env: &E, name: &'static str) -> Result<String, ConfigError> {
    env.string(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::MissingEnv { name })
}

fn parse_or_default<E, T>(
    env: &E,
    name: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    E: Env,
    T: std::str::FromStr,
{
    let value = env.string(name).unwrap_or_else(|| default.to_owned());
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv {
            name,
            value,
            expected,
        })
}

fn market_from_env<E: Env>(env: &E) -> Result<String, ConfigError> {
    let market = env
        .string(SPOTIFY_MARKET_ENV)
        .unwrap_or_else(|| DEFAULT_MARKET.to_owned());
    if market.len() == 2 && market.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(market.to_ascii_uppercase())
    } else {
        Err(ConfigError::InvalidEnv {
            name: SPOTIFY_MARKET_ENV,
            value: market,
            expected: "ISO 3166-1 alpha-2 country code",
        })
    }
}

fn upstream_timeout_from_env<E: Env>(env: &E) -> Result<Duration, ConfigError> {
    let default = DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string();
    let secs: u64 = parse_or_default(env, UPSTREAM_TIMEOUT_ENV, &default, "1..=120 seconds")?;
    if (1..=MAX_UPSTREAM_TIMEOUT_SECS).contains(&secs) {
        Ok(Duration::from_secs(secs))
    } else {
        Err(ConfigError::InvalidEnv {
            name: UPSTREAM_TIMEOUT_ENV,
            value: secs.to_string(),
            expected: "1..=120 seconds",
        })
    }
}

pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}
