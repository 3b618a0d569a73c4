//! Cookie-session settings.
//!
//! The session cookie is encrypted with a key read from disk. Release builds
//! insist on an explicit, long enough key and explicit cookie flags.

use std::path::PathBuf;

use actix_web::cookie::{Key, SameSite};
use mockable::Env;
use tracing::warn;
use zeroize::Zeroize;

use super::{BuildMode, ConfigError, parse_bool};

pub(crate) const SESSION_KEY_DEFAULT_PATH: &str = "/var/run/secrets/session_key";
pub(crate) const SESSION_KEY_MIN_LEN: usize = 64;
pub(crate) const KEY_FILE_ENV: &str = "SESSION_KEY_FILE";
pub(crate) const COOKIE_SECURE_ENV: &str = "SESSION_COOKIE_SECURE";
pub(crate) const SAMESITE_ENV: &str = "SESSION_SAMESITE";
pub(crate) const ALLOW_EPHEMERAL_ENV: &str = "SESSION_ALLOW_EPHEMERAL";
const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";
const SAMESITE_EXPECTED: &str = "Strict|Lax|None";

/// Session cookie settings.
pub struct SessionSettings {
    /// Encryption key for cookie sessions.
    pub key: Key,
    /// Whether cookies carry the `Secure` attribute.
    pub cookie_secure: bool,
    /// `SameSite` policy.
    pub same_site: SameSite,
}

/// Outcome of reading one toggle before mode-specific fallback.
enum Toggle<T> {
    Set(T),
    Missing,
    Invalid(String),
}

fn read_toggle<E: Env, T>(env: &E, name: &str, parse: impl Fn(&str) -> Option<T>) -> Toggle<T> {
    match env.string(name) {
        None => Toggle::Missing,
        Some(raw) => match parse(&raw) {
            Some(value) => Toggle::Set(value),
            None => Toggle::Invalid(raw),
        },
    }
}

/// Resolve a toggle: debug builds fall back to `fallback` with a warning,
/// release builds fail.
fn resolve<T>(
    toggle: Toggle<T>,
    mode: BuildMode,
    name: &'static str,
    expected: &'static str,
    fallback: T,
) -> Result<T, ConfigError> {
    match toggle {
        Toggle::Set(value) => Ok(value),
        Toggle::Missing if mode.is_debug() => {
            warn!(variable = name, "session toggle not set; using development default");
            Ok(fallback)
        }
        Toggle::Missing => Err(ConfigError::MissingEnv { name }),
        Toggle::Invalid(value) if mode.is_debug() => {
            warn!(variable = name, value = %value, "invalid session toggle; using development default");
            Ok(fallback)
        }
        Toggle::Invalid(value) => Err(ConfigError::InvalidEnv {
            name,
            value,
            expected,
        }),
    }
}

fn parse_same_site(raw: &str) -> Option<SameSite> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "lax" => Some(SameSite::Lax),
        "strict" => Some(SameSite::Strict),
        "none" => Some(SameSite::None),
        _ => None,
    }
}

impl SessionSettings {
    /// Read session toggles and load the key.
    pub fn from_env<E: Env>(env: &E, mode: BuildMode) -> Result<Self, ConfigError> {
        let cookie_secure = resolve(
            read_toggle(env, COOKIE_SECURE_ENV, parse_bool),
            mode,
            COOKIE_SECURE_ENV,
            BOOL_EXPECTED,
            true,
        )?;

        let default_same_site = if mode.is_debug() {
            SameSite::Lax
        } else {
            SameSite::Strict
        };
        let same_site = resolve(
            read_toggle(env, SAMESITE_ENV, parse_same_site),
            mode,
            SAMESITE_ENV,
            SAMESITE_EXPECTED,
            default_same_site,
        )?;
        if same_site == SameSite::None && !cookie_secure {
            if mode.is_debug() {
                warn!("SESSION_SAMESITE=None without a secure cookie; browsers may drop it");
            } else {
                return Err(ConfigError::InsecureSameSiteNone);
            }
        }

        let allow_ephemeral = resolve(
            read_toggle(env, ALLOW_EPHEMERAL_ENV, parse_bool),
            mode,
            ALLOW_EPHEMERAL_ENV,
            BOOL_EXPECTED,
            false,
        )?;
        if allow_ephemeral && !mode.is_debug() {
            return Err(ConfigError::EphemeralNotAllowed);
        }

        let key = load_key(env, mode, allow_ephemeral)?;
        Ok(Self {
            key,
            cookie_secure,
            same_site,
        })
    }
}

fn load_key<E: Env>(env: &E, mode: BuildMode, allow_ephemeral: bool) -> Result<Key, ConfigError> {
    let path = PathBuf::from(
        env.string(KEY_FILE_ENV)
            .unwrap_or_else(|| SESSION_KEY_DEFAULT_PATH.to_owned()),
    );

    let mut bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(source) if mode.is_debug() || allow_ephemeral => {
            warn!(path = %path.display(), error = %source, "using temporary session key (dev only)");
            return Ok(Key::generate());
        }
        Err(source) => return Err(ConfigError::KeyRead { path, source }),
    };

    let length = bytes.len();
    let result = if length >= SESSION_KEY_MIN_LEN {
        Ok(Key::derive_from(&bytes))
    } else if mode.is_debug() {
        warn!(path = %path.display(), length, "session key too short; using temporary key (dev only)");
        Ok(Key::generate())
    } else {
        Err(ConfigError::KeyTooShort {
            path,
            length,
            min_len: SESSION_KEY_MIN_LEN,
        })
    };
    bytes.zeroize();
    result
}
