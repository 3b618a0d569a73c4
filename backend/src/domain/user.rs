//! User identity.
//!
//! The username is the only attribute the core uses: it identifies the
//! account and is the join key for followed artists.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum username length in characters, matching the storage column.
pub const USERNAME_MAX: usize = 80;

/// Validation errors returned by [`Username::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsernameValidationError {
    /// Input was empty or whitespace only.
    #[error("username must not be empty")]
    Empty,
    /// Input carried leading or trailing whitespace.
    #[error("username must not start or end with whitespace")]
    SurroundingWhitespace,
    /// Input exceeded [`USERNAME_MAX`] characters.
    #[error("username must be at most {max} characters")]
    TooLong {
        /// Configured maximum.
        max: usize,
    },
}

/// Case-sensitive account name.
///
/// # Examples
/// ```
/// use song_explorer::domain::Username;
///
/// let name = Username::new("Ada").expect("valid username");
/// assert_eq!(name.as_ref(), "Ada");
/// assert_ne!(name, Username::new("ada").expect("valid username"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "ada")]
pub struct Username(String);

impl Username {
    /// Validate and construct a username.
    pub fn new(raw: impl Into<String>) -> Result<Self, UsernameValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(UsernameValidationError::Empty);
        }
        if raw.trim() != raw {
            return Err(UsernameValidationError::SurroundingWhitespace);
        }
        if raw.chars().count() > USERNAME_MAX {
            return Err(UsernameValidationError::TooLong { max: USERNAME_MAX });
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
