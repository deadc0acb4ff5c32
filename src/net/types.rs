#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Errors from the API layer and the payload trust boundary.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend sent a role string outside the closed [`Role`] set.
    #[error("unknown role: {0:?}")]
    UnknownRole(String),
    /// Transport or decoding failure.
    #[error("{0}")]
    Http(String),
    /// The backend understood the request and refused it (bad credentials,
    /// expired token, unknown account).
    #[error("{0}")]
    Rejected(String),
}

/// Closed set of summit roles.
///
/// Roles are plain tags compared for membership against per-route
/// allow-lists; there is no hierarchy among them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Facilitator,
    SecretariatLead,
    Delegate,
}

impl Role {
    /// Wire spelling used by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Facilitator => "FACILITATOR",
            Role::SecretariatLead => "SECRETARIAT_LEAD",
            Role::Delegate => "DELEGATE",
        }
    }
}

impl FromStr for Role {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "FACILITATOR" => Ok(Role::Facilitator),
            "SECRETARIAT_LEAD" => Ok(Role::SecretariatLead),
            "DELEGATE" => Ok(Role::Delegate),
            other => Err(ApiError::UnknownRole(other.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User record as deserialized from the backend, role still a raw string.
///
/// Converted to [`User`] with [`TryFrom`] so the role is validated exactly
/// once, at the trust boundary.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserPayload {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

/// A validated user: the role has been parsed into the closed enum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl TryFrom<UserPayload> for User {
    type Error = ApiError;

    fn try_from(payload: UserPayload) -> Result<Self, Self::Error> {
        Ok(User {
            role: payload.role.parse()?,
            id: payload.id,
            email: payload.email,
            name: payload.name,
        })
    }
}

/// Body of a successful login/register response.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponsePayload {
    pub user: UserPayload,
    pub token: String,
}

/// Validated credentials ready to store: typed user plus bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub user: User,
    pub token: String,
}

impl TryFrom<AuthResponsePayload> for Credentials {
    type Error = ApiError;

    fn try_from(payload: AuthResponsePayload) -> Result<Self, Self::Error> {
        Ok(Credentials {
            user: User::try_from(payload.user)?,
            token: payload.token,
        })
    }
}
