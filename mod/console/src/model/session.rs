use serde::{Deserialize, Serialize};

use crate::model::org::{SectorId, UserId};
use crate::model::permission::Permission;

/// An authenticated operator or administrator, with the permission set
/// resolved at login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,

    /// Display name.
    pub name: String,

    /// The user's resolved grants. Replaced wholesale on re-login or
    /// token validation; never mutated in place.
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

/// The authenticated application session. Exactly one live session at
/// a time; created at login, destroyed on logout or token invalidation.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: User,
    /// Opaque bearer token. Persisting it is the host's concern.
    pub token: String,
}

/// Request body for the login endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub user: String,
    pub pass: String,

    /// Module discriminator: which application is logging in.
    pub type_module: i64,

    /// Optional fixed sector for sector-bound installations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_sector: Option<SectorId>,
}

/// Response body from the login endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}
