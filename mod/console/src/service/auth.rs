use replast_core::Error;

use crate::model::{LoginRequest, LoginResponse, User};

/// Authentication endpoints.
///
/// `check_token` failure means the session is no longer valid; the
/// caller clears the session store and does not retry.
#[async_trait::async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a user and a bearer token.
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, Error>;

    /// Validate a previously issued token, returning the user with a
    /// freshly resolved permission set.
    async fn check_token(&self, token: &str) -> Result<User, Error>;
}
