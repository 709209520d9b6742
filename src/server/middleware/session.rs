//! Type-safe session management wrapper.
//!
//! `AuthSession` wraps the tower-sessions `Session` and exposes only the
//! authentication state: the signed-in member's id.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_MEMBER_ID: &str = "auth:member";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the member id after a successful login.
    ///
    /// The session id is cycled first to prevent fixation.
    ///
    /// # Returns
    /// - `Ok(())` - Member id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_member_id(&self, member_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_MEMBER_ID, member_id).await?;
        Ok(())
    }

    /// Retrieves the signed-in member id.
    ///
    /// # Returns
    /// - `Ok(Some(member_id))` - Member is logged in
    /// - `Ok(None)` - Anonymous caller
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_member_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_MEMBER_ID).await?)
    }

    /// Clears all data from the session. Used during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
