use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::member::MemberRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

/// Resolves the caller's identity from the session.
///
/// Controllers call `require()` for endpoints that need a signed-in member and
/// `current()` for endpoints that also serve anonymous callers.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the signed-in member.
    ///
    /// # Returns
    /// - `Ok(member)` - Session holds a member that exists
    /// - `Err(AuthError::MemberNotInSession)` - Anonymous caller
    /// - `Err(AuthError::MemberNotInDatabase)` - Member was deleted after login
    pub async fn require(&self) -> Result<entity::member::Model, AppError> {
        let Some(member_id) = AuthSession::new(self.session).get_member_id().await? else {
            return Err(AuthError::MemberNotInSession.into());
        };

        let Some(member) = MemberRepository::new(self.db).find_by_id(member_id).await? else {
            return Err(AuthError::MemberNotInDatabase(member_id).into());
        };

        Ok(member)
    }

    /// Returns the signed-in member id, or `None` for anonymous callers.
    ///
    /// A session pointing at a deleted member is treated as anonymous.
    pub async fn current(&self) -> Result<Option<i32>, AppError> {
        let Some(member_id) = AuthSession::new(self.session).get_member_id().await? else {
            return Ok(None);
        };

        let exists = MemberRepository::new(self.db)
            .find_by_id(member_id)
            .await?
            .is_some();

        Ok(exists.then_some(member_id))
    }
}
