//! Member service: signup with Argon2 password hashing and credential checks.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::member::MemberRepository,
    error::{auth::AuthError, AppError},
    model::member::{Member, SignupParams},
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new member.
    ///
    /// # Returns
    /// - `Ok(Member)`: Created member
    /// - `Err(AppError::BadRequest)`: Blank email, password or nickname
    /// - `Err(AppError::Duplicate)`: Email or nickname already taken
    pub async fn signup(&self, params: SignupParams) -> Result<Member, AppError> {
        if params.email.is_empty() || params.nickname.is_empty() || params.password.is_empty() {
            return Err(AppError::BadRequest(
                "Email, password and nickname are required".to_string(),
            ));
        }

        let repo = MemberRepository::new(self.db);

        if repo.email_exists(&params.email).await? {
            return Err(AppError::Duplicate(format!(
                "Email {} is already registered",
                params.email
            )));
        }
        if repo.nickname_exists(&params.nickname).await? {
            return Err(AppError::Duplicate(format!(
                "Nickname {} is already taken",
                params.nickname
            )));
        }

        let password_hash = hash_password(&params.password)?;
        let member = repo
            .create(params.email, params.nickname, password_hash)
            .await?;

        tracing::info!("Member {} signed up", member.id);

        Ok(member)
    }

    /// Checks credentials and returns the member; storing it in the session is
    /// left to the caller.
    ///
    /// Unknown email and wrong password fail the same way.
    pub async fn login(&self, email: &str, password: &str) -> Result<Member, AppError> {
        let credentials = MemberRepository::new(self.db)
            .find_credentials_by_email(email.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &credentials.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(credentials.member)
    }
}

fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
}

fn verify_password(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(p) => p,
        Err(_) => return false,
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}
