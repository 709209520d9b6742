use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::member::{Member, MemberCredentials};

pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a member with an already hashed password.
    pub async fn create(
        &self,
        email: String,
        nickname: String,
        password_hash: String,
    ) -> Result<Member, DbErr> {
        let member = entity::member::ActiveModel {
            email: ActiveValue::Set(email),
            nickname: ActiveValue::Set(nickname),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Member::from_entity(member))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::member::Model>, DbErr> {
        entity::prelude::Member::find_by_id(id).one(self.db).await
    }

    /// Finds a member with the stored password hash for login.
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<MemberCredentials>, DbErr> {
        let member = entity::prelude::Member::find()
            .filter(entity::member::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(member.map(|m| MemberCredentials {
            password_hash: m.password_hash.clone(),
            member: Member::from_entity(m),
        }))
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Member::find()
            .filter(entity::member::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn nickname_exists(&self, nickname: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Member::find()
            .filter(entity::member::Column::Nickname.eq(nickname))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
