use chrono::{DateTime, Utc};

use crate::model::member::{AuthorDto, MemberDto, SignupDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    pub email: String,
    pub nickname: String,
    pub created_at: DateTime<Utc>,
}

impl Member {
    pub fn from_entity(entity: entity::member::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            nickname: entity.nickname,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.id,
            email: self.email,
            nickname: self.nickname,
            created_at: self.created_at,
        }
    }
}

/// Public identity of a post or reply author.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: i32,
    pub nickname: String,
}

impl Author {
    /// Builds the author from an optionally joined member row.
    ///
    /// Members are never deleted while their content exists, so a missing row only
    /// happens on inconsistent data and renders an empty nickname.
    pub fn from_entity(id: i32, member: Option<entity::member::Model>) -> Self {
        Self {
            id,
            nickname: member.map(|m| m.nickname).unwrap_or_default(),
        }
    }

    pub fn into_dto(self) -> AuthorDto {
        AuthorDto {
            id: self.id,
            nickname: self.nickname,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SignupParams {
    pub email: String,
    pub password: String,
    pub nickname: String,
}

impl SignupParams {
    pub fn from_dto(dto: SignupDto) -> Self {
        Self {
            email: dto.email.trim().to_string(),
            password: dto.password,
            nickname: dto.nickname.trim().to_string(),
        }
    }
}

/// Member row with its stored password hash, used only for login.
#[derive(Debug, Clone)]
pub struct MemberCredentials {
    pub member: Member,
    pub password_hash: String,
}
