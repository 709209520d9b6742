//! Study domain models and membership parameters.

use chrono::{DateTime, Utc};
use entity::study_member::{StudyMemberRole, StudyMemberStatus};

use crate::{
    model::study::{
        CreateStudyDto, StudyDto, StudyMemberDto, StudyMemberRoleDto, StudyMemberStatusDto,
        UpdateStudyDto,
    },
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Study {
    pub id: i32,
    pub name: String,
    pub intro: String,
    pub max_members: i32,
    pub created_at: DateTime<Utc>,
}

impl Study {
    pub fn from_entity(entity: entity::study::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            intro: entity.intro,
            max_members: entity.max_members,
            created_at: entity.created_at,
        }
    }
}

/// A non-removed membership with the member's nickname.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyMembership {
    pub id: i32,
    pub study_id: i32,
    pub member_id: i32,
    pub nickname: String,
    pub status: StudyMemberStatus,
    pub role: StudyMemberRole,
    pub join_intro: Option<String>,
}

impl StudyMembership {
    pub fn from_entity(
        entity: entity::study_member::Model,
        member: Option<entity::member::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            study_id: entity.study_id,
            member_id: entity.member_id,
            nickname: member.map(|m| m.nickname).unwrap_or_default(),
            status: entity.status,
            role: entity.role,
            join_intro: entity.join_intro,
        }
    }

    pub fn is_leader(&self) -> bool {
        self.status == StudyMemberStatus::Joined && self.role == StudyMemberRole::Leader
    }

    pub fn into_dto(self) -> StudyMemberDto {
        StudyMemberDto {
            id: self.id,
            member_id: self.member_id,
            nickname: self.nickname,
            status: match self.status {
                StudyMemberStatus::Waiting => StudyMemberStatusDto::Waiting,
                StudyMemberStatus::Joined => StudyMemberStatusDto::Joined,
            },
            role: match self.role {
                StudyMemberRole::Leader => StudyMemberRoleDto::Leader,
                StudyMemberRole::Member => StudyMemberRoleDto::Member,
            },
            join_intro: self.join_intro,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudyDetail {
    pub study: Study,
    pub joined_count: u64,
    /// Joined members, plus waiting requests when viewed by the leader.
    pub members: Vec<StudyMembership>,
}

impl StudyDetail {
    pub fn into_dto(self) -> StudyDto {
        StudyDto {
            id: self.study.id,
            name: self.study.name,
            intro: self.study.intro,
            max_members: self.study.max_members,
            joined_count: self.joined_count,
            created_at: self.study.created_at,
            members: self
                .members
                .into_iter()
                .map(StudyMembership::into_dto)
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StudyParams {
    pub name: String,
    pub intro: String,
    pub max_members: i32,
}

impl StudyParams {
    pub fn from_create_dto(dto: CreateStudyDto) -> Self {
        Self {
            name: dto.name,
            intro: dto.intro,
            max_members: dto.max_members,
        }
    }

    pub fn from_update_dto(dto: UpdateStudyDto) -> Self {
        Self {
            name: dto.name,
            intro: dto.intro,
            max_members: dto.max_members,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("Study name must not be blank".to_string()));
        }
        if self.max_members < 1 {
            return Err(AppError::BadRequest(
                "Study needs room for at least one member".to_string(),
            ));
        }
        Ok(())
    }
}
