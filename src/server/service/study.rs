//! Study service: study lifecycle and the membership workflow.
//!
//! A membership moves from waiting to joined on the leader's accept and ends by
//! soft deletion (disapprove, leave, kick). The leader must hand leadership to a
//! joined member before leaving; deleting the study is the other way out.

use entity::study_member::{StudyMemberRole, StudyMemberStatus};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::study::{member::StudyMemberRepository, StudyRepository},
    error::{study::StudyError, AppError},
    model::study::{Study, StudyDetail, StudyMembership, StudyParams},
};

pub struct StudyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a study with the caller as its joined leader.
    pub async fn create(&self, actor_id: i32, params: StudyParams) -> Result<StudyDetail, AppError> {
        params.validate()?;

        let txn = self.db.begin().await?;

        let study = StudyRepository::new(&txn).create(&params).await?;
        StudyMemberRepository::new(&txn)
            .create(
                study.id,
                actor_id,
                StudyMemberStatus::Joined,
                StudyMemberRole::Leader,
                None,
            )
            .await?;

        txn.commit().await?;

        tracing::info!("Study {} created by member {}", study.id, actor_id);

        self.get(Some(actor_id), study.id).await
    }

    /// Gets a study with its members.
    ///
    /// The leader also sees waiting join requests; everyone else only joined members.
    pub async fn get(&self, viewer_id: Option<i32>, id: i32) -> Result<StudyDetail, AppError> {
        let study = active_study(self.db, id).await?;
        let member_repo = StudyMemberRepository::new(self.db);

        let viewer_is_leader = match viewer_id {
            Some(member_id) => member_repo
                .find_active(study.id, member_id)
                .await?
                .is_some_and(|m| m.is_leader()),
            None => false,
        };

        let members = member_repo.list(study.id, viewer_is_leader).await?;
        let joined_count = member_repo.count_joined(study.id).await?;

        Ok(StudyDetail {
            study,
            joined_count,
            members,
        })
    }

    /// Updates a study; capacity may not drop below the joined count.
    pub async fn update(
        &self,
        actor_id: i32,
        id: i32,
        params: StudyParams,
    ) -> Result<StudyDetail, AppError> {
        params.validate()?;

        let study = active_study(self.db, id).await?;
        leader_membership(self.db, study.id, actor_id).await?;

        let joined = StudyMemberRepository::new(self.db)
            .count_joined(study.id)
            .await?;
        if (params.max_members as u64) < joined {
            return Err(StudyError::CapacityBelowJoined {
                requested: params.max_members,
                joined,
            }
            .into());
        }

        StudyRepository::new(self.db).update(study.id, &params).await?;

        self.get(Some(actor_id), study.id).await
    }

    pub async fn delete(&self, actor_id: i32, id: i32) -> Result<(), AppError> {
        let study = active_study(self.db, id).await?;
        leader_membership(self.db, study.id, actor_id).await?;

        StudyRepository::new(self.db).mark_removed(study.id).await?;

        Ok(())
    }

    /// Files a join request for the caller.
    ///
    /// # Returns
    /// - `Ok(StudyMembership)`: Waiting membership
    /// - `Err(AppError::NotFound)`: Study missing or removed
    /// - `Err(StudyError::AlreadyMember)`: Caller already waiting or joined
    pub async fn join(
        &self,
        actor_id: i32,
        id: i32,
        intro: Option<String>,
    ) -> Result<StudyMembership, AppError> {
        let txn = self.db.begin().await?;

        let study = active_study(&txn, id).await?;
        let member_repo = StudyMemberRepository::new(&txn);

        if member_repo.find_active(study.id, actor_id).await?.is_some() {
            return Err(StudyError::AlreadyMember {
                study_id: study.id,
                member_id: actor_id,
            }
            .into());
        }

        let intro = intro.map(|i| i.trim().to_string()).filter(|i| !i.is_empty());
        member_repo
            .create(
                study.id,
                actor_id,
                StudyMemberStatus::Waiting,
                StudyMemberRole::Member,
                intro,
            )
            .await?;

        let membership = member_repo
            .find_active(study.id, actor_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError("Join request not found after creation".to_string())
            })?;

        txn.commit().await?;

        Ok(membership)
    }

    /// Accepts a waiting request; refused once joined members reach capacity.
    pub async fn accept(&self, actor_id: i32, id: i32, member_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let study = active_study(&txn, id).await?;
        leader_membership(&txn, study.id, actor_id).await?;
        let request = waiting_membership(&txn, study.id, member_id).await?;

        let member_repo = StudyMemberRepository::new(&txn);
        if member_repo.count_joined(study.id).await? >= study.max_members as u64 {
            return Err(StudyError::Full(study.id).into());
        }

        member_repo
            .set_status(request.id, StudyMemberStatus::Joined)
            .await?;

        txn.commit().await?;

        Ok(())
    }

    /// Rejects a waiting request.
    pub async fn disapprove(&self, actor_id: i32, id: i32, member_id: i32) -> Result<(), AppError> {
        let study = active_study(self.db, id).await?;
        leader_membership(self.db, study.id, actor_id).await?;
        let request = waiting_membership(self.db, study.id, member_id).await?;

        StudyMemberRepository::new(self.db)
            .mark_removed(request.id)
            .await?;

        Ok(())
    }

    /// Leaves a study the caller has joined. The leader is refused.
    pub async fn leave(&self, actor_id: i32, id: i32) -> Result<(), AppError> {
        let study = active_study(self.db, id).await?;
        let member_repo = StudyMemberRepository::new(self.db);

        let membership = member_repo
            .find_active(study.id, actor_id)
            .await?
            .filter(|m| m.status == StudyMemberStatus::Joined)
            .ok_or(StudyError::NotJoinedMember {
                study_id: study.id,
                member_id: actor_id,
            })?;

        if membership.is_leader() {
            return Err(StudyError::LeaderCannotLeave.into());
        }

        member_repo.mark_removed(membership.id).await?;

        Ok(())
    }

    /// Removes a joined, non-leader member.
    pub async fn kick(&self, actor_id: i32, id: i32, member_id: i32) -> Result<(), AppError> {
        let study = active_study(self.db, id).await?;
        leader_membership(self.db, study.id, actor_id).await?;
        let target = joined_member(self.db, study.id, member_id).await?;

        StudyMemberRepository::new(self.db)
            .mark_removed(target.id)
            .await?;

        tracing::info!(
            "Member {} removed from study {} by leader {}",
            member_id,
            study.id,
            actor_id
        );

        Ok(())
    }

    /// Hands leadership to a joined member; the previous leader stays as a member.
    pub async fn transfer(&self, actor_id: i32, id: i32, member_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let study = active_study(&txn, id).await?;
        let leader = leader_membership(&txn, study.id, actor_id).await?;
        let target = joined_member(&txn, study.id, member_id).await?;

        let member_repo = StudyMemberRepository::new(&txn);
        member_repo.set_role(target.id, StudyMemberRole::Leader).await?;
        member_repo.set_role(leader.id, StudyMemberRole::Member).await?;

        txn.commit().await?;

        tracing::info!(
            "Leadership of study {} transferred from member {} to member {}",
            study.id,
            actor_id,
            member_id
        );

        Ok(())
    }
}

async fn active_study<C: ConnectionTrait>(db: &C, id: i32) -> Result<Study, AppError> {
    StudyRepository::new(db)
        .find_active(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Study {} not found", id)))
}

async fn leader_membership<C: ConnectionTrait>(
    db: &C,
    study_id: i32,
    actor_id: i32,
) -> Result<StudyMembership, AppError> {
    StudyMemberRepository::new(db)
        .find_active(study_id, actor_id)
        .await?
        .filter(StudyMembership::is_leader)
        .ok_or_else(|| {
            AppError::Forbidden(format!(
                "Member {} is not the leader of study {}",
                actor_id, study_id
            ))
        })
}

async fn waiting_membership<C: ConnectionTrait>(
    db: &C,
    study_id: i32,
    member_id: i32,
) -> Result<StudyMembership, AppError> {
    Ok(StudyMemberRepository::new(db)
        .find_active(study_id, member_id)
        .await?
        .filter(|m| m.status == StudyMemberStatus::Waiting)
        .ok_or(StudyError::NotWaiting {
            study_id,
            member_id,
        })?)
}

/// A joined membership that is not the leader's.
async fn joined_member<C: ConnectionTrait>(
    db: &C,
    study_id: i32,
    member_id: i32,
) -> Result<StudyMembership, AppError> {
    Ok(StudyMemberRepository::new(db)
        .find_active(study_id, member_id)
        .await?
        .filter(|m| m.status == StudyMemberStatus::Joined && m.role == StudyMemberRole::Member)
        .ok_or(StudyError::NotJoinedMember {
            study_id,
            member_id,
        })?)
}
