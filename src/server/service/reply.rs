use entity::post::BoardType;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{member::MemberRepository, reply::ReplyRepository},
    error::AppError,
    model::reply::{CreateReplyParams, Reply, UpdateReplyParams},
    service::board::visible_post,
};

pub struct ReplyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReplyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a reply to a visible post.
    ///
    /// A parent must be a non-removed top-level reply of the same post; replies
    /// nest one level only.
    pub async fn create(
        &self,
        board_type: BoardType,
        params: CreateReplyParams,
    ) -> Result<Reply, AppError> {
        if params.content.trim().is_empty() {
            return Err(AppError::BadRequest("Reply must not be blank".to_string()));
        }

        let post = visible_post(self.db, board_type, params.post_id).await?;
        let repo = ReplyRepository::new(self.db);

        if let Some(parent_id) = params.parent_id {
            let parent = repo
                .find_by_id(parent_id)
                .await?
                .filter(|p| p.post_id == post.id && !p.removed)
                .ok_or_else(|| AppError::NotFound(format!("Reply {} not found", parent_id)))?;

            if parent.parent_id.is_some() {
                return Err(AppError::BadRequest(
                    "Replies can only be nested one level deep".to_string(),
                ));
            }
        }

        let reply = repo.create(params).await?;
        let author = MemberRepository::new(self.db)
            .find_by_id(reply.author_id)
            .await?;

        Ok(Reply::from_entity(reply, author))
    }

    pub async fn update(
        &self,
        actor_id: i32,
        id: i32,
        params: UpdateReplyParams,
    ) -> Result<(), AppError> {
        if params.content.trim().is_empty() {
            return Err(AppError::BadRequest("Reply must not be blank".to_string()));
        }

        let repo = ReplyRepository::new(self.db);
        let reply = self.own_reply(&repo, actor_id, id).await?;

        repo.update_content(reply.id, params.content).await?;

        Ok(())
    }

    /// Soft-deletes the caller's reply. Its children stay visible and the reply
    /// itself turns into a tombstone while they exist.
    pub async fn delete(&self, actor_id: i32, id: i32) -> Result<(), AppError> {
        let repo = ReplyRepository::new(self.db);
        let reply = self.own_reply(&repo, actor_id, id).await?;

        repo.mark_removed(reply.id).await?;

        Ok(())
    }

    async fn own_reply(
        &self,
        repo: &ReplyRepository<'_, DatabaseConnection>,
        actor_id: i32,
        id: i32,
    ) -> Result<entity::reply::Model, AppError> {
        let reply = repo
            .find_by_id(id)
            .await?
            .filter(|r| !r.removed)
            .ok_or_else(|| AppError::NotFound(format!("Reply {} not found", id)))?;

        if reply.author_id != actor_id {
            return Err(AppError::Forbidden(format!(
                "Member {} is not the author of reply {}",
                actor_id, id
            )));
        }

        Ok(reply)
    }
}
