//! Board service: posts, reply tree assembly and reports.

use entity::post::BoardType;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{post::PostRepository, reply::ReplyRepository, report::PostReportRepository},
    error::AppError,
    model::{
        post::{
            CreatePostParams, Post, PostDetail, PostListParams, PostPage, PostSummary,
            UpdatePostParams,
        },
        reply::build_reply_tree,
    },
};

pub struct BoardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a post and returns it with an empty reply tree.
    pub async fn create(&self, params: CreatePostParams) -> Result<PostDetail, AppError> {
        if params.title.trim().is_empty() {
            return Err(AppError::BadRequest("Title must not be blank".to_string()));
        }

        let board_type = params.board_type;
        let post = PostRepository::new(self.db).create(params).await?;

        self.get_detail(board_type, post.id).await
    }

    /// Gets a visible post with its reply tree.
    ///
    /// # Returns
    /// - `Ok(PostDetail)`: Post with replies assembled one level deep
    /// - `Err(AppError::NotFound)`: Post missing, removed, reported or on another board
    pub async fn get_detail(&self, board_type: BoardType, id: i32) -> Result<PostDetail, AppError> {
        let post = visible_post(self.db, board_type, id).await?;
        let replies = ReplyRepository::new(self.db).find_by_post(post.id).await?;

        Ok(PostDetail {
            post,
            replies: build_reply_tree(replies),
        })
    }

    /// Lists one page of a board with per-post reply counts.
    pub async fn list(&self, params: PostListParams) -> Result<PostPage, AppError> {
        let posts = PostRepository::new(self.db).list(&params).await?;

        let post_ids: Vec<i32> = posts.iter().map(|p| p.id).collect();
        let counts = ReplyRepository::new(self.db)
            .count_visible_by_posts(&post_ids)
            .await?;

        let summaries = posts
            .into_iter()
            .map(|post| PostSummary {
                reply_count: counts.get(&post.id).copied().unwrap_or(0),
                post,
            })
            .collect();

        Ok(PostPage::new(summaries, params.size))
    }

    /// Replaces title and content of the caller's own post.
    pub async fn update(
        &self,
        actor_id: i32,
        board_type: BoardType,
        id: i32,
        params: UpdatePostParams,
    ) -> Result<PostDetail, AppError> {
        if params.title.trim().is_empty() {
            return Err(AppError::BadRequest("Title must not be blank".to_string()));
        }

        let post = visible_post(self.db, board_type, id).await?;
        ensure_author(&post, actor_id)?;

        PostRepository::new(self.db).update(post.id, params).await?;

        self.get_detail(board_type, id).await
    }

    /// Soft-deletes the caller's own post.
    pub async fn delete(&self, actor_id: i32, board_type: BoardType, id: i32) -> Result<(), AppError> {
        let post = visible_post(self.db, board_type, id).await?;
        ensure_author(&post, actor_id)?;

        PostRepository::new(self.db).mark_removed(post.id).await?;

        Ok(())
    }

    /// Records a report and hides the post once `threshold` members reported it.
    ///
    /// # Returns
    /// - `Ok(true)`: Report stored and the post is now hidden
    /// - `Ok(false)`: Report stored, post still visible
    /// - `Err(AppError::DuplicateReport)`: Member already reported this post
    /// - `Err(AppError::NotFound)`: Post is not visible
    pub async fn report(
        &self,
        actor_id: i32,
        board_type: BoardType,
        id: i32,
        reason: Option<String>,
        threshold: u64,
    ) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let post = visible_post(&txn, board_type, id).await?;
        let report_repo = PostReportRepository::new(&txn);

        if report_repo.exists(post.id, actor_id).await? {
            return Err(AppError::DuplicateReport {
                post_id: post.id,
                member_id: actor_id,
            });
        }

        let reason = reason.map(|r| r.trim().to_string()).filter(|r| !r.is_empty());
        report_repo.create(post.id, actor_id, reason).await?;

        let hidden = report_repo.count_by_post(post.id).await? >= threshold;
        if hidden {
            PostRepository::new(&txn).mark_reported(post.id).await?;
        }

        txn.commit().await?;

        if hidden {
            tracing::info!("Post {} hidden after reaching {} reports", post.id, threshold);
        }

        Ok(hidden)
    }
}

/// Loads a visible post that belongs to `board_type`.
pub(super) async fn visible_post<C: ConnectionTrait>(
    db: &C,
    board_type: BoardType,
    id: i32,
) -> Result<Post, AppError> {
    PostRepository::new(db)
        .find_visible(id)
        .await?
        .filter(|post| post.board_type == board_type)
        .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))
}

pub(super) fn ensure_author(post: &Post, actor_id: i32) -> Result<(), AppError> {
    if post.author.id != actor_id {
        return Err(AppError::Forbidden(format!(
            "Member {} is not the author of post {}",
            actor_id, post.id
        )));
    }
    Ok(())
}
