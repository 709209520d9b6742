//! Vote service: lifecycle, ballots and result visibility.
//!
//! Only the author of the post a vote hangs on may create, edit, delete or close
//! it. A post carries at most one open vote at a time. Ballots are all-or-nothing:
//! every selected option is resolved in one lookup scoped to the vote before any
//! ballot row is written.

use std::collections::BTreeSet;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        post::PostRepository,
        vote::{ballot::VoteBallotRepository, option::VoteOptionRepository, VoteRepository},
    },
    error::{vote::VoteError, AppError},
    model::{
        post::Post,
        vote::{
            result_accessible, CastBallotParams, CreateVoteParams, UpdateVoteParams, Vote,
            VoteResult, VoteTally, VoteView,
        },
    },
    service::board::ensure_author,
};

pub struct VoteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VoteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a vote with its options on the caller's post.
    ///
    /// # Returns
    /// - `Ok(vote_id)`: Vote and options stored
    /// - `Err(AppError::BadRequest)`: Invalid name, options, window or initial mode
    /// - `Err(AppError::NotFound)`: Post not visible
    /// - `Err(AppError::Forbidden)`: Caller is not the post author
    /// - `Err(VoteError::ActiveVoteExists)`: Post already has an open vote
    pub async fn create(&self, actor_id: i32, params: CreateVoteParams) -> Result<i32, AppError> {
        params.validate()?;

        let txn = self.db.begin().await?;

        let post = PostRepository::new(&txn)
            .find_visible(params.post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", params.post_id)))?;
        ensure_author(&post, actor_id)?;

        let vote_repo = VoteRepository::new(&txn);
        if vote_repo.open_exists_for_post(post.id).await? {
            return Err(VoteError::ActiveVoteExists(post.id).into());
        }

        let vote = vote_repo.create(&params).await?;
        VoteOptionRepository::new(&txn)
            .create_many(vote.id, &params.options)
            .await?;

        txn.commit().await?;

        tracing::info!("Vote {} created on post {}", vote.id, post.id);

        Ok(vote.id)
    }

    /// Returns the newest non-removed vote of a post as seen by `viewer_id`.
    ///
    /// Counts of an open vote are hidden until the viewer has voted on it;
    /// anonymous viewers never see them before the vote closes.
    pub async fn list_for_post(
        &self,
        viewer_id: Option<i32>,
        post_id: i32,
    ) -> Result<VoteView, AppError> {
        PostRepository::new(self.db)
            .find_visible(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", post_id)))?;

        let vote = VoteRepository::new(self.db)
            .find_by_post(post_id)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("Post {} has no vote", post_id)))?;

        let has_voted = match viewer_id {
            Some(member_id) => {
                VoteBallotRepository::new(self.db)
                    .has_voted(vote.id, member_id)
                    .await?
            }
            None => false,
        };

        let tallies = load_tallies(self.db, vote.id).await?;

        Ok(VoteView::new(vote, has_voted, tallies))
    }

    /// Full tallies of a vote for a member allowed to see them.
    ///
    /// # Returns
    /// - `Ok(VoteResult)`: Counts per non-removed option, ordered by option id
    /// - `Err(AppError::NotFound)`: Vote missing or removed
    /// - `Err(VoteError::ResultNotAccessible)`: Community vote the member has not
    ///   voted on, or study vote still open
    pub async fn result(&self, actor_id: i32, vote_id: i32) -> Result<VoteResult, AppError> {
        let vote = active_vote(self.db, vote_id).await?;
        let has_voted = VoteBallotRepository::new(self.db)
            .has_voted(vote.id, actor_id)
            .await?;

        if !result_accessible(vote.context, vote.mode, has_voted) {
            return Err(VoteError::ResultNotAccessible(vote.id).into());
        }

        let tallies = load_tallies(self.db, vote.id).await?;

        Ok(VoteResult { vote, tallies })
    }

    /// Updates vote fields and renames options of this vote.
    ///
    /// Renaming an option that is not an active option of the vote fails the whole
    /// update with DATA_NOT_FOUND.
    pub async fn update(
        &self,
        actor_id: i32,
        vote_id: i32,
        params: UpdateVoteParams,
    ) -> Result<(), AppError> {
        params.validate()?;

        let txn = self.db.begin().await?;

        let vote = active_vote(&txn, vote_id).await?;
        ensure_vote_author(&txn, &vote, actor_id).await?;

        let start_time = params.start_time.unwrap_or(vote.start_time);
        let end_time = params.end_time.unwrap_or(vote.end_time);
        if end_time <= start_time {
            return Err(AppError::BadRequest(
                "Vote end time must be after its start time".to_string(),
            ));
        }

        VoteRepository::new(&txn).update(vote.id, &params).await?;

        let option_repo = VoteOptionRepository::new(&txn);
        for option in &params.options {
            option_repo.rename(vote.id, option.id, &option.name).await?;
        }

        txn.commit().await?;

        Ok(())
    }

    /// Soft-deletes a vote together with the listed options of it.
    pub async fn delete(
        &self,
        actor_id: i32,
        vote_id: i32,
        option_ids: Vec<i32>,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let vote = active_vote(&txn, vote_id).await?;
        ensure_vote_author(&txn, &vote, actor_id).await?;

        let option_ids: Vec<i32> = option_ids
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if !option_ids.is_empty() {
            let removed = VoteOptionRepository::new(&txn)
                .mark_removed(vote.id, &option_ids)
                .await?;
            if removed != option_ids.len() as u64 {
                return Err(AppError::NotFound(format!(
                    "Some options are not active options of vote {}",
                    vote.id
                )));
            }
        }

        VoteRepository::new(&txn).mark_removed(vote.id).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Soft-deletes one option; its ballots stop counting.
    pub async fn delete_option(
        &self,
        actor_id: i32,
        vote_id: i32,
        option_id: i32,
    ) -> Result<(), AppError> {
        let vote = active_vote(self.db, vote_id).await?;
        ensure_vote_author(self.db, &vote, actor_id).await?;

        let removed = VoteOptionRepository::new(self.db)
            .mark_removed(vote.id, &[option_id])
            .await?;
        if removed == 0 {
            return Err(AppError::NotFound(format!(
                "Option {} not found on vote {}",
                option_id, vote.id
            )));
        }

        Ok(())
    }

    /// Closes the vote. Closing an already closed vote succeeds without changes.
    pub async fn close(&self, actor_id: i32, vote_id: i32) -> Result<(), AppError> {
        let vote = active_vote(self.db, vote_id).await?;
        ensure_vote_author(self.db, &vote, actor_id).await?;

        if vote.is_closed() {
            return Ok(());
        }

        VoteRepository::new(self.db).close(vote.id).await?;

        tracing::info!("Vote {} closed by member {}", vote.id, actor_id);

        Ok(())
    }

    /// Records the caller's ballot, one row per selected option.
    ///
    /// # Returns
    /// - `Ok(())`: Ballot stored
    /// - `Err(VoteError::VoterMismatch)`: Request names another member
    /// - `Err(AppError::NotFound)`: Vote missing/removed, or an option not active on it
    /// - `Err(VoteError::Closed)`: Vote no longer accepts ballots
    /// - `Err(AppError::BadRequest)`: Selection does not fit the vote mode
    /// - `Err(VoteError::AlreadyVoted)`: Member already voted on this vote
    pub async fn cast(&self, actor_id: i32, params: CastBallotParams) -> Result<(), AppError> {
        if actor_id != params.member_id {
            tracing::warn!(
                "Rejected ballot on vote {}: member {} submitted for member {}",
                params.vote_id,
                actor_id,
                params.member_id
            );
            return Err(VoteError::VoterMismatch {
                actor: actor_id,
                requested: params.member_id,
            }
            .into());
        }

        let txn = self.db.begin().await?;

        let vote = active_vote(&txn, params.vote_id).await?;
        if vote.is_closed() {
            return Err(VoteError::Closed(vote.id).into());
        }
        params.validate_selection(vote.mode)?;

        if VoteBallotRepository::new(&txn)
            .has_voted(vote.id, actor_id)
            .await?
        {
            tracing::warn!("Rejected repeat ballot on vote {} by member {}", vote.id, actor_id);
            return Err(VoteError::AlreadyVoted {
                vote_id: vote.id,
                member_id: actor_id,
            }
            .into());
        }

        let options = VoteOptionRepository::new(&txn)
            .find_active_by_ids(vote.id, &params.option_ids)
            .await?;
        if options.len() != params.option_ids.len() {
            return Err(AppError::NotFound(format!(
                "Some selected options are not active options of vote {}",
                vote.id
            )));
        }

        VoteBallotRepository::new(&txn)
            .create_many(actor_id, vote.id, &params.option_ids)
            .await?;

        txn.commit().await?;

        Ok(())
    }
}

/// Counts per non-removed option of a vote.
async fn load_tallies<C: ConnectionTrait>(
    db: &C,
    vote_id: i32,
) -> Result<Vec<VoteTally>, AppError> {
    let options = VoteOptionRepository::new(db)
        .find_active_by_vote(vote_id)
        .await?;
    Ok(VoteBallotRepository::new(db).tally(vote_id, options).await?)
}

/// Non-removed vote whose post is still visible.
///
/// A vote on a removed or hidden post is treated as missing for every operation.
async fn active_vote<C: ConnectionTrait>(db: &C, vote_id: i32) -> Result<Vote, AppError> {
    let vote = VoteRepository::new(db)
        .find_active(vote_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Vote {} not found", vote_id)))?;

    visible_post_of(db, &vote).await?;

    Ok(vote)
}

async fn visible_post_of<C: ConnectionTrait>(db: &C, vote: &Vote) -> Result<Post, AppError> {
    PostRepository::new(db)
        .find_visible(vote.post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {} not found", vote.post_id)))
}

async fn ensure_vote_author<C: ConnectionTrait>(
    db: &C,
    vote: &Vote,
    actor_id: i32,
) -> Result<(), AppError> {
    let post = visible_post_of(db, vote).await?;

    ensure_author(&post, actor_id)
}
