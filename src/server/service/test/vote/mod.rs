use crate::server::{
    error::{vote::VoteError, AppError},
    model::vote::{CastBallotParams, CreateVoteParams, OptionRename, UpdateVoteParams},
    service::{board::BoardService, vote::VoteService},
};
use chrono::{Duration, Utc};
use entity::vote::{VoteContext, VoteMode};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod list_for_post;
mod update;

fn create_params(post_id: i32, mode: VoteMode, options: &[&str]) -> CreateVoteParams {
    let now = Utc::now();
    CreateVoteParams {
        post_id,
        name: "Where to eat".to_string(),
        mode,
        context: VoteContext::Community,
        start_time: now,
        end_time: now + Duration::days(1),
        options: options.iter().map(|o| o.to_string()).collect(),
    }
}

fn ballot(vote_id: i32, member_id: i32, option_ids: Vec<i32>) -> CastBallotParams {
    CastBallotParams {
        vote_id,
        member_id,
        option_ids,
    }
}
