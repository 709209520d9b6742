use crate::server::{
    error::{study::StudyError, AppError},
    model::study::StudyParams,
    service::study::StudyService,
};
use entity::study_member::{StudyMemberRole, StudyMemberStatus};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod membership;

fn study_params(max_members: i32) -> StudyParams {
    StudyParams {
        name: "Async Rust".to_string(),
        intro: "Reading the async book together".to_string(),
        max_members,
    }
}
