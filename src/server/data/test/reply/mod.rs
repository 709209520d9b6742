use crate::server::{data::reply::ReplyRepository, model::reply::CreateReplyParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_visible_by_posts;
mod create;
mod find_by_post;
