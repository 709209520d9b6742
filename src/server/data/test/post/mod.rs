use crate::server::{
    data::post::PostRepository,
    model::post::{CreatePostParams, PostListParams, UpdatePostParams},
};
use entity::post::BoardType;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
