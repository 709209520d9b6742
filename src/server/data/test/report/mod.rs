use crate::server::data::report::PostReportRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_by_post;
