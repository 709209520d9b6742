use crate::server::data::member::MemberRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod exists;
mod find_credentials_by_email;
