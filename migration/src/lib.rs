pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_member_table;
mod m20261001_000002_create_post_table;
mod m20261001_000003_create_reply_table;
mod m20261001_000004_create_post_report_table;
mod m20261002_000005_create_vote_table;
mod m20261002_000006_create_vote_option_table;
mod m20261002_000007_create_vote_ballot_table;
mod m20261003_000008_create_study_table;
mod m20261003_000009_create_study_member_table;
mod m20261004_000010_create_uploaded_file_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_member_table::Migration),
            Box::new(m20261001_000002_create_post_table::Migration),
            Box::new(m20261001_000003_create_reply_table::Migration),
            Box::new(m20261001_000004_create_post_report_table::Migration),
            Box::new(m20261002_000005_create_vote_table::Migration),
            Box::new(m20261002_000006_create_vote_option_table::Migration),
            Box::new(m20261002_000007_create_vote_ballot_table::Migration),
            Box::new(m20261003_000008_create_study_table::Migration),
            Box::new(m20261003_000009_create_study_member_table::Migration),
            Box::new(m20261004_000010_create_uploaded_file_table::Migration),
        ]
    }
}
