use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` or one of the grouped helpers, then call
/// `build()` to create the in-memory SQLite database.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Member, Post};
///
/// let test = TestBuilder::new()
///     .with_table(Member)
///     .with_table(Post)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for posts, replies and reports.
    ///
    /// Adds, in dependency order: Member, Post, Reply, PostReport.
    pub fn with_board_tables(self) -> Self {
        self.with_table(Member)
            .with_table(Post)
            .with_table(Reply)
            .with_table(PostReport)
    }

    /// Adds the tables required for votes on top of `with_board_tables()`.
    ///
    /// Adds Vote, VoteOption and VoteBallot after the board tables.
    pub fn with_vote_tables(self) -> Self {
        self.with_board_tables()
            .with_table(Vote)
            .with_table(VoteOption)
            .with_table(VoteBallot)
    }

    /// Adds the tables required for studies: Member, Study, StudyMember.
    pub fn with_study_tables(self) -> Self {
        self.with_table(Member)
            .with_table(Study)
            .with_table(StudyMember)
    }

    /// Adds the tables required for uploaded file metadata: Member, UploadedFile.
    pub fn with_file_tables(self) -> Self {
        self.with_table(Member).with_table(UploadedFile)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
