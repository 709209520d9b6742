use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::post::{CreatePostParams, Post, PostListParams, UpdatePostParams};

pub struct PostRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PostRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePostParams) -> Result<entity::post::Model, DbErr> {
        let now = Utc::now();
        entity::post::ActiveModel {
            author_id: ActiveValue::Set(params.author_id),
            board_type: ActiveValue::Set(params.board_type),
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            removed: ActiveValue::Set(false),
            reported: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a post that is neither removed nor reported, with its author.
    ///
    /// # Returns
    /// - `Ok(Some(post))`: Visible post
    /// - `Ok(None)`: Post missing, removed or hidden by reports
    /// - `Err(DbErr)`: Database error
    pub async fn find_visible(&self, id: i32) -> Result<Option<Post>, DbErr> {
        let row = entity::prelude::Post::find_by_id(id)
            .filter(entity::post::Column::Removed.eq(false))
            .filter(entity::post::Column::Reported.eq(false))
            .find_also_related(entity::prelude::Member)
            .one(self.db)
            .await?;

        Ok(row.map(|(post, author)| Post::from_entity(post, author)))
    }

    /// Lists visible posts of one board, newest first.
    ///
    /// Only ids below `params.cursor` are returned. The keyword matches the title or
    /// the author nickname by case-sensitive containment (`instr`, unlike SQLite's
    /// `LIKE`, does not fold case).
    pub async fn list(&self, params: &PostListParams) -> Result<Vec<Post>, DbErr> {
        let mut query = entity::prelude::Post::find()
            .filter(entity::post::Column::BoardType.eq(params.board_type))
            .filter(entity::post::Column::Removed.eq(false))
            .filter(entity::post::Column::Reported.eq(false))
            .find_also_related(entity::prelude::Member);

        if let Some(cursor) = params.cursor {
            query = query.filter(entity::post::Column::Id.lt(cursor));
        }

        if let Some(keyword) = &params.keyword {
            query = query.filter(
                Condition::any()
                    .add(Expr::cust_with_values(
                        r#"instr("post"."title", ?) > 0"#,
                        [keyword.clone()],
                    ))
                    .add(Expr::cust_with_values(
                        r#"instr("member"."nickname", ?) > 0"#,
                        [keyword.clone()],
                    )),
            );
        }

        let rows = query
            .order_by_desc(entity::post::Column::Id)
            .limit(params.size)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(post, author)| Post::from_entity(post, author))
            .collect())
    }

    /// Replaces title and content of a post.
    pub async fn update(&self, id: i32, params: UpdatePostParams) -> Result<(), DbErr> {
        let post = entity::prelude::Post::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Post with id {} not found", id)))?;

        let mut active_model: entity::post::ActiveModel = post.into();
        active_model.title = ActiveValue::Set(params.title);
        active_model.content = ActiveValue::Set(params.content);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await?;

        Ok(())
    }

    /// Soft-deletes a post.
    pub async fn mark_removed(&self, id: i32) -> Result<(), DbErr> {
        self.set_flag(id, entity::post::Column::Removed).await
    }

    /// Hides a post after enough reports.
    pub async fn mark_reported(&self, id: i32) -> Result<(), DbErr> {
        self.set_flag(id, entity::post::Column::Reported).await
    }

    async fn set_flag(&self, id: i32, column: entity::post::Column) -> Result<(), DbErr> {
        entity::prelude::Post::update_many()
            .filter(entity::post::Column::Id.eq(id))
            .col_expr(column, Expr::value(true))
            .col_expr(
                entity::post::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
