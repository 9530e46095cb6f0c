//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, RuntimeErr, sqlx};

use postbook_core::error::RepoError;
use postbook_core::ports::PostRepository;
use postbook_core::{NewPost, Post, PostId};

use super::entity::post::{ActiveModel, Entity as PostEntity};

/// PostgreSQL post repository.
///
/// Identifiers come from the `posts.id` BIGSERIAL sequence, so concurrent
/// writers across processes never collide.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn is_constraint_violation(err: &sqlx::Error) -> bool {
    err.as_database_error().is_some_and(|db| {
        db.is_unique_violation() || db.is_check_violation() || db.is_foreign_key_violation()
    })
}

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        DbErr::Exec(RuntimeErr::SqlxError(e)) | DbErr::Query(RuntimeErr::SqlxError(e))
            if is_constraint_violation(&e) =>
        {
            RepoError::Constraint(e.to_string())
        }
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, post: NewPost) -> Result<PostId, RepoError> {
        let active: ActiveModel = post.into();
        let model = active.insert(&self.db).await.map_err(map_db_err)?;

        tracing::debug!(post_id = model.id, "Inserted post");
        Ok(PostId::new(model.id))
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_id = %id, "Finding post by id");

        let row = PostEntity::find_by_id(id.get())
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        row.map(Post::try_from).transpose()
    }
}
