//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use postbook_core::error::RepoError;
use postbook_core::{NewPost, PostId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "String(StringLen::N(500))")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from a stored row to the domain Post.
///
/// Rows are re-validated; a row breaking the invariants is reported as corrupt.
impl TryFrom<Model> for postbook_core::Post {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let fields = NewPost::builder()
            .title(model.title)
            .content(model.content)
            .maybe_author(model.author)
            .build()
            .map_err(|e| RepoError::Corrupt {
                id: model.id,
                reason: e.to_string(),
            })?;

        Ok(fields.into_persisted(PostId::new(model.id)))
    }
}

/// Conversion from a validated NewPost to an insertable ActiveModel.
/// The id is left to the table's sequence.
impl From<NewPost> for ActiveModel {
    fn from(post: NewPost) -> Self {
        Self {
            id: NotSet,
            title: Set(post.title().to_owned()),
            content: Set(post.content().to_owned()),
            author: Set(post.author().map(str::to_owned)),
        }
    }
}
