use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId};
use crate::error::RepoError;

/// Post repository - the narrow storage contract behind the record store.
///
/// Implementations own identifier assignment: `insert` must hand out ids that
/// are unique and never reused, even with several concurrent writers.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Store a validated post and return the identifier assigned to it.
    async fn insert(&self, post: NewPost) -> Result<PostId, RepoError>;

    /// Find a post by its identifier.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError>;
}
