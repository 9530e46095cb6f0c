use std::sync::Arc;

use crate::domain::{NewPost, Post, PostId};
use crate::error::DomainError;
use crate::ports::PostRepository;

/// Record store for posts.
///
/// Holds no state of its own beyond the repository handle, so it is cheap to
/// clone into every request.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Validate and store a new post, returning its assigned id.
    ///
    /// Nothing is written when validation fails.
    pub async fn create(
        &self,
        title: String,
        content: String,
        author: Option<String>,
    ) -> Result<PostId, DomainError> {
        let post = NewPost::builder()
            .title(title)
            .content(content)
            .maybe_author(author)
            .build()?;

        let id = self.repo.insert(post).await?;
        tracing::debug!(post_id = %id, "Post created");

        Ok(id)
    }

    /// Fetch a snapshot of the post with the given id.
    pub async fn get(&self, id: PostId) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Post",
                id: id.get(),
            })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicI64, Ordering};

    use async_trait::async_trait;
    use tokio::sync::Mutex;

    use super::*;
    use crate::error::RepoError;

    /// Records inserts so tests can assert on writes.
    #[derive(Default)]
    struct RecordingRepo {
        next_id: AtomicI64,
        rows: Mutex<Vec<Post>>,
    }

    #[async_trait]
    impl PostRepository for RecordingRepo {
        async fn insert(&self, post: NewPost) -> Result<PostId, RepoError> {
            let id = PostId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
            self.rows.lock().await.push(post.into_persisted(id));
            Ok(id)
        }

        async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
            let rows = self.rows.lock().await;
            Ok(rows.iter().find(|p| p.id() == id).cloned())
        }
    }

    struct FailingRepo;

    #[async_trait]
    impl PostRepository for FailingRepo {
        async fn insert(&self, _post: NewPost) -> Result<PostId, RepoError> {
            Err(RepoError::Connection("refused".to_string()))
        }

        async fn find_by_id(&self, _id: PostId) -> Result<Option<Post>, RepoError> {
            Err(RepoError::Query("timeout".to_string()))
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let service = PostService::new(Arc::new(RecordingRepo::default()));

        let id = service
            .create("Hello".into(), "World".into(), Some("alice".into()))
            .await
            .unwrap();
        let post = service.get(id).await.unwrap();

        assert_eq!(id, PostId::new(1));
        assert_eq!(post.id(), id);
        assert_eq!(post.title(), "Hello");
        assert_eq!(post.content(), "World");
        assert_eq!(post.author(), Some("alice"));
    }

    #[tokio::test]
    async fn test_invalid_create_writes_nothing() {
        let repo = Arc::new(RecordingRepo::default());
        let service = PostService::new(repo.clone());

        let err = service
            .create(String::new(), "body".into(), Some("bob".into()))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(repo.rows.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let service = PostService::new(Arc::new(RecordingRepo::default()));

        let err = service.get(PostId::new(9999)).await.unwrap_err();

        assert!(matches!(
            err,
            DomainError::NotFound {
                entity_type: "Post",
                id: 9999
            }
        ));
    }

    #[tokio::test]
    async fn test_storage_failures_surface() {
        let service = PostService::new(Arc::new(FailingRepo));

        let err = service
            .create("Hello".into(), "World".into(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Storage(RepoError::Connection(_))));

        let err = service.get(PostId::new(1)).await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(RepoError::Query(_))));
    }
}
