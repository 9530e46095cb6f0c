//! In-memory post repository - used when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use postbook_core::error::RepoError;
use postbook_core::ports::PostRepository;
use postbook_core::{NewPost, Post, PostId};

struct Table {
    last_id: i64,
    rows: BTreeMap<PostId, Post>,
}

/// In-memory post table behind an async RwLock.
///
/// Ids are handed out under the write lock, so they stay unique and
/// increasing with any number of concurrent writers.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    table: RwLock<Table>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                last_id: 0,
                rows: BTreeMap::new(),
            }),
        }
    }

    /// Number of stored posts.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> Result<PostId, RepoError> {
        let mut table = self.table.write().await;

        table.last_id += 1;
        let id = PostId::new(table.last_id);
        table.rows.insert(id, post.into_persisted(id));

        tracing::debug!(post_id = %id, "Inserted post into memory");
        Ok(id)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn new_post(title: &str) -> NewPost {
        NewPost::builder()
            .title(title)
            .content("body")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryPostRepository::new();

        let id = repo.insert(new_post("first")).await.unwrap();
        let found = repo.find_by_id(id).await.unwrap().unwrap();

        assert_eq!(id, PostId::new(1));
        assert_eq!(found.title(), "first");
        assert_eq!(found.id(), id);
    }

    #[tokio::test]
    async fn test_find_missing() {
        let repo = InMemoryPostRepository::new();
        assert!(repo.find_by_id(PostId::new(1)).await.unwrap().is_none());
        assert!(repo.is_empty().await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_get_distinct_ids() {
        let repo = Arc::new(InMemoryPostRepository::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.insert(new_post(&format!("post {i}"))).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().get());
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=32).collect::<Vec<_>>());
        assert_eq!(repo.len().await, 32);
    }
}
