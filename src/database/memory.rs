use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::{Result, Store};
use crate::{
    schema::{InsertPost, InsertUser, Post, User},
    types::id::{PostId, UserId},
};

/// [`Store`] that keeps everything in process memory. Used for
/// tests and for running the server without a database.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    handle: Arc<RwLock<MemoryStoreImpl>>,
}

#[derive(Debug, Default)]
struct MemoryStoreImpl {
    last_user_id: u64,
    last_post_id: u64,
    users: BTreeMap<UserId, User>,
    posts: BTreeMap<PostId, Post>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_user(&self, user: InsertUser<'_>) -> Result<Option<User>> {
        let mut data = self.handle.write();
        if data.users.values().any(|v| v.username == user.username) {
            return Ok(None);
        }

        data.last_user_id += 1;
        let user = User {
            id: UserId::new(data.last_user_id),
            username: user.username.to_string(),
            password_hash: user.password_hash.to_string(),
        };
        data.users.insert(user.id, user.clone());

        Ok(Some(user))
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let data = self.handle.read();
        Ok(data.users.values().find(|v| v.username == username).cloned())
    }

    async fn insert_post(&self, post: InsertPost<'_>) -> Result<Post> {
        let mut data = self.handle.write();
        data.last_post_id += 1;

        let post = Post {
            id: PostId::new(data.last_post_id),
            title: post.title.to_string(),
            content: post.content.to_string(),
            timestamp: Utc::now(),
            user_id: post.user_id,
        };
        data.posts.insert(post.id, post.clone());

        Ok(post)
    }

    async fn find_post(&self, id: PostId) -> Result<Option<Post>> {
        Ok(self.handle.read().posts.get(&id).cloned())
    }

    async fn posts_by_owner(&self, user_id: UserId) -> Result<Vec<Post>> {
        let data = self.handle.read();
        let posts = data
            .posts
            .values()
            .filter(|v| v.user_id == user_id)
            .cloned()
            .collect();

        Ok(posts)
    }

    async fn update_post(&self, id: PostId, title: &str, content: &str) -> Result<Option<Post>> {
        let mut data = self.handle.write();
        let Some(post) = data.posts.get_mut(&id) else {
            return Ok(None);
        };

        post.title = title.to_string();
        post.content = content.to_string();
        Ok(Some(post.clone()))
    }

    async fn delete_post(&self, id: PostId) -> Result<bool> {
        Ok(self.handle.write().posts.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_reject_duplicated_usernames() {
        let store = MemoryStore::new();
        let alice = InsertUser {
            username: "alice",
            password_hash: "hash",
        };

        let created = store.insert_user(alice).await.unwrap().unwrap();
        assert_eq!(created.id.get(), 1);
        assert!(store.insert_user(alice).await.unwrap().is_none());

        let found = store.find_user_by_username("alice").await.unwrap();
        assert_eq!(found, Some(created));
        assert!(store.find_user_by_username("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_never_reuse_post_ids() {
        let store = MemoryStore::new();
        let owner = UserId::new(1);
        let draft = InsertPost {
            title: "Hi",
            content: "World",
            user_id: owner,
        };

        let first = store.insert_post(draft).await.unwrap();
        assert!(store.delete_post(first.id).await.unwrap());
        assert!(!store.delete_post(first.id).await.unwrap());

        let second = store.insert_post(draft).await.unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(vec![second], store.posts_by_owner(owner).await.unwrap());
    }

    #[tokio::test]
    async fn should_keep_timestamp_and_owner_on_update() {
        let store = MemoryStore::new();
        let post = store
            .insert_post(InsertPost {
                title: "Hi",
                content: "World",
                user_id: UserId::new(3),
            })
            .await
            .unwrap();

        let updated = store
            .update_post(post.id, "Hi2", "World2")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "Hi2");
        assert_eq!(updated.content, "World2");
        assert_eq!(updated.timestamp, post.timestamp);
        assert_eq!(updated.user_id, post.user_id);

        assert!(store
            .update_post(PostId::new(999), "a", "b")
            .await
            .unwrap()
            .is_none());
    }
}
