//! In-memory implementation of SocialService

use crate::core::entity::{Comment, Post, User};
use crate::core::error::{SocialResult, StorageError};
use crate::core::service::SocialService;
use crate::storage::fixtures;
use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

const STORE_NAME: &str = "in-memory";

/// Users, posts and the id counters, guarded by a single lock so that
/// existence checks and the writes depending on them happen atomically.
#[derive(Debug)]
struct SocialState {
    users: Vec<User>,
    posts: Vec<Post>,
    next_user_id: u64,
    next_post_id: u64,
}

impl SocialState {
    fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    fn allocate_user_id(&mut self) -> String {
        let id = self.next_user_id;
        self.next_user_id = id.saturating_add(1);
        id.to_string()
    }

    fn allocate_post_id(&mut self) -> String {
        let id = self.next_post_id;
        self.next_post_id = id.saturating_add(1);
        id.to_string()
    }
}

/// Counter start for a collection: one past the highest numeric id, or the
/// collection length if that is larger.
fn next_id<'a>(ids: impl Iterator<Item = &'a str>, len: usize) -> u64 {
    ids.filter_map(|id| id.parse::<u64>().ok())
        .map(|id| id.saturating_add(1))
        .max()
        .unwrap_or(0)
        .max(len as u64)
}

/// In-memory social store
///
/// Cloning shares the underlying state. Each operation holds the lock for its
/// whole duration, so concurrent `follow_user` or `like_post` calls on the
/// same pair never produce duplicate entries.
#[derive(Clone)]
pub struct InMemorySocialService {
    state: Arc<RwLock<SocialState>>,
}

impl InMemorySocialService {
    /// Create an empty store
    pub fn new() -> Self {
        Self::from_records(Vec::new(), Vec::new())
    }

    /// Create a store pre-loaded with the seed fixtures
    pub fn seeded() -> Self {
        Self::from_records(fixtures::seed_users(), fixtures::seed_posts())
    }

    /// Create a store from existing records
    ///
    /// Id counters resume after the highest numeric id present.
    pub fn from_records(users: Vec<User>, posts: Vec<Post>) -> Self {
        let next_user_id = next_id(users.iter().map(|u| u.id.as_str()), users.len());
        let next_post_id = next_id(posts.iter().map(|p| p.id.as_str()), posts.len());

        Self {
            state: Arc::new(RwLock::new(SocialState {
                users,
                posts,
                next_user_id,
                next_post_id,
            })),
        }
    }

    /// Snapshot of every stored user
    pub fn users(&self) -> SocialResult<Vec<User>> {
        Ok(self.read()?.users.clone())
    }

    /// Snapshot of every stored post
    pub fn posts(&self) -> SocialResult<Vec<Post>> {
        Ok(self.read()?.posts.clone())
    }

    fn read(&self) -> SocialResult<RwLockReadGuard<'_, SocialState>> {
        self.state
            .read()
            .map_err(|_| StorageError::LockPoisoned { store: STORE_NAME }.into())
    }

    fn write(&self) -> SocialResult<RwLockWriteGuard<'_, SocialState>> {
        self.state
            .write()
            .map_err(|_| StorageError::LockPoisoned { store: STORE_NAME }.into())
    }
}

impl Default for InMemorySocialService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SocialService for InMemorySocialService {
    async fn get_user(&self, id: &str) -> SocialResult<Option<User>> {
        Ok(self.read()?.user(id).cloned())
    }

    async fn users_by_ids(&self, ids: &[String]) -> SocialResult<Vec<User>> {
        let state = self.read()?;

        Ok(state
            .users
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }

    async fn posts_by_author(&self, user_id: &str) -> SocialResult<Vec<Post>> {
        let state = self.read()?;

        Ok(state
            .posts
            .iter()
            .filter(|p| p.author_id == user_id)
            .cloned()
            .collect())
    }

    async fn followers_of(&self, user_id: &str) -> SocialResult<Vec<User>> {
        let state = self.read()?;

        Ok(state
            .users
            .iter()
            .filter(|u| u.follows(user_id))
            .cloned()
            .collect())
    }

    async fn following_of(&self, user_id: &str) -> SocialResult<Vec<User>> {
        let state = self.read()?;

        let Some(user) = state.user(user_id) else {
            return Ok(Vec::new());
        };

        Ok(state
            .users
            .iter()
            .filter(|u| user.follows(&u.id))
            .cloned()
            .collect())
    }

    async fn add_user(&self, name: &str, email: &str) -> SocialResult<User> {
        let mut state = self.write()?;

        let user = User::new(state.allocate_user_id(), name, email);
        state.users.push(user.clone());

        tracing::debug!(user_id = %user.id, "user added");
        Ok(user)
    }

    async fn add_post(&self, title: &str, content: &str, author_id: &str) -> SocialResult<Post> {
        let mut state = self.write()?;

        let post = Post::new(state.allocate_post_id(), title, content, author_id);
        state.posts.push(post.clone());

        tracing::debug!(post_id = %post.id, author_id, "post added");
        Ok(post)
    }

    async fn like_post(
        &self,
        post_id: &str,
        user_id: &str,
        comment: Option<&str>,
    ) -> SocialResult<Option<Post>> {
        let mut state = self.write()?;

        if state.user(user_id).is_none() {
            return Ok(None);
        }
        let Some(post) = state.posts.iter_mut().find(|p| p.id == post_id) else {
            return Ok(None);
        };

        if post.add_like(user_id) {
            tracing::debug!(post_id, user_id, "post liked");
        }

        if let Some(content) = comment.filter(|c| !c.is_empty()) {
            let comment = post.push_comment(content, user_id);
            tracing::debug!(post_id, comment_id = %comment.id, "comment added with like");
        }

        Ok(Some(post.clone()))
    }

    async fn add_comment(
        &self,
        post_id: &str,
        content: &str,
        author_id: &str,
    ) -> SocialResult<Option<Comment>> {
        let mut state = self.write()?;

        if state.user(author_id).is_none() {
            return Ok(None);
        }
        let Some(post) = state.posts.iter_mut().find(|p| p.id == post_id) else {
            return Ok(None);
        };

        let comment = post.push_comment(content, author_id);

        tracing::debug!(post_id, comment_id = %comment.id, author_id, "comment added");
        Ok(Some(comment))
    }

    async fn follow_user(
        &self,
        follower_id: &str,
        followed_id: &str,
    ) -> SocialResult<Option<User>> {
        let mut state = self.write()?;

        let Some(follower_idx) = state.users.iter().position(|u| u.id == follower_id) else {
            return Ok(None);
        };
        let Some(followed_idx) = state.users.iter().position(|u| u.id == followed_id) else {
            return Ok(None);
        };

        if !state.users[follower_idx].follows(followed_id) {
            state.users[follower_idx]
                .following
                .push(followed_id.to_string());
            state.users[followed_idx]
                .followers
                .push(follower_id.to_string());
            tracing::debug!(follower_id, followed_id, "follow recorded");
        }

        Ok(Some(state.users[followed_idx].clone()))
    }
}
