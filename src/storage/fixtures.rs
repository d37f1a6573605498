//! Seed data loaded into a fresh store

use crate::core::entity::{Comment, Post, User};

fn user(id: &str, name: &str, email: &str, following: &[&str], followers: &[&str]) -> User {
    let mut user = User::new(id, name, email);
    user.following = following.iter().map(|id| id.to_string()).collect();
    user.followers = followers.iter().map(|id| id.to_string()).collect();
    user
}

/// Alice and Bob follow each other; Charlie follows Alice.
///
/// Alice's stored followers list does not mention Charlie. Follower lists are
/// derived from the following edges on read, so Charlie still shows up.
pub fn seed_users() -> Vec<User> {
    vec![
        user("0", "Alice", "alice@example.com", &["1"], &["1"]),
        user("1", "Bob", "bob@example.com", &["0"], &["0"]),
        user("2", "Charlie", "charlie@example.com", &["0"], &["0"]),
    ]
}

/// One post by Alice, liked and commented by Bob
pub fn seed_posts() -> Vec<Post> {
    let mut post = Post::new("0", "Premier Post", "Contenu du premier post", "0")
        .with_comment(Comment::new("0", "Super!", "1"));
    post.add_like("1");
    vec![post]
}
