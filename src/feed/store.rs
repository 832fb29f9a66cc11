//! Canonical in-memory post collection for the session.

use crate::feed::persist::FeedStorage;
use crate::model::Post;
use crate::seed;

/// Owns the ordered post collection. Mutation happens only by
/// whole-collection replacement after a reducer transform.
pub struct ContentStore {
    posts: Vec<Post>,
}

impl ContentStore {
    /// Load a prior snapshot if one is readable, otherwise fall back to
    /// the fixed seed set. Corrupt or missing storage is treated as
    /// absent; this never fails.
    pub fn initialize(storage: &FeedStorage) -> Self {
        let posts = storage.load().unwrap_or_else(seed::seed_posts);
        Self { posts }
    }

    pub fn from_posts(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn find(&self, post_id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == post_id)
    }

    /// Swap in the next collection produced by the reducer.
    pub fn replace(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_falls_back_to_seed_when_storage_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FeedStorage::at(dir.path().join("feed.json"));
        let store = ContentStore::initialize(&storage);
        assert_eq!(store.posts(), seed::seed_posts().as_slice());
    }

    #[test]
    fn initialize_falls_back_to_seed_on_corrupt_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.json");
        std::fs::write(&path, "{ this is not a snapshot").unwrap();
        let store = ContentStore::initialize(&FeedStorage::at(path));
        assert_eq!(store.posts(), seed::seed_posts().as_slice());
    }

    #[test]
    fn replace_swaps_the_whole_collection() {
        let mut store = ContentStore::from_posts(seed::seed_posts());
        let mut next = store.posts().to_vec();
        next.remove(0);
        store.replace(next.clone());
        assert_eq!(store.posts(), next.as_slice());
    }

    #[test]
    fn find_locates_by_id() {
        let store = ContentStore::from_posts(seed::seed_posts());
        assert!(store.find("post-impact-wells").is_some());
        assert!(store.find("no-such-post").is_none());
    }
}
