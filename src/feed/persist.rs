//! Write-through persistence for the feed snapshot.
//!
//! The full post collection is mirrored to a JSON file under the user's
//! home directory after every content mutation and read back at startup.
//! Storage problems are logged and swallowed: the in-memory store stays
//! the source of truth for the session, and the UI must never be blocked
//! by a failed write. Concurrent processes race on the file; last write
//! wins.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::Post;
use crate::state::{AppError, AppResult};

/// Bump when the snapshot layout changes. Snapshots with any other
/// version are treated as absent rather than half-migrated.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    posts: &'a [Post],
}

#[derive(Deserialize)]
struct Snapshot {
    version: u32,
    posts: Vec<Post>,
}

pub struct FeedStorage {
    path: PathBuf,
}

impl FeedStorage {
    pub fn new() -> Self {
        Self { path: Self::default_path() }
    }

    /// Storage rooted at an explicit path (tests, alternate profiles).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".harborlight_feed.json")
    }

    /// Read the stored collection back. Returns `None` when the file is
    /// missing, unreadable, malformed, or carries an unknown schema
    /// version; callers fall back to the seed set.
    pub fn load(&self) -> Option<Vec<Post>> {
        let data = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<Snapshot>(&data) {
            Ok(snapshot) if snapshot.version == SCHEMA_VERSION => Some(snapshot.posts),
            Ok(snapshot) => {
                tracing::warn!(
                    "ignoring feed snapshot with schema version {} (expected {})",
                    snapshot.version,
                    SCHEMA_VERSION
                );
                None
            }
            Err(err) => {
                tracing::warn!("discarding unreadable feed snapshot: {}", err);
                None
            }
        }
    }

    /// Mirror the collection to disk. Failures are logged and swallowed.
    pub fn save(&self, posts: &[Post]) {
        if let Err(err) = self.write_snapshot(posts) {
            tracing::warn!("failed to write feed snapshot: {}", err);
        }
    }

    fn write_snapshot(&self, posts: &[Post]) -> AppResult<()> {
        let snapshot = SnapshotRef { version: SCHEMA_VERSION, posts };
        let data = serde_json::to_string_pretty(&snapshot).map_err(AppError::Serialization)?;
        fs::write(&self.path, data).map_err(AppError::Storage)?;
        Ok(())
    }
}

impl Default for FeedStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::reducer;
    use crate::model::ReactionKind;
    use crate::seed::seed_posts;

    #[test]
    fn round_trip_preserves_the_collection_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FeedStorage::at(dir.path().join("feed.json"));

        // engage a little first so user flags and comments are exercised
        let posts = reducer::add_comment(
            &reducer::react(
                &reducer::like(&seed_posts(), "post-impact-wells"),
                "post-scholarship-naomi",
                ReactionKind::Love,
            ),
            "post-health-mobile-clinic",
            "wonderful milestone",
        );

        storage.save(&posts);
        let restored = storage.load().expect("snapshot loads");
        assert_eq!(restored, posts);
    }

    #[test]
    fn missing_file_loads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FeedStorage::at(dir.path().join("nope.json"));
        assert!(storage.load().is_none());
    }

    #[test]
    fn malformed_json_loads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.json");
        fs::write(&path, "{\"version\": 1, \"posts\": [trunca").unwrap();
        assert!(FeedStorage::at(path).load().is_none());
    }

    #[test]
    fn schema_shaped_but_wrong_types_loads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.json");
        fs::write(&path, "{\"version\": 1, \"posts\": [{\"id\": 42}]}").unwrap();
        assert!(FeedStorage::at(path).load().is_none());
    }

    #[test]
    fn unknown_schema_version_loads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.json");
        let posts = seed_posts();
        let data = serde_json::json!({ "version": 99, "posts": posts });
        fs::write(&path, data.to_string()).unwrap();
        assert!(FeedStorage::at(path).load().is_none());
    }

    #[test]
    fn save_to_an_unwritable_path_does_not_panic() {
        let storage = FeedStorage::at("/definitely/not/a/real/dir/feed.json");
        storage.save(&seed_posts());
    }

    #[test]
    fn save_overwrites_the_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FeedStorage::at(dir.path().join("feed.json"));

        let first = seed_posts();
        storage.save(&first);
        let second = reducer::bookmark(&first, "post-impact-wells");
        storage.save(&second);

        assert_eq!(storage.load().expect("snapshot loads"), second);
    }
}
