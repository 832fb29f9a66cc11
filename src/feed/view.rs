//! Derived, read-only projection of the post collection for display.
//!
//! Filtering and sorting never touch the store; the same query over the
//! same collection always yields the same ordering. Sorting is stable,
//! so posts with equal keys keep their original collection order and the
//! list does not jitter on repeated re-filtering.

use serde::{Deserialize, Serialize};

use crate::model::{Category, Post};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most recent first.
    Recent,
    /// Highest engagement score first.
    Engagement,
    /// Most liked first.
    Likes,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Recent => "Recent",
            SortKey::Engagement => "Engagement",
            SortKey::Likes => "Likes",
        }
    }

    pub fn next(self) -> SortKey {
        match self {
            SortKey::Recent => SortKey::Engagement,
            SortKey::Engagement => SortKey::Likes,
            SortKey::Likes => SortKey::Recent,
        }
    }
}

/// Current filter/sort inputs. `category: None` means "all".
#[derive(Debug, Clone, PartialEq)]
pub struct FeedQuery {
    pub category: Option<Category>,
    pub search: String,
    pub sort: SortKey,
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            category: None,
            search: String::new(),
            sort: SortKey::Recent,
        }
    }
}

impl FeedQuery {
    /// Advance the category filter one step: all → each category in
    /// declaration order → back to all.
    pub fn cycle_category(&mut self) {
        self.category = match self.category {
            None => Some(Category::ALL[0]),
            Some(current) => Category::ALL
                .iter()
                .position(|c| *c == current)
                .and_then(|i| Category::ALL.get(i + 1))
                .copied(),
        };
    }
}

/// Compute the visible ordering for `query` without mutating anything.
pub fn visible_posts<'a>(posts: &'a [Post], query: &FeedQuery) -> Vec<&'a Post> {
    let needle = query.search.trim().to_lowercase();
    let mut visible: Vec<&Post> = posts
        .iter()
        .filter(|post| query.category.map_or(true, |c| post.category == c))
        .filter(|post| needle.is_empty() || matches_search(post, &needle))
        .collect();

    // Vec::sort_by is stable: equal keys keep original collection order.
    match query.sort {
        SortKey::Recent => visible.sort_by(|a, b| b.date.cmp(&a.date)),
        SortKey::Engagement => visible.sort_by(|a, b| b.engagement.cmp(&a.engagement)),
        SortKey::Likes => visible.sort_by(|a, b| b.likes.cmp(&a.likes)),
    }
    visible
}

/// Case-insensitive substring match against content, tags, and author.
fn matches_search(post: &Post, needle: &str) -> bool {
    post.content.to_lowercase().contains(needle)
        || post.author.to_lowercase().contains(needle)
        || post.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::seed::seed_posts;

    fn ids(posts: &[&Post]) -> Vec<String> {
        posts.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn identical_queries_yield_identical_results() {
        let posts = seed_posts();
        let query = FeedQuery {
            category: Some(Category::Healthcare),
            search: String::new(),
            sort: SortKey::Likes,
        };
        let first = ids(&visible_posts(&posts, &query));
        let second = ids(&visible_posts(&posts, &query));
        assert_eq!(first, second);
    }

    #[test]
    fn category_filter_excludes_everything_else() {
        let posts = seed_posts();
        let query = FeedQuery {
            category: Some(Category::Scholarship),
            ..FeedQuery::default()
        };
        let visible = visible_posts(&posts, &query);
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|p| p.category == Category::Scholarship));
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let posts = seed_posts();
        // author match
        let by_author = visible_posts(
            &posts,
            &FeedQuery { search: "NAOMI".into(), ..FeedQuery::default() },
        );
        assert!(by_author.iter().any(|p| p.id == "post-scholarship-naomi"));
        // tag match
        let by_tag = visible_posts(
            &posts,
            &FeedQuery { search: "CleanWater".into(), ..FeedQuery::default() },
        );
        assert!(by_tag.iter().any(|p| p.id == "post-impact-wells"));
        // content match
        let by_content = visible_posts(
            &posts,
            &FeedQuery { search: "mobile clinic".into(), ..FeedQuery::default() },
        );
        assert!(by_content.iter().any(|p| p.id == "post-health-mobile-clinic"));
    }

    #[test]
    fn blank_search_matches_everything() {
        let posts = seed_posts();
        let visible = visible_posts(
            &posts,
            &FeedQuery { search: "   ".into(), ..FeedQuery::default() },
        );
        assert_eq!(visible.len(), posts.len());
    }

    #[test]
    fn recent_sort_is_newest_first() {
        let posts = seed_posts();
        let visible = visible_posts(&posts, &FeedQuery::default());
        for pair in visible.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn likes_sort_is_descending() {
        let posts = seed_posts();
        let visible = visible_posts(
            &posts,
            &FeedQuery { sort: SortKey::Likes, ..FeedQuery::default() },
        );
        for pair in visible.windows(2) {
            assert!(pair[0].likes >= pair[1].likes);
        }
    }

    #[test]
    fn equal_keys_keep_original_collection_order() {
        let mut posts = seed_posts();
        for post in &mut posts {
            post.engagement = 50;
        }
        let visible = visible_posts(
            &posts,
            &FeedQuery { sort: SortKey::Engagement, ..FeedQuery::default() },
        );
        let original: Vec<String> = posts.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids(&visible), original);
    }

    #[test]
    fn pinned_posts_get_no_sort_elevation() {
        let posts = seed_posts();
        let visible = visible_posts(
            &posts,
            &FeedQuery { sort: SortKey::Likes, ..FeedQuery::default() },
        );
        // the pinned post sorts purely by its like count
        let pinned_pos = visible.iter().position(|p| p.pinned).expect("pinned post");
        for (i, post) in visible.iter().enumerate() {
            if i < pinned_pos {
                assert!(post.likes >= visible[pinned_pos].likes);
            }
        }
    }

    #[test]
    fn projection_does_not_mutate_the_collection() {
        let posts = seed_posts();
        let before = posts.clone();
        let _ = visible_posts(
            &posts,
            &FeedQuery { sort: SortKey::Likes, search: "well".into(), ..FeedQuery::default() },
        );
        assert_eq!(posts, before);
    }

    #[test]
    fn category_cycle_walks_all_and_wraps() {
        let mut query = FeedQuery::default();
        assert_eq!(query.category, None);
        for expected in Category::ALL {
            query.cycle_category();
            assert_eq!(query.category, Some(expected));
        }
        query.cycle_category();
        assert_eq!(query.category, None);
    }
}
