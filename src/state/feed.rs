use std::collections::HashSet;

use ratatui::widgets::ListState;

use crate::feed::{visible_posts, ContentStore, FeedQuery};
use crate::global_prefs::global_prefs;

/// State management for the community feed screens.
///
/// The store holds content; everything else here is view-model state
/// (selection, expanded comment threads, scroll) that is never
/// serialized into the feed snapshot.
pub struct FeedState {
    pub store: ContentStore,
    pub query: FeedQuery,

    /// Posts whose comment threads are currently expanded.
    pub expanded_comments: HashSet<String>,

    // UI state
    pub list_state: ListState,
    pub selected_post_id: Option<String>,
    pub detail_scroll: u16,
}

impl FeedState {
    pub fn new(store: ContentStore) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        let query = FeedQuery {
            sort: global_prefs().default_sort,
            ..FeedQuery::default()
        };
        Self {
            store,
            query,
            expanded_comments: HashSet::new(),
            list_state,
            selected_post_id: None,
            detail_scroll: 0,
        }
    }

    pub fn visible_len(&self) -> usize {
        visible_posts(self.store.posts(), &self.query).len()
    }

    /// Id of the post under the cursor in the current projection.
    pub fn selected_id_in_view(&self) -> Option<String> {
        let visible = visible_posts(self.store.posts(), &self.query);
        self.list_state
            .selected()
            .and_then(|i| visible.get(i))
            .map(|post| post.id.clone())
    }

    pub fn select_next(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    pub fn select_prev(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + len - 1) % len));
    }

    /// Clamp the cursor after the projection shrinks (filter change,
    /// narrower search).
    pub fn clamp_selection(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        match self.list_state.selected() {
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
            _ => {}
        }
    }

    pub fn open_post(&mut self, post_id: String) {
        self.selected_post_id = Some(post_id);
        self.detail_scroll = 0;
    }

    pub fn comments_expanded(&self, post_id: &str) -> bool {
        self.expanded_comments.contains(post_id)
    }

    pub fn toggle_comments(&mut self, post_id: &str) {
        if !self.expanded_comments.remove(post_id) {
            self.expanded_comments.insert(post_id.to_string());
        }
    }

    pub fn bookmarked_count(&self) -> usize {
        self.store.posts().iter().filter(|p| p.bookmarked).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_posts;

    fn state() -> FeedState {
        crate::global_prefs::init_global_prefs();
        FeedState::new(ContentStore::from_posts(seed_posts()))
    }

    #[test]
    fn comment_visibility_toggles_per_post() {
        let mut feed = state();
        assert!(!feed.comments_expanded("a"));
        feed.toggle_comments("a");
        assert!(feed.comments_expanded("a"));
        assert!(!feed.comments_expanded("b"));
        feed.toggle_comments("a");
        assert!(!feed.comments_expanded("a"));
    }

    #[test]
    fn selection_wraps_both_directions() {
        let mut feed = state();
        let len = feed.visible_len();
        assert!(len > 1);
        feed.list_state.select(Some(len - 1));
        feed.select_next();
        assert_eq!(feed.list_state.selected(), Some(0));
        feed.select_prev();
        assert_eq!(feed.list_state.selected(), Some(len - 1));
    }

    #[test]
    fn clamp_pulls_cursor_back_into_a_shrunken_view() {
        let mut feed = state();
        feed.list_state.select(Some(feed.visible_len() - 1));
        feed.query.search = "naomi".to_string();
        feed.clamp_selection();
        let len = feed.visible_len();
        assert!(feed.list_state.selected().unwrap() < len);
    }

    #[test]
    fn clamp_clears_selection_when_nothing_matches() {
        let mut feed = state();
        feed.query.search = "zzz-no-match-zzz".to_string();
        feed.clamp_selection();
        assert_eq!(feed.list_state.selected(), None);
    }
}
