//! Application root: composes the state modules and owns the
//! dispatch → reduce → persist cycle for the feed engine.

use crate::feed::{reducer, ContentStore, FeedAction, FeedStorage};
use crate::state::{
    AppConfig, ChatState, DonationState, FeedState, InputMode, NotificationState, UiState,
};

pub struct App {
    pub ui: UiState,
    pub feed: FeedState,
    pub donation: DonationState,
    pub chat: ChatState,
    pub notifications: NotificationState,
    pub config: AppConfig,
    storage: FeedStorage,
}

impl App {
    pub fn new() -> App {
        Self::with_storage(FeedStorage::new())
    }

    /// Build against explicit storage (tests, alternate profiles).
    pub fn with_storage(storage: FeedStorage) -> App {
        let store = ContentStore::initialize(&storage);
        App {
            ui: UiState::default(),
            feed: FeedState::new(store),
            donation: DonationState::default(),
            chat: ChatState::default(),
            notifications: NotificationState::default(),
            config: AppConfig::default(),
            storage,
        }
    }

    /// Apply a feed action: reduce, swap the store, mirror to disk.
    ///
    /// `ToggleComments` only flips view state, so it skips the reduce
    /// and persist steps entirely.
    pub fn dispatch(&mut self, action: FeedAction) {
        if let FeedAction::ToggleComments { post_id } = &action {
            self.feed.toggle_comments(post_id);
            return;
        }
        tracing::debug!("dispatching feed action: {:?}", action);
        let next = reducer::apply(self.feed.store.posts(), &action);
        self.feed.store.replace(next);
        self.storage.save(self.feed.store.posts());
    }

    pub fn set_notification(&mut self, message: impl Into<String>, ms: Option<u64>, minimal: bool) {
        let close_tick = ms.map(|ms| self.ui.tick_count + ms / self.config.tick_ms);
        self.notifications.set_notification(message, close_tick, minimal);
    }

    /// Toast with the default timeout.
    pub fn toast(&mut self, message: impl Into<String>) {
        let timeout = self.config.notification_timeout_ms;
        self.set_notification(message, Some(timeout), true);
    }

    pub fn enter_input_mode(&mut self, input_mode: InputMode) {
        let return_mode = self.ui.mode;
        self.ui.open_input(input_mode, return_mode);
        self.notifications.clear_notification();
    }

    pub fn on_tick(&mut self) {
        self.ui.tick();
        let tick = self.ui.tick_count;

        if self.notifications.should_close_notification(tick) {
            self.notifications.clear_notification();
        }

        self.chat.drain_due(tick);

        if self.donation.processing_due(tick) {
            self.donation.finish_processing();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReactionKind;
    use crate::seed::seed_posts;

    fn app_in(dir: &tempfile::TempDir) -> App {
        crate::global_prefs::init_global_prefs();
        App::with_storage(FeedStorage::at(dir.path().join("feed.json")))
    }

    #[test]
    fn dispatch_applies_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        app.dispatch(FeedAction::Like { post_id: "post-impact-wells".into() });

        let in_memory = app.feed.store.find("post-impact-wells").unwrap().clone();
        assert!(in_memory.user_liked);

        // a fresh app simulates a restart and reads the snapshot back
        let revived = app_in(&dir);
        let reloaded = revived.feed.store.find("post-impact-wells").unwrap();
        assert_eq!(reloaded, &in_memory);
    }

    #[test]
    fn toggle_comments_does_not_write_a_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        app.dispatch(FeedAction::ToggleComments { post_id: "post-impact-wells".into() });

        assert!(app.feed.comments_expanded("post-impact-wells"));
        // nothing persisted: a restart sees the plain seed set
        let revived = app_in(&dir);
        assert_eq!(revived.feed.store.posts(), seed_posts().as_slice());
    }

    #[test]
    fn dispatch_on_a_stale_id_leaves_everything_intact() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        let before = app.feed.store.posts().to_vec();
        app.dispatch(FeedAction::React { post_id: "gone".into(), kind: ReactionKind::Sad });
        assert_eq!(app.feed.store.posts(), before.as_slice());
    }

    #[test]
    fn tick_drives_notification_expiry() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        app.set_notification("saved", Some(100), true);
        assert!(app.notifications.current_notification.is_some());
        // 100 ms at 50 ms/tick = 2 ticks
        app.on_tick();
        assert!(app.notifications.current_notification.is_some());
        app.on_tick();
        assert!(app.notifications.current_notification.is_none());
    }

    #[test]
    fn tick_completes_donation_processing() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        let delay = app.config.donation_processing_ticks;
        app.donation.begin_processing(app.ui.tick_count, delay);
        for _ in 0..delay {
            app.on_tick();
        }
        assert_eq!(app.donation.step, crate::state::DonationStep::Confirmed);
        assert!(app.donation.reference.is_some());
    }
}
