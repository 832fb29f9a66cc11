/// State management for toast notifications
pub struct NotificationState {
    /// message, close tick, minimal styling
    pub current_notification: Option<(String, Option<u64>, bool)>,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self { current_notification: None }
    }
}

impl NotificationState {
    pub fn set_notification(
        &mut self,
        message: impl Into<String>,
        close_tick: Option<u64>,
        minimal: bool,
    ) {
        self.current_notification = Some((message.into(), close_tick, minimal));
    }

    pub fn clear_notification(&mut self) {
        self.current_notification = None;
    }

    pub fn should_close_notification(&self, tick_count: u64) -> bool {
        if let Some((_, Some(close_tick), _)) = &self.current_notification {
            tick_count >= *close_tick
        } else {
            false
        }
    }
}
