pub mod chat;
pub mod donation;
pub mod feed;
pub mod notification;
pub mod ui;

pub use chat::{ChatAuthor, ChatLine, ChatState};
pub use donation::{DetailsFocus, DonationState, DonationStep, Frequency};
pub use feed::FeedState;
pub use notification::NotificationState;
pub use ui::{AppMode, InputMode, UiState};

/// Configuration constants for the application
pub struct AppConfig {
    pub tick_ms: u64,
    pub max_comment_length: usize,
    pub max_chat_length: usize,
    pub notification_timeout_ms: u64,
    pub bot_reply_delay_ticks: u64,
    pub donation_processing_ticks: u64,
    pub max_donation_amount: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            max_comment_length: 500,
            max_chat_length: 280,
            notification_timeout_ms: 2500,
            bot_reply_delay_ticks: 18,
            donation_processing_ticks: 28,
            max_donation_amount: 1_000_000.0,
        }
    }
}

/// Application error types
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    Storage(std::io::Error),
    Serialization(serde_json::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Storage(err) => write!(f, "Storage error: {}", err),
            AppError::Serialization(err) => write!(f, "Serialization error: {}", err),
        }
    }
}

impl std::error::Error for AppError {}

pub type AppResult<T> = Result<T, AppError>;
