pub mod chatbot;
pub mod compose;
pub mod donation;

pub use chatbot::ChatbotService;
pub use compose::ComposeService;
pub use donation::DonationService;
