pub mod chat_handler;
pub mod quiz_handler;

pub use chat_handler::{chat, health_check, reset};
pub use quiz_handler::generate_quiz;
