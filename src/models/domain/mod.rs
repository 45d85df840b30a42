pub mod message;
pub mod quiz;

pub use message::{ChatMessage, Role, Transcript};
pub use quiz::{Quiz, QuizQuestion, QuizRequest};
