pub mod chat_service;
pub mod document_service;
pub mod model_service;
pub mod quiz_parser;
pub mod quiz_service;
