pub mod chat_client;
pub mod config;
pub mod conversation;
pub mod message;
pub mod session;
