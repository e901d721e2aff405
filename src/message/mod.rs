pub mod message_dto;
pub mod message_handlers;
pub mod message_repository;

pub use message_dto::SubmitMessageForm;
pub use message_handlers::{list_messages, submit_message};
pub use message_repository::MessageRepository;
