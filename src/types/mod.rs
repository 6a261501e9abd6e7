//! Tipos de requisição e resposta da API direct-sharing

pub mod delete;
pub mod member;
pub mod message;

pub use delete::FileDeletion;
pub use member::{valid_project_member_id, DataFile, ExchangeMember};
pub use message::MessageRequest;
