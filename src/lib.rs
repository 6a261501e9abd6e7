//! # Open Humans Rust Crate
//!
//! Uma biblioteca Rust para integração com a API direct-sharing do
//! Open Humans.
//!
//! ## Features
//!
//! - Autenticação OAuth2 (URL de autorização, troca de code e refresh token)
//! - Cliente HTTP assíncrono com GET paginado
//! - Mensageria para membros do projeto
//! - Remoção de arquivos de membros
//!
//! ## Exemplo
//!
//! ```no_run
//! use openhumans::{MemberManager, OAuth2Client, OAuth2Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = OAuth2Config::from_env()?
//!         .with_redirect_uri("http://127.0.0.1:5000/authorize_openhumans/");
//!     println!("Autorize em: {}", config.authorization_url());
//!
//!     let oauth = OAuth2Client::new(config)?;
//!     let tokens = oauth.exchange_code("codigo-recebido-no-callback").await?;
//!
//!     let manager = MemberManager::from_token(
//!         tokens["access_token"].as_str().unwrap_or_default(),
//!     )?;
//!     let member = manager.exchange_member().await?;
//!     println!("{} arquivos compartilhados", member.data.len());
//!     Ok(())
//! }
//! ```

/// Módulo de autenticação OAuth2
pub mod auth;

/// Módulo de cliente API
pub mod client;

/// Módulo de tratamento de erros
pub mod error;

/// Módulo de operações de membro
pub mod members;

/// Módulo de tipos de requisição e resposta
pub mod types;

// Re-exportações para conveniência
pub use auth::{OAuth2Client, OAuth2Config};
pub use client::{ApiResponse, OpenHumansClient, DEFAULT_BASE_URL};
pub use error::{OpenHumansError, Result};
pub use members::MemberManager;
pub use types::{valid_project_member_id, DataFile, ExchangeMember, FileDeletion, MessageRequest};
