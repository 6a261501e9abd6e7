//! Tipos de erro para o crate openhumans

use serde_json::Value;
use thiserror::Error;

/// Erros do cliente Open Humans
///
/// Erros locais (configuração, validação) são levantados antes de qualquer
/// requisição. Erros reportados pela API na resposta (grant inválido, token
/// expirado, IDs malformados) NÃO viram `Err` — são devolvidos como dados
/// para o chamador inspecionar.
#[derive(Debug, Error)]
pub enum OpenHumansError {
    /// Erro de requisição HTTP
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Erro da API (status não-2xx no caminho de GET paginado)
    #[error("Open Humans API error (status {status}): {body}")]
    ApiError { status: u16, body: Value },

    /// Credencial obrigatória ausente ou vazia
    #[error("Settings error: {0}")]
    SettingsError(String),

    /// Erro de parsing JSON
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Erro de validação (combinação de argumentos contraditória)
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl OpenHumansError {
    pub fn settings(msg: impl Into<String>) -> Self {
        Self::SettingsError(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}

/// Tipo Result padrão para o crate
pub type Result<T> = std::result::Result<T, OpenHumansError>;
