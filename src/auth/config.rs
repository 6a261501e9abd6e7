//! OAuth2 Configuration
//!
//! Centraliza as credenciais e URLs necessárias para o fluxo OAuth2 do
//! Open Humans. A resolução segue sempre a mesma ordem: argumento
//! explícito > variável de ambiente > `SettingsError`.

use crate::client::DEFAULT_BASE_URL;
use crate::error::{OpenHumansError, Result};
use std::env;
use std::path::Path;

/// Configuração OAuth2 de um projeto direct-sharing
#[derive(Debug, Clone)]
pub struct OAuth2Config {
    /// Client ID fornecido pelo Open Humans
    pub client_id: String,

    /// Client Secret fornecido pelo Open Humans (necessário só na troca de token)
    pub client_secret: Option<String>,

    /// URL de callback registrada no projeto
    pub redirect_uri: Option<String>,

    /// URL base da plataforma
    pub base_url: String,
}

impl OAuth2Config {
    /// Cria uma configuração a partir de um client_id explícito
    pub fn new(client_id: impl Into<String>) -> Result<Self> {
        let client_id = client_id.into();
        if client_id.is_empty() {
            return Err(OpenHumansError::settings("client_id must be a non-empty string"));
        }

        Ok(Self {
            client_id,
            client_secret: None,
            redirect_uri: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Carrega a configuração a partir de variáveis de ambiente
    ///
    /// Em desenvolvimento carrega o arquivo `.env` se presente. Durante
    /// testes as variáveis devem ser configuradas diretamente.
    pub fn from_env() -> Result<Self> {
        Self::resolve(None, None)
    }

    /// Resolve as credenciais combinando argumentos explícitos e ambiente
    ///
    /// Argumentos explícitos têm precedência sobre `OPENHUMANS_CLIENT_ID` /
    /// `OPENHUMANS_CLIENT_SECRET`. Falha com `SettingsError` quando o
    /// client_id não pode ser resolvido para uma string não-vazia; o
    /// client_secret pode ficar ausente nesta etapa.
    pub fn resolve(client_id: Option<String>, client_secret: Option<String>) -> Result<Self> {
        if cfg!(not(test)) && Path::new(".env").exists() {
            dotenvy::dotenv().ok();
        }

        let client_id = client_id
            .filter(|v| !v.is_empty())
            .or_else(|| env_var_non_empty("OPENHUMANS_CLIENT_ID"))
            .ok_or_else(|| {
                OpenHumansError::settings(
                    "client_id not provided and OPENHUMANS_CLIENT_ID is not set",
                )
            })?;

        let client_secret = client_secret
            .filter(|v| !v.is_empty())
            .or_else(|| env_var_non_empty("OPENHUMANS_CLIENT_SECRET"));

        let redirect_uri = env_var_non_empty("OPENHUMANS_REDIRECT_URI");

        let base_url = env_var_non_empty("OPENHUMANS_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            client_id,
            client_secret,
            redirect_uri,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Define o client_secret
    pub fn with_client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Define a URL de callback
    pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    /// Define a URL base (sandbox, mocks)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Gera a URL de autorização OAuth2 do Open Humans
    ///
    /// Função pura: nenhuma chamada de rede. O redirect_uri, quando
    /// configurado, entra percent-encoded na query string.
    pub fn authorization_url(&self) -> String {
        let mut url = format!(
            "{}/direct-sharing/projects/oauth2/authorize/?client_id={}&response_type=code",
            self.base_url, self.client_id
        );

        if let Some(redirect_uri) = &self.redirect_uri {
            url.push_str("&redirect_uri=");
            url.push_str(&urlencoding::encode(redirect_uri));
        }

        url
    }
}

fn env_var_non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
