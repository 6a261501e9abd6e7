//! Cliente HTTP para a API do Open Humans

use crate::error::{OpenHumansError, Result};
use reqwest::Client as HttpClient;
use serde_json::Value;
use std::time::Duration;

/// URL base da plataforma Open Humans
pub const DEFAULT_BASE_URL: &str = "https://www.openhumans.org";

/// Resposta crua de um endpoint da API
///
/// Mensageria e remoção de arquivos devolvem o par status + corpo sem
/// levantar erro em 4xx: a API reporta falhas de negócio (token expirado,
/// project member ID malformado) no corpo da resposta e o chamador decide
/// o que fazer. `body` é `Value::Null` quando a resposta não tem corpo.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    /// Indica se o status é 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Cliente para interagir com a API do Open Humans
///
/// Mantém o access token OAuth2 e a URL base. Cada chamada executa uma
/// única requisição HTTPS — sem retry, sem cache, sem batching.
#[derive(Clone)]
pub struct OpenHumansClient {
    http_client: HttpClient,
    access_token: String,
    base_url: String,
}

impl OpenHumansClient {
    /// Cria um novo cliente Open Humans
    ///
    /// # Argumentos
    ///
    /// * `access_token` - Access token OAuth2 do membro ou do projeto
    ///
    /// # Timeouts
    ///
    /// - Total: 30s
    /// - Connect: 5s
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(access_token, DEFAULT_BASE_URL)
    }

    /// Cria um cliente apontando para outra URL base (sandbox, mocks)
    pub fn with_base_url(
        access_token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| {
                OpenHumansError::settings(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            access_token: access_token.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Cria um novo cliente com timeouts customizados
    pub fn with_timeouts(
        access_token: impl Into<String>,
        total_timeout_secs: u64,
        connect_timeout_secs: u64,
    ) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(total_timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .build()
            .map_err(|e| {
                OpenHumansError::settings(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Busca uma página de resultados
    ///
    /// A URL deve vir completa, incluindo o access token e demais query
    /// params. Parseia o corpo JSON em 2xx; status não-2xx vira
    /// `ApiError { status, body }`. Esta função não itera paginação —
    /// veja `get_all_results`.
    pub async fn get_page(&self, url: &str) -> Result<Value> {
        tracing::debug!("GET {}", url);

        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            Ok(serde_json::from_str(&text)?)
        } else {
            // Corpo de erro pode não ser JSON; preserva o texto cru
            let body = Self::lenient_json(text);
            tracing::error!("Open Humans API error ({}): {}", status.as_u16(), body);
            Err(OpenHumansError::ApiError {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Percorre todas as páginas de um endpoint paginado
    ///
    /// Segue o cursor `next` acumulando os arrays `results` de cada página,
    /// até a última (`next` nulo ou ausente).
    pub async fn get_all_results(&self, starting_page_url: &str) -> Result<Vec<Value>> {
        let mut all_results = Vec::new();
        let mut page_url = starting_page_url.to_string();

        loop {
            let page = self.get_page(&page_url).await?;

            if let Some(results) = page.get("results").and_then(|v| v.as_array()) {
                all_results.extend(results.clone());
            }

            match page.get("next").and_then(|v| v.as_str()) {
                Some(next) => page_url = next.to_string(),
                None => break,
            }
        }

        Ok(all_results)
    }

    /// Executa um POST em um endpoint da API e devolve status + corpo
    pub(crate) async fn post_api(&self, endpoint: &str, body: &Value) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, endpoint);

        tracing::debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = Self::lenient_json(response.text().await?);

        Ok(ApiResponse { status, body })
    }

    /// Interpreta o corpo como JSON sem falhar: corpo vazio vira
    /// `Value::Null`, corpo não-JSON vira `Value::String` com o texto cru
    fn lenient_json(text: String) -> Value {
        if text.is_empty() {
            return Value::Null;
        }
        serde_json::from_str(&text).unwrap_or(Value::String(text))
    }

    /// Obtém o access token configurado
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Obtém a URL base
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
