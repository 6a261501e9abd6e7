//! Troca de tokens OAuth2
//!
//! Cliente HTTP isolado para o endpoint de token do Open Humans. A troca é
//! feita com um POST form-urlencoded direto — o endpoint devolve corpos de
//! erro estruturados (`invalid_grant`, `invalid_client`) com status 200 em
//! vários casos de falha, então o corpo é parseado e devolvido ao chamador
//! independentemente do status HTTP.

use crate::auth::config::OAuth2Config;
use crate::error::{OpenHumansError, Result};
use reqwest::Client as HttpClient;
use serde_json::Value;
use std::time::Duration;

/// Cliente OAuth2 para o Open Humans
#[derive(Debug, Clone)]
pub struct OAuth2Client {
    config: OAuth2Config,
    http_client: HttpClient,
}

impl OAuth2Client {
    /// Cria um novo cliente OAuth2
    pub fn new(config: OAuth2Config) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| {
                OpenHumansError::settings(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Troca um authorization code por um bundle de tokens
    ///
    /// Exige `client_secret` e `redirect_uri` configurados (contrato OAuth2
    /// do grant de código); a ausência de qualquer um é `SettingsError`,
    /// antes de qualquer requisição.
    ///
    /// # Retorno
    ///
    /// O JSON parseado da resposta: em sucesso contém `access_token`,
    /// `refresh_token`, `expires_in`, `scope` e `token_type`; em falha de
    /// negócio contém `{"error": "invalid_grant"}` ou
    /// `{"error": "invalid_client"}` — nunca `Err` para esses casos.
    pub async fn exchange_code(&self, code: &str) -> Result<Value> {
        let client_secret = self.require_client_secret()?;
        let redirect_uri = self.config.redirect_uri.as_deref().ok_or_else(|| {
            OpenHumansError::settings("redirect_uri is required for the authorization code grant")
        })?;

        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", client_secret),
        ];

        self.post_token_request(&params).await
    }

    /// Troca um refresh token por um novo bundle de tokens
    pub async fn exchange_refresh_token(&self, refresh_token: &str) -> Result<Value> {
        let client_secret = self.require_client_secret()?;

        let params = [
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", client_secret),
        ];

        self.post_token_request(&params).await
    }

    /// Obtém a configuração em uso
    pub fn config(&self) -> &OAuth2Config {
        &self.config
    }

    fn require_client_secret(&self) -> Result<&str> {
        self.config.client_secret.as_deref().ok_or_else(|| {
            OpenHumansError::settings(
                "client_secret not provided and OPENHUMANS_CLIENT_SECRET is not set",
            )
        })
    }

    async fn post_token_request(&self, params: &[(&str, &str)]) -> Result<Value> {
        let url = format!("{}/oauth2/token/", self.config.base_url);

        tracing::debug!("POST {}", url);

        let response = self.http_client.post(&url).form(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("token endpoint returned status {}", status.as_u16());
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(server: &MockServer) -> OAuth2Config {
        OAuth2Config::new("validclientid")
            .unwrap()
            .with_client_secret("validclientsecret")
            .with_redirect_uri("http://127.0.0.1:5000/authorize_openhumans/")
            .with_base_url(server.uri())
    }

    fn token_bundle() -> Value {
        json!({
            "access_token": "returnedaccesstoken",
            "expires_in": 36000,
            "refresh_token": "returnedrefreshtoken",
            "scope": "american-gut read wildlife open-humans write pgp go-viral",
            "token_type": "Bearer"
        })
    }

    #[tokio::test]
    async fn test_exchange_code_valid() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth2/token/"))
            .and(body_string_contains("grant_type=authorization_code"))
            .and(body_string_contains("code=validcode"))
            .and(body_string_contains("client_id=validclientid"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_bundle()))
            .mount(&server)
            .await;

        let client = OAuth2Client::new(config(&server)).unwrap();
        let data = client.exchange_code("validcode").await.unwrap();

        assert_eq!(data, token_bundle());
        assert_eq!(data["token_type"], "Bearer");
        assert!(data["expires_in"].is_u64());
    }

    #[tokio::test]
    async fn test_exchange_code_invalid_grant() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth2/token/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": "invalid_grant"
            })))
            .mount(&server)
            .await;

        let client = OAuth2Client::new(config(&server)).unwrap();
        let data = client.exchange_code("invalidcode").await.unwrap();

        assert_eq!(data, json!({"error": "invalid_grant"}));
    }

    #[tokio::test]
    async fn test_exchange_code_invalid_client_non_2xx() {
        let server = MockServer::start().await;

        // O corpo de erro é devolvido como dado mesmo quando o status
        // não é 2xx
        Mock::given(method("POST"))
            .and(path("/oauth2/token/"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": "invalid_client"
            })))
            .mount(&server)
            .await;

        let config = OAuth2Config::new("invalidclientid")
            .unwrap()
            .with_client_secret("validclientsecret")
            .with_redirect_uri("http://127.0.0.1:5000/authorize_openhumans/")
            .with_base_url(server.uri());
        let client = OAuth2Client::new(config).unwrap();
        let data = client.exchange_code("invalidcode").await.unwrap();

        assert_eq!(data, json!({"error": "invalid_client"}));
    }

    #[tokio::test]
    async fn test_exchange_code_is_idempotent_on_consumed_code() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth2/token/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": "invalid_grant"
            })))
            .mount(&server)
            .await;

        let client = OAuth2Client::new(config(&server)).unwrap();

        let first = client.exchange_code("consumedcode").await.unwrap();
        let second = client.exchange_code("consumedcode").await.unwrap();

        assert_eq!(first, json!({"error": "invalid_grant"}));
        assert_eq!(second, first);
    }

    #[tokio::test]
    async fn test_exchange_refresh_token_valid() {
        let server = MockServer::start().await;

        let bundle = json!({
            "access_token": "newaccesstoken",
            "expires_in": 36000,
            "refresh_token": "newrefreshtoken",
            "scope": "american-gut read wildlife open-humans write pgp go-viral",
            "token_type": "Bearer"
        });

        Mock::given(method("POST"))
            .and(path("/oauth2/token/"))
            .and(body_string_contains("grant_type=refresh_token"))
            .and(body_string_contains("refresh_token=validrefreshtoken"))
            .respond_with(ResponseTemplate::new(200).set_body_json(bundle.clone()))
            .mount(&server)
            .await;

        let client = OAuth2Client::new(config(&server)).unwrap();
        let data = client
            .exchange_refresh_token("validrefreshtoken")
            .await
            .unwrap();

        assert_eq!(data, bundle);
    }

    #[tokio::test]
    async fn test_exchange_refresh_token_invalid() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth2/token/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": "invalid_grant"
            })))
            .mount(&server)
            .await;

        let client = OAuth2Client::new(config(&server)).unwrap();
        let data = client
            .exchange_refresh_token("invalidrefreshtoken")
            .await
            .unwrap();

        assert_eq!(data, json!({"error": "invalid_grant"}));
    }

    #[tokio::test]
    async fn test_exchange_code_without_client_secret() {
        let config = OAuth2Config::new("validclientid")
            .unwrap()
            .with_redirect_uri("http://127.0.0.1:5000/authorize_openhumans/");
        let client = OAuth2Client::new(config).unwrap();

        let result = client.exchange_code("validcode").await;
        assert!(matches!(result, Err(OpenHumansError::SettingsError(_))));
    }

    #[tokio::test]
    async fn test_exchange_code_without_redirect_uri() {
        let config = OAuth2Config::new("validclientid")
            .unwrap()
            .with_client_secret("validclientsecret");
        let client = OAuth2Client::new(config).unwrap();

        let result = client.exchange_code("validcode").await;
        assert!(matches!(result, Err(OpenHumansError::SettingsError(_))));
    }

    #[tokio::test]
    async fn test_exchange_refresh_token_does_not_require_redirect_uri() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth2/token/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": "invalid_grant"
            })))
            .mount(&server)
            .await;

        let config = OAuth2Config::new("validclientid")
            .unwrap()
            .with_client_secret("validclientsecret")
            .with_base_url(server.uri());
        let client = OAuth2Client::new(config).unwrap();

        let result = client.exchange_refresh_token("whatever").await;
        assert!(result.is_ok());
    }
}
