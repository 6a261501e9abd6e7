// ============================================================================
// Member Manager - Operações sobre membros de um projeto direct-sharing
// ============================================================================
//
// Este módulo encapsula as operações voltadas a membros:
//
// 1. **Leitura:**
//    - Registro exchange-member com paginação de arquivos (exchange_member)
//
// 2. **Ações:**
//    - Envio de mensagens (message)
//    - Remoção de arquivos (delete_files)
//
// # Tratamento de erros
//
// Mensageria e remoção seguem o contrato da API: falhas de negócio (token
// expirado, project member ID malformado) voltam como `ApiResponse` com o
// corpo intacto, nunca como `Err`. Só pré-condições locais (endereçamento
// contraditório, escopo vazio) e falhas de transporte levantam erro.

use crate::client::{ApiResponse, OpenHumansClient};
use crate::error::Result;
use crate::types::{ExchangeMember, FileDeletion, MessageRequest};
use serde_json::json;

const EXCHANGE_MEMBER_ENDPOINT: &str = "/api/direct-sharing/project/exchange-member/";
const MESSAGE_ENDPOINT: &str = "/api/direct-sharing/project/message/";
const DELETE_FILES_ENDPOINT: &str = "/api/direct-sharing/project/files/delete/";

/// Gerenciador de operações de membro do Open Humans
#[derive(Clone)]
pub struct MemberManager {
    client: OpenHumansClient,
}

impl MemberManager {
    /// Cria uma nova instância do MemberManager
    pub fn new(client: OpenHumansClient) -> Self {
        Self { client }
    }

    /// Cria um MemberManager a partir de um token (conveniência)
    pub fn from_token(access_token: impl Into<String>) -> Result<Self> {
        let client = OpenHumansClient::new(access_token)?;
        Ok(Self::new(client))
    }

    /// Obtém o registro exchange-member do token configurado
    ///
    /// # Endpoint da API
    ///
    /// `GET /api/direct-sharing/project/exchange-member/`
    ///
    /// O array `data` pode vir paginado; as páginas seguintes são
    /// percorridas pelo cursor `next` e acumuladas antes do parse, então o
    /// registro devolvido lista todos os arquivos do membro.
    pub async fn exchange_member(&self) -> Result<ExchangeMember> {
        let url = format!(
            "{}{}?access_token={}",
            self.client.base_url(),
            EXCHANGE_MEMBER_ENDPOINT,
            self.client.access_token()
        );

        let mut merged = self.client.get_page(&url).await?;
        let mut next = merged
            .get("next")
            .and_then(|v| v.as_str())
            .map(str::to_string);

        while let Some(next_url) = next {
            let page = self.client.get_page(&next_url).await?;

            if let (Some(acc), Some(more)) = (
                merged.get_mut("data").and_then(|v| v.as_array_mut()),
                page.get("data").and_then(|v| v.as_array()),
            ) {
                acc.extend(more.clone());
            }

            next = page
                .get("next")
                .and_then(|v| v.as_str())
                .map(str::to_string);
        }

        Ok(serde_json::from_value(merged)?)
    }

    /// Envia uma mensagem a membros do projeto
    ///
    /// # Endpoint da API
    ///
    /// `POST /api/direct-sharing/project/message/`
    ///
    /// # Retorno
    ///
    /// `ApiResponse` com status + corpo — inclusive para 4xx. IDs
    /// malformados voltam no corpo como `errors.project_member_ids`, sem
    /// exceção local; só o endereçamento contraditório
    /// (`all_members` + lista de IDs) é rejeitado antes do envio.
    pub async fn message(&self, request: &MessageRequest) -> Result<ApiResponse> {
        request.validate()?;

        let mut body = serde_json::to_value(request)?;
        body["access_token"] = json!(self.client.access_token());

        self.client.post_api(MESSAGE_ENDPOINT, &body).await
    }

    /// Remove arquivos de um membro do projeto
    ///
    /// # Endpoint da API
    ///
    /// `POST /api/direct-sharing/project/files/delete/`
    ///
    /// # Retorno
    ///
    /// `ApiResponse` com status + corpo: 200 em sucesso, 400 para project
    /// member ID malformado, corpo `{"detail": "..."}` para token inválido
    /// ou expirado. Nenhum desses casos vira `Err`.
    pub async fn delete_files(&self, deletion: &FileDeletion) -> Result<ApiResponse> {
        deletion.validate()?;

        let mut body = serde_json::to_value(deletion)?;
        body["access_token"] = json!(self.client.access_token());

        self.client.post_api(DELETE_FILES_ENDPOINT, &body).await
    }

    /// Obtém o cliente subjacente
    pub fn client(&self) -> &OpenHumansClient {
        &self.client
    }
}
