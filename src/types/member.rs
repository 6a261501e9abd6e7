//! Tipos relacionados a membros de projeto direct-sharing
//!
//! Um membro é identificado pelo project member ID — sempre 8 dígitos —
//! e expõe os arquivos compartilhados com o projeto no endpoint
//! exchange-member.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Registro exchange-member de um membro do projeto
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeMember {
    /// Project member ID (8 dígitos)
    pub project_member_id: String,

    /// Se o projeto pode enviar mensagens ao membro
    pub message_permission: bool,

    /// Nome de usuário no Open Humans
    pub username: String,

    /// Fontes de dados compartilhadas com o projeto
    pub sources_shared: Vec<String>,

    /// Data de entrada no projeto (string de timestamp da API)
    pub created: String,

    /// Arquivos compartilhados (todas as páginas acumuladas)
    #[serde(default)]
    pub data: Vec<DataFile>,
}

/// Um arquivo de dados compartilhado com o projeto
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataFile {
    /// ID do arquivo
    pub id: u64,

    /// Nome base do arquivo
    pub basename: String,

    /// Data de upload (string de timestamp da API)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    /// URL de download (pré-assinada, expira)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,

    /// Metadados do upload (tags, descrição)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonValue>,

    /// Fonte que gerou o arquivo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Verifica o formato de um project member ID: exatamente 8 dígitos ASCII
///
/// Checagem rápida do lado do cliente; o servidor continua sendo a
/// autoridade e devolve `errors.project_member_ids` para IDs desconhecidos.
/// `message`/`delete_files` não aplicam esta checagem — IDs malformados
/// seguem até o servidor e o payload de erro volta intacto.
pub fn valid_project_member_id(id: &str) -> bool {
    id.len() == 8 && id.bytes().all(|b| b.is_ascii_digit())
}
