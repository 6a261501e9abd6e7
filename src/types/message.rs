//! Requisição de mensagem para membros do projeto

use crate::error::{OpenHumansError, Result};
use serde::Serialize;

/// Mensagem a enviar via o endpoint de messaging do projeto
///
/// Dois modos de endereçamento: `all_members` ou uma lista explícita de
/// project member IDs. Informar os dois é uma combinação inválida,
/// rejeitada antes de qualquer requisição. Sem nenhum dos dois a
/// requisição segue e o servidor aplica a audiência padrão.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageRequest {
    /// Assunto da mensagem
    pub subject: String,

    /// Corpo da mensagem
    pub message: String,

    /// Enviar para todos os membros do projeto
    #[serde(skip_serializing_if = "is_false")]
    pub all_members: bool,

    /// Destinatários explícitos (project member IDs)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_member_ids: Option<Vec<String>>,
}

fn is_false(value: &bool) -> bool {
    !value
}

impl MessageRequest {
    /// Cria uma mensagem sem endereçamento explícito
    pub fn new(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
            all_members: false,
            project_member_ids: None,
        }
    }

    /// Cria uma mensagem endereçada a todos os membros
    pub fn to_all_members(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            all_members: true,
            ..Self::new(subject, message)
        }
    }

    /// Cria uma mensagem endereçada a membros específicos
    pub fn to_members(
        subject: impl Into<String>,
        message: impl Into<String>,
        project_member_ids: Vec<String>,
    ) -> Self {
        Self {
            project_member_ids: Some(project_member_ids),
            ..Self::new(subject, message)
        }
    }

    /// Valida o endereçamento antes do envio
    ///
    /// IDs malformados NÃO são rejeitados aqui — o servidor é a autoridade
    /// sobre o formato e devolve `errors.project_member_ids` no corpo.
    pub fn validate(&self) -> Result<()> {
        let has_explicit_ids = self
            .project_member_ids
            .as_ref()
            .map(|ids| !ids.is_empty())
            .unwrap_or(false);

        if self.all_members && has_explicit_ids {
            return Err(OpenHumansError::validation(
                "specify either all_members or project_member_ids, not both",
            ));
        }

        Ok(())
    }
}
