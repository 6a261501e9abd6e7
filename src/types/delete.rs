//! Requisição de remoção de arquivos de um membro

use crate::error::{OpenHumansError, Result};
use serde::Serialize;

/// Escopo de remoção de arquivos de um project member
///
/// O escopo cobre todos os arquivos (`all_files`) ou identifica arquivos
/// específicos por ID ou basename — nunca os dois ao mesmo tempo. Um
/// escopo vazio também é inválido.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileDeletion {
    /// Project member ID alvo (8 dígitos; o servidor valida o formato)
    pub project_member_id: String,

    /// ID de um arquivo específico
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,

    /// Basename de arquivo (remove todos os arquivos com esse nome)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_basename: Option<String>,

    /// Remover todos os arquivos do membro
    #[serde(skip_serializing_if = "is_false")]
    pub all_files: bool,
}

fn is_false(value: &bool) -> bool {
    !value
}

impl FileDeletion {
    /// Remoção de todos os arquivos do membro
    pub fn all_files(project_member_id: impl Into<String>) -> Self {
        Self {
            project_member_id: project_member_id.into(),
            file_id: None,
            file_basename: None,
            all_files: true,
        }
    }

    /// Remoção de um arquivo pelo ID
    pub fn by_file_id(
        project_member_id: impl Into<String>,
        file_id: impl Into<String>,
    ) -> Self {
        Self {
            project_member_id: project_member_id.into(),
            file_id: Some(file_id.into()),
            file_basename: None,
            all_files: false,
        }
    }

    /// Remoção de arquivos pelo basename
    pub fn by_basename(
        project_member_id: impl Into<String>,
        file_basename: impl Into<String>,
    ) -> Self {
        Self {
            project_member_id: project_member_id.into(),
            file_id: None,
            file_basename: Some(file_basename.into()),
            all_files: false,
        }
    }

    /// Valida o escopo antes do envio
    pub fn validate(&self) -> Result<()> {
        let has_specific = self.file_id.is_some() || self.file_basename.is_some();

        if self.all_files && has_specific {
            return Err(OpenHumansError::validation(
                "all_files cannot be combined with file_id or file_basename",
            ));
        }

        if !self.all_files && !has_specific {
            return Err(OpenHumansError::validation(
                "specify file_id, file_basename or all_files",
            ));
        }

        Ok(())
    }
}
