//! DTOs del payload de detalle de tarea (`GET /tasks/{id}`).
//!
//! Todos los campos son opcionales y con default: el backend omite secciones
//! enteras según el avance de la tarea (sin `book` antes del scrape, sin
//! `article` antes de la generación). Campos desconocidos se ignoran.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DomainError;

/// Payload completo de detalle de tarea, tal como lo entrega la capa de datos.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskDetailPayload {
    #[serde(default)]
    pub submission: SubmissionSection,
    #[serde(default)]
    pub book: Option<BookSection>,
    #[serde(default)]
    pub summaries: Vec<SummaryEntry>,
    #[serde(default)]
    pub research: Option<ResearchSection>,
    #[serde(default)]
    pub knowledge_base: Option<KnowledgeBaseSection>,
    #[serde(default)]
    pub article: Option<ArticleSection>,
    #[serde(default)]
    pub draft: Option<DraftSection>,
    #[serde(default)]
    pub pipeline: Option<PipelineSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionSection {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub current_step: Option<String>,
    #[serde(default)]
    pub other_links: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookSection {
    #[serde(default)]
    pub id: Option<String>,
    /// JSON extraído del scrape; el motor sólo mira presencia/claves.
    #[serde(default)]
    pub extracted: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryEntry {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResearchSection {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeBaseSection {
    #[serde(default)]
    pub markdown_content: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleSection {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftSection {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineSection {
    #[serde(default)]
    pub steps: Vec<PipelineStepEntry>,
}

/// Paso declarado por un pipeline específico de la tarea (`{id, name}`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineStepEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl TaskDetailPayload {
    /// Decodifica el JSON crudo de la capa de datos.
    pub fn from_json(raw: &str) -> Result<Self, DomainError> {
        serde_json::from_str(raw).map_err(|e| DomainError::DecodeError(e.to_string()))
    }
}
