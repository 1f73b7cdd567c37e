//! Vista validada e inmutable de una tarea: `TaskSnapshot`.
//!
//! El snapshot reúne las señales crudas (`status`, `current_step`) y las
//! banderas de evidencia derivadas de los subproductos opcionales del
//! payload. Se construye una sola vez por fetch y el motor de progreso lo
//! consume sin mutarlo; toda reducción posterior parte de aquí.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::payload::TaskDetailPayload;

/// Paso crudo declarado por un pipeline por-tarea, ya normalizado a strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStepSpec {
    pub id: String,
    pub name: Option<String>,
}

/// Evidencia inmutable de una tarea en un instante dado.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskSnapshot {
    pub submission_id: Option<String>,
    /// Estado crudo del backend; puede estar fuera del vocabulario conocido.
    pub status: String,
    pub current_step: Option<String>,
    pub other_links: Vec<String>,
    /// Cantidad de links adicionales con resumen ya generado.
    pub additional_links_processed: usize,
    pub has_book_extracted: bool,
    pub has_link_candidates: bool,
    pub has_consolidated_bibliographic: bool,
    pub has_web_research: bool,
    pub has_context_markdown: bool,
    pub has_article: bool,
    /// Pipeline declarado por la tarea; vacío implica usar el flujo default.
    pub pipeline_steps: Vec<PipelineStepSpec>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

fn non_empty(s: &Option<String>) -> bool {
    s.as_deref().map(|v| !v.trim().is_empty()).unwrap_or(false)
}

fn non_empty_object(v: Option<&Value>) -> bool {
    match v {
        Some(Value::Object(map)) => !map.is_empty(),
        _ => false,
    }
}

impl TaskSnapshot {
    /// Deriva el snapshot desde el payload crudo. Único punto donde se
    /// interpretan los subproductos; el resto del motor sólo ve banderas.
    pub fn from_payload(payload: &TaskDetailPayload) -> Self {
        let sub = &payload.submission;

        let extracted = payload.book.as_ref().and_then(|b| b.extracted.as_ref());
        let has_book_extracted = non_empty_object(extracted);

        let additional_links_processed = payload.summaries
                                                .iter()
                                                .filter(|s| non_empty(&s.content))
                                                .count();
        // Candidatos encontrados aunque aún no estén resumidos.
        let has_link_candidates = !payload.summaries.is_empty();

        let has_context_markdown = payload.knowledge_base
                                          .as_ref()
                                          .map(|kb| non_empty(&kb.markdown_content))
                                          .unwrap_or(false);

        // La consolidación bibliográfica vive como clave del extracted o,
        // en tareas viejas, implícita en la knowledge base ya poblada.
        let has_consolidated_bibliographic = extracted.map(|v| v.get("consolidated").is_some())
                                                      .unwrap_or(false)
            || has_context_markdown;

        let has_web_research = payload.research
                                      .as_ref()
                                      .map(|r| non_empty(&r.content) || !r.sources.is_empty())
                                      .unwrap_or(false);

        let has_article = payload.article
                                 .as_ref()
                                 .map(|a| non_empty(&a.id) || non_empty(&a.content))
                                 .unwrap_or(false)
            || payload.draft.as_ref().map(|d| non_empty(&d.content)).unwrap_or(false);

        let pipeline_steps = payload.pipeline
                                    .as_ref()
                                    .map(|p| {
                                        p.steps
                                         .iter()
                                         .filter_map(|s| {
                                             let id = s.id.as_deref()?.trim().to_string();
                                             if id.is_empty() {
                                                 return None;
                                             }
                                             Some(PipelineStepSpec { id,
                                                                     name: s.name.clone() })
                                         })
                                         .collect()
                                    })
                                    .unwrap_or_default();

        Self { submission_id: sub.id.clone(),
               status: sub.status.clone().unwrap_or_default(),
               current_step: sub.current_step.clone().filter(|s| !s.trim().is_empty()),
               other_links: sub.other_links.clone(),
               additional_links_processed,
               has_book_extracted,
               has_link_candidates,
               has_consolidated_bibliographic,
               has_web_research,
               has_context_markdown,
               has_article,
               pipeline_steps,
               created_at: sub.created_at,
               updated_at: sub.updated_at }
    }
}
