//! Reducción evidencia + paso actual → estado por paso.
//!
//! Reglas, en orden:
//! 1. todo paso arranca en `to_do`;
//! 2. la evidencia de subproductos marca pasos puntuales como `processed`;
//! 3. si hay paso actual resuelto, todo lo anterior se fuerza a `processed`
//!    (la etapa tardía implica las previas) y todo lo posterior a `to_do`
//!    (un retry desde el medio invalida la lectura de artifacts posteriores);
//! 4. estado de fallo del backend marca el paso actual como `failed`; si no,
//!    un paso actual todavía `to_do` pasa a `current`.
//!
//! Caso relajado documentado: sin paso actual resuelto la reducción es sólo
//! evidencia y puede dejar huecos no monotónicos.

use book_domain::{is_failure_status, is_terminal_ready_status, TaskSnapshot};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::flow::FlowDefinition;

/// Estado inferido de un paso del pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    ToDo,
    Current,
    Processed,
    Failed,
}

/// Evidencia aplicable por id canónico. Sólo actúa sobre pasos presentes en
/// el flujo resuelto; un pipeline custom sin estos ids simplemente no recibe
/// marcas de evidencia.
fn evidence_marks(snapshot: &TaskSnapshot) -> [(&'static str, bool); 8] {
    // Links: nada que scrapear cuenta como completado, igual que tener al
    // menos un resumen generado.
    let links_done = snapshot.other_links.is_empty() || snapshot.additional_links_processed > 0;
    [(STEP_AMAZON_SCRAPE, snapshot.has_book_extracted),
     (STEP_ADDITIONAL_LINKS_SCRAPE, links_done),
     (STEP_SUMMARIZE_ADDITIONAL_LINKS, links_done || snapshot.has_link_candidates),
     (STEP_CONSOLIDATE_BOOK_DATA, snapshot.has_consolidated_bibliographic),
     (STEP_INTERNET_RESEARCH, snapshot.has_web_research),
     (STEP_CONTEXT_GENERATION, snapshot.has_context_markdown),
     (STEP_ARTICLE_GENERATION, snapshot.has_article),
     (STEP_READY_FOR_REVIEW, is_terminal_ready_status(&snapshot.status))]
}

/// Calcula el estado de cada paso del flujo para un snapshot.
///
/// Función pura e idempotente: mismo flujo + snapshot + paso actual produce
/// siempre el mismo mapa (en orden de flujo). `current_step_id` es la salida
/// del mapper; `None` reduce sólo con evidencia y no marca `current`/`failed`.
pub fn reduce(flow: &FlowDefinition,
              snapshot: &TaskSnapshot,
              current_step_id: Option<&str>)
              -> IndexMap<String, StepState> {
    let mut states: IndexMap<String, StepState> = flow.steps
                                                      .iter()
                                                      .map(|s| (s.id.clone(), StepState::ToDo))
                                                      .collect();

    for (step_id, present) in evidence_marks(snapshot) {
        if present {
            if let Some(state) = states.get_mut(step_id) {
                *state = StepState::Processed;
            }
        }
    }

    let current_index = current_step_id.and_then(|id| flow.index_of(id));
    if let Some(idx) = current_index {
        for (pos, state) in states.values_mut().enumerate() {
            if pos < idx {
                *state = StepState::Processed;
            } else if pos > idx {
                *state = StepState::ToDo;
            }
        }
        let current = &mut states[idx];
        if is_failure_status(&snapshot.status) {
            *current = StepState::Failed;
        } else if *current == StepState::ToDo {
            *current = StepState::Current;
        }
    }

    states
}
