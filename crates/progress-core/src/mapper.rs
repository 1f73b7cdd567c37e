//! Mapeo de la señal cruda de avance al paso canónico del flujo.
//!
//! Dos niveles: tabla estática de alias (vocabulario de estados del backend)
//! y heurísticas por substring para pipelines con ids propios. Es una
//! aproximación documentada: un pipeline muy personalizado cuyos ids no
//! contienen `context`/`article`/`scrap` resuelve a "sin paso actual" y la
//! reducción corre sólo con evidencia.

use std::collections::HashMap;

use book_domain::TaskSnapshot;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::constants::*;
use crate::flow::FlowDefinition;

/// Alias estado/step del backend → id canónico del flujo default. Sólo
/// aplica si el id destino existe en el flujo resuelto.
static ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([("pending_scrape", STEP_AMAZON_SCRAPE),
                   ("scraping_amazon", STEP_AMAZON_SCRAPE),
                   ("scraping_failed", STEP_AMAZON_SCRAPE),
                   ("scraping_goodreads", STEP_ADDITIONAL_LINKS_SCRAPE),
                   ("goodreads_scrape", STEP_ADDITIONAL_LINKS_SCRAPE),
                   ("scraped", STEP_SUMMARIZE_ADDITIONAL_LINKS),
                   ("pending_context", STEP_CONTEXT_GENERATION),
                   ("context_generated", STEP_CONTEXT_GENERATION),
                   ("pending_article", STEP_ARTICLE_GENERATION),
                   ("article_generated", STEP_ARTICLE_GENERATION),
                   ("approved", STEP_READY_FOR_REVIEW),
                   ("published", STEP_READY_FOR_REVIEW)])
});

/// Heurísticas por substring, en orden fijo de prioridad:
/// (substring del candidato → substring buscado en los ids del flujo).
const SUBSTRING_RULES: [(&str, &str); 4] = [("context", "context"),
                                            ("article", "article"),
                                            ("review", "article"),
                                            ("scrap", "scrap")];

/// Regla de resolución: recibe el candidato ya en minúsculas y el flujo;
/// devuelve el id canónico si aplica. Se evalúan en orden.
type MatchRule = fn(&str, &FlowDefinition) -> Option<String>;

fn alias_rule(candidate: &str, flow: &FlowDefinition) -> Option<String> {
    let target = ALIASES.get(candidate)?;
    flow.contains(target).then(|| (*target).to_string())
}

fn exact_id_rule(candidate: &str, flow: &FlowDefinition) -> Option<String> {
    flow.steps
        .iter()
        .find(|s| s.id.to_lowercase() == candidate)
        .map(|s| s.id.clone())
}

fn substring_rule(candidate: &str, flow: &FlowDefinition) -> Option<String> {
    for (needle, flow_needle) in SUBSTRING_RULES {
        if !candidate.contains(needle) {
            continue;
        }
        if let Some(step) = flow.steps.iter().find(|s| s.id.to_lowercase().contains(flow_needle)) {
            return Some(step.id.clone());
        }
    }
    None
}

const RULES: [MatchRule; 3] = [alias_rule, exact_id_rule, substring_rule];

/// Resuelve el paso actual de una tarea dentro del flujo.
///
/// Candidatos en orden: `current_step`, luego `status`. Para cada candidato
/// no vacío se evalúa la lista de reglas de arriba hacia abajo. Sin
/// resolución → `None` (no es error: la reducción corre sólo con evidencia).
pub fn map_current_step(snapshot: &TaskSnapshot, flow: &FlowDefinition) -> Option<String> {
    let candidates = [snapshot.current_step.as_deref(), Some(snapshot.status.as_str())];

    for candidate in candidates.into_iter().flatten() {
        let normalized = candidate.trim().to_lowercase();
        if normalized.is_empty() {
            continue;
        }
        for rule in RULES {
            if let Some(step_id) = rule(&normalized, flow) {
                return Some(step_id);
            }
        }
    }

    debug!(status = %snapshot.status,
           current_step = ?snapshot.current_step,
           "señal de avance no mapeable a ningún paso del flujo");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::{default_flow, StepDefinition};

    fn snapshot(status: &str, current_step: Option<&str>) -> TaskSnapshot {
        TaskSnapshot { status: status.to_string(),
                       current_step: current_step.map(str::to_string),
                       ..TaskSnapshot::default() }
    }

    fn custom_flow(ids: &[&str]) -> FlowDefinition {
        FlowDefinition::new(ids.iter().map(|id| StepDefinition::from_id(*id)).collect())
    }

    #[test]
    fn current_step_has_priority_over_status() {
        let snap = snapshot("failed", Some("article_generation"));
        assert_eq!(map_current_step(&snap, default_flow()).as_deref(),
                   Some(STEP_ARTICLE_GENERATION));
    }

    #[test]
    fn alias_resolves_backend_statuses() {
        for (status, expected) in [("pending_scrape", STEP_AMAZON_SCRAPE),
                                   ("scraped", STEP_SUMMARIZE_ADDITIONAL_LINKS),
                                   ("context_generated", STEP_CONTEXT_GENERATION),
                                   ("published", STEP_READY_FOR_REVIEW)] {
            let snap = snapshot(status, None);
            assert_eq!(map_current_step(&snap, default_flow()).as_deref(), Some(expected),
                       "status {status}");
        }
    }

    #[test]
    fn exact_flow_id_matches_case_insensitive() {
        let snap = snapshot("Internet_Research", None);
        assert_eq!(map_current_step(&snap, default_flow()).as_deref(),
                   Some(STEP_INTERNET_RESEARCH));
    }

    #[test]
    fn alias_skipped_when_target_missing_in_custom_flow() {
        // `context_generated` apunta a `context_generation`, ausente aquí;
        // la heurística por substring encuentra el paso custom.
        let flow = custom_flow(&["fetch", "build_context_notes", "write_article"]);
        let snap = snapshot("context_generated", None);
        assert_eq!(map_current_step(&snap, &flow).as_deref(), Some("build_context_notes"));
    }

    #[test]
    fn substring_priority_context_before_article() {
        let flow = custom_flow(&["write_article", "make_context"]);
        let snap = snapshot("context_and_article", None);
        assert_eq!(map_current_step(&snap, &flow).as_deref(), Some("make_context"));
    }

    #[test]
    fn review_maps_to_article_step() {
        let flow = custom_flow(&["draft_article", "polish"]);
        let snap = snapshot("in_review", None);
        assert_eq!(map_current_step(&snap, &flow).as_deref(), Some("draft_article"));
    }

    #[test]
    fn scraping_failed_resolves_scrape_step() {
        let snap = snapshot("scraping_failed", None);
        assert_eq!(map_current_step(&snap, default_flow()).as_deref(),
                   Some(STEP_AMAZON_SCRAPE));
    }

    #[test]
    fn unmappable_signal_returns_none() {
        let flow = custom_flow(&["alpha", "beta"]);
        let snap = snapshot("gamma_phase", Some("delta"));
        assert_eq!(map_current_step(&snap, &flow), None);
    }

    #[test]
    fn empty_signals_return_none() {
        let snap = snapshot("", Some("   "));
        assert_eq!(map_current_step(&snap, default_flow()), None);
    }
}
