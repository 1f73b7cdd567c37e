//! Contrato de salida hacia la capa de render.
//!
//! El motor no formatea markup: entrega la lista ordenada de descriptores
//! `{id, label, state}` más el estado de los conectores entre pasos
//! adyacentes. `reconstruct_progress` encadena resolver → mapper → reducer →
//! render en una sola llamada.

use book_domain::TaskSnapshot;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::flow::{resolve_flow, FlowDefinition};
use crate::mapper::map_current_step;
use crate::reducer::{reduce, StepState};

/// Estado visual del conector entre dos pasos adyacentes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorState {
    Neutral,
    Processed,
    Failed,
}

/// Descriptor de paso listo para render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDescriptor {
    pub id: String,
    pub label: String,
    pub state: StepState,
}

/// Vista completa del progreso de una tarea.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressView {
    /// Identidad del flujo resuelto; cambia si el pipeline de la tarea
    /// cambió entre fetches (el caller descarta proyecciones viejas).
    pub definition_hash: String,
    pub current_step: Option<String>,
    pub steps: Vec<StepDescriptor>,
    pub connectors: Vec<ConnectorState>,
}

/// Estado del conector según los extremos: cualquier extremo `to_do` lo
/// neutraliza; si no, refleja el `failed`/`processed` del paso anterior.
pub fn connector_between(earlier: StepState, later: StepState) -> ConnectorState {
    if earlier == StepState::ToDo || later == StepState::ToDo {
        return ConnectorState::Neutral;
    }
    match earlier {
        StepState::Failed => ConnectorState::Failed,
        StepState::Processed => ConnectorState::Processed,
        // `current`/`to_do` como extremo anterior no aportan avance.
        StepState::Current | StepState::ToDo => ConnectorState::Neutral,
    }
}

/// Combina flujo + estados en descriptores ordenados. Pasos sin entrada en
/// el mapa (no debería ocurrir con `reduce`) quedan en `to_do`.
pub fn render_steps(flow: &FlowDefinition,
                    states: &IndexMap<String, StepState>)
                    -> Vec<StepDescriptor> {
    flow.steps
        .iter()
        .map(|s| StepDescriptor { id: s.id.clone(),
                                  label: s.label.clone(),
                                  state: states.get(&s.id).copied().unwrap_or(StepState::ToDo) })
        .collect()
}

/// Conectores entre pasos adyacentes; `len() == steps.len() - 1`.
pub fn render_connectors(steps: &[StepDescriptor]) -> Vec<ConnectorState> {
    steps.windows(2)
         .map(|pair| connector_between(pair[0].state, pair[1].state))
         .collect()
}

/// Pipeline completo: snapshot → flujo → paso actual → estados → vista.
pub fn reconstruct_progress(snapshot: &TaskSnapshot) -> ProgressView {
    let flow = resolve_flow(snapshot);
    let current_step = map_current_step(snapshot, &flow);
    let states = reduce(&flow, snapshot, current_step.as_deref());
    let steps = render_steps(&flow, &states);
    let connectors = render_connectors(&steps);
    ProgressView { definition_hash: flow.definition_hash,
                   current_step,
                   steps,
                   connectors }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connector_rules() {
        use ConnectorState as C;
        use StepState as S;
        assert_eq!(connector_between(S::ToDo, S::ToDo), C::Neutral);
        assert_eq!(connector_between(S::Processed, S::ToDo), C::Neutral);
        assert_eq!(connector_between(S::Current, S::ToDo), C::Neutral);
        assert_eq!(connector_between(S::Processed, S::Current), C::Processed);
        assert_eq!(connector_between(S::Processed, S::Processed), C::Processed);
        assert_eq!(connector_between(S::Failed, S::Current), C::Failed);
        assert_eq!(connector_between(S::Processed, S::Failed), C::Processed);
    }

    #[test]
    fn reconstruct_produces_one_connector_less_than_steps() {
        let snap = TaskSnapshot { status: "context_generated".into(),
                                  has_book_extracted: true,
                                  ..TaskSnapshot::default() };
        let view = reconstruct_progress(&snap);
        assert_eq!(view.steps.len(), 8);
        assert_eq!(view.connectors.len(), 7);
        assert_eq!(view.current_step.as_deref(), Some("context_generation"));
    }

    #[test]
    fn view_serializes_with_snake_case_states() {
        let snap = TaskSnapshot { status: "failed".into(),
                                  current_step: Some("article_generation".into()),
                                  ..TaskSnapshot::default() };
        let view = reconstruct_progress(&snap);
        let json = serde_json::to_value(&view).unwrap();
        let article = json["steps"].as_array()
                                   .unwrap()
                                   .iter()
                                   .find(|s| s["id"] == "article_generation")
                                   .unwrap();
        assert_eq!(article["state"], "failed");
        assert_eq!(json["connectors"][5], "processed");
    }
}
