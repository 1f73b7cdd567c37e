//! Proyección optimista de un retry manual.
//!
//! Entre disparar el retry y el próximo fetch autoritativo, la UI muestra
//! esta proyección provisional: el paso reintentado pasa a `current` y todo
//! lo posterior vuelve a `to_do`. El snapshot fresco la reemplaza por
//! completo (se descarta, nunca se mergea).

use indexmap::IndexMap;

use crate::flow::FlowDefinition;
use crate::reducer::StepState;

/// Proyecta el estado provisional tras pedir el retry de `retried_step_id`.
///
/// Id ausente del flujo → copia sin cambios (no-op, no error). Los pasos
/// estrictamente anteriores al reintentado no se tocan.
pub fn project_retry(flow: &FlowDefinition,
                     prior_states: &IndexMap<String, StepState>,
                     retried_step_id: &str)
                     -> IndexMap<String, StepState> {
    let mut projected = prior_states.clone();

    let Some(idx) = flow.index_of(retried_step_id) else {
        return projected;
    };

    for step in flow.steps.iter().skip(idx + 1) {
        if let Some(state) = projected.get_mut(&step.id) {
            *state = StepState::ToDo;
        }
    }
    if let Some(state) = projected.get_mut(retried_step_id) {
        *state = StepState::Current;
    }

    projected
}
