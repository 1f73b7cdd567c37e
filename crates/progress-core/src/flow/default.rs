//! Flujo default de 8 pasos para tareas sin pipeline declarado.

use once_cell::sync::Lazy;

use super::definition::{FlowDefinition, StepDefinition};
use crate::constants::DEFAULT_STEP_IDS;

static DEFAULT_FLOW: Lazy<FlowDefinition> = Lazy::new(|| {
    FlowDefinition::new(DEFAULT_STEP_IDS.iter()
                                        .map(|id| StepDefinition::from_id(*id))
                                        .collect())
});

/// Flujo default: Amazon scrape → links adicionales → resumen → consolidación
/// → investigación web → contexto → artículo → revisión.
pub fn default_flow() -> &'static FlowDefinition {
    &DEFAULT_FLOW
}
