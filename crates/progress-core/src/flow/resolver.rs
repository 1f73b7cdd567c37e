//! Resolución del flujo efectivo de una tarea.

use std::collections::HashSet;

use book_domain::TaskSnapshot;
use tracing::debug;

use super::default::default_flow;
use super::definition::{FlowDefinition, StepDefinition};

/// Deriva el flujo de pasos para una tarea.
///
/// Si el snapshot declara un pipeline con al menos un paso con id válido, se
/// usa tal cual (etiqueta humanizada cuando falta `name`); duplicados
/// conservan la primera aparición. En cualquier otro caso se devuelve el
/// flujo default. Nunca devuelve un flujo vacío.
pub fn resolve_flow(snapshot: &TaskSnapshot) -> FlowDefinition {
    if snapshot.pipeline_steps.is_empty() {
        debug!(submission = ?snapshot.submission_id, "pipeline no declarado, usando flujo default");
        return default_flow().clone();
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut steps: Vec<StepDefinition> = Vec::with_capacity(snapshot.pipeline_steps.len());
    for spec in &snapshot.pipeline_steps {
        // Primera aparición gana; ver DESIGN.md sobre ids duplicados.
        if !seen.insert(spec.id.clone()) {
            debug!(step = %spec.id, "id duplicado en pipeline declarado, se conserva el primero");
            continue;
        }
        let step = match spec.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => StepDefinition::new(spec.id.clone(), name),
            _ => StepDefinition::from_id(spec.id.clone()),
        };
        steps.push(step);
    }

    if steps.is_empty() {
        return default_flow().clone();
    }
    FlowDefinition::new(steps)
}
