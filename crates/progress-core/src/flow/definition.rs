use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::hashing::hash_value;

/// Paso del pipeline: id estable dentro del flujo + etiqueta para mostrar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDefinition {
    pub id: String,
    pub label: String,
}

impl StepDefinition {
    /// Paso con etiqueta explícita.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self { id: id.into(),
               label: label.into() }
    }

    /// Paso cuya etiqueta se deriva del id (`consolidate_book_data` →
    /// `Consolidate Book Data`).
    pub fn from_id(id: impl Into<String>) -> Self {
        let id = id.into();
        let label = humanize(&id);
        Self { id, label }
    }
}

/// Secuencia ordenada e inmutable de pasos. El orden define la precedencia
/// usada por el reducer ("todo lo anterior al paso actual está procesado").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowDefinition {
    pub steps: Vec<StepDefinition>,
    /// Identidad del flujo; cambia si cambia cualquier id o etiqueta.
    pub definition_hash: String,
}

impl FlowDefinition {
    pub fn new(steps: Vec<StepDefinition>) -> Self {
        let fingerprint = json!(steps.iter()
                                     .map(|s| json!({"id": s.id, "label": s.label}))
                                     .collect::<Vec<_>>());
        let definition_hash = hash_value(&fingerprint);
        Self { steps, definition_hash }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Posición de un paso por id (case sensitive; los ids ya vienen
    /// normalizados por el resolver).
    pub fn index_of(&self, step_id: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.id == step_id)
    }

    pub fn get(&self, step_id: &str) -> Option<&StepDefinition> {
        self.steps.iter().find(|s| s.id == step_id)
    }

    pub fn contains(&self, step_id: &str) -> bool {
        self.index_of(step_id).is_some()
    }
}

/// Transforma un id en etiqueta legible: separadores a espacio, trim y
/// title-case por palabra.
pub fn humanize(id: &str) -> String {
    id.replace(['_', '-'], " ")
      .split_whitespace()
      .map(|word| {
          let mut chars = word.chars();
          match chars.next() {
              Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
              None => String::new(),
          }
      })
      .collect::<Vec<_>>()
      .join(" ")
}
