//! Definición y resolución del flujo de pasos de una tarea.
//!
//! - `StepDefinition` / `FlowDefinition`: secuencia ordenada e inmutable de
//!   pasos con identidad (`definition_hash`).
//! - `resolve_flow`: pipeline declarado por la tarea cuando existe, flujo
//!   default de 8 pasos en caso contrario. Nunca vacío, nunca falla.

mod default;
mod definition;
mod resolver;

pub use default::default_flow;
pub use definition::{humanize, FlowDefinition, StepDefinition};
pub use resolver::resolve_flow;
