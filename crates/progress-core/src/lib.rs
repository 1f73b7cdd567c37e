//! progress-core: motor puro de reconstrucción de progreso de pipeline.
//!
//! Dado un `TaskSnapshot` (ver `book-domain`), el motor infiere el estado de
//! cada paso de un pipeline multi-etapa cuyo backend sólo expone un string de
//! estado y subproductos parciales. Cuatro piezas, todas puras:
//!
//! - `flow::resolve_flow`: pipeline declarado por la tarea o flujo default.
//! - `mapper::map_current_step`: señal cruda → paso canónico (alias +
//!   heurísticas por substring, en lista de reglas priorizada).
//! - `reducer::reduce`: evidencia + paso actual → estado por paso, con
//!   invariantes de monotonía ancladas al paso actual.
//! - `projector::project_retry`: proyección optimista de un retry manual,
//!   descartada al llegar el siguiente snapshot autoritativo.
//!
//! Sin I/O, sin estado compartido: cada invocación es independiente y el
//! caller aplica last-write-wins entre fetches.

pub mod constants;
pub mod flow;
pub mod hashing;
pub mod mapper;
pub mod projector;
pub mod reducer;
pub mod render;

pub use flow::{default_flow, humanize, resolve_flow, FlowDefinition, StepDefinition};
pub use mapper::map_current_step;
pub use projector::project_retry;
pub use reducer::{reduce, StepState};
pub use render::{connector_between, reconstruct_progress, render_connectors, render_steps,
                 ConnectorState, ProgressView, StepDescriptor};
