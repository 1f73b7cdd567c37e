//! book-domain: vocabulario y frontera de datos del pipeline editorial.
//!
//! Este crate define el vocabulario de estados del backend
//! (`SubmissionStatus`), los DTOs tolerantes del payload de detalle de tarea
//! (`TaskDetailPayload`) y la vista validada e inmutable que consume el motor
//! de progreso (`TaskSnapshot`). Las banderas de evidencia se derivan una
//! sola vez aquí, en la frontera; ningún consumidor vuelve a inspeccionar el
//! JSON crudo.

pub mod error;
pub mod payload;
pub mod snapshot;
pub mod status;

pub use error::DomainError;
pub use payload::TaskDetailPayload;
pub use snapshot::{PipelineStepSpec, TaskSnapshot};
pub use status::{is_failure_status, is_terminal_ready_status, SubmissionStatus};
