//! Identificadores canónicos del flujo default.
//!
//! El mapeo evidencia→paso y la tabla de alias del mapper se expresan sobre
//! estos ids. Un pipeline por-tarea puede usar ids propios; en ese caso sólo
//! aplican las reglas de substring del mapper.

pub const STEP_AMAZON_SCRAPE: &str = "amazon_scrape";
pub const STEP_ADDITIONAL_LINKS_SCRAPE: &str = "additional_links_scrape";
pub const STEP_SUMMARIZE_ADDITIONAL_LINKS: &str = "summarize_additional_links";
pub const STEP_CONSOLIDATE_BOOK_DATA: &str = "consolidate_book_data";
pub const STEP_INTERNET_RESEARCH: &str = "internet_research";
pub const STEP_CONTEXT_GENERATION: &str = "context_generation";
pub const STEP_ARTICLE_GENERATION: &str = "article_generation";
pub const STEP_READY_FOR_REVIEW: &str = "ready_for_review";

/// Ids del flujo default, en orden de ejecución.
pub const DEFAULT_STEP_IDS: [&str; 8] = [STEP_AMAZON_SCRAPE,
                                         STEP_ADDITIONAL_LINKS_SCRAPE,
                                         STEP_SUMMARIZE_ADDITIONAL_LINKS,
                                         STEP_CONSOLIDATE_BOOK_DATA,
                                         STEP_INTERNET_RESEARCH,
                                         STEP_CONTEXT_GENERATION,
                                         STEP_ARTICLE_GENERATION,
                                         STEP_READY_FOR_REVIEW];
