//! Estados de una submission según el backend.
//!
//! El enum cubre el vocabulario conocido; el motor de progreso trabaja sobre
//! strings crudos (un backend con pipeline propio puede emitir estados fuera
//! de esta lista), así que `parse` devuelve `Option` en lugar de fallar.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Estado de procesamiento de una submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    PendingScrape,
    ScrapingAmazon,
    ScrapingGoodreads,
    Scraped,
    PendingContext,
    ContextGeneration,
    ContextGenerated,
    PendingArticle,
    ArticleGenerated,
    ReadyForReview,
    Approved,
    Published,
    ScrapingFailed,
    Failed,
}

impl SubmissionStatus {
    /// Parse tolerante: strings desconocidos devuelven `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let s = raw.trim().to_lowercase();
        let status = match s.as_str() {
            "pending_scrape" => Self::PendingScrape,
            "scraping_amazon" => Self::ScrapingAmazon,
            "scraping_goodreads" => Self::ScrapingGoodreads,
            "scraped" => Self::Scraped,
            "pending_context" => Self::PendingContext,
            "context_generation" => Self::ContextGeneration,
            "context_generated" => Self::ContextGenerated,
            "pending_article" => Self::PendingArticle,
            "article_generated" => Self::ArticleGenerated,
            "ready_for_review" => Self::ReadyForReview,
            "approved" => Self::Approved,
            "published" => Self::Published,
            "scraping_failed" => Self::ScrapingFailed,
            "failed" => Self::Failed,
            _ => return None,
        };
        Some(status)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingScrape => "pending_scrape",
            Self::ScrapingAmazon => "scraping_amazon",
            Self::ScrapingGoodreads => "scraping_goodreads",
            Self::Scraped => "scraped",
            Self::PendingContext => "pending_context",
            Self::ContextGeneration => "context_generation",
            Self::ContextGenerated => "context_generated",
            Self::PendingArticle => "pending_article",
            Self::ArticleGenerated => "article_generated",
            Self::ReadyForReview => "ready_for_review",
            Self::Approved => "approved",
            Self::Published => "published",
            Self::ScrapingFailed => "scraping_failed",
            Self::Failed => "failed",
        }
    }

    /// Estado de fallo: marca el paso actual como `failed` en la reducción.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::ScrapingFailed | Self::Failed)
    }

    /// Estado terminal "listo": cuenta como evidencia del paso de revisión.
    pub fn is_terminal_ready(&self) -> bool {
        matches!(self, Self::ReadyForReview | Self::Approved | Self::Published)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Helper sobre strings crudos: `true` sólo para estados de fallo conocidos.
pub fn is_failure_status(raw: &str) -> bool {
    SubmissionStatus::parse(raw).map(|s| s.is_failure()).unwrap_or(false)
}

/// Helper sobre strings crudos: `true` sólo para estados terminales "listo".
pub fn is_terminal_ready_status(raw: &str) -> bool {
    SubmissionStatus::parse(raw).map(|s| s.is_terminal_ready()).unwrap_or(false)
}
