//! # Judicial Case Library Module
//!
//! ## Purpose
//! Read-only collection of judicial case summaries surfaced alongside the
//! constitutional articles. Deliberately simpler than the article engine:
//! lookup by id, full listing, and a trimmed lowercase substring filter with
//! no index, scoring or query expansion.
//!
//! ## Input/Output Specification
//! - **Input**: Static case collection (JSON), search terms
//! - **Output**: Case lists; an empty term returns an empty list
//! - **Failure**: An unreadable collection degrades to an empty library

use crate::errors::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Procedural status of a case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    Closed,
    Ongoing,
}

impl CaseStatus {
    fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Closed => "closed",
            CaseStatus::Ongoing => "ongoing",
        }
    }
}

/// A judicial case summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudicialCase {
    pub id: String,
    pub title: String,
    /// Decision or filing year, kept as a display string
    pub year: String,
    pub court: String,
    pub parties: String,
    pub summary: String,
    pub law_interpretation: String,
    pub outcome: String,
    pub justification: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defense_strategy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citizen_takeaway: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nuance_note: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: CaseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trending: Option<bool>,
}

/// Read-only case collection
pub struct CaseLibrary {
    cases: Vec<JudicialCase>,
}

impl CaseLibrary {
    pub fn from_cases(cases: Vec<JudicialCase>) -> Self {
        Self { cases }
    }

    /// Read the collection from disk; an unreadable or malformed file
    /// degrades to an empty library with a logged diagnostic
    pub async fn load<P: AsRef<Path>>(path: P) -> Self {
        match Self::read_file(path.as_ref()).await {
            Ok(cases) => {
                tracing::info!("Loaded {} judicial cases", cases.len());
                Self { cases }
            }
            Err(e) => {
                tracing::warn!(
                    "Case load from {:?} failed ({}): continuing with an empty library",
                    path.as_ref(),
                    e
                );
                Self { cases: Vec::new() }
            }
        }
    }

    async fn read_file(path: &Path) -> Result<Vec<JudicialCase>> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            SearchError::DataSourceUnavailable {
                origin: format!("file:{}", path.display()),
                details: e.to_string(),
            }
        })?;
        serde_json::from_str(&content).map_err(|e| SearchError::DataParsing {
            origin: format!("file:{}", path.display()),
            details: e.to_string(),
        })
    }

    pub fn get_all_cases(&self) -> &[JudicialCase] {
        &self.cases
    }

    pub fn get_case_by_id(&self, id: &str) -> Option<&JudicialCase> {
        self.cases.iter().find(|c| c.id == id)
    }

    /// Trimmed lowercase substring filter across title, summary, parties,
    /// tags, year and status
    pub fn search_cases(&self, query: &str) -> Vec<&JudicialCase> {
        let term = query.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }

        self.cases
            .iter()
            .filter(|c| {
                c.title.to_lowercase().contains(&term)
                    || c.summary.to_lowercase().contains(&term)
                    || c.parties.to_lowercase().contains(&term)
                    || c.tags.iter().any(|t| t.to_lowercase().contains(&term))
                    || c.year.contains(&term)
                    || c.status.as_str().contains(&term)
            })
            .collect()
    }
}
