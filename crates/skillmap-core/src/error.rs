//! Error types for Skillmap.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Skill \"{0}\" not in ontology")]
    UnknownSkill(String),

    #[error("No learning path from {from:?} to \"{target}\"")]
    NoPathFound { from: Vec<String>, target: String },

    #[error("Malformed catalog: {0}")]
    MalformedCatalog(String),

    #[error("Malformed snapshot: {0}")]
    MalformedSnapshot(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The referenced skill does not exist in the graph.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnknownSkill(_))
    }

    /// The skills exist but no directed route connects them.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::NoPathFound { .. })
    }

    /// Short machine-readable label, used in API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownSkill(_) => "unknown_skill",
            Self::NoPathFound { .. } => "no_path_found",
            Self::MalformedCatalog(_) => "malformed_catalog",
            Self::MalformedSnapshot(_) => "malformed_snapshot",
            Self::Storage(_) => "storage",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Json(_) => "json",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
