//! Skillmap Core — error taxonomy, configuration, skill catalog.

pub mod catalog;
pub mod config;
pub mod error;

pub use catalog::{normalize_skill, CategoryDef, Difficulty, SkillCatalog, SkillRelations};
pub use config::{DataPaths, SkillmapConfig};
pub use error::{Error, Result};
