//! Skillmap Graph — directed skill ontology with learning-path and cluster queries.
//!
//! The graph is built once from a [`SkillCatalog`](skillmap_core::SkillCatalog)
//! (or restored from an [`OntologySnapshot`]) and queried read-only afterwards.
//! No query takes `&mut self`, so a built graph can be shared across threads
//! behind an `Arc` and replaced wholesale on rebuild.

pub mod cluster;
pub mod graph;
pub mod mentions;
pub mod path;
pub mod plan;
pub mod snapshot;
pub mod types;

pub use graph::SkillGraph;
pub use mentions::SkillMatcher;
pub use plan::PlanOptions;
pub use snapshot::{GraphData, GraphEdge, OntologySnapshot, SNAPSHOT_VERSION};
pub use types::*;
