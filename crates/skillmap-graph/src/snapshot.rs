//! Serializable snapshot of a skill graph.
//!
//! The schema carries the seed catalog alongside the realized graph so a
//! loaded graph reports the same catalog it was built from. Only the
//! fields listed here are persisted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use skillmap_core::{normalize_skill, CategoryDef, Error, Result, SkillCatalog, SkillRelations};
use tracing::info;

use crate::graph::SkillGraph;
use crate::types::*;

pub const SNAPSHOT_VERSION: u32 = 1;

/// Persisted form of a [`SkillGraph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OntologySnapshot {
    pub version: u32,
    pub skill_categories: BTreeMap<String, CategoryDef>,
    pub skill_relationships: BTreeMap<String, SkillRelations>,
    pub graph: GraphData,
}

/// Node and edge lists of the realized graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<SkillNode>,
    pub edges: Vec<GraphEdge>,
}

/// An edge in the persisted graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub kind: RelationshipKind,
    pub weight: f64,
}

impl OntologySnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl SkillGraph {
    /// Capture the catalog and the realized node/edge sets.
    pub fn save(&self) -> OntologySnapshot {
        let nodes = self.skills().into_iter().cloned().collect();
        let edges = self
            .relationships()
            .into_iter()
            .map(|(source, target, rel)| GraphEdge {
                source: source.to_string(),
                target: target.to_string(),
                kind: rel.kind,
                weight: rel.weight,
            })
            .collect();

        OntologySnapshot {
            version: SNAPSHOT_VERSION,
            skill_categories: self.catalog().skill_categories.clone(),
            skill_relationships: self.catalog().skill_relationships.clone(),
            graph: GraphData { nodes, edges },
        }
    }

    /// Restore a graph from a snapshot, keeping every node and edge attribute.
    ///
    /// The realized graph is taken as-is rather than rebuilt from the catalog.
    pub fn load(snapshot: OntologySnapshot) -> Result<Self> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(Error::MalformedSnapshot(format!(
                "unsupported snapshot version {} (expected {})",
                snapshot.version, SNAPSHOT_VERSION
            )));
        }

        let mut graph = SkillGraph::new();
        for node in snapshot.graph.nodes {
            let name = normalize_skill(&node.name);
            if name.is_empty() {
                return Err(Error::MalformedSnapshot("node with an empty name".into()));
            }
            if graph.contains(&name) {
                return Err(Error::MalformedSnapshot(format!("duplicate node \"{}\"", name)));
            }
            if node.estimated_hours == 0 {
                return Err(Error::MalformedSnapshot(format!(
                    "node \"{}\" has zero estimated hours",
                    name
                )));
            }
            graph.add_skill(node);
        }

        for edge in &snapshot.graph.edges {
            let a = graph.index_of(&edge.source).ok_or_else(|| {
                Error::MalformedSnapshot(format!("edge source \"{}\" is not a node", edge.source))
            })?;
            let b = graph.index_of(&edge.target).ok_or_else(|| {
                Error::MalformedSnapshot(format!("edge target \"{}\" is not a node", edge.target))
            })?;
            if !edge.weight.is_finite() {
                return Err(Error::MalformedSnapshot(format!(
                    "edge {} -> {} has a non-finite weight",
                    edge.source, edge.target
                )));
            }
            let relationship = Relationship {
                kind: edge.kind,
                weight: edge.weight,
            };
            if !graph.insert_edge_exact(a, b, relationship) {
                return Err(Error::MalformedSnapshot(format!(
                    "duplicate edge {} -> {}",
                    edge.source, edge.target
                )));
            }
        }

        graph.set_catalog(SkillCatalog {
            skill_categories: snapshot.skill_categories,
            skill_relationships: snapshot.skill_relationships,
        });

        info!(
            "SkillGraph loaded from snapshot: {} skills, {} relationships",
            graph.len(),
            snapshot.graph.edges.len()
        );
        Ok(graph)
    }
}
