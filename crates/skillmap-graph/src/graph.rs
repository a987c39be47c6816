//! Skill graph backend using petgraph.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use skillmap_core::{normalize_skill, Result, SkillCatalog};
use tracing::{debug, info};

use crate::types::*;

/// In-memory directed skill graph built from a catalog.
///
/// At most one edge exists per ordered pair of skills. When several
/// declarations target the same pair, the strongest kind wins
/// (prerequisite, then progression, then co-requisite).
#[derive(Debug, Clone)]
pub struct SkillGraph {
    graph: DiGraph<SkillNode, Relationship>,
    node_index: HashMap<String, NodeIndex>,
    catalog: SkillCatalog,
}

impl SkillGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_index: HashMap::new(),
            catalog: SkillCatalog::default(),
        }
    }

    /// Build the graph from a seed catalog.
    ///
    /// Nodes come first (categories, then relationship metadata), then
    /// edges. Names that only appear inside a relationship become nodes
    /// in the `unknown` category.
    pub fn build_default(catalog: &SkillCatalog) -> Result<Self> {
        catalog.validate()?;

        let mut graph = Self::new();
        graph.catalog = catalog.clone();

        for (category, def) in &catalog.skill_categories {
            for skill in &def.skills {
                graph.add_skill(SkillNode {
                    category: category.clone(),
                    node_kind: NodeKind::Primary,
                    ..SkillNode::new(skill)
                });
            }
            for (subcategory, members) in &def.subcategories {
                for skill in members {
                    graph.add_skill(SkillNode {
                        category: category.clone(),
                        subcategory: Some(subcategory.clone()),
                        node_kind: NodeKind::Specific,
                        ..SkillNode::new(skill)
                    });
                }
            }
        }

        for (skill, relations) in &catalog.skill_relationships {
            let idx = graph.ensure_skill(skill);
            let node = &mut graph.graph[idx];
            node.difficulty = relations.difficulty_or_default();
            node.estimated_hours = relations.hours_or_default();
        }

        for (skill, relations) in &catalog.skill_relationships {
            for prereq in &relations.prerequisites {
                graph.add_relationship(prereq, skill, RelationshipKind::Prerequisite);
            }
            for coreq in &relations.co_requisites {
                graph.add_relationship(coreq, skill, RelationshipKind::CoRequisite);
            }
            for next in &relations.next_steps {
                graph.add_relationship(skill, next, RelationshipKind::Progression);
            }
        }

        info!(
            "SkillGraph built: {} skills, {} relationships, {} categories",
            graph.graph.node_count(),
            graph.graph.edge_count(),
            catalog.skill_categories.len()
        );
        Ok(graph)
    }

    /// Build from the built-in career ontology.
    pub fn from_default_catalog() -> Result<Self> {
        Self::build_default(&SkillCatalog::default_catalog())
    }

    // ---------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------

    /// Insert a node, overwriting the attributes of an existing one.
    pub fn add_skill(&mut self, mut node: SkillNode) -> NodeIndex {
        node.name = normalize_skill(&node.name);
        match self.node_index.get(&node.name) {
            Some(&idx) => {
                debug!("Overwriting attributes of skill '{}'", node.name);
                self.graph[idx] = node;
                idx
            }
            None => {
                let name = node.name.clone();
                let idx = self.graph.add_node(node);
                self.node_index.insert(name, idx);
                idx
            }
        }
    }

    /// Look up a node, creating it with default attributes if missing.
    pub fn ensure_skill(&mut self, name: &str) -> NodeIndex {
        let key = normalize_skill(name);
        match self.node_index.get(&key) {
            Some(&idx) => idx,
            None => self.add_skill(SkillNode::new(&key)),
        }
    }

    /// Add a typed relationship. Co-requisites are inserted in both directions.
    pub fn add_relationship(&mut self, from: &str, to: &str, kind: RelationshipKind) {
        let a = self.ensure_skill(from);
        let b = self.ensure_skill(to);
        self.upsert_edge(a, b, kind);
        if kind == RelationshipKind::CoRequisite {
            self.upsert_edge(b, a, kind);
        }
    }

    fn upsert_edge(&mut self, a: NodeIndex, b: NodeIndex, kind: RelationshipKind) -> EdgeIndex {
        match self.graph.find_edge(a, b) {
            Some(edge) => {
                let existing = self.graph[edge].kind;
                if kind.precedence() > existing.precedence() {
                    debug!(
                        "Relationship {} -> {} upgraded from {} to {}",
                        self.graph[a].name, self.graph[b].name, existing, kind
                    );
                    self.graph[edge] = Relationship::new(kind);
                }
                edge
            }
            None => self.graph.add_edge(a, b, Relationship::new(kind)),
        }
    }

    /// Insert an edge verbatim, keeping its stored weight. Returns `false`
    /// if an edge already exists for the pair.
    pub(crate) fn insert_edge_exact(
        &mut self,
        a: NodeIndex,
        b: NodeIndex,
        relationship: Relationship,
    ) -> bool {
        if self.graph.find_edge(a, b).is_some() {
            return false;
        }
        self.graph.add_edge(a, b, relationship);
        true
    }

    pub(crate) fn set_catalog(&mut self, catalog: SkillCatalog) {
        self.catalog = catalog;
    }

    // ---------------------------------------------------------------
    // Read access
    // ---------------------------------------------------------------

    pub fn contains(&self, name: &str) -> bool {
        self.node_index.contains_key(&normalize_skill(name))
    }

    pub fn skill(&self, name: &str) -> Option<&SkillNode> {
        self.index_of(name).map(|idx| &self.graph[idx])
    }

    /// All nodes, sorted by name.
    pub fn skills(&self) -> Vec<&SkillNode> {
        let mut nodes: Vec<&SkillNode> = self.graph.node_weights().collect();
        nodes.sort_by(|a, b| a.name.cmp(&b.name));
        nodes
    }

    /// All edges as `(source, target, relationship)`, sorted by endpoints.
    pub fn relationships(&self) -> Vec<(&str, &str, Relationship)> {
        let mut edges: Vec<(&str, &str, Relationship)> = self
            .graph
            .edge_references()
            .map(|e| {
                (
                    self.graph[e.source()].name.as_str(),
                    self.graph[e.target()].name.as_str(),
                    *e.weight(),
                )
            })
            .collect();
        edges.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        edges
    }

    /// The edge from `from` to `to`, if one exists.
    pub fn relationship(&self, from: &str, to: &str) -> Option<Relationship> {
        let a = self.index_of(from)?;
        let b = self.index_of(to)?;
        self.graph.find_edge(a, b).map(|e| self.graph[e])
    }

    /// The catalog this graph was built or loaded from.
    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Get graph statistics.
    pub fn stats(&self) -> GraphStats {
        let mut stats = GraphStats {
            node_count: self.graph.node_count(),
            edge_count: self.graph.edge_count(),
            category_count: self.catalog.skill_categories.len(),
            ..Default::default()
        };
        for edge in self.graph.edge_weights() {
            match edge.kind {
                RelationshipKind::Prerequisite => stats.prerequisite_edges += 1,
                RelationshipKind::CoRequisite => stats.co_requisite_edges += 1,
                RelationshipKind::Progression => stats.progression_edges += 1,
            }
        }
        stats.isolated_nodes = self
            .graph
            .node_indices()
            .filter(|&idx| self.graph.neighbors_undirected(idx).next().is_none())
            .count();
        stats
    }

    // ---------------------------------------------------------------
    // Crate-internal helpers for the query modules
    // ---------------------------------------------------------------

    pub(crate) fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.node_index.get(&normalize_skill(name)).copied()
    }

    pub(crate) fn node(&self, idx: NodeIndex) -> &SkillNode {
        &self.graph[idx]
    }

    pub(crate) fn edge_kind(&self, a: NodeIndex, b: NodeIndex) -> Option<RelationshipKind> {
        self.graph.find_edge(a, b).map(|e| self.graph[e].kind)
    }

    /// Outgoing neighbors ordered by name, so traversals are deterministic.
    pub(crate) fn sorted_successors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut next: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .collect();
        next.sort_by(|a, b| self.graph[*a].name.cmp(&self.graph[*b].name));
        next
    }

    /// Neighbors in either direction, ordered by name and de-duplicated.
    pub(crate) fn sorted_neighbors_undirected(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut next: Vec<NodeIndex> = self.graph.neighbors_undirected(idx).collect();
        next.sort_by(|a, b| self.graph[*a].name.cmp(&self.graph[*b].name));
        next.dedup();
        next
    }
}

impl Default for SkillGraph {
    fn default() -> Self {
        Self::new()
    }
}
