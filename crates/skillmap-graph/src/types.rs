//! Node, edge and query result types.

use serde::{Deserialize, Serialize};
use skillmap_core::catalog::{DEFAULT_ESTIMATED_HOURS, UNKNOWN_CATEGORY};
use skillmap_core::{normalize_skill, Difficulty};

/// Whether a skill is a category's headline skill or a subcategory member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Primary,
    #[default]
    Specific,
}

/// A skill node in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillNode {
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub node_kind: NodeKind,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default = "default_hours")]
    pub estimated_hours: u32,
}

fn default_hours() -> u32 {
    DEFAULT_ESTIMATED_HOURS
}

impl SkillNode {
    /// A node with default metadata, as created for skills only named in a relationship.
    pub fn new(name: &str) -> Self {
        Self {
            name: normalize_skill(name),
            category: UNKNOWN_CATEGORY.to_string(),
            subcategory: None,
            node_kind: NodeKind::Specific,
            difficulty: Difficulty::default(),
            estimated_hours: DEFAULT_ESTIMATED_HOURS,
        }
    }
}

/// Type of a directed relationship between two skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    Prerequisite,
    CoRequisite,
    Progression,
}

impl RelationshipKind {
    /// Fixed informational strength of the relationship.
    pub fn weight(self) -> f64 {
        match self {
            Self::Prerequisite => 0.8,
            Self::CoRequisite => 0.5,
            Self::Progression => 0.7,
        }
    }

    /// Rank used when two declarations target the same ordered pair.
    pub(crate) fn precedence(self) -> u8 {
        match self {
            Self::Prerequisite => 3,
            Self::Progression => 2,
            Self::CoRequisite => 1,
        }
    }

    /// Justification template; `{from}` and `{to}` are substituted by [`Self::reason`].
    pub fn reason_template(self) -> &'static str {
        match self {
            Self::Prerequisite => "Knowing {from} is essential for understanding {to}",
            Self::CoRequisite => "{from} and {to} are often used together",
            Self::Progression => "{from} naturally leads to learning {to}",
        }
    }

    pub fn reason(self, from: &str, to: &str) -> String {
        self.reason_template()
            .replace("{from}", from)
            .replace("{to}", to)
    }
}

impl std::fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prerequisite => write!(f, "prerequisite"),
            Self::CoRequisite => write!(f, "co_requisite"),
            Self::Progression => write!(f, "progression"),
        }
    }
}

/// Edge payload stored in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub kind: RelationshipKind,
    pub weight: f64,
}

impl Relationship {
    pub fn new(kind: RelationshipKind) -> Self {
        Self {
            kind,
            weight: kind.weight(),
        }
    }
}

/// How a path step is connected to the step before it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepLink {
    pub from: String,
    pub relationship: RelationshipKind,
    pub reason: String,
}

/// One skill along a learning path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStep {
    pub skill: String,
    /// 1-based position in the path.
    pub step: usize,
    pub category: String,
    pub difficulty: Difficulty,
    pub estimated_hours: u32,
    /// `None` for the starting skill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<StepLink>,
    pub already_known: bool,
}

/// Result of a shortest learning path query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    pub path: Vec<String>,
    pub steps: Vec<PathStep>,
    pub total_steps: usize,
    pub total_hours: u32,
    pub new_skills_count: usize,
}

/// A skill surfaced by a cluster query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterEntry {
    pub skill: String,
    pub category: String,
    /// Kind of the edge directly linking this skill to the center, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<RelationshipKind>,
    /// Undirected hop distance from the center.
    pub distance: usize,
}

/// Neighborhood of a skill, bucketed by how it relates to the center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterResult {
    pub central_skill: String,
    pub depth: usize,
    pub prerequisites: Vec<ClusterEntry>,
    pub next_steps: Vec<ClusterEntry>,
    pub related_skills: Vec<ClusterEntry>,
}

impl ClusterResult {
    /// Every skill in the cluster, regardless of bucket.
    pub fn members(&self) -> impl Iterator<Item = &ClusterEntry> {
        self.prerequisites
            .iter()
            .chain(self.next_steps.iter())
            .chain(self.related_skills.iter())
    }

    pub fn len(&self) -> usize {
        self.prerequisites.len() + self.next_steps.len() + self.related_skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Graph statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub prerequisite_edges: usize,
    pub co_requisite_edges: usize,
    pub progression_edges: usize,
    pub isolated_nodes: usize,
    pub category_count: usize,
}

/// Learning plan for a set of target skills.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LearningPlan {
    pub items: Vec<PlanItem>,
    pub already_known: Vec<String>,
    pub unknown: Vec<String>,
    pub unreachable: Vec<String>,
    /// Targets dropped by the per-plan cap.
    pub deferred: Vec<String>,
    pub total_hours: u32,
    pub estimated_weeks: f64,
    pub estimated_months: f64,
}

/// One resolved target within a [`LearningPlan`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanItem {
    pub skill: String,
    pub path: Vec<String>,
    pub path_length: usize,
    pub total_hours: u32,
    pub new_skills: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_weights() {
        assert_eq!(Relationship::new(RelationshipKind::Prerequisite).weight, 0.8);
        assert_eq!(Relationship::new(RelationshipKind::CoRequisite).weight, 0.5);
        assert_eq!(Relationship::new(RelationshipKind::Progression).weight, 0.7);
    }

    #[test]
    fn test_reason_templates() {
        assert_eq!(
            RelationshipKind::Prerequisite.reason("python", "machine learning"),
            "Knowing python is essential for understanding machine learning"
        );
        assert_eq!(
            RelationshipKind::CoRequisite.reason("docker", "python"),
            "docker and python are often used together"
        );
        assert_eq!(
            RelationshipKind::Progression.reason("docker", "kubernetes"),
            "docker naturally leads to learning kubernetes"
        );
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&RelationshipKind::CoRequisite).unwrap();
        assert_eq!(json, "\"co_requisite\"");
    }

    #[test]
    fn test_new_node_defaults() {
        let node = SkillNode::new("  Linear Algebra ");
        assert_eq!(node.name, "linear algebra");
        assert_eq!(node.category, "unknown");
        assert_eq!(node.estimated_hours, 30);
        assert_eq!(node.difficulty, Difficulty::Intermediate);
    }

    #[test]
    fn test_node_with_unknown_difficulty() {
        let json = r#"{"name": "rust", "category": "programming", "difficulty": "expert"}"#;
        let node: SkillNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.difficulty, Difficulty::Intermediate);
        assert_eq!(node.estimated_hours, 30);
    }
}
