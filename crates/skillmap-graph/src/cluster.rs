//! Neighborhood (ego network) queries.

use std::collections::{BTreeMap, HashSet, VecDeque};

use petgraph::graph::NodeIndex;
use skillmap_core::{normalize_skill, Error, Result};
use tracing::debug;

use crate::graph::SkillGraph;
use crate::types::*;

pub const DEFAULT_CLUSTER_DEPTH: usize = 2;

impl SkillGraph {
    /// Collect every skill within `depth` hops of `skill`, following edges
    /// in either direction.
    ///
    /// Skills are bucketed by the edge that links them directly to the center:
    /// a prerequisite pointing into the center lands in `prerequisites`, a
    /// progression leaving the center lands in `next_steps`, and everything
    /// else (co-requisites, reverse links, multi-hop skills) in `related_skills`.
    /// Buckets are sorted by skill name.
    pub fn get_skill_cluster(&self, skill: &str, depth: usize) -> Result<ClusterResult> {
        let name = normalize_skill(skill);
        let center = self
            .index_of(&name)
            .ok_or_else(|| Error::UnknownSkill(name.clone()))?;

        let reached = self.ego_network(center, depth);

        let mut cluster = ClusterResult {
            central_skill: name,
            depth,
            prerequisites: Vec::new(),
            next_steps: Vec::new(),
            related_skills: Vec::new(),
        };

        for (_, (idx, distance)) in reached {
            let incoming = self.edge_kind(idx, center);
            let outgoing = self.edge_kind(center, idx);
            let node = self.node(idx);
            let mut entry = ClusterEntry {
                skill: node.name.clone(),
                category: node.category.clone(),
                relationship: None,
                distance,
            };

            if incoming == Some(RelationshipKind::Prerequisite) {
                entry.relationship = incoming;
                cluster.prerequisites.push(entry);
            } else if outgoing == Some(RelationshipKind::Progression) {
                entry.relationship = outgoing;
                cluster.next_steps.push(entry);
            } else {
                entry.relationship = outgoing.or(incoming);
                cluster.related_skills.push(entry);
            }
        }

        debug!(
            "Cluster for '{}' (depth {}): {} prerequisites, {} next steps, {} related",
            cluster.central_skill,
            depth,
            cluster.prerequisites.len(),
            cluster.next_steps.len(),
            cluster.related_skills.len()
        );
        Ok(cluster)
    }

    /// Undirected BFS bounded by `depth`. Excludes the center; keyed by name.
    fn ego_network(&self, center: NodeIndex, depth: usize) -> BTreeMap<String, (NodeIndex, usize)> {
        let mut reached = BTreeMap::new();
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        visited.insert(center);
        queue.push_back((center, 0usize));

        while let Some((current, distance)) = queue.pop_front() {
            if distance == depth {
                continue;
            }
            for next in self.sorted_neighbors_undirected(current) {
                if visited.insert(next) {
                    reached.insert(self.node(next).name.clone(), (next, distance + 1));
                    queue.push_back((next, distance + 1));
                }
            }
        }
        reached
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn default_graph() -> SkillGraph {
        SkillGraph::from_default_catalog().unwrap()
    }

    fn names(entries: &[ClusterEntry]) -> BTreeSet<&str> {
        entries.iter().map(|e| e.skill.as_str()).collect()
    }

    #[test]
    fn test_docker_cluster_buckets() {
        let graph = default_graph();
        let cluster = graph.get_skill_cluster("Docker", 1).unwrap();

        assert_eq!(cluster.central_skill, "docker");
        assert_eq!(names(&cluster.prerequisites), BTreeSet::from(["linux basics"]));
        assert_eq!(
            names(&cluster.next_steps),
            BTreeSet::from(["ci_cd", "kubernetes"])
        );
        // co-requisites, plus aws which points at docker as a progression
        assert_eq!(
            names(&cluster.related_skills),
            BTreeSet::from(["aws", "devops concepts", "python"])
        );

        let kubernetes = cluster.next_steps.iter().find(|e| e.skill == "kubernetes").unwrap();
        assert_eq!(kubernetes.category, "cloud_devops");
        assert_eq!(kubernetes.distance, 1);
    }

    #[test]
    fn test_multi_hop_skills_are_related() {
        let graph = default_graph();
        let cluster = graph.get_skill_cluster("docker", 2).unwrap();

        let helm = cluster
            .related_skills
            .iter()
            .find(|e| e.skill == "helm")
            .unwrap();
        assert_eq!(helm.relationship, None);
        assert_eq!(helm.distance, 2);
        assert!(cluster.members().all(|e| e.skill != "docker"));
    }

    #[test]
    fn test_depth_never_shrinks() {
        let graph = default_graph();
        for skill in ["docker", "python", "machine learning", "sql"] {
            let one: BTreeSet<String> = graph
                .get_skill_cluster(skill, 1)
                .unwrap()
                .members()
                .map(|e| e.skill.clone())
                .collect();
            let two: BTreeSet<String> = graph
                .get_skill_cluster(skill, 2)
                .unwrap()
                .members()
                .map(|e| e.skill.clone())
                .collect();
            assert!(one.is_subset(&two), "depth 2 lost members for {}", skill);
        }
    }

    #[test]
    fn test_depth_zero_is_empty() {
        let graph = default_graph();
        let cluster = graph.get_skill_cluster("python", 0).unwrap();
        assert!(cluster.is_empty());
    }

    #[test]
    fn test_unknown_skill() {
        let graph = default_graph();
        assert!(matches!(
            graph.get_skill_cluster("basket weaving", 2),
            Err(Error::UnknownSkill(_))
        ));
    }

    #[test]
    fn test_isolated_skill_has_empty_cluster() {
        let graph = default_graph();
        let cluster = graph.get_skill_cluster("teamwork", DEFAULT_CLUSTER_DEPTH).unwrap();
        assert!(cluster.is_empty());
        assert_eq!(cluster.depth, 2);
    }

    #[test]
    fn test_repeated_calls_identical() {
        let graph = default_graph();
        let a = graph.get_skill_cluster("machine learning", 2).unwrap();
        let b = graph.get_skill_cluster("machine learning", 2).unwrap();
        assert_eq!(a, b);
    }
}
