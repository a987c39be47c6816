//! Shortest learning path between known skills and a target skill.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use petgraph::graph::NodeIndex;
use skillmap_core::{normalize_skill, Error, Result};
use tracing::debug;

use crate::graph::SkillGraph;
use crate::types::*;

impl SkillGraph {
    /// Find the shortest learning path from any of `current_skills` to `target_skill`.
    ///
    /// Paths are measured in edges. Among starting skills that reach the
    /// target with the same number of edges, the one whose name sorts
    /// first wins; neighbors are expanded in name order, so equal-length
    /// routes from one start also resolve the same way every time.
    pub fn find_learning_path<S: AsRef<str>>(
        &self,
        current_skills: &[S],
        target_skill: &str,
    ) -> Result<PathResult> {
        let target_name = normalize_skill(target_skill);
        let target = self
            .index_of(&target_name)
            .ok_or_else(|| Error::UnknownSkill(target_name.clone()))?;

        let current: BTreeSet<String> = current_skills
            .iter()
            .map(|s| normalize_skill(s.as_ref()))
            .filter(|s| !s.is_empty())
            .collect();

        let mut best: Option<Vec<NodeIndex>> = None;
        for start in current.iter().filter_map(|name| self.index_of(name)) {
            if let Some(path) = self.shortest_path(start, target) {
                let shorter = best.as_ref().map_or(true, |b| path.len() < b.len());
                if shorter {
                    best = Some(path);
                }
            }
        }

        let path = best.ok_or_else(|| Error::NoPathFound {
            from: current.iter().cloned().collect(),
            target: target_name.clone(),
        })?;

        let result = self.describe_path(&path, &current);
        debug!(
            "Learning path to '{}': {} steps, {}h, {} new",
            target_name, result.total_steps, result.total_hours, result.new_skills_count
        );
        Ok(result)
    }

    /// Unweighted breadth-first search over outgoing edges.
    fn shortest_path(&self, start: NodeIndex, target: NodeIndex) -> Option<Vec<NodeIndex>> {
        if start == target {
            return Some(vec![start]);
        }

        let mut parent: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut queue = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for next in self.sorted_successors(current) {
                if !visited.insert(next) {
                    continue;
                }
                parent.insert(next, current);
                if next == target {
                    let mut path = vec![target];
                    let mut cursor = target;
                    while let Some(&prev) = parent.get(&cursor) {
                        path.push(prev);
                        cursor = prev;
                    }
                    path.reverse();
                    return Some(path);
                }
                queue.push_back(next);
            }
        }
        None
    }

    fn describe_path(&self, path: &[NodeIndex], current: &BTreeSet<String>) -> PathResult {
        let mut steps = Vec::with_capacity(path.len());
        let mut total_hours: u32 = 0;

        for (i, &idx) in path.iter().enumerate() {
            let node = self.node(idx);
            let link = if i > 0 {
                let prev = path[i - 1];
                self.edge_kind(prev, idx).map(|kind| {
                    let from = &self.node(prev).name;
                    StepLink {
                        from: from.clone(),
                        relationship: kind,
                        reason: kind.reason(from, &node.name),
                    }
                })
            } else {
                None
            };

            total_hours = total_hours.saturating_add(node.estimated_hours);
            steps.push(PathStep {
                skill: node.name.clone(),
                step: i + 1,
                category: node.category.clone(),
                difficulty: node.difficulty,
                estimated_hours: node.estimated_hours,
                link,
                already_known: current.contains(&node.name),
            });
        }

        let new_skills_count = steps.iter().filter(|s| !s.already_known).count();
        PathResult {
            path: steps.iter().map(|s| s.skill.clone()).collect(),
            total_steps: steps.len(),
            total_hours,
            new_skills_count,
            steps,
        }
    }
}
