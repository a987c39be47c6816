//! Multi-target learning plans (career transition estimates).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use skillmap_core::config::{DEFAULT_HOURS_PER_WEEK, DEFAULT_MAX_PLAN_TARGETS};
use skillmap_core::{normalize_skill, Error, Result};
use tracing::{debug, warn};

use crate::graph::SkillGraph;
use crate::types::*;

const WEEKS_PER_MONTH: f64 = 4.33;

/// Knobs for [`SkillGraph::plan_learning`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanOptions {
    pub hours_per_week: u32,
    pub max_targets: usize,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            hours_per_week: DEFAULT_HOURS_PER_WEEK,
            max_targets: DEFAULT_MAX_PLAN_TARGETS,
        }
    }
}

impl SkillGraph {
    /// Resolve a learning path for each missing target and total the effort.
    ///
    /// Targets are taken in input order after dropping duplicates and
    /// already-known skills; only the first `max_targets` are resolved.
    pub fn plan_learning<S: AsRef<str>, T: AsRef<str>>(
        &self,
        current_skills: &[S],
        target_skills: &[T],
        options: &PlanOptions,
    ) -> Result<LearningPlan> {
        let current: BTreeSet<String> = current_skills
            .iter()
            .map(|s| normalize_skill(s.as_ref()))
            .collect();

        let mut plan = LearningPlan::default();
        let mut seen = BTreeSet::new();
        let mut missing = Vec::new();
        for target in target_skills {
            let name = normalize_skill(target.as_ref());
            if name.is_empty() || !seen.insert(name.clone()) {
                continue;
            }
            if current.contains(&name) {
                plan.already_known.push(name);
            } else {
                missing.push(name);
            }
        }

        if missing.len() > options.max_targets {
            plan.deferred = missing.split_off(options.max_targets);
        }

        let current: Vec<String> = current.into_iter().collect();
        for target in missing {
            match self.find_learning_path(current.as_slice(), &target) {
                Ok(path) => {
                    plan.total_hours = plan.total_hours.saturating_add(path.total_hours);
                    plan.items.push(PlanItem {
                        skill: target,
                        path_length: path.total_steps,
                        total_hours: path.total_hours,
                        new_skills: path.new_skills_count,
                        path: path.path,
                    });
                }
                Err(Error::UnknownSkill(_)) => plan.unknown.push(target),
                Err(Error::NoPathFound { .. }) => plan.unreachable.push(target),
                Err(e) => return Err(e),
            }
        }

        if options.hours_per_week == 0 {
            warn!("Learning plan requested with zero weekly hours; timeline left at 0");
        } else {
            let weeks = f64::from(plan.total_hours) / f64::from(options.hours_per_week);
            plan.estimated_weeks = round1(weeks);
            plan.estimated_months = round1(weeks / WEEKS_PER_MONTH);
        }

        debug!(
            "Learning plan: {} items, {} unknown, {} unreachable, {}h",
            plan.items.len(),
            plan.unknown.len(),
            plan.unreachable.len(),
            plan.total_hours
        );
        Ok(plan)
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
