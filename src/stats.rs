//! Derived aggregate statistics over the loaded collections.
//!
//! Pure functions of the current `DashboardState` - nothing here is cached
//! or incrementally updated.

use serde::Serialize;

use crate::dashboard::DashboardState;
use crate::models::MilestoneStatus;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_asset_value: f64,
    pub completed_milestones: usize,
    pub avg_skill_level: f64,
    pub total_skills: usize,
    pub total_assets: usize,
    pub total_milestones: usize,
    pub total_talents: usize,
    pub total_strengths: usize,
    pub total_weaknesses: usize,
}

pub fn compute(state: &DashboardState) -> DashboardStats {
    let total_asset_value = state.assets.iter().map(|a| a.value()).sum();

    let completed_milestones = state
        .milestones
        .iter()
        .filter(|m| m.status == MilestoneStatus::Completed)
        .count();

    // Mean skill level, guarding the empty case.
    let avg_skill_level = if state.skills.is_empty() {
        0.0
    } else {
        let sum: f64 = state.skills.iter().map(|s| f64::from(s.level)).sum();
        sum / state.skills.len() as f64
    };

    DashboardStats {
        total_asset_value,
        completed_milestones,
        avg_skill_level,
        total_skills: state.skills.len(),
        total_assets: state.assets.len(),
        total_milestones: state.milestones.len(),
        total_talents: state.talents.len(),
        total_strengths: state.strengths.len(),
        total_weaknesses: state.weaknesses.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Asset, Milestone, Skill};

    fn skill(level: i32) -> Skill {
        Skill {
            level,
            ..Default::default()
        }
    }

    fn asset(value: Option<f64>) -> Asset {
        Asset {
            current_value: value,
            ..Default::default()
        }
    }

    #[test]
    fn test_avg_skill_level_is_zero_with_no_skills() {
        let state = DashboardState::default();
        let stats = compute(&state);
        assert_eq!(stats.avg_skill_level, 0.0);
        assert!(!stats.avg_skill_level.is_nan());
    }

    #[test]
    fn test_avg_skill_level_is_arithmetic_mean() {
        let state = DashboardState {
            skills: vec![skill(2), skill(4), skill(9)],
            ..Default::default()
        };
        assert_eq!(compute(&state).avg_skill_level, 5.0);
    }

    #[test]
    fn test_null_asset_values_count_as_zero() {
        let state = DashboardState {
            assets: vec![asset(Some(100.5)), asset(None), asset(Some(49.5))],
            ..Default::default()
        };
        let stats = compute(&state);
        assert_eq!(stats.total_asset_value, 150.0);
        assert_eq!(stats.total_assets, 3);
    }

    #[test]
    fn test_completed_milestones_counts_only_completed() {
        use crate::models::MilestoneStatus::*;
        let state = DashboardState {
            milestones: [Completed, InProgress, Completed, Cancelled, Pending]
                .into_iter()
                .map(|status| Milestone {
                    status,
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        };
        let stats = compute(&state);
        assert_eq!(stats.completed_milestones, 2);
        assert_eq!(stats.total_milestones, 5);
    }
}
