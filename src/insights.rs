//! Focus-insights engine.
//!
//! Produces three short suggestion lists from the loaded collections by
//! running an ordered set of heuristic rules. Each rule inspects the state
//! and contributes at most one line; a rule that finds nothing is skipped.
//! Within a rule the first matching record wins - there is no exhaustive
//! ranking beyond what each rule states.

use chrono::{DateTime, Duration, Utc};

use crate::dashboard::DashboardState;
use crate::models::{Asset, MilestoneStatus};

/// Completions within the last week count as highlights.
const RECENT_COMPLETION_DAYS: i64 = 7;

/// A strength not updated for this long is considered dormant.
const DORMANT_STRENGTH_DAYS: i64 = 14;

/// Milestones under this progress are flagged as lagging.
const LAGGING_PROGRESS_THRESHOLD: i32 = 30;

/// Weakness priority that warrants an improvement suggestion.
const TOP_WEAKNESS_PRIORITY: i32 = 3;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FocusInsights {
    pub daily_focus: Vec<String>,
    pub weekly_highlights: Vec<String>,
    pub improvement_suggestions: Vec<String>,
}

type Rule = fn(&DashboardState) -> Option<String>;

const DAILY_RULES: &[Rule] = &[advance_milestone, practice_skill];

const WEEKLY_RULES: &[Rule] = &[recent_completion, top_asset, standout_talent];

const IMPROVEMENT_RULES: &[Rule] = &[priority_weakness, lagging_milestone, dormant_strength];

/// Recompute all three lists from scratch.
pub fn compute(state: &DashboardState) -> FocusInsights {
    FocusInsights {
        daily_focus: apply(DAILY_RULES, state),
        weekly_highlights: apply(WEEKLY_RULES, state),
        improvement_suggestions: apply(IMPROVEMENT_RULES, state),
    }
}

fn apply(rules: &[Rule], state: &DashboardState) -> Vec<String> {
    rules.iter().filter_map(|rule| rule(state)).collect()
}

/// `true` when `date` falls within the last `days` days, inclusive at both
/// ends. A missing or future date never matches.
fn within_days(date: Option<DateTime<Utc>>, days: i64) -> bool {
    let Some(date) = date else {
        return false;
    };
    let elapsed = Utc::now().signed_duration_since(date);
    elapsed >= Duration::zero() && elapsed <= Duration::days(days)
}

// ===== Daily focus =====

fn advance_milestone(state: &DashboardState) -> Option<String> {
    state
        .milestones
        .iter()
        .find(|m| m.status == MilestoneStatus::InProgress)
        .map(|m| format!("Advance milestone: {}", m.title))
}

/// The lowest-level skill is the one most in need of attention.
fn practice_skill(state: &DashboardState) -> Option<String> {
    state
        .skills
        .iter()
        .min_by_key(|s| s.level)
        .map(|s| format!("Practice skill: {}", s.name))
}

// ===== Weekly highlights =====

fn recent_completion(state: &DashboardState) -> Option<String> {
    state
        .milestones
        .iter()
        .find(|m| {
            m.status == MilestoneStatus::Completed
                && within_days(m.updated_at, RECENT_COMPLETION_DAYS)
        })
        .map(|m| format!("Completed milestone: {}", m.title))
}

fn top_asset(state: &DashboardState) -> Option<String> {
    // First among ties, so walk with a strict comparison.
    let mut best: Option<&Asset> = None;
    for asset in &state.assets {
        if best.map_or(true, |b| asset.value() > b.value()) {
            best = Some(asset);
        }
    }
    best.map(|a| format!("Most valuable asset: {}", a.name))
}

/// Placeholder heuristic: the talent collection carries no usage signal, so
/// the first entry in collection order stands in for "talent exercised".
fn standout_talent(state: &DashboardState) -> Option<String> {
    state
        .talents
        .first()
        .map(|t| format!("Exercise talent: {}", t.name))
}

// ===== Improvement suggestions =====

fn priority_weakness(state: &DashboardState) -> Option<String> {
    state
        .weaknesses
        .iter()
        .find(|w| w.priority == TOP_WEAKNESS_PRIORITY)
        .map(|w| format!("Focus on improving: {}", w.name))
}

fn lagging_milestone(state: &DashboardState) -> Option<String> {
    state
        .milestones
        .iter()
        .find(|m| m.progress < LAGGING_PROGRESS_THRESHOLD)
        .map(|m| format!("Lagging milestone: {}", m.title))
}

fn dormant_strength(state: &DashboardState) -> Option<String> {
    state
        .strengths
        .iter()
        .find(|s| !within_days(s.updated_at, DORMANT_STRENGTH_DAYS))
        .map(|s| format!("Showcase strength: {}", s.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Milestone, Skill, Strength, Talent, Weakness};

    fn milestone(title: &str, status: MilestoneStatus) -> Milestone {
        Milestone {
            title: title.to_string(),
            status,
            progress: 50,
            ..Default::default()
        }
    }

    fn skill(name: &str, level: i32) -> Skill {
        Skill {
            name: name.to_string(),
            level,
            ..Default::default()
        }
    }

    fn asset(name: &str, value: Option<f64>) -> Asset {
        Asset {
            name: name.to_string(),
            current_value: value,
            ..Default::default()
        }
    }

    fn strength(name: &str, updated_days_ago: Option<i64>) -> Strength {
        Strength {
            name: name.to_string(),
            updated_at: updated_days_ago.map(|d| Utc::now() - Duration::days(d)),
            ..Default::default()
        }
    }

    fn weakness(name: &str, priority: i32) -> Weakness {
        Weakness {
            name: name.to_string(),
            priority,
            ..Default::default()
        }
    }

    #[test]
    fn test_first_in_progress_milestone_wins() {
        let state = DashboardState {
            milestones: vec![
                milestone("A", MilestoneStatus::InProgress),
                milestone("B", MilestoneStatus::InProgress),
            ],
            ..Default::default()
        };
        let insights = compute(&state);
        let about_milestones: Vec<_> = insights
            .daily_focus
            .iter()
            .filter(|line| line.starts_with("Advance milestone"))
            .collect();
        assert_eq!(about_milestones, vec!["Advance milestone: A"]);
    }

    #[test]
    fn test_lowest_level_skill_is_suggested() {
        let state = DashboardState {
            skills: vec![skill("writing", 7), skill("drawing", 2), skill("piano", 2)],
            ..Default::default()
        };
        let insights = compute(&state);
        assert!(insights
            .daily_focus
            .contains(&"Practice skill: drawing".to_string()));
    }

    #[test]
    fn test_recent_completion_window_is_seven_days_inclusive() {
        let mut done = milestone("shipped", MilestoneStatus::Completed);
        done.updated_at = Some(Utc::now() - Duration::days(3));
        let mut old = milestone("ancient", MilestoneStatus::Completed);
        old.updated_at = Some(Utc::now() - Duration::days(8));
        let mut undated = milestone("undated", MilestoneStatus::Completed);
        undated.updated_at = None;

        let state = DashboardState {
            milestones: vec![old, undated, done],
            ..Default::default()
        };
        let insights = compute(&state);
        assert!(insights
            .weekly_highlights
            .contains(&"Completed milestone: shipped".to_string()));
    }

    #[test]
    fn test_top_asset_prefers_first_among_ties() {
        let state = DashboardState {
            assets: vec![
                asset("bike", Some(500.0)),
                asset("laptop", Some(1200.0)),
                asset("camera", Some(1200.0)),
                asset("unvalued", None),
            ],
            ..Default::default()
        };
        let insights = compute(&state);
        assert!(insights
            .weekly_highlights
            .contains(&"Most valuable asset: laptop".to_string()));
    }

    #[test]
    fn test_standout_talent_is_first_in_collection_order() {
        let state = DashboardState {
            talents: vec![
                Talent {
                    name: "music".to_string(),
                    level: 3,
                    ..Default::default()
                },
                Talent {
                    name: "math".to_string(),
                    level: 9,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let insights = compute(&state);
        assert!(insights
            .weekly_highlights
            .contains(&"Exercise talent: music".to_string()));
    }

    #[test]
    fn test_only_top_priority_weaknesses_surface() {
        let state = DashboardState {
            weaknesses: vec![weakness("minor", 1), weakness("major", 3)],
            ..Default::default()
        };
        let insights = compute(&state);
        assert!(insights
            .improvement_suggestions
            .contains(&"Focus on improving: major".to_string()));
    }

    #[test]
    fn test_lagging_milestone_threshold() {
        let mut slow = milestone("slow", MilestoneStatus::InProgress);
        slow.progress = 10;
        let mut fine = milestone("fine", MilestoneStatus::InProgress);
        fine.progress = 30;

        let state = DashboardState {
            milestones: vec![fine, slow],
            ..Default::default()
        };
        let insights = compute(&state);
        assert!(insights
            .improvement_suggestions
            .contains(&"Lagging milestone: slow".to_string()));
        assert!(!insights
            .improvement_suggestions
            .contains(&"Lagging milestone: fine".to_string()));
    }

    #[test]
    fn test_dormant_strength_detection() {
        let state = DashboardState {
            strengths: vec![strength("fresh", Some(5)), strength("dormant", Some(20))],
            ..Default::default()
        };
        let insights = compute(&state);
        assert!(insights
            .improvement_suggestions
            .contains(&"Showcase strength: dormant".to_string()));
        assert!(!insights
            .improvement_suggestions
            .iter()
            .any(|line| line.contains("fresh")));
    }

    #[test]
    fn test_strength_without_update_date_counts_as_dormant() {
        let state = DashboardState {
            strengths: vec![strength("untracked", None)],
            ..Default::default()
        };
        let insights = compute(&state);
        assert!(insights
            .improvement_suggestions
            .contains(&"Showcase strength: untracked".to_string()));
    }

    #[test]
    fn test_empty_state_yields_empty_lists() {
        let insights = compute(&DashboardState::default());
        assert!(insights.daily_focus.is_empty());
        assert!(insights.weekly_highlights.is_empty());
        assert!(insights.improvement_suggestions.is_empty());
    }

    #[test]
    fn test_future_dates_never_match_the_recency_window() {
        assert!(!within_days(Some(Utc::now() + Duration::days(1)), 7));
        assert!(within_days(Some(Utc::now() - Duration::days(7)), 7));
        assert!(!within_days(None, 7));
    }
}
