//! Data models for life-tracking entities.
//!
//! This module contains the data structures mirroring the backing tables:
//!
//! - `Profile`: the single user profile record
//! - `Skill`, `Talent`: leveled growth entries
//! - `Asset`: valued possessions
//! - `Milestone`: goals with status and progress
//! - `Strength`, `Weakness`: self-assessment traits
//!
//! `EntityKind` enumerates the entity types and derives their cache keys.

pub mod asset;
pub mod milestone;
pub mod profile;
pub mod skill;
pub mod traits;

pub use asset::Asset;
pub use milestone::{Milestone, MilestoneStatus};
pub use profile::Profile;
pub use skill::{Skill, Talent};
pub use traits::{Strength, Weakness};

/// The seven entity types the dashboard loads per user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Profile,
    Skills,
    Assets,
    Milestones,
    Talents,
    Strengths,
    Weaknesses,
}

impl EntityKind {
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Profile,
        EntityKind::Skills,
        EntityKind::Assets,
        EntityKind::Milestones,
        EntityKind::Talents,
        EntityKind::Strengths,
        EntityKind::Weaknesses,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Profile => "profile",
            EntityKind::Skills => "skills",
            EntityKind::Assets => "assets",
            EntityKind::Milestones => "milestones",
            EntityKind::Talents => "talents",
            EntityKind::Strengths => "strengths",
            EntityKind::Weaknesses => "weaknesses",
        }
    }

    /// Cache key for this entity type and user. The `{type}_{user}` shape
    /// keeps keys from colliding across users or entity types.
    pub fn cache_key(&self, user_id: &str) -> String {
        format!("{}_{}", self.as_str(), user_id)
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
