use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::models::{Asset, Milestone, Profile, Skill, Strength, Talent, Weakness};

/// Entries go stale after 5 minutes unless the caller supplies its own TTL.
/// Balances freshness with reducing repeat backend round-trips.
const DEFAULT_TTL_MS: i64 = 5 * 60 * 1000;

/// How often the background sweeper evicts expired entries.
pub const SWEEP_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60);

/// Payloads the dashboard caches, one variant per entity type.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Profile(Profile),
    Skills(Vec<Skill>),
    Assets(Vec<Asset>),
    Milestones(Vec<Milestone>),
    Talents(Vec<Talent>),
    Strengths(Vec<Strength>),
    Weaknesses(Vec<Weakness>),
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: CacheValue,
    stored_at: DateTime<Utc>,
    ttl: Duration,
}

impl CacheEntry {
    /// Fresh iff `now - stored_at <= ttl`. Evaluated at access time, never
    /// at sweep time.
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.stored_at) > self.ttl
    }
}

/// Diagnostic snapshot of the cache contents.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub entries: usize,
    pub keys: Vec<String>,
}

/// TTL key-value cache for dashboard data.
///
/// Clone is cheap - clones share the same underlying map, so a sweeper task
/// and the loader can hold the same cache.
#[derive(Clone)]
pub struct DataCache {
    entries: Arc<Mutex<HashMap<String, CacheEntry>>>,
    default_ttl: Duration,
}

impl DataCache {
    pub fn new() -> Self {
        Self::with_default_ttl(Duration::milliseconds(DEFAULT_TTL_MS))
    }

    pub fn with_default_ttl(default_ttl: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            default_ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        // The map stays usable even if a holder panicked mid-operation.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Store `value` under `key`, overwriting any existing entry. The entry's
    /// creation timestamp is taken at the moment of the call.
    pub fn set(&self, key: &str, value: CacheValue, ttl: Option<Duration>) {
        let entry = CacheEntry {
            value,
            stored_at: Utc::now(),
            ttl: ttl.unwrap_or(self.default_ttl),
        };
        self.lock().insert(key.to_string(), entry);
    }

    /// Return the stored value if present and fresh. An expired entry found
    /// here is deleted on the spot.
    pub fn get(&self, key: &str) -> Option<CacheValue> {
        let mut entries = self.lock();
        match entries.get(key) {
            Some(entry) if entry.is_expired(Utc::now()) => {
                entries.remove(key);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    /// Same freshness check and lazy eviction as `get`, without cloning the
    /// payload.
    pub fn has(&self, key: &str) -> bool {
        let mut entries = self.lock();
        match entries.get(key) {
            Some(entry) if entry.is_expired(Utc::now()) => {
                entries.remove(key);
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    /// Remove the entry unconditionally. Returns whether anything was removed.
    pub fn delete(&self, key: &str) -> bool {
        self.lock().remove(key).is_some()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Sweep out every expired entry, returning how many were evicted.
    /// Memory reclamation only - the lazy check on read is what guarantees
    /// correctness.
    pub fn cleanup(&self) -> usize {
        let now = Utc::now();
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        before - entries.len()
    }

    pub fn stats(&self) -> CacheStats {
        let entries = self.lock();
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        CacheStats {
            entries: entries.len(),
            keys,
        }
    }

    /// Spawn a recurring cleanup task. The task runs until the returned
    /// handle is dropped or stopped.
    pub fn start_sweeper(&self, interval: std::time::Duration) -> SweeperHandle {
        let cache = self.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // interval fires immediately on the first tick
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let evicted = cache.cleanup();
                if evicted > 0 {
                    debug!(evicted, "swept expired cache entries");
                }
            }
        });
        SweeperHandle { handle }
    }

    /// Shift an entry's creation timestamp into the past.
    #[cfg(test)]
    pub(crate) fn backdate(&self, key: &str, by: Duration) {
        if let Some(entry) = self.lock().get_mut(key) {
            entry.stored_at = entry.stored_at - by;
        }
    }
}

impl Default for DataCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the background sweep task; aborts it on drop.
pub struct SweeperHandle {
    handle: JoinHandle<()>,
}

impl SweeperHandle {
    pub fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for SweeperHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Skill;

    fn skills(names: &[&str]) -> CacheValue {
        CacheValue::Skills(
            names
                .iter()
                .map(|n| Skill {
                    name: n.to_string(),
                    ..Default::default()
                })
                .collect(),
        )
    }

    fn skill_names(value: CacheValue) -> Vec<String> {
        match value {
            CacheValue::Skills(list) => list.into_iter().map(|s| s.name).collect(),
            other => panic!("expected skills, got {:?}", other),
        }
    }

    #[test]
    fn test_get_returns_fresh_value() {
        let cache = DataCache::new();
        cache.set("skills_u1", skills(&["rust"]), None);
        let value = cache.get("skills_u1").expect("fresh entry");
        assert_eq!(skill_names(value), vec!["rust"]);
    }

    #[test]
    fn test_entry_fresh_at_exact_ttl_expired_just_past() {
        let entry = CacheEntry {
            value: skills(&["rust"]),
            stored_at: Utc::now(),
            ttl: Duration::milliseconds(100),
        };
        assert!(
            !entry.is_expired(entry.stored_at + Duration::milliseconds(100)),
            "age == ttl is still fresh"
        );
        assert!(
            entry.is_expired(entry.stored_at + Duration::milliseconds(101)),
            "age == ttl + 1ms is expired"
        );
    }

    #[test]
    fn test_expired_entry_is_deleted_on_read() {
        let cache = DataCache::new();
        cache.set("skills_u1", skills(&["rust"]), Some(Duration::milliseconds(50)));
        cache.backdate("skills_u1", Duration::milliseconds(500));

        assert!(cache.get("skills_u1").is_none());
        // lazy eviction removed the entry entirely
        assert_eq!(cache.stats().entries, 0);
    }

    #[test]
    fn test_has_applies_same_freshness_and_eviction() {
        let cache = DataCache::new();
        cache.set("assets_u1", skills(&["x"]), Some(Duration::milliseconds(50)));
        assert!(cache.has("assets_u1"));

        cache.backdate("assets_u1", Duration::milliseconds(51));
        assert!(!cache.has("assets_u1"));
        assert_eq!(cache.stats().entries, 0);
    }

    #[test]
    fn test_keys_isolated_across_users() {
        let cache = DataCache::new();
        cache.set("skills_u1", skills(&["a"]), None);
        cache.set("skills_u2", skills(&["b"]), None);

        let u1 = cache.get("skills_u1").expect("u1 entry");
        assert_eq!(skill_names(u1), vec!["a"]);
        let u2 = cache.get("skills_u2").expect("u2 entry");
        assert_eq!(skill_names(u2), vec!["b"]);
    }

    #[test]
    fn test_set_overwrites_existing_entry() {
        let cache = DataCache::new();
        cache.set("skills_u1", skills(&["old"]), None);
        cache.set("skills_u1", skills(&["new"]), None);

        let value = cache.get("skills_u1").expect("entry");
        assert_eq!(skill_names(value), vec!["new"]);
        assert_eq!(cache.stats().entries, 1);
    }

    #[test]
    fn test_delete_reports_whether_removed() {
        let cache = DataCache::new();
        cache.set("skills_u1", skills(&["a"]), None);
        assert!(cache.delete("skills_u1"));
        assert!(!cache.delete("skills_u1"));
    }

    #[test]
    fn test_clear_empties_the_cache() {
        let cache = DataCache::new();
        cache.set("skills_u1", skills(&["a"]), None);
        cache.set("skills_u2", skills(&["b"]), None);
        cache.clear();
        assert_eq!(cache.stats().entries, 0);
    }

    #[test]
    fn test_cleanup_sweeps_only_expired_entries() {
        let cache = DataCache::new();
        cache.set("skills_u1", skills(&["a"]), Some(Duration::milliseconds(50)));
        cache.set("skills_u2", skills(&["b"]), None);
        cache.backdate("skills_u1", Duration::milliseconds(100));

        assert_eq!(cache.cleanup(), 1);
        let stats = cache.stats();
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.keys, vec!["skills_u2"]);
    }

    #[test]
    fn test_stats_lists_sorted_keys() {
        let cache = DataCache::new();
        cache.set("weaknesses_u1", skills(&[]), None);
        cache.set("assets_u1", skills(&[]), None);
        let stats = cache.stats();
        assert_eq!(stats.keys, vec!["assets_u1", "weaknesses_u1"]);
    }

    #[tokio::test]
    async fn test_sweeper_evicts_in_background() {
        let cache = DataCache::new();
        cache.set("skills_u1", skills(&["a"]), Some(Duration::milliseconds(5)));
        cache.backdate("skills_u1", Duration::milliseconds(10));

        let sweeper = cache.start_sweeper(std::time::Duration::from_millis(10));
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        assert_eq!(cache.stats().entries, 0);
        sweeper.stop();
    }
}
