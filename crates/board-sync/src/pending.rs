//! Pending Tracker
//!
//! Records which tasks have an optimistic status change still inside its
//! confirmation window. Expiry is a flat grace period counted from the
//! most recent mark — the update command's outcome is never observed
//! here, so a server-side failure leaves the optimistic status on screen
//! until the window closes and the next snapshot corrects it. Clearing on
//! actual command completion (keeping the flat delay only as an upper
//! bound) is the known alternative; the flat delay is the contract.
//!
//! The tracker never touches a clock or a timer itself. `mark` hands back
//! a token and the embedding layer schedules its own timeout that calls
//! `expire` with it. Each task's window runs independently.

use std::collections::HashMap;

/// Grace period before a pending entry expires, in milliseconds.
pub const DEFAULT_GRACE_MS: u32 = 2000;

/// Handle for one scheduled expiry. A token only clears the entry it was
/// minted for: re-marking the same task bumps the epoch and orphans every
/// earlier token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingToken {
    task_id: String,
    epoch: u64,
}

impl PendingToken {
    pub fn task_id(&self) -> &str {
        &self.task_id
    }
}

/// The set of task ids whose rendered status may diverge from the latest
/// canonical snapshot.
#[derive(Debug, Default)]
pub struct PendingTracker {
    entries: HashMap<String, u64>,
    next_epoch: u64,
}

impl PendingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a task pending and hand back the expiry token for this mark.
    /// Marking an already-pending task restarts its window (the earlier
    /// token goes stale) rather than adding a second entry.
    pub fn mark(&mut self, task_id: &str) -> PendingToken {
        self.next_epoch += 1;
        let epoch = self.next_epoch;
        self.entries.insert(task_id.to_string(), epoch);
        log::debug!("task {task_id} pending (epoch {epoch})");
        PendingToken {
            task_id: task_id.to_string(),
            epoch,
        }
    }

    /// Close the window a token was minted for. A stale token, superseded
    /// by a later mark on the same task, leaves the entry alone. Returns
    /// whether the entry was removed.
    pub fn expire(&mut self, token: &PendingToken) -> bool {
        match self.entries.get(&token.task_id) {
            Some(epoch) if *epoch == token.epoch => {
                self.entries.remove(&token.task_id);
                log::debug!("task {} pending window expired", token.task_id);
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self, task_id: &str) -> bool {
        self.entries.contains_key(task_id)
    }

    /// Drop a task's entry regardless of outstanding tokens.
    pub fn clear(&mut self, task_id: &str) {
        self.entries.remove(task_id);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mark_then_expire() {
        let mut tracker = PendingTracker::new();
        let token = tracker.mark("t1");

        assert!(tracker.is_pending("t1"));
        assert!(tracker.expire(&token));
        assert!(!tracker.is_pending("t1"));
    }

    #[test]
    fn test_remark_supersedes_earlier_token() {
        let mut tracker = PendingTracker::new();
        let first = tracker.mark("t1");
        let second = tracker.mark("t1");

        // The restarted window ignores the first mark's expiry.
        assert!(!tracker.expire(&first));
        assert!(tracker.is_pending("t1"));

        assert!(tracker.expire(&second));
        assert!(!tracker.is_pending("t1"));
    }

    #[test]
    fn test_entries_expire_independently() {
        let mut tracker = PendingTracker::new();
        let a = tracker.mark("a");
        let b = tracker.mark("b");

        tracker.expire(&a);
        assert!(!tracker.is_pending("a"));
        assert!(tracker.is_pending("b"));

        tracker.expire(&b);
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_clear_removes_without_token() {
        let mut tracker = PendingTracker::new();
        let token = tracker.mark("t1");

        tracker.clear("t1");
        assert!(!tracker.is_pending("t1"));
        // The orphaned timer firing later is a no-op.
        assert!(!tracker.expire(&token));
    }

    #[test]
    fn test_expire_unknown_task_is_noop() {
        let mut tracker = PendingTracker::new();
        let token = tracker.mark("t1");
        tracker.expire(&token);
        assert!(!tracker.expire(&token));
    }

    proptest! {
        // Re-marking N times: only the final token closes the window.
        #[test]
        fn prop_only_latest_mark_expires(marks in 1usize..10) {
            let mut tracker = PendingTracker::new();
            let mut tokens = Vec::new();
            for _ in 0..marks {
                tokens.push(tracker.mark("t"));
            }

            let last = tokens.pop().expect("at least one mark");
            for stale in &tokens {
                prop_assert!(!tracker.expire(stale));
                prop_assert!(tracker.is_pending("t"));
            }
            prop_assert!(tracker.expire(&last));
            prop_assert!(!tracker.is_pending("t"));
        }

        // Windows on distinct ids never interfere.
        #[test]
        fn prop_expiry_is_per_task(ids in proptest::collection::hash_set("[a-d]", 1..4)) {
            let mut tracker = PendingTracker::new();
            let tokens: Vec<_> = ids.iter().map(|id| tracker.mark(id)).collect();

            for (i, token) in tokens.iter().enumerate() {
                prop_assert!(tracker.expire(token));
                for later in &tokens[i + 1..] {
                    prop_assert!(tracker.is_pending(later.task_id()));
                }
            }
            prop_assert!(tracker.is_empty());
        }
    }
}
