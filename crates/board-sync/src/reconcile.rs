//! Status Reconciliation
//!
//! Pure derivation of the rendered task list from the latest canonical
//! snapshot and the set of tasks with an in-flight optimistic change.
//! No side effects; safe to call on every snapshot tick.

use crate::pending::PendingTracker;
use crate::task::{Task, TaskStatus};

/// Merge a canonical snapshot with the currently rendered list.
///
/// With nothing pending the snapshot is the rendered list. While a task
/// is pending its rendered status sticks to the last optimistic
/// assignment (carried by `current`) instead of whatever the snapshot
/// says; every other task, and every non-status field, tracks the
/// snapshot. A pending task missing from the snapshot is gone — the
/// snapshot is a full replacement, not a diff.
pub fn derive_rendered(
    canonical: &[Task],
    pending: &PendingTracker,
    current: &[Task],
) -> Vec<Task> {
    if pending.is_empty() {
        return canonical.to_vec();
    }

    canonical
        .iter()
        .map(|task| {
            if pending.is_pending(&task.id) {
                if let Some(rendered) = current.iter().find(|t| t.id == task.id) {
                    let mut kept = task.clone();
                    kept.status = rendered.status;
                    return kept;
                }
            }
            task.clone()
        })
        .collect()
}

/// Apply an optimistic status change in place, ahead of the server's
/// answer. A task no longer present in the rendered list is left alone.
pub fn apply_move(rendered: &mut [Task], task_id: &str, to: TaskStatus) {
    if let Some(task) = rendered.iter_mut().find(|t| t.id == task_id) {
        task.status = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn task(id: &str, status: TaskStatus) -> Task {
        Task {
            id: id.to_string(),
            title: format!("task {id}"),
            description: String::new(),
            status,
            priority: Default::default(),
            assignee: None,
            due_date: None,
        }
    }

    #[test]
    fn test_empty_pending_passes_snapshot_through() {
        let canonical = vec![task("a", TaskStatus::Todo), task("b", TaskStatus::Done)];
        let stale = vec![task("a", TaskStatus::Review)];

        let rendered = derive_rendered(&canonical, &PendingTracker::new(), &stale);
        assert_eq!(rendered, canonical);
    }

    #[test]
    fn test_pending_task_keeps_optimistic_status() {
        let mut pending = PendingTracker::new();
        pending.mark("a");

        let canonical = vec![task("a", TaskStatus::Todo), task("b", TaskStatus::Todo)];
        let mut current = canonical.clone();
        apply_move(&mut current, "a", TaskStatus::Review);

        let rendered = derive_rendered(&canonical, &pending, &current);
        assert_eq!(rendered[0].status, TaskStatus::Review);
        assert_eq!(rendered[1].status, TaskStatus::Todo);
    }

    #[test]
    fn test_non_pending_tasks_track_snapshot_changes() {
        let mut pending = PendingTracker::new();
        pending.mark("a");

        let current = vec![task("a", TaskStatus::Review), task("b", TaskStatus::Todo)];
        // Someone else moved "b" while "a" is still pending.
        let canonical = vec![task("a", TaskStatus::Todo), task("b", TaskStatus::Done)];

        let rendered = derive_rendered(&canonical, &pending, &current);
        assert_eq!(rendered[0].status, TaskStatus::Review);
        assert_eq!(rendered[1].status, TaskStatus::Done);
    }

    #[test]
    fn test_pending_task_takes_other_fields_from_snapshot() {
        let mut pending = PendingTracker::new();
        pending.mark("a");

        let current = vec![task("a", TaskStatus::Review)];
        let mut canonical = vec![task("a", TaskStatus::Todo)];
        canonical[0].title = "renamed".to_string();

        let rendered = derive_rendered(&canonical, &pending, &current);
        assert_eq!(rendered[0].title, "renamed");
        assert_eq!(rendered[0].status, TaskStatus::Review);
    }

    #[test]
    fn test_pending_task_absent_from_snapshot_stays_absent() {
        let mut pending = PendingTracker::new();
        pending.mark("a");

        let current = vec![task("a", TaskStatus::Review)];
        let canonical = vec![task("b", TaskStatus::Todo)];

        let rendered = derive_rendered(&canonical, &pending, &current);
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].id, "b");
    }

    #[test]
    fn test_empty_snapshot_renders_empty() {
        let mut pending = PendingTracker::new();
        pending.mark("a");

        let current = vec![task("a", TaskStatus::Review)];
        assert!(derive_rendered(&[], &pending, &current).is_empty());
    }

    #[test]
    fn test_apply_move_ignores_unknown_id() {
        let mut rendered = vec![task("a", TaskStatus::Todo)];
        apply_move(&mut rendered, "ghost", TaskStatus::Done);
        assert_eq!(rendered[0].status, TaskStatus::Todo);
    }

    fn status_from(n: u8) -> TaskStatus {
        TaskStatus::ALL[n as usize % TaskStatus::ALL.len()]
    }

    proptest! {
        // With an empty pending set the rendered list is structurally
        // equal to the snapshot.
        #[test]
        fn prop_pass_through_when_nothing_pending(
            rows in proptest::collection::hash_map(0u8..16, (0u8..4, 0u8..4), 0..12),
        ) {
            let canonical: Vec<_> = rows
                .iter()
                .map(|(id, (canon, _))| task(&id.to_string(), status_from(*canon)))
                .collect();
            let current: Vec<_> = rows
                .iter()
                .map(|(id, (_, cur))| task(&id.to_string(), status_from(*cur)))
                .collect();

            prop_assert_eq!(
                derive_rendered(&canonical, &PendingTracker::new(), &current),
                canonical
            );
        }

        // Pending ids keep the currently rendered status, everything else
        // matches the snapshot exactly, and the snapshot's order and
        // membership are preserved.
        #[test]
        fn prop_only_pending_ids_diverge(
            rows in proptest::collection::hash_map(0u8..16, (0u8..4, 0u8..4, any::<bool>()), 0..12),
        ) {
            let mut pending = PendingTracker::new();
            let mut canonical = Vec::new();
            let mut current = Vec::new();
            for (id, (canon, cur, is_pending)) in &rows {
                let id = id.to_string();
                canonical.push(task(&id, status_from(*canon)));
                current.push(task(&id, status_from(*cur)));
                if *is_pending {
                    pending.mark(&id);
                }
            }

            let rendered = derive_rendered(&canonical, &pending, &current);

            prop_assert_eq!(rendered.len(), canonical.len());
            for (out, canon) in rendered.iter().zip(&canonical) {
                prop_assert_eq!(&out.id, &canon.id);
                let expected = if pending.is_pending(&canon.id) {
                    current
                        .iter()
                        .find(|t| t.id == canon.id)
                        .map_or(canon.status, |t| t.status)
                } else {
                    canon.status
                };
                prop_assert_eq!(out.status, expected);
                prop_assert_eq!(&out.title, &canon.title);
            }
        }
    }
}
