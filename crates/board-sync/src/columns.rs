//! Board Columns
//!
//! Static ordered column configuration. Adjacency is a bounds-checked
//! lookup against the fixed sequence, so there is no previous column
//! before the first and no next column after the last.

use crate::task::{Task, TaskStatus};

/// A single board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub status: TaskStatus,
    pub title: &'static str,
}

/// The fixed column sequence, left to right.
pub const COLUMNS: [Column; 4] = [
    Column { status: TaskStatus::Todo, title: "To Do" },
    Column { status: TaskStatus::InProgress, title: "In Progress" },
    Column { status: TaskStatus::Review, title: "Review" },
    Column { status: TaskStatus::Done, title: "Done" },
];

/// Column one to the left of `status`, if any.
pub fn previous_status(status: TaskStatus) -> Option<TaskStatus> {
    let idx = TaskStatus::ALL.iter().position(|s| *s == status)?;
    let prev = idx.checked_sub(1)?;
    TaskStatus::ALL.get(prev).copied()
}

/// Column one to the right of `status`, if any.
pub fn next_status(status: TaskStatus) -> Option<TaskStatus> {
    let idx = TaskStatus::ALL.iter().position(|s| *s == status)?;
    TaskStatus::ALL.get(idx + 1).copied()
}

/// Display title of a status's column.
pub fn column_title(status: TaskStatus) -> &'static str {
    COLUMNS
        .iter()
        .find(|c| c.status == status)
        .map(|c| c.title)
        .unwrap_or("")
}

/// Tasks belonging to one column, in snapshot order.
pub fn column_tasks<'a>(tasks: &'a [Task], status: TaskStatus) -> impl Iterator<Item = &'a Task> {
    tasks.iter().filter(move |t| t.status == status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_follow_status_order() {
        for (column, status) in COLUMNS.iter().zip(TaskStatus::ALL) {
            assert_eq!(column.status, status);
        }
    }

    #[test]
    fn test_no_previous_before_first_column() {
        assert_eq!(previous_status(TaskStatus::Todo), None);
    }

    #[test]
    fn test_no_next_after_last_column() {
        assert_eq!(next_status(TaskStatus::Done), None);
    }

    #[test]
    fn test_adjacency_in_the_middle() {
        assert_eq!(previous_status(TaskStatus::Review), Some(TaskStatus::InProgress));
        assert_eq!(next_status(TaskStatus::Review), Some(TaskStatus::Done));
        assert_eq!(next_status(TaskStatus::Todo), Some(TaskStatus::InProgress));
        assert_eq!(previous_status(TaskStatus::Done), Some(TaskStatus::Review));
    }
}
