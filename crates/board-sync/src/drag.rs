//! Drag Interaction State Machine
//!
//! Translates drag gestures into discrete column-move intents. One task
//! drags at a time and one column holds the drag-over highlight; both
//! reset on drop or cancel. Events that make no sense in the current
//! state (a drop with no drag live, a leave while idle) keep the state
//! unchanged instead of panicking or getting lost.

use crate::columns;
use crate::task::TaskStatus;

/// A requested column move, from a drop or a quick-move button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveIntent {
    pub task_id: String,
    pub to: TaskStatus,
}

/// Drag gesture state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A card is being dragged, currently outside any drop zone.
    Dragging { task_id: String },
    /// A card is being dragged over a column's drop zone.
    OverColumn { task_id: String, column: TaskStatus },
}

impl DragState {
    pub fn new() -> Self {
        Self::Idle
    }

    /// Task currently being dragged, if any.
    pub fn dragging(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Dragging { task_id } | Self::OverColumn { task_id, .. } => Some(task_id),
        }
    }

    /// Column currently holding the drag-over highlight, if any.
    pub fn drag_over(&self) -> Option<TaskStatus> {
        match self {
            Self::OverColumn { column, .. } => Some(*column),
            _ => None,
        }
    }

    /// A drag gesture started on a card. Starting over an existing drag
    /// replaces it.
    pub fn drag_start(&mut self, task_id: &str) {
        *self = Self::Dragging {
            task_id: task_id.to_string(),
        };
    }

    /// The pointer entered a column's drop zone. Entering a different
    /// column moves the highlight there; with no drag live nothing
    /// happens.
    pub fn drag_enter(&mut self, column: TaskStatus) {
        if let Some(task_id) = self.dragging() {
            *self = Self::OverColumn {
                task_id: task_id.to_string(),
                column,
            };
        }
    }

    /// The pointer left the highlighted drop zone. Clears the highlight
    /// only; the drag stays live.
    pub fn drag_leave(&mut self) {
        if let Some(task_id) = self.dragging() {
            *self = Self::Dragging {
                task_id: task_id.to_string(),
            };
        }
    }

    /// Drop the dragged card onto a column, emitting the move intent and
    /// returning to idle. A drop with no drag live emits nothing.
    pub fn drop_on(&mut self, column: TaskStatus) -> Option<MoveIntent> {
        let task_id = self.dragging()?.to_string();
        *self = Self::Idle;
        Some(MoveIntent { task_id, to: column })
    }

    /// Abort the gesture with no intent emitted.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }
}

/// Quick-move intent to the previous column. Absent at the first column.
pub fn quick_move_previous(task_id: &str, current: TaskStatus) -> Option<MoveIntent> {
    columns::previous_status(current).map(|to| MoveIntent {
        task_id: task_id.to_string(),
        to,
    })
}

/// Quick-move intent to the next column. Absent at the last column.
pub fn quick_move_next(task_id: &str, current: TaskStatus) -> Option<MoveIntent> {
    columns::next_status(current).map(|to| MoveIntent {
        task_id: task_id.to_string(),
        to,
    })
}
