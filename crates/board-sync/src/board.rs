//! Board Facade
//!
//! Owns the rendered list, the pending tracker, and the drag machine,
//! with one entry point per external trigger: snapshot arrival, drag
//! events, quick moves, timer expiry. Everything runs synchronously on
//! the caller's event loop. Dispatching the status-update command and
//! scheduling the grace timer stay with the caller — a move returns the
//! intent to forward and the token to expire, and the command's outcome
//! is never reported back.

use crate::drag::{self, DragState, MoveIntent};
use crate::pending::{PendingToken, PendingTracker};
use crate::reconcile;
use crate::task::{Task, TaskStatus};

/// A move that was applied optimistically and is now awaiting its grace
/// period: forward `intent` to the update command, schedule `token`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMove {
    pub intent: MoveIntent,
    pub token: PendingToken,
}

/// State behind the kanban board widget.
#[derive(Debug, Default)]
pub struct Board {
    rendered: Vec<Task>,
    pending: PendingTracker,
    drag: DragState,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// The task list to show: canonical data with optimistic overrides.
    pub fn rendered(&self) -> &[Task] {
        &self.rendered
    }

    pub fn is_pending(&self, task_id: &str) -> bool {
        self.pending.is_pending(task_id)
    }

    /// Task currently being dragged, if any.
    pub fn dragging(&self) -> Option<&str> {
        self.drag.dragging()
    }

    /// Column currently holding the drag-over highlight, if any.
    pub fn drag_over(&self) -> Option<TaskStatus> {
        self.drag.drag_over()
    }

    /// A fresh canonical snapshot arrived from the host.
    pub fn sync_canonical(&mut self, canonical: &[Task]) {
        self.rendered = reconcile::derive_rendered(canonical, &self.pending, &self.rendered);
    }

    pub fn drag_start(&mut self, task_id: &str) {
        self.drag.drag_start(task_id);
    }

    pub fn drag_enter(&mut self, column: TaskStatus) {
        self.drag.drag_enter(column);
    }

    pub fn drag_leave(&mut self) {
        self.drag.drag_leave();
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Drop the dragged card onto a column. The move applies to the
    /// rendered list immediately, even when the task has meanwhile
    /// vanished from the canonical data (the override then has nothing to
    /// attach to and the window just runs out).
    pub fn drop_on(&mut self, column: TaskStatus) -> Option<PendingMove> {
        let intent = self.drag.drop_on(column)?;
        Some(self.start_move(intent))
    }

    /// Move a card one column to the left. Absent at the first column.
    pub fn quick_move_previous(&mut self, task_id: &str) -> Option<PendingMove> {
        let current = self.status_of(task_id)?;
        let intent = drag::quick_move_previous(task_id, current)?;
        Some(self.start_move(intent))
    }

    /// Move a card one column to the right. Absent at the last column.
    pub fn quick_move_next(&mut self, task_id: &str) -> Option<PendingMove> {
        let current = self.status_of(task_id)?;
        let intent = drag::quick_move_next(task_id, current)?;
        Some(self.start_move(intent))
    }

    /// The grace timer for one mark fired.
    pub fn expire(&mut self, token: &PendingToken) {
        self.pending.expire(token);
    }

    fn status_of(&self, task_id: &str) -> Option<TaskStatus> {
        self.rendered
            .iter()
            .find(|t| t.id == task_id)
            .map(|t| t.status)
    }

    /// Apply an intent optimistically and open its pending window.
    fn start_move(&mut self, intent: MoveIntent) -> PendingMove {
        log::debug!("moving task {} to {}", intent.task_id, intent.to);
        reconcile::apply_move(&mut self.rendered, &intent.task_id, intent.to);
        let token = self.pending.mark(&intent.task_id);
        PendingMove { intent, token }
    }
}
