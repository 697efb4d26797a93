//! Board Context
//!
//! Shared board state provided via the Leptos Context API: the
//! reconciliation engine signal, the trailing-click suppression flag,
//! and the callbacks the host supplied.

use board_sync::{columns, Board, PendingMove, Task, TaskStatus};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a finished drag keeps swallowing the trailing click, in ms.
const CLICK_SUPPRESS_MS: u32 = 100;

/// Board-wide state provided via context
#[derive(Clone, Copy)]
pub struct BoardContext {
    /// The reconciliation engine; mutate through [`BoardContext::mutate`]
    pub board: RwSignal<Board>,
    /// True right after a drag finished, while the stray click event
    /// that follows a drop is still in flight - read
    pub drag_just_ended: ReadSignal<bool>,
    set_drag_just_ended: WriteSignal<bool>,
    /// Host callback: open the task detail view
    pub on_task_click: Callback<Task>,
    /// Forwards an applied move to the update command and schedules its
    /// expiry
    pub on_move: Callback<PendingMove>,
}

impl BoardContext {
    pub fn new(
        board: RwSignal<Board>,
        drag_just_ended: (ReadSignal<bool>, WriteSignal<bool>),
        on_task_click: Callback<Task>,
        on_move: Callback<PendingMove>,
    ) -> Self {
        Self {
            board,
            drag_just_ended: drag_just_ended.0,
            set_drag_just_ended: drag_just_ended.1,
            on_task_click,
            on_move,
        }
    }

    /// Run a mutation on the engine, notifying every board view.
    pub fn mutate<T>(&self, f: impl FnOnce(&mut Board) -> T) -> T {
        self.board
            .try_update(f)
            .expect("board signal should be alive")
    }

    /// Rendered tasks of one column.
    pub fn tasks_in(&self, status: TaskStatus) -> Vec<Task> {
        self.board
            .with(|b| columns::column_tasks(b.rendered(), status).cloned().collect())
    }

    pub fn is_dragging(&self, task_id: &str) -> bool {
        self.board.with(|b| b.dragging() == Some(task_id))
    }

    pub fn is_drag_over(&self, status: TaskStatus) -> bool {
        self.board.with(|b| b.drag_over() == Some(status))
    }

    pub fn is_pending(&self, task_id: &str) -> bool {
        self.board.with(|b| b.is_pending(task_id))
    }

    /// Whether a card click should open the detail view right now.
    pub fn click_allowed(&self) -> bool {
        self.board.with_untracked(|b| b.dragging().is_none())
            && !self.drag_just_ended.get_untracked()
    }

    /// Flag that a drag just finished and clear the flag shortly after,
    /// once the browser's trailing click has come and gone.
    pub fn mark_drag_just_ended(&self) {
        self.set_drag_just_ended.set(true);
        let clear = self.set_drag_just_ended;
        Timeout::new(CLICK_SUPPRESS_MS, move || clear.set(false)).forget();
    }
}
