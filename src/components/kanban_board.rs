//! Kanban Board Component
//!
//! Columned view of the task list with drag-and-drop and quick-move
//! status changes. A status change renders immediately; the update
//! command runs in the background and is never awaited. Each change
//! opens a fixed grace window during which canonical refreshes cannot
//! move the card back.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use board_sync::{Board, PendingMove, COLUMNS, DEFAULT_GRACE_MS};

use crate::commands;
use crate::components::KanbanColumn;
use crate::context::BoardContext;
use crate::models::Task;

/// Kanban board widget over a host-refreshed task list
#[component]
pub fn KanbanBoard(
    /// Canonical task list, refreshed by the host at its own cadence
    tasks: Signal<Vec<Task>>,
    /// Opens the task detail view; never fired mid-drag
    on_task_click: Callback<Task>,
) -> impl IntoView {
    let board = RwSignal::new(Board::new());
    let drag_just_ended = signal(false);

    // Forward an applied move to the backend and schedule its expiry.
    // Fire and forget: the command's outcome never reaches the board,
    // only the next canonical refresh does.
    let on_move = Callback::new(move |mv: PendingMove| {
        let PendingMove { intent, token } = mv;
        web_sys::console::log_1(
            &format!("[BOARD] Moving task {} to {}", intent.task_id, intent.to).into(),
        );
        spawn_local(async move {
            if let Err(e) = commands::update_task_status(&intent.task_id, intent.to).await {
                web_sys::console::warn_1(
                    &format!("[BOARD] update_task_status failed: {e}").into(),
                );
            }
        });
        Timeout::new(DEFAULT_GRACE_MS, move || {
            board.update(|b| b.expire(&token));
        })
        .forget();
    });

    provide_context(BoardContext::new(
        board,
        drag_just_ended,
        on_task_click,
        on_move,
    ));

    // Reconcile whenever a canonical snapshot arrives.
    Effect::new(move |_| {
        let canonical = tasks.get();
        board.update(|b| b.sync_canonical(&canonical));
    });

    view! {
        <div class="kanban-board">
            {COLUMNS
                .iter()
                .map(|col| view! { <KanbanColumn column=*col /> })
                .collect_view()}
        </div>
    }
}
