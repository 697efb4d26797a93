//! Kanban Column Component
//!
//! One workflow column: header with a live card count, and a drop zone
//! that highlights while a card is dragged over it.

use leptos::prelude::*;
use web_sys::DragEvent;

use board_sync::Column;

use crate::components::TaskCard;
use crate::context::BoardContext;

/// A single board column with its drop zone
#[component]
pub fn KanbanColumn(column: Column) -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");
    let status = column.status;

    let col_tasks = move || ctx.tasks_in(status);

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
        // dragover fires continuously; only touch the engine when the
        // highlight actually moves.
        if ctx.board.with_untracked(|b| b.drag_over() != Some(status)) {
            ctx.mutate(|b| b.drag_enter(status));
        }
    };

    let on_dragleave = move |_: DragEvent| {
        if ctx.board.with_untracked(|b| b.drag_over() == Some(status)) {
            ctx.mutate(|b| b.drag_leave());
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(mv) = ctx.mutate(|b| b.drop_on(status)) {
            ctx.on_move.run(mv);
        }
        ctx.mark_drag_just_ended();
    };

    view! {
        <div class="kanban-column">
            <div class="column-header">
                <h3 class="column-title">{column.title}</h3>
                <span class="column-count">{move || col_tasks().len()}</span>
            </div>

            <div
                class=move || {
                    let mut c = String::from("column-cards");
                    if ctx.is_drag_over(status) {
                        c.push_str(" drag-over");
                    }
                    c
                }
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <For
                    each=col_tasks
                    key=|task| (task.id.clone(), task.status, task.title.clone())
                    children=move |task| {
                        view! { <TaskCard task=task /> }
                    }
                />
            </div>
        </div>
    }
}
