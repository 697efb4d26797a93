//! Task Card Component
//!
//! A draggable card showing one task: priority badge, title,
//! description, assignee avatar, due date, and quick-move buttons to the
//! adjacent columns. Clicking the card opens the detail view unless a
//! drag is live or just finished. A card inside its grace window pulses
//! until the window closes.

use leptos::prelude::*;
use web_sys::DragEvent;

use board_sync::columns;

use crate::context::BoardContext;
use crate::models::Task;

/// A single task card on the board
#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");

    let id = task.id.clone();
    let status = task.status;
    let priority = task.priority;
    let title = task.title.clone();
    let description = task.description.clone();

    let assignee_name = task
        .assignee
        .as_ref()
        .map(|a| a.full_name.clone())
        .unwrap_or_else(|| "Unassigned".to_string());
    let avatar_url = task
        .assignee
        .as_ref()
        .and_then(|a| a.avatar_url.clone())
        .unwrap_or_else(|| {
            format!(
                "https://ui-avatars.com/api/?name={}&background=random",
                String::from(js_sys::encode_uri_component(&assignee_name))
            )
        });
    let due_label = task
        .due_date
        .map(|d| d.format("%b %d").to_string())
        .unwrap_or_default();

    let card_class = {
        let id = id.clone();
        move || {
            let mut c = String::from("task-card");
            if ctx.is_dragging(&id) {
                c.push_str(" dragging");
            }
            if ctx.is_pending(&id) {
                c.push_str(" updating");
            }
            c
        }
    };

    let on_dragstart = {
        let id = id.clone();
        move |ev: DragEvent| {
            if let Some(dt) = ev.data_transfer() {
                dt.set_effect_allowed("move");
            }
            ctx.mutate(|b| b.drag_start(&id));
        }
    };

    // Fires after drop as well; with the drag already resolved the
    // cancel is a no-op, otherwise it aborts the gesture.
    let on_dragend = move |_: DragEvent| {
        ctx.mutate(|b| b.cancel_drag());
        ctx.mark_drag_just_ended();
    };

    let on_click = {
        let open = task.clone();
        move |_| {
            if ctx.click_allowed() {
                ctx.on_task_click.run(open.clone());
            }
        }
    };

    let quick_move_previous = columns::previous_status(status).map(|to| {
        let id = id.clone();
        view! {
            <button
                class="quick-move-btn prev"
                on:click=move |ev| {
                    ev.stop_propagation();
                    if let Some(mv) = ctx.mutate(|b| b.quick_move_previous(&id)) {
                        ctx.on_move.run(mv);
                    }
                }
            >
                {format!("← {}", columns::column_title(to))}
            </button>
        }
    });

    let quick_move_next = columns::next_status(status).map(|to| {
        let id = id.clone();
        view! {
            <button
                class="quick-move-btn next"
                on:click=move |ev| {
                    ev.stop_propagation();
                    if let Some(mv) = ctx.mutate(|b| b.quick_move_next(&id)) {
                        ctx.on_move.run(mv);
                    }
                }
            >
                {format!("{} →", columns::column_title(to))}
            </button>
        }
    });

    view! {
        <div
            class=card_class
            draggable="true"
            on:dragstart=on_dragstart
            on:dragend=on_dragend
            on:click=on_click
        >
            <span class=format!("priority-badge {}", priority.as_str())>
                {priority.as_str()}
            </span>
            <h4 class="task-title">{title}</h4>
            <p class="task-description">{description}</p>

            <div class="task-footer">
                <img class="assignee-avatar" src=avatar_url alt=assignee_name />
                <span class="due-date">{due_label}</span>
            </div>

            <div class="quick-actions">
                {quick_move_previous}
                {quick_move_next}
            </div>
        </div>
    }
}
