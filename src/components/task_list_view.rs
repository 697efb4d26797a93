//! Task List View Component
//!
//! Flat rendering of the task list, the board's list-mode alternative.
//! Shows the canonical data as delivered; optimistic overrides are a
//! board concern.

use leptos::prelude::*;

use board_sync::columns;

use crate::models::Task;

/// Simple list rendering of the assigned tasks
#[component]
pub fn TaskListView(
    tasks: Signal<Vec<Task>>,
    on_task_click: Callback<Task>,
) -> impl IntoView {
    view! {
        <div class="task-list">
            <For
                each=move || tasks.get()
                key=|task| (task.id.clone(), task.status, task.title.clone())
                children=move |task| {
                    let open = task.clone();
                    let due_label = task
                        .due_date
                        .map(|d| d.format("%b %d").to_string())
                        .unwrap_or_default();
                    view! {
                        <div class="task-row" on:click=move |_| on_task_click.run(open.clone())>
                            <span class="task-row-status">
                                {columns::column_title(task.status)}
                            </span>
                            <span class="task-row-title">{task.title.clone()}</span>
                            <span class=format!("priority-badge {}", task.priority.as_str())>
                                {task.priority.as_str()}
                            </span>
                            <span class="task-row-due">{due_label}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
