//! Tasks View Component
//!
//! The "My Assigned Tasks" screen: toggles between the kanban board and
//! the flat list rendering of the same task list.

use leptos::prelude::*;

use crate::components::{KanbanBoard, TaskListView};
use crate::models::Task;

#[derive(Clone, Copy, PartialEq)]
enum ViewMode {
    Board,
    List,
}

/// Tasks screen with a board/list mode toggle
#[component]
pub fn TasksView(
    tasks: Signal<Vec<Task>>,
    on_task_click: Callback<Task>,
) -> impl IntoView {
    let (view_mode, set_view_mode) = signal(ViewMode::Board);

    let toggle_class = move |mode: ViewMode| {
        move || {
            if view_mode.get() == mode {
                "toggle-btn active"
            } else {
                "toggle-btn"
            }
        }
    };

    view! {
        <div class="tasks-view">
            <div class="tasks-view-header">
                <h1>"My Assigned Tasks"</h1>
                <div class="view-toggle">
                    <button
                        class=toggle_class(ViewMode::Board)
                        on:click=move |_| set_view_mode.set(ViewMode::Board)
                    >
                        "Board"
                    </button>
                    <button
                        class=toggle_class(ViewMode::List)
                        on:click=move |_| set_view_mode.set(ViewMode::List)
                    >
                        "List"
                    </button>
                </div>
            </div>

            {move || match view_mode.get() {
                ViewMode::Board => {
                    view! { <KanbanBoard tasks=tasks on_task_click=on_task_click /> }.into_any()
                }
                ViewMode::List => {
                    view! { <TaskListView tasks=tasks on_task_click=on_task_click /> }.into_any()
                }
            }}
        </div>
    }
}
