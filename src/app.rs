//! Task Board Frontend App
//!
//! Hosts the tasks screen: loads the signed-in user's tasks, keeps them
//! fresh on a fixed cadence, and opens the detail overlay on card click.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use reactive_stores::Store;

use crate::commands;
use crate::components::TasksView;
use crate::models::Task;
use crate::store::{AppState, AppStateStoreFields, AppStore};

/// Canonical refresh cadence, in ms.
const REFRESH_INTERVAL_MS: u32 = 5000;

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::new());
    provide_context(store);

    // Initial load plus fixed-cadence refresh of the canonical task
    // list. The board reconciles each delivery against its in-flight
    // optimistic changes.
    Effect::new(move |_| {
        spawn_local(async move {
            loop {
                match commands::list_my_tasks().await {
                    Ok(loaded) => {
                        web_sys::console::log_1(
                            &format!("[APP] Loaded {} tasks", loaded.len()).into(),
                        );
                        store.tasks().set(loaded);
                    }
                    Err(e) => {
                        web_sys::console::warn_1(
                            &format!("[APP] Task refresh failed: {e}").into(),
                        );
                    }
                }
                TimeoutFuture::new(REFRESH_INTERVAL_MS).await;
            }
        });
    });

    let tasks = Signal::derive(move || store.tasks().get());
    let on_task_click = Callback::new(move |task: Task| {
        store.selected_task().set(Some(task));
    });

    view! {
        <div class="app-layout">
            <TasksView tasks=tasks on_task_click=on_task_click />

            // Detail overlay for the selected task
            {move || {
                store
                    .selected_task()
                    .get()
                    .map(|task| {
                        view! {
                            <div class="task-detail-overlay">
                                <div class="task-detail">
                                    <h2>{task.title.clone()}</h2>
                                    <p>{task.description.clone()}</p>
                                    <button
                                        class="close-btn"
                                        on:click=move |_| store.selected_task().set(None)
                                    >
                                        "Close"
                                    </button>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
