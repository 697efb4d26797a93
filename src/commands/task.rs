//! Task Commands
//!
//! Frontend bindings for task-related backend commands.

use super::invoke;
use crate::models::{Task, TaskStatus};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct UpdateStatusArgs<'a> {
    #[serde(rename = "taskId")]
    task_id: &'a str,
    status: TaskStatus,
}

// ========================
// Commands
// ========================

/// Tasks assigned to the signed-in user.
pub async fn list_my_tasks() -> Result<Vec<Task>, String> {
    let result = invoke("list_my_tasks", JsValue::NULL).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Persist a status change. The board fires this without awaiting the
/// outcome; a rejection only becomes visible through a later canonical
/// refresh.
pub async fn update_task_status(task_id: &str, status: TaskStatus) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&UpdateStatusArgs { task_id, status })
        .map_err(|e| e.to_string())?;
    let result = invoke("update_task_status", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
