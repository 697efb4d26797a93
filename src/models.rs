//! Frontend Models
//!
//! Task entities as delivered by the backend. The reconciliation engine
//! owns the definitions; the UI re-exports them.

pub use board_sync::{Assignee, Priority, Task, TaskStatus};
