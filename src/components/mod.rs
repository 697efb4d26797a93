//! UI Components

mod kanban_board;
mod kanban_column;
mod task_card;
mod task_list_view;
mod tasks_view;

pub use kanban_board::KanbanBoard;
pub use kanban_column::KanbanColumn;
pub use task_card::TaskCard;
pub use task_list_view::TaskListView;
pub use tasks_view::TasksView;
