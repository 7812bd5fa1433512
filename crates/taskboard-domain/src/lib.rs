pub mod action;
pub mod board;
pub mod column;
pub mod due_date;
pub mod filter;
pub mod query;
pub mod reducer;
pub mod sample;
pub mod search;
pub mod settings;
pub mod sort;
pub mod statistics;
pub mod store;
pub mod tag;
pub mod task;

pub use action::TaskAction;
pub use board::{BoardState, TaskMap};
pub use column::Column;
pub use due_date::{due_date_status, is_due_this_week, DueDateStatus};
pub use filter::{CompositeFilter, DueDateFilter, TaskFilter, TaskPredicate};
pub use query::{column_tasks, filter_tasks, search_tasks};
pub use reducer::{reduce, Transition};
pub use sample::{sample_board, sample_tags, sample_task_id};
pub use search::{CompositeSearcher, TaskSearcher};
pub use settings::{SettingsUpdate, TaskView, Theme, UserSettings};
pub use sort::{sort_for_list, OrderedSorter, SortBy, SortOrder};
pub use statistics::{task_statistics, task_statistics_with, StatisticsWindow, TaskStatistics};
pub use store::BoardStore;
pub use tag::{Tag, TagCatalog, TagId};
pub use task::{Subtask, SubtaskId, Task, TaskId, TaskPriority, TaskStatus};
