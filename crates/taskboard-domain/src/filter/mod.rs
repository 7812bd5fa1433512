//! Task filtering functionality.
//!
//! `TaskFilter` holds what the user asked for; the `TaskPredicate`
//! implementations perform the actual filtering.

pub mod predicates;
pub mod task_filter;

pub use predicates::{
    AssigneeFilter, CompositeFilter, DueDateBucketFilter, PriorityFilter, TagFilter, TaskPredicate,
};
pub use task_filter::{DueDateFilter, TaskFilter};
