//! Filtered views over the task map.
//!
//! Functions here take explicit inputs and return derived data; nothing is
//! cached. `BoardStore` memoizes the visible map on top of these.

use chrono::{DateTime, TimeZone, Utc};
use std::borrow::Cow;

use crate::board::{BoardState, TaskMap};
use crate::filter::{TaskFilter, TaskPredicate};
use crate::search::TaskSearcher;
use crate::task::{Task, TaskStatus};

/// Tasks matching `filter` as of `now`. Due-date buckets are calendar days in
/// `now`'s time zone.
///
/// An inactive filter borrows the input map untouched.
pub fn filter_tasks<'a, Tz: TimeZone>(
    tasks: &'a TaskMap,
    filter: &TaskFilter,
    now: DateTime<Tz>,
) -> Cow<'a, TaskMap> {
    if filter.is_inactive() {
        return Cow::Borrowed(tasks);
    }

    let searcher = filter.searcher();
    let predicates = filter.predicates(now.fixed_offset());
    Cow::Owned(
        tasks
            .iter()
            .filter(|(_, task)| searcher.matches(task) && predicates.matches(task))
            .map(|(id, task)| (*id, task.clone()))
            .collect(),
    )
}

/// Tasks matching a bare search term.
pub fn search_tasks<'a>(tasks: &'a TaskMap, term: &str) -> Cow<'a, TaskMap> {
    filter_tasks(tasks, &TaskFilter::search(term), Utc::now())
}

/// Visible tasks of one column, in the column's display order.
pub fn column_tasks<'a>(state: &BoardState, visible: &'a TaskMap, status: TaskStatus) -> Vec<&'a Task> {
    state
        .column(status)
        .map(|column| {
            column
                .task_ids
                .iter()
                .filter_map(|id| visible.get(id))
                .collect()
        })
        .unwrap_or_default()
}
