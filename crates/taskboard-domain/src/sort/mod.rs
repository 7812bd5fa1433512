//! Task sorting functionality.
//!
//! Column order is owned by the board; these sorters only order derived
//! lists such as the list view.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Enum dispatch for sorting tasks by a specific field.
pub enum SortBy {
    Priority,
    /// Dated tasks before undated ones.
    DueDate,
    CreatedAt,
    UpdatedAt,
    Title,
}

impl SortBy {
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match self {
            Self::Priority => a.priority.cmp(&b.priority),
            Self::DueDate => match (a.due_date, b.due_date) {
                (Some(ad), Some(bd)) => ad.cmp(&bd),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            Self::CreatedAt => a.created_at.cmp(&b.created_at),
            Self::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            Self::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        }
    }
}

/// Wrapper that applies sort order (ascending/descending) to a sort field.
pub struct OrderedSorter {
    sorter: SortBy,
    order: SortOrder,
}

impl OrderedSorter {
    pub fn new(sorter: SortBy, order: SortOrder) -> Self {
        Self { sorter, order }
    }

    /// Sort a slice in place. Works with both `&Task` and `Task` elements.
    pub fn sort_by<T: Borrow<Task>>(&self, tasks: &mut [T]) {
        tasks.sort_by(|a, b| self.compare(a.borrow(), b.borrow()));
    }

    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        let cmp = self.sorter.compare(a, b);
        match self.order {
            SortOrder::Ascending => cmp,
            SortOrder::Descending => cmp.reverse(),
        }
    }
}

/// List view order: highest priority first, then earliest due date.
pub fn sort_for_list<T: Borrow<Task>>(tasks: &mut [T]) {
    let priority = OrderedSorter::new(SortBy::Priority, SortOrder::Descending);
    let due = OrderedSorter::new(SortBy::DueDate, SortOrder::Ascending);
    tasks.sort_by(|a, b| {
        let (a, b) = (a.borrow(), b.borrow());
        priority.compare(a, b).then_with(|| due.compare(a, b))
    });
}
