//! Task filter implementations.

use chrono::{DateTime, FixedOffset};
use std::collections::BTreeSet;

use super::task_filter::DueDateFilter;
use crate::due_date::{due_date_status, is_due_this_week, DueDateStatus};
use crate::tag::TagId;
use crate::task::{Task, TaskPriority};

/// Trait for filtering tasks by structured criteria.
pub trait TaskPredicate {
    /// Returns true if the task matches the filter criteria.
    fn matches(&self, task: &Task) -> bool;
}

/// Filter tasks whose priority is one of the selected ones.
pub struct PriorityFilter {
    priorities: BTreeSet<TaskPriority>,
}

impl PriorityFilter {
    pub fn new(priorities: impl IntoIterator<Item = TaskPriority>) -> Self {
        Self {
            priorities: priorities.into_iter().collect(),
        }
    }
}

impl TaskPredicate for PriorityFilter {
    fn matches(&self, task: &Task) -> bool {
        self.priorities.contains(&task.priority)
    }
}

/// Filter tasks carrying at least one of the selected tags.
pub struct TagFilter {
    tag_ids: BTreeSet<TagId>,
}

impl TagFilter {
    pub fn new(tag_ids: impl IntoIterator<Item = TagId>) -> Self {
        Self {
            tag_ids: tag_ids.into_iter().collect(),
        }
    }
}

impl TaskPredicate for TagFilter {
    fn matches(&self, task: &Task) -> bool {
        task.tags.iter().any(|tag| self.tag_ids.contains(&tag.id))
    }
}

/// Filter tasks by calendar due-date bucket.
///
/// Calendar days follow the offset carried by `now`.
pub struct DueDateBucketFilter {
    bucket: DueDateFilter,
    now: DateTime<FixedOffset>,
}

impl DueDateBucketFilter {
    pub fn new(bucket: DueDateFilter, now: DateTime<FixedOffset>) -> Self {
        Self { bucket, now }
    }
}

impl TaskPredicate for DueDateBucketFilter {
    fn matches(&self, task: &Task) -> bool {
        let due = task.due_date.as_ref();
        match self.bucket {
            DueDateFilter::Today => due_date_status(due, &self.now) == DueDateStatus::Today,
            DueDateFilter::ThisWeek => is_due_this_week(due, &self.now),
            DueDateFilter::Overdue => due_date_status(due, &self.now) == DueDateStatus::Overdue,
            DueDateFilter::NoDate => due.is_none(),
        }
    }
}

/// Filter tasks by assignee (case-insensitive).
pub struct AssigneeFilter {
    assignee: String,
}

impl AssigneeFilter {
    pub fn new(assignee: impl Into<String>) -> Self {
        Self {
            assignee: assignee.into().to_lowercase(),
        }
    }
}

impl TaskPredicate for AssigneeFilter {
    fn matches(&self, task: &Task) -> bool {
        task.assignee
            .as_deref()
            .is_some_and(|a| a.to_lowercase() == self.assignee)
    }
}

/// Combine multiple filters with AND logic.
///
/// A task matches only if it passes all filters.
pub struct CompositeFilter {
    filters: Vec<Box<dyn TaskPredicate>>,
}

impl CompositeFilter {
    /// Create an empty composite filter (matches all tasks).
    pub fn new() -> Self {
        Self { filters: vec![] }
    }

    /// Add a filter to the composite (builder pattern).
    pub fn with_filter(mut self, filter: Box<dyn TaskPredicate>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for CompositeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskPredicate for CompositeFilter {
    fn matches(&self, task: &Task) -> bool {
        self.filters.iter().all(|f| f.matches(task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tag;
    use chrono::{Duration, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 3, 15, 0, 0).unwrap()
    }

    fn bucket(bucket: DueDateFilter) -> DueDateBucketFilter {
        DueDateBucketFilter::new(bucket, now().fixed_offset())
    }

    #[test]
    fn test_priority_filter() {
        let filter = PriorityFilter::new([TaskPriority::High]);
        let high = Task::new("a", now()).with_priority(TaskPriority::High);
        let low = Task::new("b", now()).with_priority(TaskPriority::Low);
        assert!(filter.matches(&high));
        assert!(!filter.matches(&low));
    }

    #[test]
    fn test_tag_filter_matches_any_selected() {
        let bug = Tag::new("Bug".to_string(), "#EF4444".to_string());
        let docs = Tag::new("Documentation".to_string(), "#F59E0B".to_string());
        let filter = TagFilter::new([bug.id, docs.id]);

        assert!(filter.matches(&Task::new("a", now()).with_tags(vec![docs])));
        assert!(!filter.matches(&Task::new("b", now())));
    }

    #[test]
    fn test_due_date_buckets() {
        let overdue = Task::new("late", now()).with_due_date(now() - Duration::days(2));
        let today = Task::new("today", now()).with_due_date(now() + Duration::hours(3));
        let in_five_days = Task::new("soon", now()).with_due_date(now() + Duration::days(5));
        let undated = Task::new("whenever", now());

        let filter = bucket(DueDateFilter::Overdue);
        assert!(filter.matches(&overdue));
        assert!(!filter.matches(&today));

        let filter = bucket(DueDateFilter::Today);
        assert!(filter.matches(&today));
        assert!(!filter.matches(&in_five_days));

        let filter = bucket(DueDateFilter::ThisWeek);
        assert!(filter.matches(&today));
        assert!(filter.matches(&in_five_days));
        assert!(!filter.matches(&overdue));

        let filter = bucket(DueDateFilter::NoDate);
        assert!(filter.matches(&undated));
        assert!(!filter.matches(&today));
    }

    #[test]
    fn test_assignee_filter() {
        let filter = AssigneeFilter::new("Alice");
        assert!(filter.matches(&Task::new("a", now()).with_assignee("alice")));
        assert!(!filter.matches(&Task::new("b", now()).with_assignee("bob")));
        assert!(!filter.matches(&Task::new("c", now())));
    }

    #[test]
    fn test_assignee_filter_folds_non_ascii_case() {
        let filter = AssigneeFilter::new("ÉLODIE");
        assert!(filter.matches(&Task::new("a", now()).with_assignee("élodie")));

        let filter = AssigneeFilter::new("jürgen");
        assert!(filter.matches(&Task::new("b", now()).with_assignee("JÜRGEN")));
    }

    #[test]
    fn test_today_bucket_uses_local_calendar_day() {
        // 10:00 on Sep 2 at UTC-7; the task is due 20:00 the same local day.
        let offset = FixedOffset::west_opt(7 * 3600).unwrap();
        let instant = Utc.with_ymd_and_hms(2024, 9, 2, 17, 0, 0).unwrap();
        let due = Utc.with_ymd_and_hms(2024, 9, 3, 3, 0, 0).unwrap();
        let task = Task::new("evening call", now()).with_due_date(due);

        let local = DueDateBucketFilter::new(DueDateFilter::Today, instant.with_timezone(&offset));
        assert!(local.matches(&task));

        let utc = DueDateBucketFilter::new(DueDateFilter::Today, instant.fixed_offset());
        assert!(!utc.matches(&task));
    }

    #[test]
    fn test_composite_filter() {
        let task = Task::new("a", now())
            .with_priority(TaskPriority::High)
            .with_assignee("alice");

        assert!(CompositeFilter::new().matches(&task));

        let both = CompositeFilter::new()
            .with_filter(Box::new(PriorityFilter::new([TaskPriority::High])))
            .with_filter(Box::new(AssigneeFilter::new("alice")));
        assert!(both.matches(&task));

        let failing = CompositeFilter::new()
            .with_filter(Box::new(PriorityFilter::new([TaskPriority::High])))
            .with_filter(Box::new(AssigneeFilter::new("bob")));
        assert!(!failing.matches(&task));
    }
}
