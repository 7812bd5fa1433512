//! Task filter configuration.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;
use taskboard_core::BoardError;

use super::predicates::{
    AssigneeFilter, CompositeFilter, DueDateBucketFilter, PriorityFilter, TagFilter,
};
use crate::search::CompositeSearcher;
use crate::tag::TagId;
use crate::task::TaskPriority;

/// Due-date buckets offered by the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DueDateFilter {
    Today,
    ThisWeek,
    Overdue,
    NoDate,
}

impl FromStr for DueDateFilter {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['_', ' '], "-").as_str() {
            "today" => Ok(Self::Today),
            "this-week" | "week" => Ok(Self::ThisWeek),
            "overdue" => Ok(Self::Overdue),
            "no-date" | "none" => Ok(Self::NoDate),
            _ => Err(BoardError::Validation(format!(
                "unknown due date filter: {}",
                s
            ))),
        }
    }
}

/// Configuration for filtering tasks by search term and structured criteria.
///
/// Every populated dimension must match (logical AND). Empty sets count as
/// "not filtering".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilter {
    #[serde(default)]
    pub search: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<BTreeSet<TaskPriority>>,
    /// Tag ids; a task matches when it carries any of them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeSet<TagId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DueDateFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            ..Self::default()
        }
    }

    pub fn with_priorities(mut self, priorities: impl IntoIterator<Item = TaskPriority>) -> Self {
        self.priority = Some(priorities.into_iter().collect());
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = TagId>) -> Self {
        self.tags = Some(tags.into_iter().collect());
        self
    }

    pub fn with_due_date(mut self, bucket: DueDateFilter) -> Self {
        self.due_date = Some(bucket);
        self
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Check if any structured (non-search) filters are active.
    pub fn has_active_filters(&self) -> bool {
        self.priority.as_ref().is_some_and(|p| !p.is_empty())
            || self.tags.as_ref().is_some_and(|t| !t.is_empty())
            || self.due_date.is_some()
            || self.assignee.as_deref().is_some_and(|a| !a.is_empty())
    }

    /// Number of active structured filters, as shown on the filter badge.
    pub fn active_filter_count(&self) -> usize {
        self.priority.as_ref().map_or(0, |p| p.len())
            + self.tags.as_ref().map_or(0, |t| t.len())
            + usize::from(self.due_date.is_some())
            + usize::from(self.assignee.as_deref().is_some_and(|a| !a.is_empty()))
    }

    /// True when the filter would hide nothing.
    pub fn is_inactive(&self) -> bool {
        self.search.is_empty() && !self.has_active_filters()
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.priority = None;
        self.tags = None;
        self.due_date = None;
        self.assignee = None;
    }

    pub fn searcher(&self) -> CompositeSearcher {
        CompositeSearcher::all(self.search.clone())
    }

    /// Structured predicates for this configuration, evaluated as of `now`.
    /// Due-date buckets use the calendar day at `now`'s offset.
    pub fn predicates(&self, now: DateTime<FixedOffset>) -> CompositeFilter {
        let mut composite = CompositeFilter::new();
        if let Some(priorities) = self.priority.as_ref().filter(|p| !p.is_empty()) {
            composite = composite.with_filter(Box::new(PriorityFilter::new(priorities.clone())));
        }
        if let Some(tags) = self.tags.as_ref().filter(|t| !t.is_empty()) {
            composite = composite.with_filter(Box::new(TagFilter::new(tags.clone())));
        }
        if let Some(bucket) = self.due_date {
            composite = composite.with_filter(Box::new(DueDateBucketFilter::new(bucket, now)));
        }
        if let Some(assignee) = self.assignee.as_deref().filter(|a| !a.is_empty()) {
            composite = composite.with_filter(Box::new(AssigneeFilter::new(assignee)));
        }
        composite
    }
}
