//! Task search functionality.
//!
//! A search term matches a task when it is a case-insensitive substring of
//! the title, the description, any tag name or any subtask title. Matching is
//! plain substring containment, not tokenized or fuzzy.

use crate::Task;

/// Trait for searching tasks by a text field.
pub trait TaskSearcher {
    /// Returns true if the task matches the search criteria.
    fn matches(&self, task: &Task) -> bool;
}

fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Search tasks by title.
pub struct TitleSearcher {
    query: String,
}

impl TitleSearcher {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }
}

impl TaskSearcher for TitleSearcher {
    fn matches(&self, task: &Task) -> bool {
        contains_lowercase(&task.title, &self.query)
    }
}

/// Search tasks by description.
pub struct DescriptionSearcher {
    query: String,
}

impl DescriptionSearcher {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }
}

impl TaskSearcher for DescriptionSearcher {
    fn matches(&self, task: &Task) -> bool {
        contains_lowercase(&task.description, &self.query)
    }
}

/// Search tasks by the names of their tags.
pub struct TagNameSearcher {
    query: String,
}

impl TagNameSearcher {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }
}

impl TaskSearcher for TagNameSearcher {
    fn matches(&self, task: &Task) -> bool {
        task.tags
            .iter()
            .any(|tag| contains_lowercase(&tag.name, &self.query))
    }
}

/// Search tasks by the titles of their subtasks.
pub struct SubtaskTitleSearcher {
    query: String,
}

impl SubtaskTitleSearcher {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }
}

impl TaskSearcher for SubtaskTitleSearcher {
    fn matches(&self, task: &Task) -> bool {
        task.subtasks.as_deref().is_some_and(|subtasks| {
            subtasks
                .iter()
                .any(|subtask| contains_lowercase(&subtask.title, &self.query))
        })
    }
}

/// Enum dispatch for searching tasks by a specific field.
pub enum SearchBy {
    Title(TitleSearcher),
    Description(DescriptionSearcher),
    TagName(TagNameSearcher),
    SubtaskTitle(SubtaskTitleSearcher),
}

impl SearchBy {
    fn matches(&self, task: &Task) -> bool {
        match self {
            Self::Title(s) => s.matches(task),
            Self::Description(s) => s.matches(task),
            Self::TagName(s) => s.matches(task),
            Self::SubtaskTitle(s) => s.matches(task),
        }
    }
}

/// Composite searcher that matches if any sub-searcher matches.
pub struct CompositeSearcher {
    searchers: Vec<SearchBy>,
}

impl CompositeSearcher {
    /// Create an empty composite searcher (matches all tasks).
    pub fn new() -> Self {
        Self {
            searchers: Vec::new(),
        }
    }

    /// Search every text field of a task.
    ///
    /// An empty query yields the empty composite, which matches everything.
    pub fn all(query: impl Into<String>) -> Self {
        let query = query.into();
        if query.is_empty() {
            return Self::new();
        }
        Self {
            searchers: vec![
                SearchBy::Title(TitleSearcher::new(query.clone())),
                SearchBy::Description(DescriptionSearcher::new(query.clone())),
                SearchBy::TagName(TagNameSearcher::new(query.clone())),
                SearchBy::SubtaskTitle(SubtaskTitleSearcher::new(query)),
            ],
        }
    }

    /// Add a searcher to the composite (builder pattern).
    pub fn with_search(mut self, searcher: SearchBy) -> Self {
        self.searchers.push(searcher);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.searchers.is_empty()
    }
}

impl Default for CompositeSearcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskSearcher for CompositeSearcher {
    fn matches(&self, task: &Task) -> bool {
        if self.searchers.is_empty() {
            return true;
        }
        self.searchers.iter().any(|searcher| searcher.matches(task))
    }
}
