//! Owner of the live board state.
//!
//! Every mutation goes through [`BoardStore::dispatch`]. Readers get shared
//! snapshots; a snapshot taken before a dispatch keeps its old contents.

use chrono::{FixedOffset, NaiveDate, Offset, Utc};
use std::cell::RefCell;
use std::sync::Arc;
use taskboard_core::{BoardResult, Clock};

use crate::action::TaskAction;
use crate::board::{BoardState, TaskMap};
use crate::filter::TaskFilter;
use crate::query::filter_tasks;
use crate::reducer::{reduce, Transition};
use crate::statistics::{task_statistics_with, StatisticsWindow, TaskStatistics};
use crate::tag::{Tag, TagCatalog};

struct FilterMemo {
    state: Arc<BoardState>,
    filter: TaskFilter,
    /// Only set when the filter depends on the calendar date.
    day: Option<NaiveDate>,
    tasks: Arc<TaskMap>,
}

pub struct BoardStore {
    state: Arc<BoardState>,
    catalog: TagCatalog,
    clock: Box<dyn Clock>,
    filter: TaskFilter,
    window: StatisticsWindow,
    /// Offset whose calendar days the due-date buckets use.
    offset: FixedOffset,
    memo: RefCell<Option<FilterMemo>>,
}

impl BoardStore {
    /// An empty board with the four default columns.
    pub fn new(catalog: TagCatalog, clock: Box<dyn Clock>) -> Self {
        Self {
            state: Arc::new(BoardState::new()),
            catalog,
            clock,
            filter: TaskFilter::default(),
            window: StatisticsWindow::default(),
            offset: Utc.fix(),
            memo: RefCell::new(None),
        }
    }

    /// Adopt an existing state after checking it against the board invariants.
    pub fn with_state(
        state: BoardState,
        catalog: TagCatalog,
        clock: Box<dyn Clock>,
    ) -> BoardResult<Self> {
        state.check_invariants(&catalog)?;
        let mut store = Self::new(catalog, clock);
        store.state = Arc::new(state);
        Ok(store)
    }

    pub fn with_window(mut self, window: StatisticsWindow) -> Self {
        self.window = window;
        self
    }

    /// Classify due dates by calendar day at this offset instead of UTC.
    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    /// Apply one action.
    ///
    /// On error the previous state is kept and nothing is applied.
    pub fn dispatch(&mut self, action: TaskAction) -> BoardResult<()> {
        tracing::debug!("Dispatching {}", action.description());

        if let TaskAction::SetSearchTerm(term) = &action {
            self.filter.search.clone_from(term);
            return Ok(());
        }

        match reduce(&self.state, &action, &self.catalog, self.clock.now()) {
            Ok(Transition::Changed(next)) => {
                self.state = Arc::new(next);
                Ok(())
            }
            Ok(Transition::Unchanged) => Ok(()),
            Err(e) => {
                tracing::warn!("Rejected {}: {}", action.description(), e);
                Err(e)
            }
        }
    }

    /// Current snapshot. Unchanged dispatches keep returning the same allocation.
    pub fn state(&self) -> Arc<BoardState> {
        Arc::clone(&self.state)
    }

    pub fn search_term(&self) -> &str {
        &self.filter.search
    }

    pub fn filter(&self) -> &TaskFilter {
        &self.filter
    }

    /// Replace the structured filter. The search term is part of it.
    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    pub fn available_tags(&self) -> &[Tag] {
        self.catalog.tags()
    }

    pub fn catalog(&self) -> &TagCatalog {
        &self.catalog
    }

    /// Tasks visible under the current filter.
    ///
    /// Recomputed only when the state, the filter or (for due-date buckets)
    /// the calendar day has changed since the last call.
    pub fn filtered_tasks(&self) -> Arc<TaskMap> {
        let now = self.clock.now().with_timezone(&self.offset);
        let day = self.filter.due_date.map(|_| now.date_naive());

        let mut memo = self.memo.borrow_mut();
        if let Some(cached) = memo.as_ref() {
            if Arc::ptr_eq(&cached.state, &self.state)
                && cached.filter == self.filter
                && cached.day == day
            {
                return Arc::clone(&cached.tasks);
            }
        }

        let tasks = Arc::new(filter_tasks(&self.state.tasks, &self.filter, now).into_owned());
        tracing::debug!(
            "Filtered view recomputed: {} of {} tasks visible",
            tasks.len(),
            self.state.task_count()
        );
        *memo = Some(FilterMemo {
            state: Arc::clone(&self.state),
            filter: self.filter.clone(),
            day,
            tasks: Arc::clone(&tasks),
        });
        tasks
    }

    pub fn statistics(&self) -> TaskStatistics {
        task_statistics_with(&self.state, self.clock.now(), &self.window)
    }
}
