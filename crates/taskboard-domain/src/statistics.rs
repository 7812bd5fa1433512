//! Aggregate counts over a board snapshot.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use taskboard_core::{AppConfig, BoardError, BoardResult};

use crate::board::BoardState;
use crate::task::{Task, TaskPriority, TaskStatus};

/// Time windows used by the statistics engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatisticsWindow {
    /// Open tasks due within this span from now count as due soon.
    pub due_soon: Duration,
    /// Completed tasks finished within this span count as recent.
    pub recent_completed: Duration,
    pub recent_limit: usize,
}

impl Default for StatisticsWindow {
    fn default() -> Self {
        Self {
            due_soon: Duration::hours(48),
            recent_completed: Duration::days(7),
            recent_limit: 5,
        }
    }
}

impl StatisticsWindow {
    pub fn from_config(config: &AppConfig) -> BoardResult<Self> {
        config.validate().map_err(BoardError::Validation)?;
        let hours = config.effective_due_soon_hours();
        let days = config.effective_recent_completed_days();
        Ok(Self {
            due_soon: Duration::try_hours(hours).ok_or_else(|| {
                BoardError::Validation(format!("due soon window of {} hours is out of range", hours))
            })?,
            recent_completed: Duration::try_days(days).ok_or_else(|| {
                BoardError::Validation(format!("recent window of {} days is out of range", days))
            })?,
            recent_limit: config.effective_recent_completed_limit(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnCount {
    pub status: TaskStatus,
    pub title: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatistics {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub due_soon_tasks: usize,
    pub overdue_tasks: usize,
    pub tasks_by_status: BTreeMap<TaskStatus, usize>,
    pub tasks_by_priority: BTreeMap<TaskPriority, usize>,
    /// Most recently updated first.
    pub recently_completed_tasks: Vec<Task>,
    /// Membership count per column, in display order.
    pub column_counts: Vec<ColumnCount>,
}

impl TaskStatistics {
    /// Completed share of all tasks as a rounded percentage; 0 for an empty board.
    pub fn completion_rate(&self) -> u32 {
        if self.total_tasks == 0 {
            return 0;
        }
        (self.completed_tasks as f64 * 100.0 / self.total_tasks as f64).round() as u32
    }
}

pub fn is_due_soon(task: &Task, now: DateTime<Utc>, window: Duration) -> bool {
    if task.is_done() {
        return false;
    }
    task.due_date.is_some_and(|due| {
        let remaining = due - now;
        remaining > Duration::zero() && remaining <= window
    })
}

pub fn is_overdue(task: &Task, now: DateTime<Utc>) -> bool {
    !task.is_done() && task.due_date.is_some_and(|due| due < now)
}

/// Statistics with the default windows (48 hours, 7 days, 5 tasks).
pub fn task_statistics(state: &BoardState, now: DateTime<Utc>) -> TaskStatistics {
    task_statistics_with(state, now, &StatisticsWindow::default())
}

pub fn task_statistics_with(
    state: &BoardState,
    now: DateTime<Utc>,
    window: &StatisticsWindow,
) -> TaskStatistics {
    let tasks = state.tasks.values();

    let mut tasks_by_status: BTreeMap<TaskStatus, usize> =
        TaskStatus::ALL.iter().map(|s| (*s, 0)).collect();
    let mut tasks_by_priority: BTreeMap<TaskPriority, usize> =
        TaskPriority::ALL.iter().map(|p| (*p, 0)).collect();
    let mut due_soon_tasks = 0;
    let mut overdue_tasks = 0;

    for task in tasks.clone() {
        *tasks_by_status.entry(task.status).or_default() += 1;
        *tasks_by_priority.entry(task.priority).or_default() += 1;
        if is_due_soon(task, now, window.due_soon) {
            due_soon_tasks += 1;
        }
        if is_overdue(task, now) {
            overdue_tasks += 1;
        }
    }

    let recent_cutoff = now
        .checked_sub_signed(window.recent_completed)
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    let mut recently_completed_tasks: Vec<Task> = tasks
        .filter(|t| t.is_done() && t.completed_at.is_some_and(|at| at > recent_cutoff))
        .cloned()
        .collect();
    recently_completed_tasks.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    recently_completed_tasks.truncate(window.recent_limit);

    let column_counts = state
        .ordered_columns()
        .map(|column| ColumnCount {
            status: column.id,
            title: column.title.clone(),
            count: column.len(),
        })
        .collect();

    TaskStatistics {
        total_tasks: state.task_count(),
        completed_tasks: tasks_by_status
            .get(&TaskStatus::Done)
            .copied()
            .unwrap_or_default(),
        due_soon_tasks,
        overdue_tasks,
        tasks_by_status,
        tasks_by_priority,
        recently_completed_tasks,
        column_counts,
    }
}
