//! Canonical board snapshot: the task map plus column membership.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use taskboard_core::{BoardError, BoardResult};

use crate::column::Column;
use crate::tag::TagCatalog;
use crate::task::{Task, TaskId, TaskStatus};

/// Task id → task. Ordered so every derived view iterates deterministically.
pub type TaskMap = BTreeMap<TaskId, Task>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    pub tasks: TaskMap,
    pub columns: BTreeMap<TaskStatus, Column>,
    pub column_order: Vec<TaskStatus>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    /// An empty board with the four default columns.
    pub fn new() -> Self {
        Self {
            tasks: TaskMap::new(),
            columns: TaskStatus::ALL
                .iter()
                .map(|status| (*status, Column::new(*status)))
                .collect(),
            column_order: TaskStatus::ALL.to_vec(),
        }
    }

    /// Builds a board by appending each task to its status column in iteration order.
    ///
    /// Later tasks with a repeated id replace earlier ones without duplicating membership.
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut state = Self::new();
        for task in tasks {
            if let Some(previous) = state.tasks.remove(&task.id) {
                if let Some(column) = state.columns.get_mut(&previous.status) {
                    column.remove(previous.id);
                }
            }
            if let Some(column) = state.columns.get_mut(&task.status) {
                column.push(task.id);
            }
            state.tasks.insert(task.id, task);
        }
        state
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    pub fn require_task(&self, id: TaskId) -> BoardResult<&Task> {
        self.task(id)
            .ok_or_else(|| BoardError::NotFound(format!("task {}", id)))
    }

    pub fn column(&self, status: TaskStatus) -> Option<&Column> {
        self.columns.get(&status)
    }

    /// Columns in display order.
    pub fn ordered_columns(&self) -> impl Iterator<Item = &Column> {
        self.column_order
            .iter()
            .filter_map(|status| self.columns.get(status))
    }

    /// Tasks of one column in display order.
    pub fn column_tasks(&self, status: TaskStatus) -> Vec<&Task> {
        self.columns
            .get(&status)
            .map(|column| {
                column
                    .task_ids
                    .iter()
                    .filter_map(|id| self.tasks.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The column whose membership list holds `task_id`.
    pub fn column_of(&self, task_id: TaskId) -> Option<TaskStatus> {
        self.columns
            .values()
            .find(|column| column.contains(task_id))
            .map(|column| column.id)
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Verifies that task records, column membership, completion stamps and
    /// tag references agree. Returns the first violation found.
    pub fn check_invariants(&self, catalog: &TagCatalog) -> BoardResult<()> {
        let order: HashSet<TaskStatus> = self.column_order.iter().copied().collect();
        let keys: HashSet<TaskStatus> = self.columns.keys().copied().collect();
        if order.len() != self.column_order.len() || order != keys {
            return Err(BoardError::Invariant(
                "column order is not a permutation of the columns".to_string(),
            ));
        }

        let mut seen: HashSet<TaskId> = HashSet::new();
        for (status, column) in &self.columns {
            if column.id != *status {
                return Err(BoardError::Invariant(format!(
                    "column keyed {} carries id {}",
                    status, column.id
                )));
            }
            for id in &column.task_ids {
                if !seen.insert(*id) {
                    return Err(BoardError::Invariant(format!(
                        "task {} listed more than once",
                        id
                    )));
                }
                match self.tasks.get(id) {
                    Some(task) if task.status == *status => {}
                    Some(task) => {
                        return Err(BoardError::Invariant(format!(
                            "task {} has status {} but sits in column {}",
                            id, task.status, status
                        )));
                    }
                    None => {
                        return Err(BoardError::Invariant(format!(
                            "column {} lists unknown task {}",
                            status, id
                        )));
                    }
                }
            }
        }

        for (id, task) in &self.tasks {
            if task.id != *id {
                return Err(BoardError::Invariant(format!(
                    "task keyed {} carries id {}",
                    id, task.id
                )));
            }
            if !seen.contains(id) {
                return Err(BoardError::Invariant(format!(
                    "task {} is not in any column",
                    id
                )));
            }
            if task.is_done() != task.completed_at.is_some() {
                return Err(BoardError::Invariant(format!(
                    "task {} completion stamp disagrees with status {}",
                    id, task.status
                )));
            }
            if let Some(tag) = task.tags.iter().find(|t| !catalog.contains(t.id)) {
                return Err(BoardError::Invariant(format!(
                    "task {} references unknown tag {}",
                    id, tag.name
                )));
            }
        }

        Ok(())
    }
}
