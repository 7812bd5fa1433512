use serde::{Deserialize, Serialize};

use crate::task::{TaskId, TaskStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: TaskStatus,
    pub title: String,
    /// Display order within the column.
    pub task_ids: Vec<TaskId>,
}

impl Column {
    pub fn new(id: TaskStatus) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            task_ids: Vec::new(),
        }
    }

    pub fn position_of(&self, task_id: TaskId) -> Option<usize> {
        self.task_ids.iter().position(|id| *id == task_id)
    }

    pub fn contains(&self, task_id: TaskId) -> bool {
        self.position_of(task_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.task_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }

    pub(crate) fn push(&mut self, task_id: TaskId) {
        self.task_ids.push(task_id);
    }

    /// Removes `task_id`, returning the index it occupied.
    pub(crate) fn remove(&mut self, task_id: TaskId) -> Option<usize> {
        let index = self.position_of(task_id)?;
        self.task_ids.remove(index);
        Some(index)
    }

    /// Inserts at `index`, clamped to the end of the list.
    pub(crate) fn insert(&mut self, index: usize, task_id: TaskId) {
        let index = index.min(self.task_ids.len());
        self.task_ids.insert(index, task_id);
    }
}
