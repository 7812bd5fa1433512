use serde::{Deserialize, Serialize};

use crate::task::{SubtaskId, Task, TaskId, TaskStatus};

/// Every mutation a consumer can request from the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskAction {
    AddTask(Task),
    UpdateTask(Task),
    DeleteTask(TaskId),
    #[serde(rename_all = "camelCase")]
    MoveTask {
        task_id: TaskId,
        #[serde(rename = "sourceColId")]
        source: TaskStatus,
        #[serde(rename = "destColId")]
        destination: TaskStatus,
        new_index: usize,
    },
    #[serde(rename_all = "camelCase")]
    UpdateSubtask {
        task_id: TaskId,
        subtask_id: SubtaskId,
        completed: bool,
    },
    SetSearchTerm(String),
}

impl TaskAction {
    /// Human-readable description of what this action does
    pub fn description(&self) -> String {
        match self {
            Self::AddTask(task) => format!("Add task: '{}'", task.title),
            Self::UpdateTask(task) => format!("Update task {}", task.id),
            Self::DeleteTask(id) => format!("Delete task {}", id),
            Self::MoveTask {
                task_id,
                source,
                destination,
                new_index,
            } => format!(
                "Move task {} from {} to {} at {}",
                task_id, source, destination, new_index
            ),
            Self::UpdateSubtask {
                task_id,
                subtask_id,
                completed,
            } => format!(
                "Mark subtask {} of task {} {}",
                subtask_id,
                task_id,
                if *completed { "complete" } else { "incomplete" }
            ),
            Self::SetSearchTerm(term) => format!("Search for '{}'", term),
        }
    }
}
