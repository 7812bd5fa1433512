//! Board state transitions.
//!
//! `reduce` is the only place board state changes. It never mutates its input:
//! a successful mutation yields a fresh `BoardState`, and actions that refer
//! to missing tasks or columns yield `Transition::Unchanged`. Inputs that would
//! break column membership or tag references are rejected with an error and
//! nothing is applied.

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use taskboard_core::{BoardError, BoardResult};

use crate::action::TaskAction;
use crate::board::BoardState;
use crate::column::Column;
use crate::tag::TagCatalog;
use crate::task::{SubtaskId, Task, TaskId, TaskStatus};

/// Outcome of applying one action.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Unchanged,
    Changed(BoardState),
}

impl Transition {
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }
}

/// Apply `action` to `state` as of `now`.
pub fn reduce(
    state: &BoardState,
    action: &TaskAction,
    catalog: &TagCatalog,
    now: DateTime<Utc>,
) -> BoardResult<Transition> {
    match action {
        TaskAction::AddTask(task) => add_task(state, task, catalog, now),
        TaskAction::UpdateTask(task) => update_task(state, task, catalog, now),
        TaskAction::DeleteTask(id) => Ok(delete_task(state, *id)),
        TaskAction::MoveTask {
            task_id,
            source,
            destination,
            new_index,
        } => Ok(move_task(state, *task_id, *source, *destination, *new_index, now)),
        TaskAction::UpdateSubtask {
            task_id,
            subtask_id,
            completed,
        } => Ok(update_subtask(state, *task_id, *subtask_id, *completed, now)),
        TaskAction::SetSearchTerm(_) => Ok(Transition::Unchanged),
    }
}

fn add_task(
    state: &BoardState,
    task: &Task,
    catalog: &TagCatalog,
    now: DateTime<Utc>,
) -> BoardResult<Transition> {
    if state.tasks.contains_key(&task.id) {
        return Err(BoardError::Validation(format!(
            "task {} already exists",
            task.id
        )));
    }
    validate_tags(task, catalog)?;

    let mut next = state.clone();
    column_mut(&mut next, task.status)?.push(task.id);

    let mut task = task.clone();
    task.normalize_completion(now);
    next.tasks.insert(task.id, task);
    Ok(Transition::Changed(next))
}

fn update_task(
    state: &BoardState,
    task: &Task,
    catalog: &TagCatalog,
    now: DateTime<Utc>,
) -> BoardResult<Transition> {
    let Some(old) = state.tasks.get(&task.id) else {
        tracing::debug!("Ignoring update for unknown task {}", task.id);
        return Ok(Transition::Unchanged);
    };
    validate_tags(task, catalog)?;

    let mut next = state.clone();
    if old.status != task.status {
        column_mut(&mut next, task.status)?.push(task.id);
        column_mut(&mut next, old.status)?.remove(task.id);
    }

    let mut task = task.clone();
    task.normalize_completion(now);
    next.tasks.insert(task.id, task);
    Ok(Transition::Changed(next))
}

fn delete_task(state: &BoardState, id: TaskId) -> Transition {
    let Some(task) = state.tasks.get(&id) else {
        tracing::debug!("Ignoring delete for unknown task {}", id);
        return Transition::Unchanged;
    };

    let mut next = state.clone();
    if let Some(column) = next.columns.get_mut(&task.status) {
        column.remove(id);
    }
    next.tasks.remove(&id);
    Transition::Changed(next)
}

fn move_task(
    state: &BoardState,
    task_id: TaskId,
    source: TaskStatus,
    destination: TaskStatus,
    new_index: usize,
    now: DateTime<Utc>,
) -> Transition {
    let (Some(task), Some(source_col), Some(_)) = (
        state.tasks.get(&task_id),
        state.columns.get(&source),
        state.columns.get(&destination),
    ) else {
        tracing::debug!(
            "Ignoring move of task {} between {} and {}: unknown task or column",
            task_id,
            source,
            destination
        );
        return Transition::Unchanged;
    };
    if !source_col.contains(task_id) {
        tracing::debug!("Ignoring move: task {} is not in column {}", task_id, source);
        return Transition::Unchanged;
    }

    let mut next = state.clone();

    if source == destination {
        let Some(column) = next.columns.get_mut(&source) else {
            return Transition::Unchanged;
        };
        column.remove(task_id);
        column.insert(new_index, task_id);
        if column.task_ids == source_col.task_ids {
            return Transition::Unchanged;
        }
        return Transition::Changed(next);
    }

    if let Some(column) = next.columns.get_mut(&source) {
        column.remove(task_id);
    }
    if let Some(column) = next.columns.get_mut(&destination) {
        column.insert(new_index, task_id);
    }

    next.tasks.insert(task_id, task.clone().transition_to(destination, now));
    Transition::Changed(next)
}

fn update_subtask(
    state: &BoardState,
    task_id: TaskId,
    subtask_id: SubtaskId,
    completed: bool,
    now: DateTime<Utc>,
) -> Transition {
    let Some(subtasks) = state.tasks.get(&task_id).and_then(|t| t.subtasks.as_ref()) else {
        return Transition::Unchanged;
    };
    if !subtasks.iter().any(|s| s.id == subtask_id) {
        tracing::debug!("Ignoring update for unknown subtask {}", subtask_id);
        return Transition::Unchanged;
    }

    let mut next = state.clone();
    if let Some(task) = next.tasks.get_mut(&task_id) {
        if let Some(subtask) = task
            .subtasks
            .as_mut()
            .and_then(|list| list.iter_mut().find(|s| s.id == subtask_id))
        {
            subtask.completed = completed;
        }
        task.updated_at = now;
    }
    Transition::Changed(next)
}

fn column_mut(state: &mut BoardState, status: TaskStatus) -> BoardResult<&mut Column> {
    state
        .columns
        .get_mut(&status)
        .ok_or_else(|| BoardError::Validation(format!("no column for status {}", status)))
}

fn validate_tags(task: &Task, catalog: &TagCatalog) -> BoardResult<()> {
    let mut seen = HashSet::new();
    for tag in &task.tags {
        if !seen.insert(tag.id) {
            return Err(BoardError::Validation(format!(
                "tag '{}' attached twice to task {}",
                tag.name, task.id
            )));
        }
        if !catalog.contains(tag.id) {
            return Err(BoardError::Validation(format!(
                "tag '{}' is not in the catalog",
                tag.name
            )));
        }
    }
    Ok(())
}
