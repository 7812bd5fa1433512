use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use taskboard_domain::{
    reduce, sample_board, sample_tags, BoardState, TaskAction, Task, TaskId, TaskStatus,
    Transition, TagCatalog,
};
use uuid::Uuid;

#[derive(Clone, Debug)]
enum BoardOp {
    Add { status: usize, tags: Vec<usize> },
    Update { pick: usize, status: usize },
    Delete { pick: Option<usize> },
    Move { pick: usize, wrong_source: bool, destination: usize, index: usize },
    ToggleSubtask { pick: usize, subtask: usize, completed: bool },
}

fn op_strategy() -> impl Strategy<Value = BoardOp> {
    prop_oneof![
        (0..4usize, prop::collection::vec(0..6usize, 0..3))
            .prop_map(|(status, tags)| BoardOp::Add { status, tags }),
        (any::<usize>(), 0..4usize).prop_map(|(pick, status)| BoardOp::Update { pick, status }),
        prop::option::of(any::<usize>()).prop_map(|pick| BoardOp::Delete { pick }),
        (any::<usize>(), any::<bool>(), 0..4usize, 0..12usize).prop_map(
            |(pick, wrong_source, destination, index)| BoardOp::Move {
                pick,
                wrong_source,
                destination,
                index,
            }
        ),
        (any::<usize>(), 0..5usize, any::<bool>()).prop_map(|(pick, subtask, completed)| {
            BoardOp::ToggleSubtask {
                pick,
                subtask,
                completed,
            }
        }),
    ]
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 2, 10, 0, 0).unwrap()
}

fn pick_task(state: &BoardState, pick: usize) -> Option<&Task> {
    if state.tasks.is_empty() {
        return None;
    }
    state.tasks.values().nth(pick % state.tasks.len())
}

fn to_action(state: &BoardState, catalog: &TagCatalog, op: &BoardOp, step: i64) -> TaskAction {
    let unknown: TaskId = Uuid::new_v4();
    match op {
        BoardOp::Add { status, tags } => {
            // Index 5 is outside the catalog and must be rejected.
            let tags = tags
                .iter()
                .map(|i| {
                    catalog
                        .tags()
                        .get(*i)
                        .cloned()
                        .unwrap_or_else(|| taskboard_domain::Tag::new("Rogue".into(), "#000000".into()))
                })
                .collect();
            let task = Task::new(format!("task {}", step), now())
                .with_tags(tags)
                .with_status(TaskStatus::ALL[*status]);
            TaskAction::AddTask(task)
        }
        BoardOp::Update { pick, status } => match pick_task(state, *pick) {
            Some(task) => {
                let mut edited = task.clone();
                edited.status = TaskStatus::ALL[*status];
                edited.title = format!("{} (edited)", task.title);
                TaskAction::UpdateTask(edited)
            }
            None => TaskAction::UpdateTask(Task::new("ghost", now())),
        },
        BoardOp::Delete { pick } => {
            let id = pick
                .and_then(|p| pick_task(state, p))
                .map_or(unknown, |t| t.id);
            TaskAction::DeleteTask(id)
        }
        BoardOp::Move {
            pick,
            wrong_source,
            destination,
            index,
        } => {
            let (task_id, source) = match pick_task(state, *pick) {
                Some(task) => (task.id, task.status),
                None => (unknown, TaskStatus::Todo),
            };
            let source = if *wrong_source {
                TaskStatus::ALL[(source as usize + 1) % 4]
            } else {
                source
            };
            TaskAction::MoveTask {
                task_id,
                source,
                destination: TaskStatus::ALL[*destination],
                new_index: *index,
            }
        }
        BoardOp::ToggleSubtask {
            pick,
            subtask,
            completed,
        } => {
            let task = pick_task(state, *pick);
            let subtask_id = task
                .and_then(|t| t.subtasks.as_ref())
                .and_then(|s| s.get(*subtask))
                .map_or(unknown, |s| s.id);
            TaskAction::UpdateSubtask {
                task_id: task.map_or(unknown, |t| t.id),
                subtask_id,
                completed: *completed,
            }
        }
    }
}

proptest! {
    #[test]
    fn invariants_hold_after_any_action_sequence(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let catalog = sample_tags();
        let mut state = sample_board(now());

        for (step, op) in ops.iter().enumerate() {
            let at = now() + Duration::minutes(step as i64);
            let action = to_action(&state, &catalog, op, step as i64);
            match reduce(&state, &action, &catalog, at) {
                Ok(Transition::Changed(next)) => state = next,
                Ok(Transition::Unchanged) => {}
                Err(e) => prop_assert!(e.is_rejection(), "unexpected error: {}", e),
            }
            let checked = state.check_invariants(&catalog);
            prop_assert!(checked.is_ok(), "{:?} broke the board: {:?}", action, checked);
        }
    }

    #[test]
    fn move_and_move_back_restores_columns(pick in any::<usize>(), destination in 0..4usize, index in 0..10usize) {
        let catalog = sample_tags();
        let original = sample_board(now());
        let task = pick_task(&original, pick).unwrap();
        let source = task.status;
        let position = original.column(source).unwrap().position_of(task.id).unwrap();
        let destination = TaskStatus::ALL[destination];

        let there = TaskAction::MoveTask {
            task_id: task.id,
            source,
            destination,
            new_index: index,
        };
        let moved = match reduce(&original, &there, &catalog, now()).unwrap() {
            Transition::Changed(next) => next,
            Transition::Unchanged => original.clone(),
        };

        let back = TaskAction::MoveTask {
            task_id: task.id,
            source: destination,
            destination: source,
            new_index: position,
        };
        let restored = match reduce(&moved, &back, &catalog, now()).unwrap() {
            Transition::Changed(next) => next,
            Transition::Unchanged => moved.clone(),
        };

        prop_assert_eq!(&restored.columns, &original.columns);
        prop_assert_eq!(restored.task(task.id).unwrap().status, source);
    }

    #[test]
    fn delete_removes_task_everywhere(pick in any::<usize>()) {
        let catalog = sample_tags();
        let state = sample_board(now());
        let id = pick_task(&state, pick).unwrap().id;

        let next = match reduce(&state, &TaskAction::DeleteTask(id), &catalog, now()).unwrap() {
            Transition::Changed(next) => next,
            Transition::Unchanged => panic!("deleting an existing task must change the board"),
        };

        prop_assert!(next.task(id).is_none());
        prop_assert!(next.columns.values().all(|c| !c.contains(id)));
        prop_assert_eq!(next.task_count(), state.task_count() - 1);
    }
}
