//! Seed data for a fresh board.
//!
//! Ids are fixed so that scripts and tests can address sample tasks; all
//! timestamps are relative to the `now` passed in.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::board::BoardState;
use crate::tag::{Tag, TagCatalog};
use crate::task::{Subtask, Task, TaskPriority, TaskStatus};

const TAG_BASE: u128 = 0x7a9b_0000_0000_4000_8000_0000_0000_0000;
const TASK_BASE: u128 = 0x7a9b_0000_0000_4000_8000_0001_0000_0000;
const SUBTASK_BASE: u128 = 0x7a9b_0000_0000_4000_8000_0002_0000_0000;

pub fn sample_tag_id(n: u128) -> Uuid {
    Uuid::from_u128(TAG_BASE + n)
}

/// Id of the `n`th sample task, numbered from 1.
pub fn sample_task_id(n: u128) -> Uuid {
    Uuid::from_u128(TASK_BASE + n)
}

pub fn sample_tags() -> TagCatalog {
    TagCatalog::new(vec![
        Tag::with_id(sample_tag_id(1), "Frontend", "#3B82F6"),
        Tag::with_id(sample_tag_id(2), "Backend", "#10B981"),
        Tag::with_id(sample_tag_id(3), "Bug", "#EF4444"),
        Tag::with_id(sample_tag_id(4), "Feature", "#8B5CF6"),
        Tag::with_id(sample_tag_id(5), "Documentation", "#F59E0B"),
    ])
}

fn subtasks(task: u128, count: u128, now: DateTime<Utc>) -> Vec<Subtask> {
    (0..count)
        .map(|i| Subtask {
            id: Uuid::from_u128(SUBTASK_BASE + task * 0x100 + i),
            title: format!("Subtask {}", i + 1),
            completed: i % 2 == 0,
            created_at: now - Duration::days((i as i64 * 3) % 10),
        })
        .collect()
}

struct Seed {
    n: u128,
    title: &'static str,
    description: &'static str,
    status: TaskStatus,
    priority: TaskPriority,
    tags: &'static [u128],
    created_days_ago: i64,
    updated_days_ago: i64,
    due_in_days: Option<i64>,
    subtasks: u128,
}

const SEEDS: [Seed; 7] = [
    Seed {
        n: 1,
        title: "Implement user authentication",
        description: "Create login, registration, and password recovery flows",
        status: TaskStatus::Todo,
        priority: TaskPriority::High,
        tags: &[1, 2],
        created_days_ago: 7,
        updated_days_ago: 3,
        due_in_days: Some(3),
        subtasks: 3,
    },
    Seed {
        n: 2,
        title: "Design dashboard layout",
        description: "Create wireframes and mockups for the main dashboard",
        status: TaskStatus::InProgress,
        priority: TaskPriority::Medium,
        tags: &[1, 5],
        created_days_ago: 5,
        updated_days_ago: 1,
        due_in_days: None,
        subtasks: 2,
    },
    Seed {
        n: 3,
        title: "Fix navigation bug on mobile",
        description: "The menu doesn't close after selection on mobile devices",
        status: TaskStatus::Todo,
        priority: TaskPriority::High,
        tags: &[1, 3],
        created_days_ago: 3,
        updated_days_ago: 1,
        due_in_days: Some(1),
        subtasks: 0,
    },
    Seed {
        n: 4,
        title: "Implement API integration",
        description: "Connect frontend with backend APIs",
        status: TaskStatus::InProgress,
        priority: TaskPriority::High,
        tags: &[1, 2],
        created_days_ago: 4,
        updated_days_ago: 1,
        due_in_days: None,
        subtasks: 4,
    },
    Seed {
        n: 5,
        title: "Write API documentation",
        description: "Document all API endpoints with examples",
        status: TaskStatus::Review,
        priority: TaskPriority::Low,
        tags: &[2, 5],
        created_days_ago: 6,
        updated_days_ago: 2,
        due_in_days: None,
        subtasks: 1,
    },
    Seed {
        n: 6,
        title: "Optimize database queries",
        description: "Improve the performance of slow database queries",
        status: TaskStatus::Done,
        priority: TaskPriority::Medium,
        tags: &[2],
        created_days_ago: 10,
        updated_days_ago: 2,
        due_in_days: None,
        subtasks: 2,
    },
    Seed {
        n: 7,
        title: "Create visual style guide",
        description: "Document colors, typography, and component styles",
        status: TaskStatus::Done,
        priority: TaskPriority::Medium,
        tags: &[1, 5],
        created_days_ago: 12,
        updated_days_ago: 5,
        due_in_days: None,
        subtasks: 3,
    },
];

/// Seven tasks spread over the four default columns.
pub fn sample_tasks(now: DateTime<Utc>) -> Vec<Task> {
    let catalog = sample_tags();
    SEEDS
        .iter()
        .map(|seed| {
            let tags = seed
                .tags
                .iter()
                .filter_map(|n| catalog.get(sample_tag_id(*n)).cloned())
                .collect();
            let mut task = Task::new(seed.title, now - Duration::days(seed.created_days_ago))
                .with_id(sample_task_id(seed.n))
                .with_description(seed.description)
                .with_priority(seed.priority)
                .with_tags(tags)
                .with_updated_at(now - Duration::days(seed.updated_days_ago))
                .with_status(seed.status)
                .with_subtasks(subtasks(seed.n, seed.subtasks, now));
            if let Some(days) = seed.due_in_days {
                task = task.with_due_date(now + Duration::days(days));
            }
            task
        })
        .collect()
}

pub fn sample_board(now: DateTime<Utc>) -> BoardState {
    BoardState::from_tasks(sample_tasks(now))
}
