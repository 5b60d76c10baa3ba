//! To-do list with checklists.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::serde::{deserialize_optional_date, deserialize_optional_string};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("Please provide a title for the task")]
    EmptyTitle,
    #[error("Subtask text is required")]
    EmptySubtaskText,
    #[error("Subtask not found")]
    SubtaskNotFound,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Completed,
    OnHold,
    Archived,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtask {
    pub id: Uuid,
    pub text: String,
    pub is_completed: bool,
}

impl Subtask {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            is_completed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    pub subtasks: Vec<Subtask>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(user_id: Uuid, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: title.into(),
            description: String::new(),
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            due_date: None,
            completed_date: None,
            subtasks: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Completing stamps `completed_date` once; any other status clears it.
    pub fn set_status(&mut self, status: TaskStatus, today: NaiveDate) {
        if status == TaskStatus::Completed {
            self.completed_date.get_or_insert(today);
        } else {
            self.completed_date = None;
        }
        self.status = status;
    }

    pub fn add_subtask(&mut self, text: &str) -> Result<&Subtask, TaskError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::EmptySubtaskText);
        }
        self.subtasks.push(Subtask::new(text));
        self.updated_at = Utc::now();
        Ok(&self.subtasks[self.subtasks.len() - 1])
    }

    pub fn subtask_mut(&mut self, subtask_id: Uuid) -> Result<&mut Subtask, TaskError> {
        self.subtasks
            .iter_mut()
            .find(|s| s.id == subtask_id)
            .ok_or(TaskError::SubtaskNotFound)
    }

    pub fn remove_subtask(&mut self, subtask_id: Uuid) -> Result<Subtask, TaskError> {
        let index = self
            .subtasks
            .iter()
            .position(|s| s.id == subtask_id)
            .ok_or(TaskError::SubtaskNotFound)?;
        self.updated_at = Utc::now();
        Ok(self.subtasks.remove(index))
    }
}

/// Due date ascending with undated tasks last, then newest first.
pub fn sort_tasks(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| {
        let by_due = match (a.due_date, b.due_date) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_due.then_with(|| b.created_at.cmp(&a.created_at))
    });
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub subtasks: Vec<String>,
}

impl CreateTaskRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn into_task(self, user_id: Uuid, today: NaiveDate) -> Result<Task, TaskError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        let mut task = Task::new(user_id, title);
        task.description = self.description.unwrap_or_default();
        task.priority = self.priority.unwrap_or_default();
        task.due_date = self.due_date;
        task.set_status(self.status.unwrap_or_default(), today);
        for text in &self.subtasks {
            task.add_subtask(text)?;
        }
        Ok(task)
    }
}

/// A subtask as sent in a full task update. Entries whose `id` matches an
/// existing subtask keep that id; anything else becomes a new subtask.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtaskInput {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub is_completed: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<NaiveDate>,
    /// Replaces the whole checklist when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtasks: Option<Vec<SubtaskInput>>,
}

impl UpdateTaskRequest {
    pub fn apply_to(self, task: &mut Task, today: NaiveDate) -> Result<(), TaskError> {
        let mut updated = task.clone();
        if let Some(title) = self.title {
            let title = title.trim();
            if title.is_empty() {
                return Err(TaskError::EmptyTitle);
            }
            updated.title = title.to_string();
        }
        if let Some(description) = self.description {
            updated.description = description.trim().to_string();
        }
        if let Some(priority) = self.priority {
            updated.priority = priority;
        }
        if self.due_date.is_some() {
            updated.due_date = self.due_date;
        }
        if let Some(status) = self.status {
            if status != updated.status {
                updated.set_status(status, today);
            }
        }
        if let Some(inputs) = self.subtasks {
            let mut subtasks = Vec::with_capacity(inputs.len());
            for input in inputs {
                let text = input.text.trim();
                if text.is_empty() {
                    return Err(TaskError::EmptySubtaskText);
                }
                let id = input
                    .id
                    .filter(|id| task.subtasks.iter().any(|s| s.id == *id))
                    .unwrap_or_else(Uuid::new_v4);
                subtasks.push(Subtask {
                    id,
                    text: text.to_string(),
                    is_completed: input.is_completed,
                });
            }
            updated.subtasks = subtasks;
        }
        updated.updated_at = Utc::now();
        *task = updated;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddSubtaskRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubtaskRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub text: Option<String>,
    #[serde(default)]
    pub is_completed: Option<bool>,
}

impl UpdateSubtaskRequest {
    pub fn apply_to(self, task: &mut Task, subtask_id: Uuid) -> Result<(), TaskError> {
        let subtask = task.subtask_mut(subtask_id)?;
        if let Some(text) = self.text {
            subtask.text = text;
        }
        if let Some(done) = self.is_completed {
            subtask.is_completed = done;
        }
        task.updated_at = Utc::now();
        Ok(())
    }
}
