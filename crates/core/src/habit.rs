//! Daily habits and streak tracking.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::serde::deserialize_optional_string;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HabitError {
    #[error("Please provide a name for the habit")]
    EmptyName,
    #[error("Habit already completed today")]
    AlreadyCompletedToday,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    /// Consecutive days completed, ending at `last_completed_date`.
    pub streak: u32,
    pub longest_streak: u32,
    pub last_completed_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Habit {
    pub fn new(user_id: Uuid, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            description: String::new(),
            streak: 0,
            longest_streak: 0,
            last_completed_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Marks the habit done for `today`.
    ///
    /// A completion the day after the previous one extends the streak; any
    /// longer gap restarts it at 1. Completing twice on the same day fails.
    pub fn complete(&mut self, today: NaiveDate) -> Result<(), HabitError> {
        match self.last_completed_date {
            Some(last) if last == today => return Err(HabitError::AlreadyCompletedToday),
            Some(last) if today.pred_opt() == Some(last) => self.streak += 1,
            _ => self.streak = 1,
        }
        self.longest_streak = self.longest_streak.max(self.streak);
        self.last_completed_date = Some(today);
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn is_completed_on(&self, day: NaiveDate) -> bool {
        self.last_completed_date == Some(day)
    }
}

/// Request payload for creating a habit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateHabitRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
}

impl CreateHabitRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn into_habit(self, user_id: Uuid) -> Result<Habit, HabitError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(HabitError::EmptyName);
        }
        let habit = Habit::new(user_id, name);
        Ok(match self.description {
            Some(description) => habit.with_description(description),
            None => habit,
        })
    }
}

/// Request payload for updating a habit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateHabitRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UpdateHabitRequest {
    pub fn apply_to(self, habit: &mut Habit) -> Result<(), HabitError> {
        if let Some(name) = self.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(HabitError::EmptyName);
            }
            habit.name = name.to_string();
        }
        if let Some(description) = self.description {
            habit.description = description.trim().to_string();
        }
        habit.updated_at = Utc::now();
        Ok(())
    }
}
