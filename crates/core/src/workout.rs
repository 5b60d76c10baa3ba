//! Workout logs: sessions made of exercise performances.
//!
//! Logging a session pays XP and Gatilla Gold per exercise. Bulk imports
//! are all-or-nothing and pay nothing.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::progression::{Currency, Reward};
use crate::serde::{deserialize_optional_date, deserialize_optional_string};

pub const DEFAULT_WORKOUT_NAME: &str = "Workout Session";

/// XP granted per logged exercise.
pub const XP_PER_EXERCISE: u64 = 15;

/// Gatilla Gold granted per logged exercise.
pub const GOLD_PER_EXERCISE: u64 = 1;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("A workout log must contain at least one exercise.")]
    NoExercises,
    #[error("Each exercise needs a name")]
    EmptyExerciseName,
    #[error("{field} cannot be negative")]
    NegativeMetric { field: &'static str },
    #[error("No workout logs to import")]
    EmptyImport,
    #[error("Workout {index}: {error}")]
    InvalidImport {
        index: usize,
        error: Box<WorkoutError>,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
    Bodyweight,
    Band,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Km,
    Miles,
    Meters,
    Laps,
}

/// How the session felt overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feeling {
    Great,
    Good,
    Okay,
    Meh,
    Tough,
    Exhausted,
    Nauseous,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSet {
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub weight_unit: WeightUnit,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub notes: Option<String>,
}

/// One exercise within a session. Strength work fills `sets`, cardio fills
/// the distance and duration fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePerformance {
    #[serde(default)]
    pub exercise_name: String,
    #[serde(default)]
    pub sets: Vec<ExerciseSet>,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub distance_unit: Option<DistanceUnit>,
    #[serde(default)]
    pub duration_exercise_minutes: Option<u32>,
    #[serde(default)]
    pub calories_burned: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub notes: Option<String>,
}

impl ExercisePerformance {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            exercise_name: name.into(),
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), WorkoutError> {
        if self.exercise_name.trim().is_empty() {
            return Err(WorkoutError::EmptyExerciseName);
        }
        if self.distance.is_some_and(|d| d < 0.0) {
            return Err(WorkoutError::NegativeMetric { field: "distance" });
        }
        if self.sets.iter().any(|set| set.weight.is_some_and(|w| w < 0.0)) {
            return Err(WorkoutError::NegativeMetric { field: "weight" });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub workout_name: String,
    pub duration_session_minutes: Option<u32>,
    pub exercises: Vec<ExercisePerformance>,
    pub overall_feeling: Option<Feeling>,
    pub notes_session: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkoutLog {
    pub fn new(user_id: Uuid, date: NaiveDate, exercises: Vec<ExercisePerformance>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            date,
            workout_name: DEFAULT_WORKOUT_NAME.to_string(),
            duration_session_minutes: None,
            exercises,
            overall_feeling: None,
            notes_session: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> Result<(), WorkoutError> {
        if self.exercises.is_empty() {
            return Err(WorkoutError::NoExercises);
        }
        self.exercises.iter().try_for_each(ExercisePerformance::validate)
    }

    /// What logging this session pays out.
    pub fn reward(&self) -> Reward {
        let count = self.exercises.len() as u64;
        Reward {
            xp: XP_PER_EXERCISE * count,
            currency: Currency::GatillaGold,
            amount: GOLD_PER_EXERCISE * count,
        }
    }
}

/// Request payload for logging a workout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutRequest {
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub workout_name: Option<String>,
    #[serde(default)]
    pub duration_session_minutes: Option<u32>,
    #[serde(default)]
    pub exercises: Vec<ExercisePerformance>,
    #[serde(default)]
    pub overall_feeling: Option<Feeling>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub notes_session: Option<String>,
}

impl CreateWorkoutRequest {
    pub fn new(exercises: Vec<ExercisePerformance>) -> Self {
        Self {
            exercises,
            ..Self::default()
        }
    }

    /// Builds the log. A missing date means `today`.
    pub fn into_workout(self, user_id: Uuid, today: NaiveDate) -> Result<WorkoutLog, WorkoutError> {
        let mut log = WorkoutLog::new(user_id, self.date.unwrap_or(today), self.exercises);
        if let Some(name) = self.workout_name {
            log.workout_name = name;
        }
        log.duration_session_minutes = self.duration_session_minutes;
        log.overall_feeling = self.overall_feeling;
        log.notes_session = self.notes_session.unwrap_or_default();
        for exercise in &mut log.exercises {
            exercise.exercise_name = exercise.exercise_name.trim().to_string();
        }
        log.validate()?;
        Ok(log)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkoutRequest {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_session_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercises: Option<Vec<ExercisePerformance>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_feeling: Option<Feeling>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes_session: Option<String>,
}

impl UpdateWorkoutRequest {
    /// On validation failure `log` is left untouched.
    pub fn apply_to(self, log: &mut WorkoutLog) -> Result<(), WorkoutError> {
        let mut updated = log.clone();
        if let Some(date) = self.date {
            updated.date = date;
        }
        if let Some(name) = self.workout_name {
            let name = name.trim();
            updated.workout_name = if name.is_empty() {
                DEFAULT_WORKOUT_NAME.to_string()
            } else {
                name.to_string()
            };
        }
        if self.duration_session_minutes.is_some() {
            updated.duration_session_minutes = self.duration_session_minutes;
        }
        if let Some(exercises) = self.exercises {
            updated.exercises = exercises;
        }
        if self.overall_feeling.is_some() {
            updated.overall_feeling = self.overall_feeling;
        }
        if let Some(notes) = self.notes_session {
            updated.notes_session = notes.trim().to_string();
        }
        updated.validate()?;
        updated.updated_at = Utc::now();
        *log = updated;
        Ok(())
    }
}

/// Payload for `POST /api/workouts/bulk-import`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulkImportRequest {
    #[serde(default)]
    pub logs: Vec<CreateWorkoutRequest>,
}

impl BulkImportRequest {
    /// Validates every entry before building any; the first failure names
    /// its 1-based position.
    pub fn into_workouts(
        self,
        user_id: Uuid,
        today: NaiveDate,
    ) -> Result<Vec<WorkoutLog>, WorkoutError> {
        if self.logs.is_empty() {
            return Err(WorkoutError::EmptyImport);
        }
        self.logs
            .into_iter()
            .enumerate()
            .map(|(i, req)| {
                req.into_workout(user_id, today)
                    .map_err(|err| WorkoutError::InvalidImport {
                        index: i + 1,
                        error: Box::new(err),
                    })
            })
            .collect()
    }
}
