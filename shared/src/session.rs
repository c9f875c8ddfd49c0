//! Workout session stepper
//!
//! Client-local state machine for playing a workout one exercise at a
//! time: `Idle -> InProgress -> Completed`. Finishing produces a
//! [`CompletedWorkout`] ready to be posted as a workout log entry.
//! Abandoning a session drops it without producing anything.
//!
//! Only one session can be in progress: `start` while another session is
//! running is rejected, and the caller must `abandon` it first.
//!
//! Time is passed in by the caller so the machine stays deterministic.

use crate::models::{Exercise, WorkoutDefinition};
use crate::types::LogWorkoutRequest;
use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// Errors from driving a session out of order
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("A workout session is already in progress")]
    AlreadyActive,

    #[error("No workout session in progress")]
    NotActive,

    #[error("Workout has no exercises")]
    EmptyWorkout,
}

/// Session state
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    InProgress {
        workout: WorkoutDefinition,
        index: usize,
        started_at: DateTime<FixedOffset>,
    },
    Completed(CompletedWorkout),
}

/// Outcome of one `advance`
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Moved to the exercise at this index
    Next(usize),
    /// The last exercise was done and the session is finished
    Finished(CompletedWorkout),
}

/// A finished session, not yet persisted
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedWorkout {
    pub workout_id: String,
    /// Whole minutes, rounded down
    pub duration_minutes: u32,
    /// The definition's estimate, not a measurement
    pub calories_burned: f64,
    pub exercises: Vec<Exercise>,
    pub finished_at: DateTime<FixedOffset>,
}

impl CompletedWorkout {
    /// Request body for `POST /workouts/log`
    pub fn to_log_request(&self) -> LogWorkoutRequest {
        LogWorkoutRequest {
            workout_id: self.workout_id.clone(),
            duration: self.duration_minutes,
            calories_burned: self.calories_burned,
            exercises: self.exercises.clone(),
            date: Some(self.finished_at),
        }
    }
}

/// Drives a single workout session
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSession {
    state: SessionState,
}

impl Default for WorkoutSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::InProgress { .. })
    }

    /// Begin a workout at its first exercise
    pub fn start(
        &mut self,
        workout: WorkoutDefinition,
        now: DateTime<FixedOffset>,
    ) -> Result<(), SessionError> {
        if self.is_active() {
            return Err(SessionError::AlreadyActive);
        }
        if workout.exercises.is_empty() {
            return Err(SessionError::EmptyWorkout);
        }
        self.state = SessionState::InProgress {
            workout,
            index: 0,
            started_at: now,
        };
        Ok(())
    }

    /// Exercise currently being performed
    pub fn current_exercise(&self) -> Option<&Exercise> {
        match &self.state {
            SessionState::InProgress { workout, index, .. } => workout.exercises.get(*index),
            _ => None,
        }
    }

    /// `(current index, exercise count)` while in progress
    pub fn progress(&self) -> Option<(usize, usize)> {
        match &self.state {
            SessionState::InProgress { workout, index, .. } => {
                Some((*index, workout.exercises.len()))
            }
            _ => None,
        }
    }

    /// Move to the next exercise, or finish after the last one
    pub fn advance(&mut self, now: DateTime<FixedOffset>) -> Result<Advance, SessionError> {
        let (workout, index, started_at) = match &mut self.state {
            SessionState::InProgress {
                workout,
                index,
                started_at,
            } => (workout, index, *started_at),
            _ => return Err(SessionError::NotActive),
        };

        if *index + 1 < workout.exercises.len() {
            *index += 1;
            return Ok(Advance::Next(*index));
        }

        let minutes = (now - started_at).num_minutes().max(0);
        let completed = CompletedWorkout {
            workout_id: workout.id.clone(),
            duration_minutes: u32::try_from(minutes).unwrap_or(u32::MAX),
            calories_burned: workout.calories_estimate,
            exercises: workout.exercises.clone(),
            finished_at: now,
        };
        self.state = SessionState::Completed(completed.clone());
        Ok(Advance::Finished(completed))
    }

    /// Exit without logging anything
    pub fn abandon(&mut self) {
        self.state = SessionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, WorkoutCategory};
    use chrono::{Duration, TimeZone, Utc};

    fn workout(exercise_count: usize) -> WorkoutDefinition {
        WorkoutDefinition {
            id: "2".to_string(),
            name: "Cardio Blast".to_string(),
            category: WorkoutCategory::Cardio,
            duration: 20,
            difficulty: Difficulty::Intermediate,
            calories_estimate: 300.0,
            exercises: (0..exercise_count)
                .map(|i| Exercise {
                    name: format!("Move {}", i),
                    reps: Some(10),
                    sets: Some(3),
                    duration: None,
                })
                .collect(),
        }
    }

    fn t0() -> DateTime<FixedOffset> {
        Utc.with_ymd_and_hms(2026, 10, 16, 7, 0, 0)
            .unwrap()
            .fixed_offset()
    }

    #[test]
    fn test_full_session_produces_log() {
        let mut session = WorkoutSession::new();
        session.start(workout(3), t0()).unwrap();
        assert_eq!(session.progress(), Some((0, 3)));
        assert_eq!(session.current_exercise().unwrap().name, "Move 0");

        assert_eq!(session.advance(t0()).unwrap(), Advance::Next(1));
        assert_eq!(session.advance(t0()).unwrap(), Advance::Next(2));

        let end = t0() + Duration::seconds(19 * 60 + 59);
        let done = match session.advance(end).unwrap() {
            Advance::Finished(done) => done,
            other => panic!("expected finish, got {:?}", other),
        };

        assert_eq!(done.duration_minutes, 19);
        assert_eq!(done.calories_burned, 300.0);
        assert_eq!(done.exercises.len(), 3);
        assert!(matches!(session.state(), SessionState::Completed(_)));

        let req = done.to_log_request();
        assert_eq!(req.workout_id, "2");
        assert_eq!(req.duration, 19);
        assert_eq!(req.date, Some(end));
    }

    #[test]
    fn test_single_exercise_finishes_on_first_advance() {
        let mut session = WorkoutSession::new();
        session.start(workout(1), t0()).unwrap();
        assert!(matches!(
            session.advance(t0()).unwrap(),
            Advance::Finished(_)
        ));
    }

    #[test]
    fn test_second_start_is_rejected_while_active() {
        let mut session = WorkoutSession::new();
        session.start(workout(2), t0()).unwrap();
        assert_eq!(
            session.start(workout(2), t0()),
            Err(SessionError::AlreadyActive)
        );

        session.abandon();
        assert!(session.start(workout(2), t0()).is_ok());
    }

    #[test]
    fn test_restart_after_completion_is_allowed() {
        let mut session = WorkoutSession::new();
        session.start(workout(1), t0()).unwrap();
        session.advance(t0()).unwrap();
        assert!(session.start(workout(1), t0()).is_ok());
    }

    #[test]
    fn test_abandon_discards_progress() {
        let mut session = WorkoutSession::new();
        session.start(workout(3), t0()).unwrap();
        session.advance(t0()).unwrap();
        session.abandon();

        assert_eq!(session.state(), &SessionState::Idle);
        assert_eq!(session.advance(t0()), Err(SessionError::NotActive));
    }

    #[test]
    fn test_empty_workout_cannot_start() {
        let mut session = WorkoutSession::new();
        assert_eq!(
            session.start(workout(0), t0()),
            Err(SessionError::EmptyWorkout)
        );
    }

    #[test]
    fn test_clock_skew_never_gives_negative_duration() {
        let mut session = WorkoutSession::new();
        session.start(workout(1), t0()).unwrap();
        let earlier = t0() - Duration::minutes(5);
        match session.advance(earlier).unwrap() {
            Advance::Finished(done) => assert_eq!(done.duration_minutes, 0),
            other => panic!("expected finish, got {:?}", other),
        }
    }
}
