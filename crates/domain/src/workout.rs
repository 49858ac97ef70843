use std::fmt;

use chrono::{Local, NaiveDate};

/// A completed repetition block at a fixed weight.
///
/// Reps and weight are taken as given. Range checks on user input belong to
/// the layer that collects it, not to the record model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Set {
    reps: u32,
    weight: u32,
}

impl Set {
    #[must_use]
    pub fn new(reps: u32, weight: u32) -> Self {
        Self { reps, weight }
    }

    #[must_use]
    pub fn reps(&self) -> u32 {
        self.reps
    }

    #[must_use]
    pub fn weight(&self) -> u32 {
        self.weight
    }
}

/// A named movement performed as an ordered sequence of sets.
///
/// Sets are appended in performance order and never reordered. The name is
/// not validated here (see [`Set`] on the input trust boundary).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    name: String,
    sets: Vec<Set>,
}

impl Exercise {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sets: vec![],
        }
    }

    pub fn add_set(&mut self, set: Set) {
        self.sets.push(set);
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn sets(&self) -> &[Set] {
        &self.sets
    }

    /// Volume lifted in this exercise: reps × weight summed over all sets.
    #[must_use]
    pub fn total_weight(&self) -> u32 {
        self.sets.iter().map(|s| s.reps * s.weight).sum()
    }
}

/// A dated training session containing an ordered sequence of exercises.
///
/// Exercise order is the chronological performance order, never sorted.
/// Equality is structural and order-sensitive at every level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    date: NaiveDate,
    exercises: Vec<Exercise>,
}

impl Workout {
    /// Creates a workout dated today in the local calendar.
    #[must_use]
    pub fn new() -> Self {
        Self::on_date(Local::now().date_naive())
    }

    #[must_use]
    pub fn on_date(date: NaiveDate) -> Self {
        Self {
            date,
            exercises: vec![],
        }
    }

    /// Creates a workout from an ISO 8601 calendar date string.
    pub fn from_date_str(date: &str) -> Result<Self, DateError> {
        Ok(Self::on_date(date.parse::<NaiveDate>()?))
    }

    pub fn add_exercise(&mut self, exercise: Exercise) {
        self.exercises.push(exercise);
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    #[must_use]
    pub fn total_weight(&self) -> u32 {
        self.exercises.iter().map(Exercise::total_weight).sum()
    }

    #[must_use]
    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.sets().len()).sum()
    }
}

impl Default for Workout {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Workout {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: {} exercises, {} sets",
            self.date,
            self.exercises.len(),
            self.total_sets()
        )
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DateError {
    #[error("Date must be a calendar date in ISO 8601 format ({0})")]
    Unparseable(#[from] chrono::ParseError),
}
