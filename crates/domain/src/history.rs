use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::{Exercise, Set, Workout};

/// Derived views over a snapshot of workouts.
///
/// The snapshot is borrowed read-only and never mutated. Every query is
/// recomputed from the snapshot on each call, so results stay consistent for
/// the lifetime of the borrow regardless of call order. The workouts may be
/// supplied in any order; queries impose their own ordering.
#[derive(Debug, Clone, Copy)]
pub struct WorkoutHistory<'a> {
    workouts: &'a [Workout],
}

impl<'a> WorkoutHistory<'a> {
    #[must_use]
    pub fn new(workouts: &'a [Workout]) -> Self {
        Self { workouts }
    }

    /// All workouts sorted by date, most recent first.
    ///
    /// Workouts on the same date keep their relative input order.
    #[must_use]
    pub fn most_recent_workouts(&self) -> Vec<Workout> {
        let mut workouts = self.workouts.to_vec();
        workouts.sort_by_key(|w| std::cmp::Reverse(w.date()));
        workouts
    }

    /// Groups all exercises across all workouts by their exact name.
    ///
    /// Within a group, exercises appear in encounter order: workouts in input
    /// order, each workout's exercises in performance order.
    #[must_use]
    pub fn exercises_by_name(&self) -> BTreeMap<String, Vec<Exercise>> {
        let mut groups: BTreeMap<String, Vec<Exercise>> = BTreeMap::new();
        for workout in self.workouts {
            for exercise in workout.exercises() {
                groups
                    .entry(exercise.name().to_string())
                    .or_default()
                    .push(exercise.clone());
            }
        }
        groups
    }

    /// All exercises named `name`, in encounter order (see
    /// [`exercises_by_name`](Self::exercises_by_name)).
    #[must_use]
    pub fn exercises_named(&self, name: &str) -> Vec<Exercise> {
        self.workouts
            .iter()
            .flat_map(Workout::exercises)
            .filter(|e| e.name() == name)
            .cloned()
            .collect()
    }

    /// The heaviest single set ever logged for `name`.
    ///
    /// Returns 0 if no exercise matches. The sentinel is indistinguishable
    /// from a matching exercise whose sets were all logged at weight 0;
    /// callers that need the distinction must check
    /// [`exercises_named`](Self::exercises_named) first.
    #[must_use]
    pub fn personal_record(&self, name: &str) -> u32 {
        self.workouts
            .iter()
            .flat_map(Workout::exercises)
            .filter(|e| e.name() == name)
            .flat_map(Exercise::sets)
            .map(Set::weight)
            .max()
            .unwrap_or(0)
    }

    /// The heaviest single set logged under `exercise`'s name on `date`.
    ///
    /// Same 0 sentinel as [`personal_record`](Self::personal_record).
    #[must_use]
    pub fn personal_record_on_date(&self, exercise: &Exercise, date: NaiveDate) -> u32 {
        self.workouts
            .iter()
            .filter(|w| w.date() == date)
            .flat_map(Workout::exercises)
            .filter(|e| e.name() == exercise.name())
            .flat_map(Exercise::sets)
            .map(Set::weight)
            .max()
            .unwrap_or(0)
    }

    /// Summed total weight of all workouts on `date`, 0 if there are none.
    #[must_use]
    pub fn total_weight_on_date(&self, date: NaiveDate) -> u32 {
        self.workouts
            .iter()
            .filter(|w| w.date() == date)
            .map(Workout::total_weight)
            .sum()
    }

    /// The distinct workout dates, most recent first.
    #[must_use]
    pub fn unique_dates(&self) -> Vec<NaiveDate> {
        self.workouts
            .iter()
            .map(Workout::date)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .rev()
            .collect()
    }

    /// Summed total weight per distinct workout date.
    ///
    /// Contains one entry for each date in [`unique_dates`](Self::unique_dates),
    /// with the same value [`total_weight_on_date`](Self::total_weight_on_date)
    /// reports for that date.
    #[must_use]
    pub fn weight_per_date(&self) -> BTreeMap<NaiveDate, u32> {
        let mut totals: BTreeMap<NaiveDate, u32> = BTreeMap::new();
        for workout in self.workouts {
            *totals.entry(workout.date()).or_insert(0) += workout.total_weight();
        }
        totals
    }
}
