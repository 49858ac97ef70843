use derive_more::Deref;
use uuid::Uuid;

use crate::{Name, Workout, WorkoutHistory};

/// An account together with its owned workout journal.
///
/// The identity layer creates users and seeds their workouts from storage;
/// the domain only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserID,
    pub name: Name,
    pub workouts: Vec<Workout>,
}

impl User {
    /// A query view over this user's workouts.
    #[must_use]
    pub fn history(&self) -> WorkoutHistory<'_> {
        WorkoutHistory::new(&self.workouts)
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UserID(Uuid);

impl UserID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for UserID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for UserID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use crate::{Exercise, Set};

    use super::*;

    #[test]
    fn test_user_id_nil() {
        assert!(UserID::nil().is_nil());
        assert_eq!(UserID::nil(), UserID::default());
        assert!(!UserID::new().is_nil());
    }

    #[test]
    fn test_user_history() {
        let date = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
        let mut workout = Workout::on_date(date);
        let mut bench = Exercise::new("Bench Press");
        bench.add_set(Set::new(4, 130));
        workout.add_exercise(bench);

        let user = User {
            id: 1.into(),
            name: Name::new("tester").unwrap(),
            workouts: vec![workout],
        };

        assert_eq!(user.history().personal_record("Bench Press"), 130);
        assert_eq!(user.history().unique_dates(), vec![date]);
    }
}
