use chrono::NaiveDate;
use log::{debug, error};

use crate::{CreateError, DeleteError, ReadError, UserID, Workout};

/// Journal operations as offered to the presentation layer.
#[allow(async_fn_in_trait)]
pub trait JournalService: Send + Sync + 'static {
    async fn get_workouts(&self, user_id: UserID) -> Result<Vec<Workout>, ReadError>;
    async fn log_workout(
        &self,
        user_id: UserID,
        workout: Workout,
    ) -> Result<Workout, CreateError>;
    async fn discard_workout(
        &self,
        user_id: UserID,
        date: NaiveDate,
    ) -> Result<NaiveDate, DeleteError>;
}

/// Storage seam for the journal.
///
/// Implementations own the on-disk or remote representation; the domain only
/// requires that the full workout object graph is materialized on read.
#[allow(async_fn_in_trait)]
pub trait JournalRepository: Send + Sync + 'static {
    async fn read_workouts(&self, user_id: UserID) -> Result<Vec<Workout>, ReadError>;
    async fn create_workout(
        &self,
        user_id: UserID,
        workout: Workout,
    ) -> Result<Workout, CreateError>;
    async fn delete_workout(
        &self,
        user_id: UserID,
        date: NaiveDate,
    ) -> Result<NaiveDate, DeleteError>;
}

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: JournalRepository> JournalService for Service<R> {
    async fn get_workouts(&self, user_id: UserID) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(
            self.repository.read_workouts(user_id),
            ReadError,
            "get",
            "workouts"
        )
    }

    async fn log_workout(
        &self,
        user_id: UserID,
        workout: Workout,
    ) -> Result<Workout, CreateError> {
        log_on_error!(
            self.repository.create_workout(user_id, workout),
            CreateError,
            "log",
            "workout"
        )
    }

    async fn discard_workout(
        &self,
        user_id: UserID,
        date: NaiveDate,
    ) -> Result<NaiveDate, DeleteError> {
        log_on_error!(
            self.repository.delete_workout(user_id, date),
            DeleteError,
            "discard",
            "workout"
        )
    }
}
