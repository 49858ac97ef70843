#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod history;
mod journal;
mod name;
mod user;
mod workout;

pub use error::{CreateError, DeleteError, ReadError, StorageError};
pub use history::WorkoutHistory;
pub use journal::{JournalRepository, JournalService, Service};
pub use name::{Name, NameError};
pub use user::{User, UserID};
pub use workout::{DateError, Exercise, Set, Workout};
