#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error("unknown user")]
    UnknownUser,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum CreateError {
    #[error("conflict")]
    Conflict,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum DeleteError {
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_from_storage_error() {
        assert!(matches!(
            ReadError::from(StorageError::NoConnection),
            ReadError::Storage(StorageError::NoConnection)
        ));
        assert!(matches!(
            ReadError::from(StorageError::Other("foo".into())),
            ReadError::Storage(StorageError::Other(error)) if error.to_string() == "foo"
        ));
    }

    #[test]
    fn test_create_error_from_storage_error() {
        assert!(matches!(
            CreateError::from(StorageError::NoConnection),
            CreateError::Storage(StorageError::NoConnection)
        ));
    }

    #[test]
    fn test_delete_error_from_storage_error() {
        assert!(matches!(
            DeleteError::from(StorageError::NoConnection),
            DeleteError::Storage(StorageError::NoConnection)
        ));
    }
}
