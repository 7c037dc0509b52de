/// Failure kinds reported by the repositories.
///
/// Only "no rows" is interpreted; every other driver error is carried
/// opaquely in [`StoreError::Storage`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The row does not exist or belongs to another user.
    #[error("record not found")]
    RecordNotFound,

    /// The row's version moved on since the caller fetched it.
    #[error("unable to update the record due to an edit conflict, please try again")]
    EditConflict,

    #[error("Database error: {0}")]
    Storage(#[from] sqlx::Error),
}
