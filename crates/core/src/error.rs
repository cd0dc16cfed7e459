/// Domain error taxonomy shared by the repository and API layers.
///
/// Validation failures are raised before any storage access; the remaining
/// variants classify outcomes observed inside the booking transaction.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A booking requested more seats than the slot has left. Carries the
    /// authoritative remaining count observed under the row lock so callers
    /// can show it to the user.
    #[error("Not enough seats available. Only {remaining} remaining.")]
    InsufficientCapacity { remaining: i32 },

    #[error("Conflict: {0}")]
    Conflict(String),

    /// The store transaction exceeded its lock or statement deadline.
    /// Retryable by the caller.
    #[error("Transaction timed out: {0}")]
    Timeout(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
