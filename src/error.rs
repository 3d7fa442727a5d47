//! Error types for achievement construction and event dispatch

use crate::achievement::AchievementId;

/// Boxed error returned by a failing event handler.
///
/// Handlers report failures with whatever error type they like; the bus
/// wraps the box with the event name before propagating it.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Error type for the achievement library
#[derive(Debug, thiserror::Error)]
pub enum AchievementError {
    /// An achievement id is already claimed by a live instance.
    #[error("achievement id {0} is already in use")]
    DuplicateId(AchievementId),

    /// A handler returned an error during dispatch.
    ///
    /// Dispatch stops at the first failing handler; handlers registered
    /// after it are not invoked for that event.
    #[error("handler for '{event}' failed: {source}")]
    Handler {
        event: String,
        #[source]
        source: HandlerError,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AchievementError>;
