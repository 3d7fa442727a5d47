//! Event payloads dispatched by achievements
//!
//! Every event carries one typed payload, so a handler's signature is
//! checked by the compiler instead of failing at dispatch time when the
//! argument shapes drift apart. The payload variant determines the
//! canonical event name it is dispatched under.

use serde::{Deserialize, Serialize};

use crate::achievement::AchievementId;

/// Event name fired once per achieved transition.
pub const ON_ACHIEVED: &str = "on_achieved";

/// Event name fired on every successful increment while unachieved.
pub const ON_INCREMENT: &str = "on_increment";

/// Identity and display snapshot of an achievement.
///
/// This is what `on_achieved` handlers receive: a cloneable view of the
/// achievement that unlocked, detached from its live state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementInfo {
    /// Unique id of the achievement
    pub id: AchievementId,
    /// Short string identifier (e.g. "collector")
    pub name: String,
    /// Display title
    pub title: String,
    /// Display caption describing the goal
    pub caption: String,
}

/// Payload dispatched through the event bus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    /// An achievement crossed into the achieved state.
    Achieved(AchievementInfo),
    /// An incremental achievement made progress; carries the new value
    /// as it stood right after the addition, before any clamping.
    Increment { value: f64 },
}

impl Event {
    /// The canonical event name this payload is dispatched under.
    pub fn name(&self) -> &'static str {
        match self {
            Event::Achieved(_) => ON_ACHIEVED,
            Event::Increment { .. } => ON_INCREMENT,
        }
    }
}
