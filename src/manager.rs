//! Shared context for a family of achievements
//!
//! Bundles one [`EventBus`] and one [`IdRegistry`] and constructs
//! achievements wired to both. Cloning a manager shares the pair, so clones
//! see each other's handlers and id claims; separate managers are fully
//! isolated, which keeps tests and embedded subsystems from stepping on one
//! another.

use std::sync::Arc;
use std::time::Duration;

use crate::achievement::{Achievement, AchievementId};
use crate::bus::EventBus;
use crate::error::Result;
use crate::incremental::IncrementalAchievement;
use crate::registry::IdRegistry;
use crate::time_based::TimeBasedAchievement;

/// Constructs achievements that share one event bus and one id domain.
#[derive(Debug, Clone)]
pub struct AchievementManager {
    bus: Arc<EventBus>,
    ids: Arc<IdRegistry>,
}

impl AchievementManager {
    /// Create a manager with a fresh bus and an empty id domain
    pub fn new() -> Self {
        AchievementManager {
            bus: Arc::new(EventBus::new()),
            ids: Arc::new(IdRegistry::new()),
        }
    }

    /// The bus shared by this manager's achievements
    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    /// The id domain shared by this manager's achievements
    pub fn ids(&self) -> &Arc<IdRegistry> {
        &self.ids
    }

    /// Create a plain achievement wired to this manager
    pub fn achievement(
        &self,
        id: AchievementId,
        name: impl Into<String>,
        title: impl Into<String>,
        caption: impl Into<String>,
    ) -> Result<Achievement> {
        Achievement::new(self.bus.clone(), self.ids.clone(), id, name, title, caption)
    }

    /// Create an incremental achievement wired to this manager
    pub fn incremental(
        &self,
        id: AchievementId,
        name: impl Into<String>,
        title: impl Into<String>,
        caption: impl Into<String>,
        goal: f64,
    ) -> Result<IncrementalAchievement> {
        IncrementalAchievement::new(
            self.bus.clone(),
            self.ids.clone(),
            id,
            name,
            title,
            caption,
            goal,
        )
    }

    /// Create a time-based achievement wired to this manager
    pub fn time_based(
        &self,
        id: AchievementId,
        name: impl Into<String>,
        title: impl Into<String>,
        caption: impl Into<String>,
        rate: Duration,
    ) -> Result<TimeBasedAchievement> {
        TimeBasedAchievement::new(
            self.bus.clone(),
            self.ids.clone(),
            id,
            name,
            title,
            caption,
            rate,
        )
    }
}

impl Default for AchievementManager {
    fn default() -> Self {
        Self::new()
    }
}
