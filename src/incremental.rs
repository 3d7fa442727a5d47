//! Incremental achievement: progress accumulates toward a goal
//!
//! Each successful [`increment`] dispatches [`ON_INCREMENT`] with the new
//! progress value before clamping, so handlers see the raw cumulative sum.
//! When the sum reaches or exceeds the goal the value is clamped to the goal
//! exactly and the achievement unlocks through the base [`set_achieved`].
//!
//! [`increment`]: IncrementalAchievement::increment
//! [`set_achieved`]: Achievement::set_achieved

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::achievement::{Achievement, AchievementId};
use crate::bus::EventBus;
use crate::error::Result;
use crate::event::{AchievementInfo, Event, ON_INCREMENT};
use crate::registry::IdRegistry;

/// An achievement earned by accumulating progress up to a goal.
#[derive(Debug)]
pub struct IncrementalAchievement {
    inner: Achievement,
    goal: f64,
    current: f64,
}

impl IncrementalAchievement {
    /// Create an incremental achievement with progress starting at zero.
    ///
    /// Claims `id` like [`Achievement::new`] and fails the same way on a
    /// duplicate.
    pub fn new(
        bus: Arc<EventBus>,
        ids: Arc<IdRegistry>,
        id: AchievementId,
        name: impl Into<String>,
        title: impl Into<String>,
        caption: impl Into<String>,
        goal: f64,
    ) -> Result<Self> {
        Ok(IncrementalAchievement {
            inner: Achievement::new(bus, ids, id, name, title, caption)?,
            goal,
            current: 0.0,
        })
    }

    /// Add `delta` to the progress, notifying `on_increment` handlers.
    ///
    /// Already-achieved is a silent no-op. Otherwise the new cumulative
    /// value is dispatched as-is; when it reaches or exceeds the goal it is
    /// clamped to the goal exactly and the achievement unlocks. A handler
    /// error propagates with the state reflecting the steps that completed
    /// before it: a failed `on_increment` leaves the sum unclamped, a failed
    /// `on_achieved` leaves the value clamped but the achievement locked.
    pub fn increment(&mut self, delta: f64) -> Result<()> {
        if self.inner.achieved() {
            return Ok(());
        }
        self.current += delta;
        self.inner
            .bus()
            .dispatch_event(ON_INCREMENT, &Event::Increment { value: self.current })?;
        if self.current >= self.goal {
            self.current = self.goal;
            self.inner.set_achieved()?;
        }
        Ok(())
    }

    /// Clear all progress and reopen the achievement.
    ///
    /// A later crossing fires `on_achieved` again. Dispatches nothing
    /// itself.
    pub fn reset(&mut self) {
        self.current = 0.0;
        self.inner.clear_achieved();
    }

    /// Current progress value
    pub fn value(&self) -> f64 {
        self.current
    }

    /// Progress value at which the achievement unlocks
    pub fn goal(&self) -> f64 {
        self.goal
    }

    /// Progress toward the goal in percent
    pub fn percentage(&self) -> f64 {
        100.0 * self.current / self.goal
    }

    pub fn id(&self) -> AchievementId {
        self.inner.id()
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn title(&self) -> &str {
        self.inner.title()
    }

    pub fn caption(&self) -> &str {
        self.inner.caption()
    }

    pub fn achieved(&self) -> bool {
        self.inner.achieved()
    }

    pub fn achieved_at(&self) -> Option<DateTime<Utc>> {
        self.inner.achieved_at()
    }

    pub fn info(&self) -> AchievementInfo {
        self.inner.info()
    }

    /// Unlock directly, bypassing the progress counter
    pub fn set_achieved(&mut self) -> Result<()> {
        self.inner.set_achieved()
    }
}
