//! Time-based achievement: unlocked by two ticks close enough together
//!
//! The caller reports occurrences of some recurring action via [`tick`];
//! when a tick lands within `rate` of the previous one (or of construction,
//! for the first tick) the achievement unlocks. Elapsed time is measured on
//! the monotonic clock, so wall-clock adjustments cannot grant or deny it.
//!
//! [`tick`]: TimeBasedAchievement::tick

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::achievement::{Achievement, AchievementId};
use crate::bus::EventBus;
use crate::error::Result;
use crate::event::AchievementInfo;
use crate::registry::IdRegistry;

/// An achievement earned by performing an action fast enough twice in a row.
#[derive(Debug)]
pub struct TimeBasedAchievement {
    inner: Achievement,
    rate: Duration,
    last_tick: Instant,
}

impl TimeBasedAchievement {
    /// Create a time-based achievement; the first tick is measured against
    /// the construction time.
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
        rate: Duration,
    ) -> Result<Self> {
        Ok(TimeBasedAchievement {
            inner: Achievement::new(bus, ids, id, name, title, caption)?,
            rate,
            last_tick: Instant::now(),
        })
    }

    /// Record one occurrence of the tracked action.
    ///
    /// Already-achieved is a silent no-op. Otherwise, if no more than `rate`
    /// has elapsed since the previous tick the achievement unlocks, then the
    /// tick time is recorded either way. A handler error during the unlock
    /// propagates without recording the tick, so the next call measures from
    /// the previous one.
    pub fn tick(&mut self) -> Result<()> {
        if self.inner.achieved() {
            return Ok(());
        }
        let now = Instant::now();
        if now.duration_since(self.last_tick) <= self.rate {
            self.inner.set_achieved()?;
        }
        self.last_tick = now;
        Ok(())
    }

    /// Longest gap between ticks that still unlocks the achievement
    pub fn rate(&self) -> Duration {
        self.rate
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

    /// Unlock directly, bypassing the tick clock
    pub fn set_achieved(&mut self) -> Result<()> {
        self.inner.set_achieved()
    }
}
