//! Base achievement: a named goal that can be unlocked once
//!
//! An achievement claims its id from the [`IdRegistry`] at construction and
//! releases it on drop, so ids are unique among live achievements and become
//! reusable afterwards. Unlocking dispatches [`ON_ACHIEVED`] through the
//! shared [`EventBus`] before the achieved flag is set: if a handler fails,
//! the achievement stays unachieved and the caller can retry.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::bus::EventBus;
use crate::error::Result;
use crate::event::{AchievementInfo, Event, ON_ACHIEVED};
use crate::registry::IdRegistry;

/// Identifier for an achievement, unique among live achievements
pub type AchievementId = u64;

/// A goal a player can reach exactly once.
#[derive(Debug)]
pub struct Achievement {
    id: AchievementId,
    name: String,
    title: String,
    caption: String,
    achieved: bool,
    achieved_at: Option<DateTime<Utc>>,
    bus: Arc<EventBus>,
    ids: Arc<IdRegistry>,
}

impl Achievement {
    /// Create an achievement, claiming `id` from the registry.
    ///
    /// Fails with [`AchievementError::DuplicateId`] when another live
    /// achievement already holds the id.
    ///
    /// [`AchievementError::DuplicateId`]: crate::error::AchievementError::DuplicateId
    pub fn new(
        bus: Arc<EventBus>,
        ids: Arc<IdRegistry>,
        id: AchievementId,
        name: impl Into<String>,
        title: impl Into<String>,
        caption: impl Into<String>,
    ) -> Result<Self> {
        ids.claim(id)?;
        Ok(Achievement {
            id,
            name: name.into(),
            title: title.into(),
            caption: caption.into(),
            achieved: false,
            achieved_at: None,
            bus,
            ids,
        })
    }

    pub fn id(&self) -> AchievementId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn achieved(&self) -> bool {
        self.achieved
    }

    /// When the achievement was unlocked, if it has been
    pub fn achieved_at(&self) -> Option<DateTime<Utc>> {
        self.achieved_at
    }

    /// The bus this achievement dispatches through
    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    /// Snapshot of the identifying fields, as carried by dispatched events
    pub fn info(&self) -> AchievementInfo {
        AchievementInfo {
            id: self.id,
            name: self.name.clone(),
            title: self.title.clone(),
            caption: self.caption.clone(),
        }
    }

    /// Mark the achievement as achieved, notifying `on_achieved` handlers.
    ///
    /// Already-achieved is a silent no-op: handlers are notified at most
    /// once. The dispatch happens before the flag flips, so a handler error
    /// leaves the achievement unachieved.
    pub fn set_achieved(&mut self) -> Result<()> {
        if self.achieved {
            return Ok(());
        }
        self.bus.dispatch_event(ON_ACHIEVED, &Event::Achieved(self.info()))?;
        self.achieved = true;
        self.achieved_at = Some(Utc::now());
        info!("achievement '{}' unlocked", self.name);
        Ok(())
    }

    /// Clear the achieved state so the achievement can be earned again
    pub(crate) fn clear_achieved(&mut self) {
        self.achieved = false;
        self.achieved_at = None;
    }
}

impl Drop for Achievement {
    fn drop(&mut self) {
        self.ids.release(self.id);
    }
}
