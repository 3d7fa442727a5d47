//! Accolade - in-process achievement tracking
//!
//! Accolade models goals a player or process can complete ("achievements")
//! and notifies listeners through a lightweight event bus when one unlocks.
//! The bus holds listeners weakly: registering a handler never keeps it
//! alive, and dropping your handle is all it takes to unsubscribe.
//!
//! ## Achievement kinds
//!
//! 1. **[`Achievement`]**: a boolean goal, unlocked by a single call.
//!
//! 2. **[`IncrementalAchievement`]**: progress accumulates toward a goal;
//!    every increment is announced, the crossing unlocks.
//!
//! 3. **[`TimeBasedAchievement`]**: unlocked by two ticks landing within a
//!    rate window, measured on the monotonic clock.
//!
//! ## Usage
//!
//! ```
//! use accolade::{handler, AchievementManager, Event, ON_ACHIEVED};
//!
//! # fn main() -> accolade::Result<()> {
//! let manager = AchievementManager::new();
//! let mut collector =
//!     manager.incremental(1, "collector", "Collector", "Collect five gems", 5.0)?;
//!
//! let on_achieved = handler(|event: &Event| {
//!     if let Event::Achieved(info) = event {
//!         println!("unlocked: {}", info.title);
//!     }
//!     Ok(())
//! });
//! manager.bus().set_handler(ON_ACHIEVED, &on_achieved);
//!
//! collector.increment(2.0)?;
//! collector.increment(3.0)?;
//! assert!(collector.achieved());
//! # Ok(())
//! # }
//! ```

pub mod achievement;
pub mod bus;
pub mod error;
pub mod event;
pub mod incremental;
pub mod manager;
pub mod registry;
pub mod time_based;

pub use achievement::{Achievement, AchievementId};
pub use bus::{EventBus, Handler, handler};
pub use error::{AchievementError, HandlerError, Result};
pub use event::{AchievementInfo, Event, ON_ACHIEVED, ON_INCREMENT};
pub use incremental::IncrementalAchievement;
pub use manager::AchievementManager;
pub use registry::IdRegistry;
pub use time_based::TimeBasedAchievement;
