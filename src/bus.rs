//! Event bus with weakly-held handlers
//!
//! Decouples achievement state changes from listener code without giving
//! the bus ownership of the listeners: handlers are stored as `Weak`
//! references, so registering one never extends its lifetime. Callers keep
//! the `Arc<Handler>`; dropping it unsubscribes. Dead handles are pruned
//! lazily whenever the bus touches that event's entry, and an entry is
//! deleted the moment it empties — a name never maps to an empty set.
//!
//! Handlers run outside the registry lock, so a handler may register,
//! remove, or dispatch through the same bus while handling an event.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, Weak};

use tracing::{debug, trace};

use crate::error::{AchievementError, HandlerError, Result};
use crate::event::Event;

/// Listener callable invoked with the dispatched payload.
///
/// A handler that returns an error stops the dispatch: handlers registered
/// after it are not invoked for that event, and the error propagates to
/// whoever triggered the dispatch (`increment`, `tick`, `set_achieved`, or
/// a direct `dispatch_event` call).
pub type Handler = dyn Fn(&Event) -> std::result::Result<(), HandlerError> + Send + Sync;

/// Wrap a closure into a shareable handler handle.
///
/// The returned `Arc` is the subscription: keep it alive for as long as the
/// handler should receive events.
pub fn handler<F>(func: F) -> Arc<Handler>
where
    F: Fn(&Event) -> std::result::Result<(), HandlerError> + Send + Sync + 'static,
{
    Arc::new(func)
}

/// Dispatches named events to all live handlers registered for the name.
#[derive(Default)]
pub struct EventBus {
    /// Map of event name to weakly-held handlers, in registration order
    registry: Mutex<HashMap<String, Vec<Weak<Handler>>>>,
}

impl EventBus {
    /// Create a new, empty event bus
    pub fn new() -> Self {
        EventBus {
            registry: Mutex::new(HashMap::new()),
        }
    }

    /// Register a handler for the named event.
    ///
    /// Only a weak reference is kept: the bus is never the reason a handler
    /// stays alive. Registering the same handle twice under one name is a
    /// no-op.
    pub fn set_handler(&self, name: impl Into<String>, func: &Arc<Handler>) {
        let name = name.into();
        debug!("set handler for '{}'", name);
        let weak = Arc::downgrade(func);
        let mut registry = self.registry.lock().expect("lock");
        let entries = registry.entry(name).or_default();
        if !entries.iter().any(|existing| existing.ptr_eq(&weak)) {
            entries.push(weak);
        }
    }

    /// Unregister a handler from the named event.
    ///
    /// Silent no-op when the name has no entry or the handler was never
    /// registered under it.
    pub fn remove_handler(&self, name: &str, func: &Arc<Handler>) {
        debug!("remove handler for '{}'", name);
        let weak = Arc::downgrade(func);
        let mut registry = self.registry.lock().expect("lock");
        let Some(entries) = registry.get_mut(name) else {
            return;
        };
        entries.retain(|existing| !existing.ptr_eq(&weak));
        if entries.is_empty() {
            registry.remove(name);
            trace!("deleted empty handler entry for '{}'", name);
        }
    }

    /// Dispatch an event to every live handler registered under `name`.
    ///
    /// No registered handlers is a silent no-op. Handlers are invoked in
    /// registration order; the first handler error aborts the dispatch and
    /// is returned with the event name attached — handlers not yet invoked
    /// are skipped.
    pub fn dispatch_event(&self, name: &str, event: &Event) -> Result<()> {
        let live: Vec<Arc<Handler>> = {
            let mut registry = self.registry.lock().expect("lock");
            let Some(entries) = registry.get_mut(name) else {
                return Ok(());
            };

            let before = entries.len();
            let mut live = Vec::with_capacity(before);
            entries.retain(|weak| match weak.upgrade() {
                Some(func) => {
                    live.push(func);
                    true
                }
                None => false,
            });
            if entries.len() < before {
                trace!("pruned {} dead handler(s) for '{}'", before - entries.len(), name);
            }
            if entries.is_empty() {
                registry.remove(name);
            }
            live
        };

        trace!("dispatching '{}' to {} handler(s)", name, live.len());
        for func in &live {
            func(event).map_err(|source| AchievementError::Handler {
                event: name.to_string(),
                source,
            })?;
        }
        Ok(())
    }

    /// Number of live handlers registered for the named event.
    ///
    /// Dead handles are pruned as a side effect.
    pub fn handler_count(&self, name: &str) -> usize {
        let mut registry = self.registry.lock().expect("lock");
        let Some(entries) = registry.get_mut(name) else {
            return 0;
        };
        entries.retain(|weak| weak.upgrade().is_some());
        let count = entries.len();
        if entries.is_empty() {
            registry.remove(name);
        }
        count
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.lock().expect("lock");
        let mut names: Vec<&String> = registry.keys().collect();
        names.sort();
        f.debug_struct("EventBus").field("events", &names).finish()
    }
}
