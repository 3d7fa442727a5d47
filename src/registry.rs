//! Uniqueness registry for achievement ids
//!
//! Ids only have to be unique among achievements that are currently alive,
//! so the registry tracks claims rather than a permanent ledger: an
//! achievement claims its id at construction and releases it when dropped,
//! after which the id may be reused.

use std::collections::HashSet;
use std::sync::Mutex;

use tracing::debug;

use crate::achievement::AchievementId;
use crate::error::{AchievementError, Result};

/// Tracks which achievement ids are currently claimed.
#[derive(Debug, Default)]
pub struct IdRegistry {
    claimed: Mutex<HashSet<AchievementId>>,
}

impl IdRegistry {
    /// Create a registry with no claimed ids
    pub fn new() -> Self {
        IdRegistry {
            claimed: Mutex::new(HashSet::new()),
        }
    }

    /// Claim an id, failing if another live achievement already holds it
    pub fn claim(&self, id: AchievementId) -> Result<()> {
        let mut claimed = self.claimed.lock().expect("lock");
        if !claimed.insert(id) {
            return Err(AchievementError::DuplicateId(id));
        }
        debug!("claimed achievement id {}", id);
        Ok(())
    }

    /// Release a claimed id so it can be claimed again.
    ///
    /// Releasing an id that was never claimed is a no-op.
    pub fn release(&self, id: AchievementId) {
        let mut claimed = self.claimed.lock().expect("lock");
        if claimed.remove(&id) {
            debug!("released achievement id {}", id);
        }
    }

    /// Whether the id is currently claimed
    pub fn is_claimed(&self, id: AchievementId) -> bool {
        self.claimed.lock().expect("lock").contains(&id)
    }

    /// Number of currently claimed ids
    pub fn len(&self) -> usize {
        self.claimed.lock().expect("lock").len()
    }

    /// Whether no ids are claimed
    pub fn is_empty(&self) -> bool {
        self.claimed.lock().expect("lock").is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_and_release() {
        let registry = IdRegistry::new();

        registry.claim(7).unwrap();
        assert!(registry.is_claimed(7));
        assert_eq!(registry.len(), 1);

        registry.release(7);
        assert!(!registry.is_claimed(7));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_double_claim_is_rejected() {
        let registry = IdRegistry::new();

        registry.claim(7).unwrap();
        let err = registry.claim(7).unwrap_err();
        assert!(matches!(err, AchievementError::DuplicateId(7)));

        // The failed claim must not disturb the original.
        assert!(registry.is_claimed(7));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_release_allows_reclaim() {
        let registry = IdRegistry::new();

        registry.claim(7).unwrap();
        registry.release(7);
        registry.claim(7).unwrap();
        assert!(registry.is_claimed(7));
    }

    #[test]
    fn test_release_of_unclaimed_id_is_a_noop() {
        let registry = IdRegistry::new();
        registry.release(42);
        assert!(registry.is_empty());
    }
}
