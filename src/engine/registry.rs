use std::sync::{Mutex, MutexGuard, OnceLock};

use crate::engine::manager::UtilityClassManager;

static DEFAULT: OnceLock<Mutex<UtilityClassManager>> = OnceLock::new();

/// Process-wide default registry, created with default options on first use.
///
/// Isolated contexts (server renders, embedded surfaces) should own their own
/// [`UtilityClassManager`] instead.
pub fn default_manager() -> &'static Mutex<UtilityClassManager> {
    DEFAULT.get_or_init(|| Mutex::new(UtilityClassManager::default()))
}

/// Lock the default registry, recovering from a poisoned lock.
pub fn lock_default() -> MutexGuard<'static, UtilityClassManager> {
    default_manager()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
