//! Lock aliases used across the workspace.
//!
//! Everything goes through `parking_lot` so guards are not poisoned and
//! `lock()`/`read()`/`write()` return the guard directly.

/// A mutual exclusion lock for state touched from the tick thread and
/// listener code.
pub type SyncMutex<T> = parking_lot::Mutex<T>;

/// A reader-writer lock for registries that are read far more often than
/// they are written.
pub type SyncRwLock<T> = parking_lot::RwLock<T>;
