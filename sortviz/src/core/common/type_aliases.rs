// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc, MutexGuard, PoisonError};

pub type StdMutex<T> = std::sync::Mutex<T>;

/// Shared, lockable value. Used for state that both the main event loop and a spawned
/// driver task need to see.
pub type Safe<T> = Arc<StdMutex<T>>;

/// Locks `it`, and recovers the guard if a previous holder panicked. A driver panic is
/// reported as a failed run, and the data behind the lock (plain values) is still
/// usable afterward.
pub fn lock_or_recover<T>(it: &StdMutex<T>) -> MutexGuard<'_, T> {
    it.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_or_recover_after_panic() {
        let safe: Safe<u32> = Arc::new(StdMutex::new(7));
        let clone = Arc::clone(&safe);
        let _ = std::thread::spawn(move || {
            let _guard = clone.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(safe.is_poisoned());
        assert_eq!(*lock_or_recover(&safe), 7);
    }
}
