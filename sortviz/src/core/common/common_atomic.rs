// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Extension traits for the atomics shared between the UI and a running driver task.
//! See [`AtomicU8Ext`] and [`AtomicBoolExt`] for details.

use std::{ops::RangeInclusive,
          sync::atomic::{AtomicBool, AtomicU8, Ordering}};

/// Ergonomic helpers for [`AtomicU8`] that hide [`SeqCst`] boilerplate.
///
/// All operations use [`SeqCst`] ordering so callers never have to choose.
///
/// ## Clamped adjustments
///
/// [`adjust_clamped`] applies a signed delta and clamps the result into a range in a
/// single [`fetch_update`], so two concurrent adjustments can't both read the same old
/// value and lose one of the updates.
///
/// [`SeqCst`]: Ordering::SeqCst
/// [`adjust_clamped`]: Self::adjust_clamped
/// [`fetch_update`]: AtomicU8::fetch_update
pub trait AtomicU8Ext {
    /// Reads the current value.
    fn get(&self) -> u8;

    /// Writes `value`.
    fn set(&self, value: u8);

    /// Atomically adds `delta` (which may be negative), clamps into `range`, and
    /// returns the **new** value.
    fn adjust_clamped(&self, delta: i16, range: RangeInclusive<u8>) -> u8;
}

impl AtomicU8Ext for AtomicU8 {
    fn get(&self) -> u8 { self.load(Ordering::SeqCst) }

    fn set(&self, value: u8) { self.store(value, Ordering::SeqCst) }

    fn adjust_clamped(&self, delta: i16, range: RangeInclusive<u8>) -> u8 {
        let apply = |old: u8| -> u8 {
            let lo = i16::from(*range.start());
            let hi = i16::from(*range.end());
            let it = (i16::from(old) + delta).clamp(lo, hi);
            // The clamp above keeps `it` inside `u8`.
            u8::try_from(it).unwrap_or(*range.start())
        };
        match self.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |old| {
            Some(apply(old))
        }) {
            Ok(old) | Err(old) => apply(old),
        }
    }
}

/// Same idea as [`AtomicU8Ext`] for the on / off flags.
pub trait AtomicBoolExt {
    fn get(&self) -> bool;

    fn set(&self, value: bool);

    /// Sets the flag to `false` and returns what it was before.
    fn take(&self) -> bool;
}

impl AtomicBoolExt for AtomicBool {
    fn get(&self) -> bool { self.load(Ordering::SeqCst) }

    fn set(&self, value: bool) { self.store(value, Ordering::SeqCst) }

    fn take(&self) -> bool { self.swap(false, Ordering::SeqCst) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{sync::Arc, thread};

    #[test]
    fn get_returns_initial_value() {
        let counter = AtomicU8::new(42);
        assert_eq!(counter.get(), 42);
    }

    #[test]
    fn set_updates_value() {
        let counter = AtomicU8::new(0);
        counter.set(99);
        assert_eq!(counter.get(), 99);
    }

    #[test]
    fn adjust_clamped_saturates_at_both_ends() {
        let it = AtomicU8::new(98);
        assert_eq!(it.adjust_clamped(5, 1..=100), 100);
        assert_eq!(it.adjust_clamped(-120, 1..=100), 1);
        assert_eq!(it.adjust_clamped(9, 1..=100), 10);
        assert_eq!(it.get(), 10);
    }

    #[test]
    fn adjust_clamped_does_not_lose_concurrent_updates() {
        let it = Arc::new(AtomicU8::new(0));
        let handles: Vec<_> = (0..10)
            .map(|_| {
                let it = Arc::clone(&it);
                thread::spawn(move || {
                    for _ in 0..10 {
                        it.adjust_clamped(1, 0..=200);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(it.get(), 100);
    }

    #[test]
    fn take_clears_the_flag() {
        let flag = AtomicBool::new(true);
        assert!(flag.take());
        assert!(!flag.get());
        assert!(!flag.take());
    }
}
