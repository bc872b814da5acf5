// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! How long each animation step pauses. Drivers never see any of this: the
//! [`crate::StepContext`] asks its [`DelayProvider`] for the current delay at every
//! primitive, so a speed change applies to the next step and never to a pause that is
//! already in flight.

use std::{fmt::Debug,
          ops::RangeInclusive,
          sync::{Arc, atomic::AtomicU8},
          time::Duration};

use serde::{Deserialize, Serialize};

use crate::AtomicU8Ext;

pub const SPEED_RANGE: RangeInclusive<u8> = 1..=100;

/// Delay of 50ms, the same as the web version starts with.
pub const DEFAULT_SPEED: u8 = 51;

/// Speed control value. Higher is faster: `delay = 101 - speed` milliseconds, so `100`
/// is 1ms and `1` is 100ms.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "u8", into = "u8")]
pub struct Speed(u8);

impl Speed {
    /// Values outside [`SPEED_RANGE`] are clamped.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.clamp(*SPEED_RANGE.start(), *SPEED_RANGE.end()))
    }

    #[must_use]
    pub fn get(self) -> u8 { self.0 }

    #[must_use]
    pub fn delay(self) -> Duration {
        Duration::from_millis(u64::from(SPEED_RANGE.end() + 1 - self.0))
    }
}

impl Default for Speed {
    fn default() -> Self { Self(DEFAULT_SPEED) }
}

impl From<u8> for Speed {
    fn from(value: u8) -> Self { Self::new(value) }
}

impl From<Speed> for u8 {
    fn from(speed: Speed) -> Self { speed.0 }
}

/// Supplies the pause duration for the next animation step.
pub trait DelayProvider: Debug + Send + Sync {
    fn current_delay(&self) -> Duration;
}

pub type SafeDelayProvider = Arc<dyn DelayProvider>;

/// The production [`DelayProvider`]. Cloning shares the same underlying value, so the
/// UI can hold one clone and adjust it while a driver task reads another.
#[derive(Debug, Clone)]
pub struct SpeedControl {
    speed: Arc<AtomicU8>,
}

impl SpeedControl {
    #[must_use]
    pub fn new(speed: Speed) -> Self {
        Self {
            speed: Arc::new(AtomicU8::new(speed.get())),
        }
    }

    #[must_use]
    pub fn speed(&self) -> Speed { Speed::new(self.speed.get()) }

    pub fn set(&self, speed: Speed) { self.speed.set(speed.get()); }

    /// Nudges the speed by `delta` (clamped) and returns the new value.
    pub fn adjust(&self, delta: i16) -> Speed {
        Speed::new(self.speed.adjust_clamped(delta, SPEED_RANGE))
    }
}

impl Default for SpeedControl {
    fn default() -> Self { Self::new(Speed::default()) }
}

impl DelayProvider for SpeedControl {
    fn current_delay(&self) -> Duration { self.speed().delay() }
}

/// A [`DelayProvider`] that never changes. [`FixedDelay::zero`] makes a run go as fast
/// as the scheduler allows, which is what tests want.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedDelay(pub Duration);

impl FixedDelay {
    #[must_use]
    pub const fn zero() -> Self { Self(Duration::ZERO) }
}

impl DelayProvider for FixedDelay {
    fn current_delay(&self) -> Duration { self.0 }
}

/// Suspends the current task for `delay`. A zero delay still yields, so other tasks
/// (the main event loop, a stop request) get a turn between steps.
pub async fn pause(delay: Duration) {
    if delay.is_zero() {
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(100, 1)]
    #[test_case(1, 100)]
    #[test_case(51, 50)]
    #[test_case(0, 100 ; "zero clamps to slowest")]
    #[test_case(255, 1 ; "too large clamps to fastest")]
    fn test_speed_to_delay(value: u8, expected_millis: u64) {
        assert_eq!(Speed::new(value).delay(), Duration::from_millis(expected_millis));
    }

    #[test]
    fn test_speed_control_clones_share_state() {
        let ui_side = SpeedControl::default();
        let driver_side: SafeDelayProvider = Arc::new(ui_side.clone());
        assert_eq!(driver_side.current_delay(), Duration::from_millis(50));

        ui_side.set(Speed::new(100));
        assert_eq!(driver_side.current_delay(), Duration::from_millis(1));

        assert_eq!(ui_side.adjust(-150), Speed::new(1));
        assert_eq!(driver_side.current_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_speed_serde_clamps() {
        let speed: Speed = serde_json::from_str("250").unwrap();
        assert_eq!(speed.get(), 100);
        assert_eq!(serde_json::to_string(&Speed::new(42)).unwrap(), "42");
    }

    #[tokio::test]
    async fn test_zero_pause_completes() {
        pause(FixedDelay::zero().current_delay()).await;
    }
}
