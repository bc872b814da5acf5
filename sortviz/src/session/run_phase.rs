// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The per run state machine, and the control availability derived from it.
//!
//! ```text
//! Idle ──start_run──▶ Running ──driver returns, still active──▶ Completed ─┐
//!   ▲                    │                                                  │
//!   │                    ├──stop_run / reset──▶ Cancelled ──────────────────┤
//!   │                    └──driver error or panic──▶ Failed ────────────────┤
//!   └───────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The terminal states are not stored: they are the [`crate::RunOutcome`] of a
//! [`crate::RunReport`], and the phase goes straight back to [`RunPhase::Idle`].

use strum_macros::{Display, EnumIter};

use crate::{Algorithm, RunId, RunToken};

#[derive(Debug, Clone, Default)]
pub enum RunPhase {
    #[default]
    Idle,
    Running {
        run_id: RunId,
        algorithm: Algorithm,
        token: RunToken,
    },
}

impl RunPhase {
    #[must_use]
    pub fn is_running(&self) -> bool { matches!(self, RunPhase::Running { .. }) }

    #[must_use]
    pub fn running_id(&self) -> Option<RunId> {
        match self {
            RunPhase::Running { run_id, .. } => Some(*run_id),
            RunPhase::Idle => None,
        }
    }

    #[must_use]
    pub fn controls(&self) -> ControlAvailability {
        ControlAvailability {
            is_running: self.is_running(),
        }
    }
}

/// Every user facing control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Control {
    AlgorithmSelector,
    Start,
    Stop,
    Speed,
    BarCount,
    Shuffle,
    Reset,
    CodeListing,
    Exit,
}

/// Which controls can be used right now. This is a pure projection of [`RunPhase`], so
/// it can't drift out of sync with the actual run state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlAvailability {
    is_running: bool,
}

impl ControlAvailability {
    #[must_use]
    pub fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::Start
            | Control::AlgorithmSelector
            | Control::BarCount
            | Control::Shuffle
            | Control::Reset => !self.is_running,
            Control::Stop => self.is_running,
            Control::Speed | Control::CodeListing | Control::Exit => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    fn running() -> RunPhase {
        RunPhase::Running {
            run_id: 1,
            algorithm: Algorithm::Bubble,
            token: RunToken::new_active(),
        }
    }

    #[test_case(Control::Start, true, false)]
    #[test_case(Control::Stop, false, true)]
    #[test_case(Control::AlgorithmSelector, true, false)]
    #[test_case(Control::BarCount, true, false)]
    #[test_case(Control::Shuffle, true, false)]
    #[test_case(Control::Reset, true, false)]
    #[test_case(Control::Speed, true, true)]
    fn test_availability(control: Control, when_idle: bool, when_running: bool) {
        assert_eq!(RunPhase::Idle.controls().is_enabled(control), when_idle);
        assert_eq!(running().controls().is_enabled(control), when_running);
    }

    #[test]
    fn test_start_and_stop_are_mutually_exclusive() {
        for phase in [RunPhase::Idle, running()] {
            let controls = phase.controls();
            assert_ne!(
                controls.is_enabled(Control::Start),
                controls.is_enabled(Control::Stop)
            );
        }
    }

    #[test]
    fn test_every_control_enabled_when_idle_except_stop() {
        let controls = RunPhase::Idle.controls();
        for control in Control::iter() {
            assert_eq!(controls.is_enabled(control), control != Control::Stop);
        }
    }
}
