// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::RangeInclusive;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::RunReport;

/// One visible operation, emitted by the [`crate::StepContext`] primitives in the exact
/// order they were applied to the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepEvent {
    Compare { i: usize, j: usize },
    Swap { i: usize, j: usize },
    Write { index: usize, value: u32 },
    MarkSorted { range: RangeInclusive<usize> },
    MarkAllSorted,
}

/// What the engine tells the main event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineSignal {
    /// The sequence changed, re-render.
    Step(StepEvent),
    /// A run is over, for whatever reason. Always sent exactly once per run.
    RunFinished(RunReport),
}

/// Unbounded, so that a primitive can publish its event while it still holds the
/// sequence lock. That is what keeps events in the same order as the mutations, and
/// guarantees no event can follow a stop request. Senders only ever produce one event
/// per paced step, so the queue stays short as long as the main loop keeps draining it.
pub type EngineSignalSender = UnboundedSender<EngineSignal>;
pub type EngineSignalReceiver = UnboundedReceiver<EngineSignal>;

#[must_use]
pub fn new_engine_signal_channel() -> (EngineSignalSender, EngineSignalReceiver) {
    unbounded_channel()
}
