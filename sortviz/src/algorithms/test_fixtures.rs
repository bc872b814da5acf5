// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use crate::{Algorithm, EngineSignal, FixedDelay, RunToken, Sequence, StepContext,
            StepEvent, lock_or_recover, new_engine_signal_channel, new_safe_sequence,
            run_driver};

/// What a driver left behind after running to the end with zero delay.
#[derive(Debug)]
pub struct DriverRun {
    pub values: Vec<u32>,
    pub events: Vec<StepEvent>,
    pub sorted_count: usize,
}

impl DriverRun {
    /// Only the events that change a value.
    pub fn mutations(&self) -> Vec<StepEvent> {
        self.events
            .iter()
            .filter(|it| matches!(it, StepEvent::Swap { .. } | StepEvent::Write { .. }))
            .cloned()
            .collect()
    }
}

pub async fn run_to_completion(algorithm: Algorithm, values: &[u32]) -> DriverRun {
    let (sender, mut receiver) = new_engine_signal_channel();
    let context = StepContext::new(
        new_safe_sequence(Sequence::from_values(values.iter().copied())),
        RunToken::new_active(),
        Arc::new(FixedDelay::zero()),
        Some(sender),
    );

    run_driver(algorithm, &context).await.unwrap();

    let mut events = vec![];
    while let Ok(signal) = receiver.try_recv() {
        if let EngineSignal::Step(event) = signal {
            events.push(event);
        }
    }

    let sequence = lock_or_recover(context.sequence());
    DriverRun {
        values: sequence.values(),
        events,
        sorted_count: sequence.sorted_count(),
    }
}
