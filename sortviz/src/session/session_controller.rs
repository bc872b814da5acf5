// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [`SessionController`] owns everything that outlives a single run: the sequence,
//! the speed, the selected algorithm, and the [`RunPhase`]. All user commands go through
//! it, and it is the only place that starts or stops a driver task.

use std::sync::Arc;

use rand::Rng;
use tokio::task::JoinError;

use crate::{Algorithm, BAR_COUNT_RANGE, CommonResult, ControlAvailability,
            DEBUG_SESSION_MOD, DEFAULT_BAR_COUNT, EngineSignal, EngineSignalSender, RunId,
            RunOutcome, RunPhase, RunReport, RunToken, SafeDelayProvider, SafeSequence,
            Sequence, SortVizError, Speed, SpeedControl, StepContext, StepEvent,
            lock_or_recover, new_safe_sequence, run_driver, send_signal};

/// What a session starts out with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub algorithm: Algorithm,
    pub speed: Speed,
    pub bar_count: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            speed: Speed::default(),
            bar_count: DEFAULT_BAR_COUNT,
        }
    }
}

#[derive(Debug)]
pub struct SessionController {
    sequence: SafeSequence,
    speed_control: SpeedControl,
    /// Handed to every run. Defaults to [`Self::speed_control`].
    delay_provider: SafeDelayProvider,
    signal_sender: EngineSignalSender,
    phase: RunPhase,
    selected_algorithm: Algorithm,
    bar_count: usize,
    next_run_id: RunId,
}

impl SessionController {
    /// Creates an idle session with a fresh random sequence. Bar count and speed are
    /// clamped into range.
    #[must_use]
    pub fn new(options: SessionOptions, signal_sender: EngineSignalSender) -> Self {
        let bar_count = clamp_bar_count(options.bar_count);
        let speed_control = SpeedControl::new(options.speed);
        Self {
            sequence: new_safe_sequence(Sequence::new_random(bar_count, &mut rand::rng())),
            delay_provider: Arc::new(speed_control.clone()),
            speed_control,
            signal_sender,
            phase: RunPhase::Idle,
            selected_algorithm: options.algorithm,
            bar_count,
            next_run_id: 1,
        }
    }

    /// Replaces the pacing for future runs. Tests use
    /// [`crate::FixedDelay::zero`] here to run at full speed.
    #[must_use]
    pub fn with_delay_provider(mut self, delay_provider: SafeDelayProvider) -> Self {
        self.delay_provider = delay_provider;
        self
    }

    #[must_use]
    pub fn phase(&self) -> &RunPhase { &self.phase }

    #[must_use]
    pub fn is_running(&self) -> bool { self.phase.is_running() }

    #[must_use]
    pub fn controls(&self) -> ControlAvailability { self.phase.controls() }

    #[must_use]
    pub fn selected_algorithm(&self) -> Algorithm { self.selected_algorithm }

    #[must_use]
    pub fn bar_count(&self) -> usize { self.bar_count }

    #[must_use]
    pub fn speed(&self) -> Speed { self.speed_control.speed() }

    #[must_use]
    pub fn sequence(&self) -> &SafeSequence { &self.sequence }

    /// Copy of the sequence, taken under a short lock, for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Sequence { lock_or_recover(&self.sequence).clone() }

    #[must_use]
    pub fn options(&self) -> SessionOptions {
        SessionOptions {
            algorithm: self.selected_algorithm,
            speed: self.speed(),
            bar_count: self.bar_count,
        }
    }

    /// Starts the selected algorithm on the current sequence. Returns [None] and does
    /// nothing if a run is already in progress.
    ///
    /// Must be called from inside a Tokio runtime, since the driver gets its own task.
    pub fn start_run(&mut self) -> Option<RunId> {
        if self.phase.is_running() {
            return None;
        }

        let run_id = self.next_run_id;
        self.next_run_id += 1;
        let algorithm = self.selected_algorithm;
        let token = RunToken::new_active();

        lock_or_recover(&self.sequence).clear_all_marks();
        self.phase = RunPhase::Running {
            run_id,
            algorithm,
            token: token.clone(),
        };

        let context = StepContext::new(
            self.sequence.clone(),
            token,
            self.delay_provider.clone(),
            Some(self.signal_sender.clone()),
        );
        spawn_supervised_run(run_id, algorithm, context, self.signal_sender.clone());

        tracing::info!(message = "Run started", run_id, algorithm = %algorithm);
        Some(run_id)
    }

    /// Cancels the current run, if any, and strips every mark. The token is deactivated
    /// under the sequence lock, so the driver can't apply another step once this
    /// returns. Calling it while idle only clears the marks.
    pub fn stop_run(&mut self) {
        let mut sequence = lock_or_recover(&self.sequence);
        if let RunPhase::Running { run_id, token, .. } = &self.phase {
            token.deactivate();
            tracing::info!(message = "Run stopped", run_id);
        }
        sequence.clear_all_marks();
        drop(sequence);
        self.phase = RunPhase::Idle;
    }

    /// Handles the [`EngineSignal::RunFinished`] for a run. Returns `true` if it belonged
    /// to the current run and the phase went back to idle. Reports from a run that was
    /// already stopped are ignored.
    pub fn on_run_finished(&mut self, report: &RunReport) -> bool {
        if self.phase.running_id() != Some(report.run_id) {
            DEBUG_SESSION_MOD.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(message = "Ignoring stale run report", report = ?report);
            });
            return false;
        }

        match &report.outcome {
            RunOutcome::Failed(reason) => {
                tracing::error!(message = "Run failed", run_id = report.run_id, reason = %reason);
            }
            outcome => {
                tracing::info!(message = "Run finished", run_id = report.run_id, outcome = ?outcome);
            }
        }
        self.phase = RunPhase::Idle;
        true
    }

    /// Replaces the sequence with `count` fresh random values.
    ///
    /// # Errors
    ///
    /// Returns [`SortVizError::RegenerateWhileRunning`] if a run is in progress.
    pub fn regenerate(&mut self, count: usize) -> CommonResult<()> {
        self.regenerate_with(count, &mut rand::rng())
    }

    /// Same as [`Self::regenerate`], with the caller's random number generator.
    ///
    /// # Errors
    ///
    /// Returns [`SortVizError::RegenerateWhileRunning`] if a run is in progress.
    pub fn regenerate_with(&mut self, count: usize, rng: &mut impl Rng) -> CommonResult<()> {
        if self.phase.is_running() {
            return SortVizError::RegenerateWhileRunning.into_result();
        }
        lock_or_recover(&self.sequence).regenerate(count, rng);
        Ok(())
    }

    /// Replaces the sequence with the given values, unmarked. The bar count setting is
    /// left alone, so the next shuffle goes back to random values of that count.
    ///
    /// # Errors
    ///
    /// Returns [`SortVizError::RegenerateWhileRunning`] if a run is in progress.
    pub fn load_values(&mut self, values: impl IntoIterator<Item = u32>) -> CommonResult<()> {
        if self.phase.is_running() {
            return SortVizError::RegenerateWhileRunning.into_result();
        }
        *lock_or_recover(&self.sequence) = Sequence::from_values(values);
        Ok(())
    }

    /// New random values, same bar count.
    ///
    /// # Errors
    ///
    /// Returns [`SortVizError::RegenerateWhileRunning`] if a run is in progress.
    pub fn shuffle(&mut self) -> CommonResult<()> { self.regenerate(self.bar_count) }

    /// Forces the session idle, then shuffles. The reset control is only enabled while
    /// idle, so from the UI the stop is a no-op.
    ///
    /// # Errors
    ///
    /// Never fails in practice, since the stop always leaves the session idle.
    pub fn reset(&mut self) -> CommonResult<()> {
        self.stop_run();
        self.shuffle()
    }

    /// Clamps `count` into [`BAR_COUNT_RANGE`] and regenerates with it. Returns the
    /// count that was actually used.
    ///
    /// # Errors
    ///
    /// Returns [`SortVizError::ControlDisabled`] if a run is in progress.
    pub fn set_bar_count(&mut self, count: usize) -> CommonResult<usize> {
        if self.phase.is_running() {
            return SortVizError::ControlDisabled {
                control: "bar count",
            }
            .into_result();
        }
        self.bar_count = clamp_bar_count(count);
        self.regenerate(self.bar_count)?;
        Ok(self.bar_count)
    }

    /// # Errors
    ///
    /// Returns [`SortVizError::ControlDisabled`] if a run is in progress.
    pub fn adjust_bar_count(&mut self, delta: isize) -> CommonResult<usize> {
        self.set_bar_count(self.bar_count.saturating_add_signed(delta))
    }

    /// # Errors
    ///
    /// Returns [`SortVizError::ControlDisabled`] if a run is in progress.
    pub fn select_algorithm(&mut self, algorithm: Algorithm) -> CommonResult<()> {
        if self.phase.is_running() {
            return SortVizError::ControlDisabled {
                control: "algorithm selector",
            }
            .into_result();
        }
        self.selected_algorithm = algorithm;
        Ok(())
    }

    /// Allowed at any time. A running driver picks it up at its next step.
    pub fn set_speed(&self, speed: Speed) { self.speed_control.set(speed); }

    pub fn adjust_speed(&self, delta: i16) -> Speed { self.speed_control.adjust(delta) }
}

fn clamp_bar_count(count: usize) -> usize {
    count.clamp(*BAR_COUNT_RANGE.start(), *BAR_COUNT_RANGE.end())
}

/// The driver runs in its own task so that a panic in it surfaces as a [`JoinError`]
/// here instead of taking the supervisor down with it. The supervisor always sends
/// exactly one [`EngineSignal::RunFinished`].
fn spawn_supervised_run(
    run_id: RunId,
    algorithm: Algorithm,
    context: StepContext,
    signal_sender: EngineSignalSender,
) {
    tokio::spawn(async move {
        let driver_context = context.clone();
        let driver_result =
            tokio::spawn(async move { run_driver(algorithm, &driver_context).await })
                .await;

        let outcome = finish_run(&context, driver_result);
        send_signal!(
            signal_sender,
            EngineSignal::RunFinished(RunReport {
                run_id,
                algorithm,
                outcome,
            })
        );
    });
}

/// Deactivates the token and works out the outcome, all under the sequence lock, so it
/// can't interleave with a [`SessionController::stop_run`]. Only a run that was still
/// active when its driver returned gets every element marked sorted.
fn finish_run(
    context: &StepContext,
    driver_result: Result<CommonResult<()>, JoinError>,
) -> RunOutcome {
    let mut sequence = lock_or_recover(context.sequence());
    let was_active = context.token().deactivate();

    match driver_result {
        Ok(Ok(())) if was_active => {
            sequence.mark_all_sorted();
            context.publish(StepEvent::MarkAllSorted);
            RunOutcome::Completed
        }
        Ok(Ok(())) => RunOutcome::Cancelled,
        Ok(Err(report)) => RunOutcome::Failed(format!("{report}")),
        Err(join_error) => RunOutcome::Failed(join_error.to_string()),
    }
}
