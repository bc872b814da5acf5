// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The animation primitives. Every observation or mutation a driver makes goes through
//! a [`StepContext`], which:
//!
//! 1. Checks the run's [`RunToken`] while holding the sequence lock, and does nothing
//!    if the run is no longer active.
//! 2. Applies the mutation and publishes the matching [`StepEvent`], still under the
//!    lock.
//! 3. Releases the lock and pauses for the current delay.
//!
//! Since [`crate::SessionController::stop_run`] deactivates the token under the same
//! lock, a step either happens entirely before a stop request or not at all.

use std::ops::RangeInclusive;

use crate::{CommonResult, DEBUG_STEP_CONTEXT_MOD, EngineSignal, EngineSignalSender,
            RunToken, SafeDelayProvider, SafeSequence, Sequence, StepEvent, TransientMark,
            lock_or_recover, pause, send_signal};

#[derive(Debug, Clone)]
pub struct StepContext {
    sequence: SafeSequence,
    token: RunToken,
    delay_provider: SafeDelayProvider,
    maybe_signal_sender: Option<EngineSignalSender>,
}

impl StepContext {
    #[must_use]
    pub fn new(
        sequence: SafeSequence,
        token: RunToken,
        delay_provider: SafeDelayProvider,
        maybe_signal_sender: Option<EngineSignalSender>,
    ) -> Self {
        Self {
            sequence,
            token,
            delay_provider,
            maybe_signal_sender,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool { self.token.is_active() }

    #[must_use]
    pub fn token(&self) -> &RunToken { &self.token }

    #[must_use]
    pub fn sequence(&self) -> &SafeSequence { &self.sequence }

    #[must_use]
    pub fn len(&self) -> usize { lock_or_recover(&self.sequence).len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Reads the current value at `index`. Drivers always read through here rather than
    /// keeping their own copy.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of bounds.
    pub fn value(&self, index: usize) -> CommonResult<u32> {
        lock_or_recover(&self.sequence).value(index)
    }

    /// Marks `i` and `j` as being compared, pauses, then unmarks them. No effect on the
    /// values.
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of bounds.
    pub async fn compare_highlight(&self, i: usize, j: usize) -> CommonResult<()> {
        let Some(_guard) = self.try_apply(TransientMark::Comparing, i, j, |_| {
            Ok(StepEvent::Compare { i, j })
        })?
        else {
            return Ok(());
        };
        self.pause().await;
        Ok(())
    }

    /// Marks `i` and `j` as swapping, exchanges their values, pauses, then unmarks them.
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of bounds.
    pub async fn swap_elements(&self, i: usize, j: usize) -> CommonResult<()> {
        let Some(_guard) = self.try_apply(TransientMark::Swapping, i, j, |sequence| {
            sequence.swap_values(i, j)?;
            Ok(StepEvent::Swap { i, j })
        })?
        else {
            return Ok(());
        };
        self.pause().await;
        Ok(())
    }

    /// Overwrites the value at `index` and pauses. This is a write (used by merge), not
    /// an exchange, so no marks are involved.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of bounds.
    pub async fn write_element(&self, index: usize, value: u32) -> CommonResult<()> {
        {
            let mut sequence = lock_or_recover(&self.sequence);
            if !self.token.is_active() {
                return Ok(());
            }
            sequence.set_value(index, value)?;
            self.publish(StepEvent::Write { index, value });
        }
        self.pause().await;
        Ok(())
    }

    /// Marks `range` as sorted, if the run is still active. Not paced.
    ///
    /// # Errors
    ///
    /// Returns an error if the range reaches past the end of the sequence.
    pub fn mark_sorted(&self, range: RangeInclusive<usize>) -> CommonResult<()> {
        let mut sequence = lock_or_recover(&self.sequence);
        if !self.token.is_active() {
            return Ok(());
        }
        sequence.mark_sorted(range.clone())?;
        self.publish(StepEvent::MarkSorted { range });
        Ok(())
    }

    /// Publishes to the main event loop, if anyone is listening.
    pub(crate) fn publish(&self, event: StepEvent) {
        DEBUG_STEP_CONTEXT_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "StepContext::publish", event = ?event);
        });
        if let Some(sender) = &self.maybe_signal_sender {
            send_signal!(sender, EngineSignal::Step(event));
        }
    }

    async fn pause(&self) { pause(self.delay_provider.current_delay()).await; }

    /// Runs `apply` under the sequence lock and sets the transient `mark` on `i` and `j`.
    /// Returns [None] (and does nothing) if the run is no longer active. The returned
    /// guard clears the marks again when it goes out of scope.
    fn try_apply(
        &self,
        mark: TransientMark,
        i: usize,
        j: usize,
        apply: impl FnOnce(&mut Sequence) -> CommonResult<StepEvent>,
    ) -> CommonResult<Option<TransientMarkGuard<'_>>> {
        let mut sequence = lock_or_recover(&self.sequence);
        if !self.token.is_active() {
            return Ok(None);
        }

        // Validate both indices before touching anything.
        sequence.element(i)?;
        sequence.element(j)?;

        let event = apply(&mut sequence)?;
        sequence.set_mark(i, mark, true)?;
        sequence.set_mark(j, mark, true)?;
        self.publish(event);

        Ok(Some(TransientMarkGuard {
            context: self,
            mark,
            indices: [i, j],
        }))
    }
}

/// Clears a transient mark when dropped, so a primitive leaves its elements unmarked on
/// every exit path: normal return, an error, or the future being dropped mid pause.
///
/// When the token is already inactive the marks are left alone. The stop request that
/// deactivated it has cleared every mark already, and the sequence may belong to a new
/// run by now.
#[derive(Debug)]
struct TransientMarkGuard<'a> {
    context: &'a StepContext,
    mark: TransientMark,
    indices: [usize; 2],
}

impl Drop for TransientMarkGuard<'_> {
    fn drop(&mut self) {
        let mut sequence = lock_or_recover(&self.context.sequence);
        if !self.context.token.is_active() {
            return;
        }
        for index in self.indices {
            sequence.set_mark(index, self.mark, false).ok();
        }
    }
}
