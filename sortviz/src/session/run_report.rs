// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Algorithm;

/// Identifies one run. Reports from a run that was already stopped carry an old id,
/// which is how the controller tells them apart from the current run.
pub type RunId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The driver returned while the run was still active. Every element is now marked
    /// sorted.
    Completed,
    /// The run was stopped before the driver got to the end.
    Cancelled,
    /// The driver returned an error or panicked. The message is for the log.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub run_id: RunId,
    pub algorithm: Algorithm,
    pub outcome: RunOutcome,
}
