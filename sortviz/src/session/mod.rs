// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod run_phase;
pub mod run_report;
pub mod session_controller;

// Re-export.
pub use run_phase::*;
pub use run_report::*;
pub use session_controller::*;
