// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The step synchronized animation engine: the sequence store, the paced primitives
//! that drivers mutate it through, and the signals that tell the main event loop to
//! re-render.

// Attach sources.
pub mod pacing;
pub mod run_token;
pub mod sequence;
pub mod signals;
pub mod step_context;

// Re-export.
pub use pacing::*;
pub use run_token::*;
pub use sequence::*;
pub use signals::*;
pub use step_context::*;
