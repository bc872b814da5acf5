// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # sortviz
//!
//! A fully async terminal app that animates comparison sorts one step at a time. Pick an
//! algorithm, press start, and watch each comparison (yellow) and exchange (red) happen
//! on a row of bars, while the info panel shows the algorithm's complexity, trade-offs,
//! and code.
//!
//! ```text
//!   key press ──▶ AppState ──▶ SessionController ──spawn──▶ driver task
//!       ▲                            │                         │
//!       │                            │ RunToken                │ StepContext
//!       │                            ▼                         ▼
//!   main event loop ◀── EngineSignal ───────────────── SafeSequence
//! ```
//!
//! - [`engine`]: the sequence, the paced primitives, and the per run cancellation
//!   token. Every step checks the token, mutates, and publishes under one lock, so a
//!   stop request can never be followed by another visible step.
//! - [`algorithms`]: bubble, selection, insertion, and merge sort, written against
//!   [`StepContext`].
//! - [`session`]: owns the sequence and the run state machine. Control availability is
//!   derived from the [`RunPhase`], never stored.
//! - [`info_panel`]: static descriptions and code listings.
//! - [`app`]: CLI, settings, key bindings, rendering, and the main event loop.
//!
//! # Run it
//!
//! ```bash
//! cargo run --bin sortviz -- --algorithm merge --speed 80 --bars 40
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::manual_let_else)]
#![warn(clippy::needless_pass_by_value)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

pub const DEBUG_STEP_CONTEXT_MOD: bool = false;
pub const DEBUG_SESSION_MOD: bool = true;
pub const DEBUG_APP_MOD: bool = true;

// Attach sources.
pub mod algorithms;
pub mod app;
pub mod core;
pub mod engine;
pub mod info_panel;
pub mod session;

// Re-export.
pub use algorithms::*;
pub use app::*;
pub use core::*;
pub use engine::*;
pub use info_panel::*;
pub use session::*;
