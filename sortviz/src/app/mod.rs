// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The terminal app: CLI args, persisted settings, key bindings, rendering, and the
//! main event loop that ties them to a [`crate::SessionController`].

// Attach sources.
pub mod app_action;
pub mod clap_config;
pub mod launcher;
pub mod render_ops;
pub mod settings;
pub mod state;

// Re-export.
pub use app_action::*;
pub use clap_config::*;
pub use launcher::*;
pub use render_ops::*;
pub use settings::*;
pub use state::*;
