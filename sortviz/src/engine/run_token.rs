// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc, atomic::AtomicBool};

use crate::AtomicBoolExt;

/// Cooperative cancellation token for a single run. Every run gets a fresh one, so a
/// stopped driver that is still finishing its last pause can never see the "active"
/// flag of the run that replaced it.
///
/// - Starts active.
/// - [`RunToken::deactivate`] is one way; a token is never re-activated.
/// - Clones share the flag.
#[derive(Debug, Clone)]
pub struct RunToken {
    active: Arc<AtomicBool>,
}

impl RunToken {
    #[must_use]
    pub fn new_active() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool { self.active.get() }

    /// Returns whether the token was still active before this call.
    pub fn deactivate(&self) -> bool { self.active.take() }
}
