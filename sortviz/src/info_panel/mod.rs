// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Static reference material for each [`crate::Algorithm`]: what it does, how it scales,
//! and what it looks like in code.

// Attach sources.
pub mod algorithm_descriptor;
pub mod descriptor_table;

// Re-export.
pub use algorithm_descriptor::*;
pub use descriptor_table::*;
