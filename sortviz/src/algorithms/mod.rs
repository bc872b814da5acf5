// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The algorithm drivers. Each one is the textbook algorithm written against a
//! [`StepContext`]: it reads values through the context, mutates only through the paced
//! primitives, and checks [`StepContext::is_active`] at the top of every loop iteration
//! so a stop request takes effect at the next step.

// Attach sources.
pub mod algorithm;
pub mod bubble_sort;
pub mod insertion_sort;
pub mod merge_sort;
pub mod selection_sort;

#[cfg(test)]
pub mod test_fixtures;

// Re-export.
pub use algorithm::*;
pub use bubble_sort::*;
pub use insertion_sort::*;
pub use merge_sort::*;
pub use selection_sort::*;
