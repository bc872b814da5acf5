// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, StepContext};

/// Shifts each element left by adjacent swaps while it is smaller than its
/// predecessor. Position `i` is marked sorted once its inner loop exits.
///
/// # Errors
///
/// Returns an error if the sequence shrinks while the driver is running.
pub async fn insertion_sort(context: &StepContext) -> CommonResult<()> {
    let n = context.len();

    for i in 1..n {
        if !context.is_active() {
            return Ok(());
        }

        let mut j = i;
        while j > 0 && context.value(j - 1)? > context.value(j)? {
            if !context.is_active() {
                return Ok(());
            }
            context.compare_highlight(j, j - 1).await?;
            context.swap_elements(j, j - 1).await?;
            j -= 1;
        }

        context.mark_sorted(i..=i)?;
    }

    Ok(())
}
