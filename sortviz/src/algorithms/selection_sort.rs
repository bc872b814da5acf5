// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, StepContext};

/// For each position, scan the unsorted suffix for the minimum and swap it into place.
/// Exactly one swap per position, even when the minimum is already there.
///
/// # Errors
///
/// Returns an error if the sequence shrinks while the driver is running.
pub async fn selection_sort(context: &StepContext) -> CommonResult<()> {
    let n = context.len();

    for i in 0..n {
        if !context.is_active() {
            return Ok(());
        }

        let mut min_index = i;
        for j in i + 1..n {
            if !context.is_active() {
                return Ok(());
            }
            context.compare_highlight(j, min_index).await?;
            if context.value(j)? < context.value(min_index)? {
                min_index = j;
            }
        }

        context.swap_elements(i, min_index).await?;
        context.mark_sorted(i..=i)?;
    }

    Ok(())
}
