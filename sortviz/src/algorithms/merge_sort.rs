// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use futures_util::future::{BoxFuture, FutureExt};
use smallvec::SmallVec;

use crate::{CommonResult, StepContext};

/// Sequences are at most 100 long, so each half fits on the stack.
type MergeBuffer = SmallVec<[u32; 64]>;

/// Top down merge sort over the whole sequence.
///
/// # Errors
///
/// Returns an error if the sequence shrinks while the driver is running.
pub async fn merge_sort(context: &StepContext) -> CommonResult<()> {
    let n = context.len();
    if n == 0 {
        return Ok(());
    }
    merge_sort_range(context, 0, n - 1).await
}

/// Sorts the inclusive range `[l, r]`. Boxed because the future is recursive.
fn merge_sort_range(
    context: &StepContext,
    l: usize,
    r: usize,
) -> BoxFuture<'_, CommonResult<()>> {
    async move {
        if !context.is_active() || l >= r {
            return Ok(());
        }
        let m = l + (r - l) / 2;
        merge_sort_range(context, l, m).await?;
        merge_sort_range(context, m + 1, r).await?;
        merge(context, l, m, r).await
    }
    .boxed()
}

/// Copies the current values of `[l, m]` and `[m + 1, r]` into buffers, then writes
/// them back in order, one paced write at a time. Takes from the left half on ties, so
/// the sort is stable. Marks `[l, r]` sorted once the last write lands.
async fn merge(context: &StepContext, l: usize, m: usize, r: usize) -> CommonResult<()> {
    if !context.is_active() {
        return Ok(());
    }

    let left = (l..=m)
        .map(|k| context.value(k))
        .collect::<CommonResult<MergeBuffer>>()?;
    let right = (m + 1..=r)
        .map(|k| context.value(k))
        .collect::<CommonResult<MergeBuffer>>()?;

    let (mut a, mut b, mut k) = (0, 0, l);

    while a < left.len() && b < right.len() {
        if !context.is_active() {
            return Ok(());
        }
        let value = if left[a] <= right[b] {
            a += 1;
            left[a - 1]
        } else {
            b += 1;
            right[b - 1]
        };
        context.write_element(k, value).await?;
        k += 1;
    }

    for &value in left[a..].iter().chain(&right[b..]) {
        if !context.is_active() {
            return Ok(());
        }
        context.write_element(k, value).await?;
        k += 1;
    }

    context.mark_sorted(l..=r)
}

#[cfg(test)]
mod tests {
    use super::super::test_fixtures::run_to_completion;
    use crate::{Algorithm, StepEvent};
    use pretty_assertions::assert_eq;

    fn write(index: usize, value: u32) -> StepEvent { StepEvent::Write { index, value } }

    #[tokio::test]
    async fn test_merge_step_sequence() {
        let run = run_to_completion(Algorithm::Merge, &[4, 2, 1, 3]).await;
        assert_eq!(
            run.events,
            vec![
                // [4, 2] -> [2, 4]
                write(0, 2),
                write(1, 4),
                StepEvent::MarkSorted { range: 0..=1 },
                // [1, 3] is already in order, but still written back.
                write(2, 1),
                write(3, 3),
                StepEvent::MarkSorted { range: 2..=3 },
                // [2, 4] + [1, 3]
                write(0, 1),
                write(1, 2),
                write(2, 3),
                write(3, 4),
                StepEvent::MarkSorted { range: 0..=3 },
            ]
        );
        assert_eq!(run.values, vec![1, 2, 3, 4]);
        assert_eq!(run.sorted_count, 4);
    }

    #[tokio::test]
    async fn test_merge_handles_odd_lengths_and_duplicates() {
        let run = run_to_completion(Algorithm::Merge, &[7, 7, 3, 9, 3]).await;
        assert_eq!(run.values, vec![3, 3, 7, 7, 9]);
    }

    #[tokio::test]
    async fn test_merge_single_element_is_untouched() {
        let run = run_to_completion(Algorithm::Merge, &[11]).await;
        assert_eq!(run.values, vec![11]);
        assert!(run.events.is_empty());
    }
}
