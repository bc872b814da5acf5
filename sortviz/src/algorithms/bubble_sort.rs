// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, StepContext};

/// Adjacent pair passes. After pass `i` the element at `n - i - 1` is in its final
/// place and gets marked sorted. Index 0 is never the tail of a pass, so it is marked
/// at the very end.
///
/// # Errors
///
/// Returns an error if the sequence shrinks while the driver is running.
pub async fn bubble_sort(context: &StepContext) -> CommonResult<()> {
    let n = context.len();

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if !context.is_active() {
                return Ok(());
            }
            context.compare_highlight(j, j + 1).await?;
            if context.value(j)? > context.value(j + 1)? {
                context.swap_elements(j, j + 1).await?;
            }
        }
        let tail = n - i - 1;
        context.mark_sorted(tail..=tail)?;
    }

    if n > 0 {
        context.mark_sorted(0..=0)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::test_fixtures::run_to_completion;
    use crate::{Algorithm, StepEvent};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_bubble_sorts_and_marks_everything() {
        let run = run_to_completion(Algorithm::Bubble, &[5, 3, 8, 1]).await;
        assert_eq!(run.values, vec![1, 3, 5, 8]);
        assert_eq!(run.sorted_count, 4);
    }

    #[tokio::test]
    async fn test_bubble_compares_adjacent_pairs_only() {
        let run = run_to_completion(Algorithm::Bubble, &[3, 2, 1]).await;
        let compares: Vec<_> = run
            .events
            .iter()
            .filter_map(|it| match it {
                StepEvent::Compare { i, j } => Some((*i, *j)),
                _ => None,
            })
            .collect();
        // n - 1 passes, each one shorter than the last.
        assert_eq!(compares, vec![(0, 1), (1, 2), (0, 1)]);
    }

    #[tokio::test]
    async fn test_bubble_marks_tail_after_each_pass_then_index_zero() {
        let run = run_to_completion(Algorithm::Bubble, &[2, 1, 3]).await;
        let marks: Vec<_> = run
            .events
            .iter()
            .filter_map(|it| match it {
                StepEvent::MarkSorted { range } => Some(range.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(marks, vec![2..=2, 1..=1, 0..=0]);
    }

    #[tokio::test]
    async fn test_bubble_on_empty_and_single() {
        let run = run_to_completion(Algorithm::Bubble, &[]).await;
        assert!(run.values.is_empty());
        assert!(run.events.is_empty());

        let run = run_to_completion(Algorithm::Bubble, &[42]).await;
        assert_eq!(run.values, vec![42]);
        assert_eq!(run.sorted_count, 1);
    }
}
