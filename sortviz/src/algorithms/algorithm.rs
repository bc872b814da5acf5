// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use super::{bubble_sort, insertion_sort, merge_sort, selection_sort};
use crate::{CommonResult, StepContext};

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
    ValueEnum,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Merge,
}

impl Algorithm {
    /// Position in the selector, starting at 0.
    #[must_use]
    pub fn index(self) -> usize {
        Self::iter().position(|it| it == self).unwrap_or_default()
    }

    /// Selector shortcut: `'1'` is bubble, `'2'` is selection, and so on.
    #[must_use]
    pub fn from_shortcut(ch: char) -> Option<Self> {
        let index = ch.to_digit(10)?.checked_sub(1)?;
        Self::iter().nth(usize::try_from(index).ok()?)
    }

    /// The next one in the selector, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::iter().cycle().nth(self.index() + 1).unwrap_or_default()
    }

    /// The previous one in the selector, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::iter()
            .rev()
            .cycle()
            .skip_while(|it| *it != self)
            .nth(1)
            .unwrap_or_default()
    }
}

/// Runs the driver for `algorithm` to completion, or until the context's token is
/// deactivated.
///
/// # Errors
///
/// Returns an error if a driver reaches past the end of the sequence, which means the
/// sequence was replaced underneath a running driver.
pub async fn run_driver(algorithm: Algorithm, context: &StepContext) -> CommonResult<()> {
    match algorithm {
        Algorithm::Bubble => bubble_sort(context).await,
        Algorithm::Selection => selection_sort(context).await,
        Algorithm::Insertion => insertion_sort(context).await,
        Algorithm::Merge => merge_sort(context).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case('1', Some(Algorithm::Bubble))]
    #[test_case('2', Some(Algorithm::Selection))]
    #[test_case('3', Some(Algorithm::Insertion))]
    #[test_case('4', Some(Algorithm::Merge))]
    #[test_case('0', None)]
    #[test_case('5', None)]
    #[test_case('x', None)]
    fn test_from_shortcut(ch: char, expected: Option<Algorithm>) {
        assert_eq!(Algorithm::from_shortcut(ch), expected);
    }

    #[test]
    fn test_next_and_prev_wrap_around() {
        assert_eq!(Algorithm::Bubble.next(), Algorithm::Selection);
        assert_eq!(Algorithm::Merge.next(), Algorithm::Bubble);
        assert_eq!(Algorithm::Bubble.prev(), Algorithm::Merge);
        assert_eq!(Algorithm::Insertion.prev(), Algorithm::Selection);
        for it in Algorithm::iter() {
            assert_eq!(it.next().prev(), it);
        }
    }

    #[test]
    fn test_string_round_trip_uses_snake_case() {
        assert_eq!(Algorithm::Selection.to_string(), "selection");
        assert_eq!("merge".parse::<Algorithm>().unwrap(), Algorithm::Merge);
        assert_eq!(
            serde_json::to_string(&Algorithm::Insertion).unwrap(),
            "\"insertion\""
        );
    }
}
