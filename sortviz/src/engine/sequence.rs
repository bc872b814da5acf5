// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The sequence store. The [`Element::value`] is the only authority on what is being
//! sorted; bar heights, colors, and everything else on screen are derived from it.

use std::ops::{Range, RangeInclusive};

use rand::Rng;

use crate::{CommonResult, Safe, SortVizError, StdMutex};

/// Random values are drawn from this half open range.
pub const VALUE_RANGE: Range<u32> = 10..310;

/// Range offered by the bar count control.
pub const BAR_COUNT_RANGE: RangeInclusive<usize> = 10..=100;

pub const DEFAULT_BAR_COUNT: usize = 60;

/// Shared between the main event loop (which renders it) and the driver task (which
/// sorts it). Never hold the lock across an `.await`.
pub type SafeSequence = Safe<Sequence>;

#[must_use]
pub fn new_safe_sequence(sequence: Sequence) -> SafeSequence {
    std::sync::Arc::new(StdMutex::new(sequence))
}

/// Visual state of a single element. The flags are independent: a bar that is already
/// sorted can be swapping at the same time (insertion sort does this).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Marks {
    pub comparing: bool,
    pub swapping: bool,
    pub sorted: bool,
}

/// The two marks that only last for the duration of one primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransientMark {
    Comparing,
    Swapping,
}

impl Marks {
    pub fn set(&mut self, mark: TransientMark, value: bool) {
        match mark {
            TransientMark::Comparing => self.comparing = value,
            TransientMark::Swapping => self.swapping = value,
        }
    }

    #[must_use]
    pub fn is_plain(&self) -> bool { *self == Self::default() }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub value: u32,
    pub marks: Marks,
}

impl From<u32> for Element {
    fn from(value: u32) -> Self {
        Self {
            value,
            marks: Marks::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    elements: Vec<Element>,
}

impl Sequence {
    pub fn from_values(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            elements: values.into_iter().map(Element::from).collect(),
        }
    }

    /// Exactly `count` values, each in [`VALUE_RANGE`].
    pub fn new_random(count: usize, rng: &mut impl Rng) -> Self {
        Self::from_values((0..count).map(|_| rng.random_range(VALUE_RANGE)))
    }

    /// Replaces every element (and every mark) with `count` fresh random values.
    pub fn regenerate(&mut self, count: usize, rng: &mut impl Rng) {
        *self = Self::new_random(count, rng);
    }

    #[must_use]
    pub fn len(&self) -> usize { self.elements.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.elements.is_empty() }

    #[must_use]
    pub fn elements(&self) -> &[Element] { &self.elements }

    #[must_use]
    pub fn values(&self) -> Vec<u32> { self.elements.iter().map(|it| it.value).collect() }

    /// # Errors
    ///
    /// Returns [`SortVizError::IndexOutOfBounds`] if `index` is past the end.
    pub fn value(&self, index: usize) -> CommonResult<u32> {
        self.element(index).map(|it| it.value)
    }

    /// # Errors
    ///
    /// Returns [`SortVizError::IndexOutOfBounds`] if `index` is past the end.
    pub fn element(&self, index: usize) -> CommonResult<&Element> {
        let len = self.len();
        match self.elements.get(index) {
            Some(it) => Ok(it),
            None => SortVizError::IndexOutOfBounds { index, len }.into_result(),
        }
    }

    /// # Errors
    ///
    /// Returns [`SortVizError::IndexOutOfBounds`] if `index` is past the end.
    pub fn element_mut(&mut self, index: usize) -> CommonResult<&mut Element> {
        let len = self.len();
        match self.elements.get_mut(index) {
            Some(it) => Ok(it),
            None => SortVizError::IndexOutOfBounds { index, len }.into_result(),
        }
    }

    /// Exchanges the values at `i` and `j`. Marks stay where they are, since they belong
    /// to the position on screen and not to the value.
    ///
    /// # Errors
    ///
    /// Returns [`SortVizError::IndexOutOfBounds`] if either index is past the end.
    pub fn swap_values(&mut self, i: usize, j: usize) -> CommonResult<()> {
        let value_i = self.value(i)?;
        let value_j = self.value(j)?;
        self.element_mut(i)?.value = value_j;
        self.element_mut(j)?.value = value_i;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`SortVizError::IndexOutOfBounds`] if `index` is past the end.
    pub fn set_value(&mut self, index: usize, value: u32) -> CommonResult<()> {
        self.element_mut(index)?.value = value;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`SortVizError::IndexOutOfBounds`] if `index` is past the end.
    pub fn set_mark(
        &mut self,
        index: usize,
        mark: TransientMark,
        value: bool,
    ) -> CommonResult<()> {
        self.element_mut(index)?.marks.set(mark, value);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`SortVizError::IndexOutOfBounds`] if the range reaches past the end.
    pub fn mark_sorted(&mut self, range: RangeInclusive<usize>) -> CommonResult<()> {
        for index in range {
            self.element_mut(index)?.marks.sorted = true;
        }
        Ok(())
    }

    pub fn mark_all_sorted(&mut self) {
        for it in &mut self.elements {
            it.marks.sorted = true;
        }
    }

    /// Strips every mark (sorted, comparing, swapping) from every element.
    pub fn clear_all_marks(&mut self) {
        for it in &mut self.elements {
            it.marks = Marks::default();
        }
    }

    #[must_use]
    pub fn sorted_count(&self) -> usize {
        self.elements.iter().filter(|it| it.marks.sorted).count()
    }

    #[must_use]
    pub fn is_sorted_ascending(&self) -> bool {
        self.elements.windows(2).all(|pair| pair[0].value <= pair[1].value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};
    use test_case::test_case;

    #[test_case(0)]
    #[test_case(1)]
    #[test_case(10)]
    #[test_case(100)]
    fn test_new_random_has_exact_count_and_range(count: usize) {
        let mut rng = StdRng::seed_from_u64(7);
        let sequence = Sequence::new_random(count, &mut rng);
        assert_eq!(sequence.len(), count);
        assert!(sequence.values().iter().all(|it| VALUE_RANGE.contains(it)));
        assert!(sequence.elements().iter().all(|it| it.marks.is_plain()));
    }

    #[test]
    fn test_regenerate_replaces_marks_too() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut sequence = Sequence::from_values([3, 1, 2]);
        sequence.mark_all_sorted();
        sequence.regenerate(5, &mut rng);
        assert_eq!(sequence.len(), 5);
        assert_eq!(sequence.sorted_count(), 0);
    }

    #[test]
    fn test_swap_values_keeps_marks_in_place() {
        let mut sequence = Sequence::from_values([5, 9]);
        sequence.mark_sorted(1..=1).unwrap();
        sequence.swap_values(0, 1).unwrap();
        assert_eq!(sequence.values(), vec![9, 5]);
        assert!(!sequence.element(0).unwrap().marks.sorted);
        assert!(sequence.element(1).unwrap().marks.sorted);
    }

    #[test]
    fn test_out_of_bounds_is_an_error() {
        let mut sequence = Sequence::from_values([1, 2]);
        let report = sequence.swap_values(0, 2).unwrap_err();
        assert!(matches!(
            report.downcast_ref::<SortVizError>(),
            Some(SortVizError::IndexOutOfBounds { index: 2, len: 2 })
        ));
        // Nothing was half applied.
        assert_eq!(sequence.values(), vec![1, 2]);
    }

    #[test]
    fn test_clear_all_marks() {
        let mut sequence = Sequence::from_values([1, 2, 3]);
        sequence.mark_all_sorted();
        sequence.set_mark(1, TransientMark::Comparing, true).unwrap();
        sequence.set_mark(2, TransientMark::Swapping, true).unwrap();
        sequence.clear_all_marks();
        assert!(sequence.elements().iter().all(|it| it.marks.is_plain()));
    }

    #[test]
    fn test_is_sorted_ascending_allows_duplicates() {
        assert!(Sequence::from_values([1, 1, 2]).is_sorted_ascending());
        assert!(Sequence::default().is_sorted_ascending());
        assert!(!Sequence::from_values([2, 1]).is_sorted_ascending());
    }
}
