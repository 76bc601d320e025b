//! Reduction: folding a traversable collection to a single value.
//!
//! This module provides the [`Reduce`] trait, blanket-implemented for every
//! [`Each`]. It offers the two fold forms the rest of the crate builds on:
//!
//! - [`reduce`]: seedless. The first visited element becomes the initial
//!   accumulator; the combine step runs for every element after it. An
//!   empty (or absent) collection has no well-defined result, so the
//!   seedless form returns `Option::None` and callers must handle it.
//! - [`reduce_from`]: seeded. The supplied seed is the initial accumulator
//!   and the combine step runs for every element, the first included.
//!
//! Fold order is traversal order: ascending index for sequences, the
//! mapping's enumeration order otherwise (fixed within one call, but
//! carrying no semantic meaning). The accumulator exists only for the
//! duration of one call; it is never retained.
//!
//! # Laws
//!
//! ## Fold order
//!
//! For any sequence `s`:
//!
//! ```text
//! s.reduce_from(seed, f) == f(...f(f(seed, s[0]), s[1])..., s[n - 1])
//! ```
//!
//! ## Seedless / seeded agreement
//!
//! For any non-empty sequence `s`:
//!
//! ```text
//! s.reduce(f) == Some(s[1..].reduce_from(s[0], f))
//! ```
//!
//! ## Empty input
//!
//! ```text
//! empty.reduce(f) == None
//! empty.reduce_from(seed, f) == seed
//! ```
//!
//! # Examples
//!
//! ```rust
//! use downdash::prelude::*;
//!
//! assert_eq!(vec![1, 2, 3].reduce(|total, n| total + n), Some(6));
//! assert_eq!(Vec::<i32>::new().reduce(|total, n| total + n), None);
//! assert_eq!(vec![1, 2, 3].reduce_from(10, |total, n| total + n), 16);
//! ```
//!
//! [`reduce`]: Reduce::reduce
//! [`reduce_from`]: Reduce::reduce_from

use crate::each::Each;

/// A type class for collections that can be folded to a summary value.
///
/// Both fold forms visit every element; there is no early exit, matching
/// the traversal they are built on. Any panic raised by the combine step
/// propagates unmodified to the caller.
///
/// # Examples
///
/// ```rust
/// use downdash::prelude::*;
/// use std::collections::BTreeMap;
///
/// let mut prices = BTreeMap::new();
/// prices.insert("tea", 3);
/// prices.insert("oat", 4);
///
/// // Folds mapping values in enumeration order.
/// assert_eq!(prices.reduce_from(0, |total, price| total + price), 7);
/// ```
pub trait Reduce: Each {
    /// Folds the collection without a seed.
    ///
    /// The first element visited becomes the initial accumulator (the
    /// combine step is not invoked for it); each later element is folded
    /// in via `combine(accumulator, element)`. Returns `None` for an
    /// empty or absent collection, since reduction without a seed has no
    /// well-defined result there; callers must handle the case
    /// explicitly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use downdash::prelude::*;
    ///
    /// assert_eq!(vec![3, 4, 5].reduce(|total, n| total + n), Some(12));
    ///
    /// let absent: Option<Vec<i32>> = None;
    /// assert_eq!(absent.reduce(|total, n| total + n), None);
    /// ```
    fn reduce<F>(self, mut combine: F) -> Option<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let mut accumulator = None;
        self.each(|_, item| {
            accumulator = Some(match accumulator.take() {
                Some(current) => combine(current, item),
                None => item,
            });
        });
        accumulator
    }

    /// Folds the collection from an explicit seed.
    ///
    /// The seed is the initial accumulator and the combine step runs for
    /// every element, the first included. An empty or absent collection
    /// returns the seed unchanged.
    ///
    /// # Arguments
    ///
    /// * `seed` - The initial accumulator value
    /// * `combine` - Folds the running accumulator with each element
    ///
    /// # Examples
    ///
    /// ```rust
    /// use downdash::prelude::*;
    ///
    /// let digits = vec![1, 2, 3];
    /// let rendered = digits.reduce_from(String::new(), |mut out, digit| {
    ///     out.push_str(&digit.to_string());
    ///     out
    /// });
    /// assert_eq!(rendered, "123");
    /// ```
    fn reduce_from<B, F>(self, seed: B, mut combine: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.entries()
            .fold(seed, |accumulator, (_, item)| combine(accumulator, item))
    }
}

impl<C: Each> Reduce for C {}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    #[rstest]
    fn reduce_sums_a_sequence() {
        assert_eq!(vec![1, 2, 3].reduce(|total, n| total + n), Some(6));
    }

    #[rstest]
    fn reduce_of_empty_sequence_is_none() {
        assert_eq!(Vec::<i32>::new().reduce(|total, n| total + n), None);
    }

    #[rstest]
    fn reduce_of_single_element_skips_combine() {
        let mut combine_calls = 0;
        let result = vec![42].reduce(|total, n| {
            combine_calls += 1;
            total + n
        });
        assert_eq!(result, Some(42));
        assert_eq!(combine_calls, 0);
    }

    #[rstest]
    fn reduce_from_folds_every_element() {
        assert_eq!(vec![1, 2, 3].reduce_from(10, |total, n| total + n), 16);
    }

    #[rstest]
    fn reduce_from_of_empty_sequence_returns_seed() {
        assert_eq!(Vec::<i32>::new().reduce_from(10, |total, n| total + n), 10);
    }

    #[rstest]
    fn reduce_from_folds_left_to_right() {
        let order = vec![1, 2, 3].reduce_from(String::new(), |mut out, n| {
            out.push_str(&n.to_string());
            out
        });
        assert_eq!(order, "123");
    }

    #[rstest]
    fn reduce_from_is_left_associative() {
        // ((0 - 1) - 2) - 3, not 0 - (1 - (2 - 3))
        assert_eq!(vec![1, 2, 3].reduce_from(0, |total, n| total - n), -6);
    }

    #[rstest]
    fn reduce_from_folds_mapping_values() {
        let mut mapping = HashMap::new();
        mapping.insert("a", 1);
        mapping.insert("b", 2);
        mapping.insert("c", 3);
        assert_eq!(mapping.reduce_from(0, |total, value| total + value), 6);
    }

    #[rstest]
    fn reduce_of_absent_collection_is_none() {
        let absent: Option<Vec<i32>> = None;
        assert_eq!(absent.reduce(|total, n| total + n), None);
    }

    #[rstest]
    fn reduce_from_of_absent_collection_returns_seed() {
        let absent: Option<Vec<i32>> = None;
        assert_eq!(absent.reduce_from(5, |total, n| total + n), 5);
    }

    #[rstest]
    fn reduce_over_slice_borrows_elements() {
        let values = [1, 2, 3];
        let total = values.as_slice().reduce_from(0, |total, n| total + n);
        assert_eq!(total, 6);
    }
}

// =============================================================================
// Property-Based Tests
// =============================================================================
