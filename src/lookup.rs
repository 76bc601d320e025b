//! Positional lookup helpers for ordered sequences.
//!
//! [`Lookup`] covers the two sequence-only operations: selecting elements
//! by a list of positions ([`at`]) and finding the first position of a
//! value ([`index_of`]). Both are defined on slices, so they apply to
//! `Vec`s and arrays through the usual coercions. Absence is typed:
//! out-of-range positions select `None`, and a missing value has index
//! `None`.
//!
//! [`at`]: Lookup::at
//! [`index_of`]: Lookup::index_of

use crate::reduce::Reduce;

/// Positional selection and linear search over an ordered sequence.
pub trait Lookup {
    /// The element type.
    type Item;

    /// Selects the element at each requested position.
    ///
    /// The output has one slot per requested index, in the order the
    /// indices were given (not the order of the sequence); an out-of-range
    /// index yields `None` in its slot rather than failing. No indices
    /// selects nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use downdash::lookup::Lookup;
    ///
    /// let letters = ['a', 'b', 'c'];
    /// assert_eq!(letters.at(&[0, 2]), vec![Some('a'), Some('c')]);
    /// assert_eq!(letters.at(&[2, 0]), vec![Some('c'), Some('a')]);
    /// assert_eq!(letters.at(&[5]), vec![None]);
    /// assert_eq!(letters.at(&[]), Vec::<Option<char>>::new());
    /// ```
    fn at(&self, indices: &[usize]) -> Vec<Option<Self::Item>>
    where
        Self::Item: Clone;

    /// Returns the first index holding a value equal to `target`, scanning
    /// ascending from zero, or `None` if no element matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use downdash::lookup::Lookup;
    ///
    /// assert_eq!([1, 2, 1, 2].index_of(&2), Some(1));
    /// assert_eq!([1, 2, 3].index_of(&9), None);
    /// ```
    fn index_of(&self, target: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq;
}

impl<T> Lookup for [T] {
    type Item = T;

    fn at(&self, indices: &[usize]) -> Vec<Option<T>>
    where
        T: Clone,
    {
        indices.reduce_from(Vec::new(), |mut selected, index| {
            selected.push(self.get(*index).cloned());
            selected
        })
    }

    fn index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|element| element == target)
    }
}

// =============================================================================
// Tests
// =============================================================================
