//! Universal traversal over ordered sequences and keyed mappings.
//!
//! This module provides the [`Each`] trait, the single primitive every other
//! operation in this crate is built on. A type implementing `Each` exposes
//! its contents as a stream of `(key, item)` entries; the provided [`each`]
//! driver walks that stream and invokes a visitor once per element.
//!
//! Two input shapes satisfy the same interface without runtime type
//! inspection:
//!
//! - **Ordered sequences** (`Vec<T>`, `&[T]`): keys are ascending indices
//!   starting at zero, and the visit order is guaranteed.
//! - **Keyed mappings** (`HashMap<K, V>`, `BTreeMap<K, V>`): keys are the
//!   mapping's own keys. Every key is visited exactly once, but enumeration
//!   order carries no semantic meaning and must not be relied upon by
//!   composed operations.
//!
//! Absent input is a first-class case: `Option<C>` traverses `None` as the
//! empty collection, producing zero visits rather than a failure. Wrapping
//! code therefore never needs a presence check before traversing.
//!
//! # Laws
//!
//! ## Sequence ordering
//!
//! For any sequence `s` of length `n`, `each` visits exactly the entries
//! `(0, s[0]), (1, s[1]), ..., (n - 1, s[n - 1])`, in that order:
//!
//! ```text
//! s.entries().map(|(key, _)| key) == 0..n
//! ```
//!
//! ## Mapping coverage
//!
//! For any mapping `m`, `each` visits every own key exactly once, with no
//! duplicates and no misses. No ordering law applies.
//!
//! ## Absence
//!
//! `None` traverses as empty:
//!
//! ```text
//! None::<C>.each(visit)  // zero invocations, no failure
//! ```
//!
//! # Examples
//!
//! ```rust
//! use downdash::each::Each;
//!
//! let mut visited = Vec::new();
//! vec![10, 20].each(|index, element| visited.push((index, element)));
//! assert_eq!(visited, vec![(0, 10), (1, 20)]);
//!
//! // Absent input produces no visits.
//! let absent: Option<Vec<i32>> = None;
//! let mut count = 0;
//! absent.each(|_, _| count += 1);
//! assert_eq!(count, 0);
//! ```
//!
//! [`each`]: Each::each

use std::collections::{BTreeMap, HashMap};

/// A type class for collections that can be traversed entry by entry.
///
/// `Each` abstracts the one capability shared by ordered sequences and
/// keyed mappings: yielding each element exactly once, paired with the key
/// (or index) it lives under. Everything else in this crate, reduction and
/// all derived operations included, is defined on top of this trait.
///
/// Traversal consumes the collection. To keep the original, traverse a
/// borrowed view (`&[T]` for sequences) or clone first, the same way a
/// consuming fold is used.
///
/// The visitor receives `(key, item)`. There is no third "whole collection"
/// argument: callers that need the collection inside the visitor capture it
/// in the closure, and exclusive ownership makes mutating a collection
/// mid-traversal unrepresentable rather than undefined.
///
/// Any panic raised by the visitor propagates unmodified to the caller;
/// nothing is caught or suppressed.
///
/// # Examples
///
/// ```rust
/// use downdash::each::Each;
/// use std::collections::BTreeMap;
///
/// let mut scores = BTreeMap::new();
/// scores.insert("ada", 3);
/// scores.insert("lin", 5);
///
/// let mut seen = Vec::new();
/// scores.each(|name, score| seen.push((name, score)));
/// assert_eq!(seen, vec![("ada", 3), ("lin", 5)]);
/// ```
pub trait Each: Sized {
    /// The key an element lives under: an index for sequences, a mapping
    /// key otherwise.
    type Key;

    /// The element type.
    type Item;

    /// The entry stream driving traversal.
    type Entries: Iterator<Item = (Self::Key, Self::Item)>;

    /// Converts the collection into its `(key, item)` entry stream.
    ///
    /// The stream's order is the collection's traversal order: ascending
    /// index for sequences, enumeration order for mappings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use downdash::each::Each;
    ///
    /// let entries: Vec<(usize, char)> = vec!['a', 'b'].entries().collect();
    /// assert_eq!(entries, vec![(0, 'a'), (1, 'b')]);
    /// ```
    fn entries(self) -> Self::Entries;

    /// Invokes `visit` once per element, in traversal order.
    ///
    /// An empty collection produces zero invocations; so does `None` when
    /// traversing an `Option`-wrapped collection. There is no early-exit
    /// mechanism: every element is visited.
    ///
    /// # Arguments
    ///
    /// * `visit` - Called with `(key, item)` for each element
    ///
    /// # Examples
    ///
    /// ```rust
    /// use downdash::each::Each;
    ///
    /// let mut total = 0;
    /// vec![1, 2, 3].each(|_, n| total += n);
    /// assert_eq!(total, 6);
    /// ```
    fn each<F>(self, mut visit: F)
    where
        F: FnMut(Self::Key, Self::Item),
    {
        for (key, item) in self.entries() {
            visit(key, item);
        }
    }
}

// =============================================================================
// Ordered sequences
// =============================================================================

impl<T> Each for Vec<T> {
    type Key = usize;
    type Item = T;
    type Entries = std::iter::Enumerate<std::vec::IntoIter<T>>;

    fn entries(self) -> Self::Entries {
        self.into_iter().enumerate()
    }
}

impl<'a, T> Each for &'a [T] {
    type Key = usize;
    type Item = &'a T;
    type Entries = std::iter::Enumerate<std::slice::Iter<'a, T>>;

    fn entries(self) -> Self::Entries {
        self.iter().enumerate()
    }
}

// =============================================================================
// Keyed mappings
// =============================================================================

impl<K, V> Each for HashMap<K, V> {
    type Key = K;
    type Item = V;
    type Entries = std::collections::hash_map::IntoIter<K, V>;

    fn entries(self) -> Self::Entries {
        self.into_iter()
    }
}

impl<K, V> Each for BTreeMap<K, V> {
    type Key = K;
    type Item = V;
    type Entries = std::collections::btree_map::IntoIter<K, V>;

    fn entries(self) -> Self::Entries {
        self.into_iter()
    }
}

// =============================================================================
// Absent collections
// =============================================================================

/// `None` traverses as the empty collection: zero visits, no failure.
impl<C: Each> Each for Option<C> {
    type Key = C::Key;
    type Item = C::Item;
    type Entries = std::iter::Flatten<std::option::IntoIter<C::Entries>>;

    fn entries(self) -> Self::Entries {
        self.map(C::entries).into_iter().flatten()
    }
}

static_assertions::assert_impl_all!(Vec<i32>: Each);
static_assertions::assert_impl_all!(HashMap<String, i32>: Each);
static_assertions::assert_impl_all!(BTreeMap<String, i32>: Each);
static_assertions::assert_impl_all!(Option<Vec<i32>>: Each);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn vec_each_visits_in_ascending_index_order() {
        let mut visited = Vec::new();
        vec![10, 20, 30].each(|index, element| visited.push((index, element)));
        assert_eq!(visited, vec![(0, 10), (1, 20), (2, 30)]);
    }

    #[rstest]
    fn vec_each_empty_makes_no_visits() {
        let mut count = 0;
        Vec::<i32>::new().each(|_, _| count += 1);
        assert_eq!(count, 0);
    }

    #[rstest]
    fn vec_entries_pairs_elements_with_indices() {
        let entries: Vec<(usize, char)> = vec!['a', 'b', 'c'].entries().collect();
        assert_eq!(entries, vec![(0, 'a'), (1, 'b'), (2, 'c')]);
    }

    #[rstest]
    fn slice_each_yields_references_in_order() {
        let elements = [1, 2, 3];
        let mut visited = Vec::new();
        elements.as_slice().each(|index, element| visited.push((index, *element)));
        assert_eq!(visited, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[rstest]
    fn hash_map_each_visits_every_key_exactly_once() {
        let mut mapping = HashMap::new();
        mapping.insert("a", 1);
        mapping.insert("b", 2);
        mapping.insert("c", 3);

        let mut visited = HashMap::new();
        mapping.clone().each(|key, value| {
            assert!(visited.insert(key, value).is_none(), "duplicate key visit");
        });
        assert_eq!(visited, mapping);
    }

    #[rstest]
    fn btree_map_each_visits_in_ascending_key_order() {
        let mut mapping = BTreeMap::new();
        mapping.insert(3, "three");
        mapping.insert(1, "one");
        mapping.insert(2, "two");

        let mut keys = Vec::new();
        mapping.each(|key, _| keys.push(key));
        assert_eq!(keys, vec![1, 2, 3]);
    }

    #[rstest]
    fn absent_collection_makes_no_visits() {
        let absent: Option<Vec<i32>> = None;
        let mut count = 0;
        absent.each(|_, _| count += 1);
        assert_eq!(count, 0);
    }

    #[rstest]
    fn present_collection_traverses_through_the_option() {
        let present = Some(vec![7, 8]);
        let mut visited = Vec::new();
        present.each(|index, element| visited.push((index, element)));
        assert_eq!(visited, vec![(0, 7), (1, 8)]);
    }

    #[rstest]
    fn empty_mapping_makes_no_visits() {
        let mut count = 0;
        HashMap::<String, i32>::new().each(|_, _| count += 1);
        assert_eq!(count, 0);
    }
}

// =============================================================================
// Property-Based Tests
// =============================================================================
