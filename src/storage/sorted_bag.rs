//! Sorted repeating store.
//!
//! [`SortedBag`] keeps every occurrence of every element in a sorted `Vec`,
//! equal elements adjacent and in insertion order. It implements the base
//! capability only: the unique facade, and with it the relational algebra,
//! is unavailable for it at compile time.
//!
//! # Examples
//!
//! ```rust
//! use setwise::prelude::*;
//!
//! let mut bag: SortedBag<i32> = set_of![1, 1, 3];
//! assert!(bag.contains(&1));
//! assert_eq!(bag.count(&1), 2);
//!
//! assert_eq!(bag.erase(&1), 2);
//! assert_eq!(bag.as_slice(), &[3]);
//! ```

use std::fmt;
use std::ops::Range;

use super::{Slot, write_roster};
use crate::capability::{RawInsertion, SetStorage};

/// A repeating store backed by a sorted `Vec`.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Clone` and `Ord`.
///
/// # Time Complexity
///
/// | Operation     | Complexity        |
/// |---------------|-------------------|
/// | `raw_insert`  | O(n)              |
/// | `count`       | O(log n)          |
/// | `erase`       | O(n)              |
/// | `find`        | O(log n)          |
/// | `len`         | O(1)              |
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SortedBag<T> {
    elements: Vec<T>,
}

impl<T> SortedBag<T> {
    /// Creates a new empty bag.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Every occurrence, in ascending order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }
}

impl<T: Ord> SortedBag<T> {
    /// Index range holding the occurrences equal to `element`.
    fn equal_range(&self, element: &T) -> Range<usize> {
        let lower = self.elements.partition_point(|item| item < element);
        let upper = lower + self.elements[lower..].partition_point(|item| item <= element);
        lower..upper
    }

    /// Number of distinct values, ignoring multiplicity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::prelude::*;
    ///
    /// let bag: SortedBag<char> = set_of!['a', 'b', 'a'];
    /// assert_eq!(bag.distinct_len(), 2);
    /// ```
    #[must_use]
    pub fn distinct_len(&self) -> usize {
        let mut distinct = 0;
        let mut previous: Option<&T> = None;
        for element in &self.elements {
            if previous != Some(element) {
                distinct += 1;
                previous = Some(element);
            }
        }
        distinct
    }
}

impl<T: Clone + Ord> SetStorage for SortedBag<T> {
    type Element = T;
    type Position = Slot;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;

    /// Always stores the element, after any equal occurrences.
    fn raw_insert(&mut self, element: T) -> RawInsertion<Slot> {
        let index = self.elements.partition_point(|item| item <= &element);
        self.elements.insert(index, element);
        RawInsertion::new(Slot::new(index), true)
    }

    fn count(&self, element: &T) -> usize {
        self.equal_range(element).len()
    }

    fn erase(&mut self, key: &T) -> usize {
        let range = self.equal_range(key);
        let removed = range.len();
        self.elements.drain(range);
        removed
    }

    #[inline]
    fn len(&self) -> usize {
        self.elements.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.elements.iter()
    }

    fn find(&self, element: &T) -> Option<Slot> {
        let range = self.equal_range(element);
        (!range.is_empty()).then(|| Slot::new(range.start))
    }

    fn element_at(&self, position: &Slot) -> Option<&T> {
        self.elements.get(position.index())
    }
}

static_assertions::assert_not_impl_any!(SortedBag<i32>: crate::capability::UniqueStorage);

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for SortedBag<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Ord> FromIterator<T> for SortedBag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bag = Self::new();
        bag.extend(iter);
        bag
    }
}

impl<T: Clone + Ord> Extend<T> for SortedBag<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.raw_insert(element);
        }
    }
}

impl<T> IntoIterator for SortedBag<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SortedBag<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedBag<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SortedBag<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_roster(formatter, &self.elements)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SortedBag<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.elements, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SortedBag<T>
where
    T: serde::Deserialize<'de> + Clone + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let elements = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(elements.into_iter().collect())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_display_sorted_with_repeats() {
        let bag: SortedBag<i32> = [3, 1, 3].into_iter().collect();
        assert_eq!(format!("{bag}"), "{1, 3, 3}");
    }

    #[rstest]
    fn test_raw_insert_always_inserts() {
        let mut bag: SortedBag<i32> = SortedBag::new();

        assert!(bag.raw_insert(7).inserted);
        assert!(bag.raw_insert(7).inserted);
        assert_eq!(bag.count(&7), 2);
        assert_eq!(bag.len(), 2);
    }

    #[rstest]
    fn test_raw_insert_position_designates_the_new_occurrence() {
        let mut bag: SortedBag<i32> = [1, 5, 9].into_iter().collect();
        let insertion = bag.raw_insert(5);

        assert_eq!(insertion.position, Slot::new(2));
        assert_eq!(bag.element_at(&insertion.position), Some(&5));
    }

    #[rstest]
    #[case(vec![], 4, 0)]
    #[case(vec![4], 4, 1)]
    #[case(vec![1, 4, 4, 4, 9], 4, 3)]
    #[case(vec![1, 4, 4, 4, 9], 5, 0)]
    fn test_count_and_erase_agree(
        #[case] elements: Vec<i32>,
        #[case] key: i32,
        #[case] expected: usize,
    ) {
        let mut bag: SortedBag<i32> = elements.into_iter().collect();
        let before = bag.len();

        assert_eq!(bag.count(&key), expected);
        assert_eq!(bag.erase(&key), expected);
        assert_eq!(bag.count(&key), 0);
        assert_eq!(bag.len(), before - expected);
    }

    #[rstest]
    fn test_find_returns_first_occurrence() {
        let bag: SortedBag<i32> = [2, 2, 1].into_iter().collect();

        assert_eq!(bag.find(&2), Some(Slot::new(1)));
        assert_eq!(bag.find(&3), None);
    }

    #[rstest]
    fn test_distinct_len() {
        let bag: SortedBag<i32> = [5, 5, 5, 1, 2, 2].into_iter().collect();

        assert_eq!(bag.distinct_len(), 3);
        assert_eq!(bag.len(), 6);
    }

    #[rstest]
    fn test_eq_is_multiset_equality() {
        let left: SortedBag<i32> = [1, 2, 2].into_iter().collect();
        let right: SortedBag<i32> = [2, 1, 2].into_iter().collect();
        let fewer: SortedBag<i32> = [1, 2].into_iter().collect();

        assert_eq!(left, right);
        assert_ne!(left, fewer);
    }
}
