//! Insertion-ordered unique store with inline storage.
//!
//! This module provides [`InlineSet`], a unique store that keeps up to
//! eight elements inline in a `SmallVec` and spills to the heap beyond
//! that.
//!
//! # Overview
//!
//! Lookups are linear, so the only requirement on the element type is
//! `Clone + Eq`: no hashing, no ordering. That makes `InlineSet` the store
//! of choice for elements whose equality deliberately ignores part of the
//! value, and for the small sets the relational algebra most often builds
//! (tracking sets, filters, intersections).
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `raw_insert`  | O(n)       |
//! | `count`       | O(n)       |
//! | `erase`       | O(n)       |
//! | `erase_at`    | O(n)       |
//! | `len`         | O(1)       |
//! | `iter`        | O(1) + O(n) |
//!
//! # Examples
//!
//! ```rust
//! use setwise::prelude::*;
//!
//! let mut set: InlineSet<&str> = set_of!["b", "a"];
//! set.insert("c");
//! set.insert("a");
//!
//! // Iteration follows first-insertion order.
//! let elements: Vec<&str> = set.iter().copied().collect();
//! assert_eq!(elements, vec!["b", "a", "c"]);
//! ```

use std::fmt;

use smallvec::SmallVec;

use super::{Slot, write_roster};
use crate::capability::{PositionalErase, RawInsertion, SetStorage, UniqueStorage};

/// Number of elements kept inline before spilling to the heap.
const INLINE_CAPACITY: usize = 8;

// =============================================================================
// InlineSet Definition
// =============================================================================

/// A unique, insertion-ordered store with inline storage for small sets.
///
/// # Type Parameters
///
/// * `T` - The element type. Only `Clone` and `Eq` are required.
///
/// # Examples
///
/// ```rust
/// use setwise::prelude::*;
///
/// let set: InlineSet<i32> = [3, 1, 3, 2].into_iter().collect();
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.as_slice(), &[3, 1, 2]);
/// ```
#[derive(Clone)]
pub struct InlineSet<T> {
    elements: SmallVec<[T; INLINE_CAPACITY]>,
}

impl<T> InlineSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::prelude::*;
    ///
    /// let set: InlineSet<i32> = InlineSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: SmallVec::new(),
        }
    }

    /// The elements in first-insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns `true` once the set has outgrown its inline storage.
    #[cfg(test)]
    fn spilled(&self) -> bool {
        self.elements.spilled()
    }
}

impl<T: Eq> InlineSet<T> {
    fn index_of(&self, element: &T) -> Option<usize> {
        self.elements.iter().position(|item| item == element)
    }
}

// =============================================================================
// Capability Implementation
// =============================================================================

impl<T: Clone + Eq> SetStorage for InlineSet<T> {
    type Element = T;
    type Position = Slot;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;

    fn raw_insert(&mut self, element: T) -> RawInsertion<Slot> {
        match self.index_of(&element) {
            Some(index) => RawInsertion::new(Slot::new(index), false),
            None => {
                self.elements.push(element);
                RawInsertion::new(Slot::new(self.elements.len() - 1), true)
            }
        }
    }

    fn count(&self, element: &T) -> usize {
        usize::from(self.index_of(element).is_some())
    }

    fn erase(&mut self, key: &T) -> usize {
        self.index_of(key).map_or(0, |index| {
            self.elements.remove(index);
            1
        })
    }

    #[inline]
    fn len(&self) -> usize {
        self.elements.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.elements.iter()
    }

    fn find(&self, element: &T) -> Option<Slot> {
        self.index_of(element).map(Slot::new)
    }

    fn element_at(&self, position: &Slot) -> Option<&T> {
        self.elements.get(position.index())
    }
}

impl<T: Clone + Eq> UniqueStorage for InlineSet<T> {}

impl<T: Clone + Eq> PositionalErase for InlineSet<T> {
    fn erase_at(&mut self, position: Slot) -> Option<T> {
        (position.index() < self.elements.len()).then(|| self.elements.remove(position.index()))
    }
}

static_assertions::assert_impl_all!(InlineSet<i32>: UniqueStorage, PositionalErase);

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An owning iterator over the elements of an [`InlineSet`].
pub struct InlineSetIntoIterator<T> {
    inner: smallvec::IntoIter<[T; INLINE_CAPACITY]>,
}

impl<T> Iterator for InlineSetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for InlineSetIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for InlineSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq> FromIterator<T> for InlineSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Clone + Eq> Extend<T> for InlineSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.raw_insert(element);
        }
    }
}

impl<T> IntoIterator for InlineSet<T> {
    type Item = T;
    type IntoIter = InlineSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        InlineSetIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a InlineSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Set equality: same members, regardless of insertion order.
impl<T: Eq> PartialEq for InlineSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements.len() == other.elements.len()
            && self
                .elements
                .iter()
                .all(|element| other.index_of(element).is_some())
    }
}

impl<T: Eq> Eq for InlineSet<T> {}

impl<T: fmt::Debug> fmt::Debug for InlineSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for InlineSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_roster(formatter, &self.elements)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for InlineSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.elements.len()))?;
        for element in &self.elements {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct InlineSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for InlineSetVisitor<T>
where
    T: serde::Deserialize<'de> + Clone + Eq,
{
    type Value = InlineSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Duplicates in the input collapse, as with any sequence construction.
        let mut set = InlineSet::new();
        while let Some(element) = seq.next_element()? {
            set.raw_insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for InlineSet<T>
where
    T: serde::Deserialize<'de> + Clone + Eq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(InlineSetVisitor {
            marker: std::marker::PhantomData,
        })
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
    fn test_display_empty_inline_set() {
        let set: InlineSet<i32> = InlineSet::new();
        assert_eq!(format!("{set}"), "{}");
    }

    #[rstest]
    fn test_display_keeps_insertion_order() {
        let set: InlineSet<i32> = [3, 1, 2].into_iter().collect();
        assert_eq!(format!("{set}"), "{3, 1, 2}");
    }

    #[rstest]
    fn test_raw_insert_reports_existing_slot() {
        let mut set: InlineSet<i32> = [4, 5].into_iter().collect();
        let insertion = set.raw_insert(5);

        assert!(!insertion.inserted);
        assert_eq!(set.element_at(&insertion.position), Some(&5));
        assert_eq!(set.len(), 2);
    }

    #[rstest]
    fn test_erase_preserves_order_of_the_rest() {
        let mut set: InlineSet<i32> = [1, 2, 3, 4].into_iter().collect();

        assert_eq!(set.erase(&2), 1);
        assert_eq!(set.erase(&2), 0);
        assert_eq!(set.as_slice(), &[1, 3, 4]);
    }

    #[rstest]
    fn test_erase_at_out_of_range_slot() {
        let mut set: InlineSet<i32> = [1].into_iter().collect();
        let slot = set.find(&1);
        set.erase(&1);

        assert_eq!(slot.and_then(|slot| set.erase_at(slot)), None);
    }

    #[rstest]
    #[case(INLINE_CAPACITY, false)]
    #[case(INLINE_CAPACITY + 1, true)]
    fn test_spills_past_inline_capacity(#[case] size: usize, #[case] spilled: bool) {
        let set: InlineSet<usize> = (0..size).collect();

        assert_eq!(set.len(), size);
        assert_eq!(set.spilled(), spilled);
    }

    #[rstest]
    fn test_eq_ignores_order() {
        let left: InlineSet<i32> = [1, 2, 3].into_iter().collect();
        let right: InlineSet<i32> = [3, 1, 2].into_iter().collect();
        let shorter: InlineSet<i32> = [1, 2].into_iter().collect();

        assert_eq!(left, right);
        assert_ne!(left, shorter);
    }

    #[rstest]
    fn test_into_iter_yields_owned_elements() {
        let set: InlineSet<String> = ["a".to_string(), "b".to_string()].into_iter().collect();
        let elements: Vec<String> = set.into_iter().collect();

        assert_eq!(elements, vec!["a".to_string(), "b".to_string()]);
    }
}
