//! Facade valid for stores that may hold duplicates.

use crate::capability::SetStorage;

/// Membership and bulk construction for any store.
///
/// Nothing here assumes uniqueness: deduplication, if any, is the store's
/// own property.
///
/// # Examples
///
/// ```rust
/// use setwise::prelude::*;
///
/// let bag: SortedBag<i32> = SortedBag::from_sequence([1, 1, 3]);
/// let set: InlineSet<i32> = InlineSet::from_sequence([1, 1, 3]);
///
/// assert_eq!(bag.len(), 3);
/// assert_eq!(set.len(), 2);
/// assert!(bag.contains(&3) && set.contains(&3));
/// ```
pub trait RepeatableSet: SetStorage {
    /// Builds a store by raw-inserting every item of `sequence` in order.
    ///
    /// Items are submitted independently; the store decides whether a
    /// repeated item is kept.
    fn from_sequence<I>(sequence: I) -> Self
    where
        I: IntoIterator<Item = Self::Element>,
    {
        let mut store = Self::default();
        for item in sequence {
            store.raw_insert(item);
        }
        store
    }

    /// Returns `true` if at least one occurrence of `element` is stored.
    #[inline]
    fn contains(&self, element: &Self::Element) -> bool {
        self.count(element) > 0
    }
}

impl<S: SetStorage> RepeatableSet for S {}

// =============================================================================
// Tests
// =============================================================================
