//! Capability implementations for the standard library's unique sets.
//!
//! [`BTreeSet`] and [`HashSet`] (with any default-constructible hasher)
//! are unique stores with positional erase. Their positions are
//! [`KeyHandle`]s: a copy of the key, resolved back to the stored element
//! through the set's own lookup.
//!
//! The std types have inherent methods named like the facade's
//! (`insert`, `union`, `is_subset`, ...), and inherent methods win method
//! resolution. Use them through generic code or fully qualified calls:
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use setwise::prelude::*;
//!
//! let mut set: BTreeSet<i32> = RepeatableSet::from_sequence([1, 3, 5]);
//! let insertion = UniqueSet::insert(&mut set, 3);
//!
//! assert!(!insertion.inserted);
//! assert!(UniqueSet::is_strict_subset_iter(&set, [1, 3, 5, 7]));
//! ```

use std::collections::{BTreeSet, HashSet, btree_set, hash_set};
use std::hash::{BuildHasher, Hash};

use super::{PositionalErase, RawInsertion, SetStorage, UniqueStorage};

/// Opaque position for key-addressed stores.
///
/// Holds a copy of the key; dereferencing looks the key up again, so the
/// handle always resolves to the value the store actually keeps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyHandle<T>(T);

/// `HashSet` using the `rustc-hash` hasher.
#[cfg(feature = "fxhash")]
pub type FxHashSet<T> = HashSet<T, rustc_hash::FxBuildHasher>;

/// `HashSet` using the `ahash` hasher.
#[cfg(feature = "ahash")]
pub type AHashSet<T> = HashSet<T, ahash::RandomState>;

// =============================================================================
// BTreeSet
// =============================================================================

impl<T: Clone + Ord> SetStorage for BTreeSet<T> {
    type Element = T;
    type Position = KeyHandle<T>;
    type Iter<'a>
        = btree_set::Iter<'a, T>
    where
        Self: 'a;

    fn raw_insert(&mut self, element: T) -> RawInsertion<KeyHandle<T>> {
        let inserted = Self::insert(self, element.clone());
        RawInsertion::new(KeyHandle(element), inserted)
    }

    fn count(&self, element: &T) -> usize {
        usize::from(Self::contains(self, element))
    }

    fn erase(&mut self, key: &T) -> usize {
        usize::from(Self::remove(self, key))
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }

    fn find(&self, element: &T) -> Option<KeyHandle<T>> {
        Self::get(self, element).map(|stored| KeyHandle(stored.clone()))
    }

    fn element_at(&self, position: &KeyHandle<T>) -> Option<&T> {
        Self::get(self, &position.0)
    }
}

impl<T: Clone + Ord> UniqueStorage for BTreeSet<T> {}

impl<T: Clone + Ord> PositionalErase for BTreeSet<T> {
    fn erase_at(&mut self, position: KeyHandle<T>) -> Option<T> {
        Self::take(self, &position.0)
    }
}

// =============================================================================
// HashSet
// =============================================================================

impl<T, S> SetStorage for HashSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Default,
{
    type Element = T;
    type Position = KeyHandle<T>;
    type Iter<'a>
        = hash_set::Iter<'a, T>
    where
        Self: 'a;

    fn raw_insert(&mut self, element: T) -> RawInsertion<KeyHandle<T>> {
        let inserted = Self::insert(self, element.clone());
        RawInsertion::new(KeyHandle(element), inserted)
    }

    fn count(&self, element: &T) -> usize {
        usize::from(Self::contains(self, element))
    }

    fn erase(&mut self, key: &T) -> usize {
        usize::from(Self::remove(self, key))
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }

    fn find(&self, element: &T) -> Option<KeyHandle<T>> {
        Self::get(self, element).map(|stored| KeyHandle(stored.clone()))
    }

    fn element_at(&self, position: &KeyHandle<T>) -> Option<&T> {
        Self::get(self, &position.0)
    }
}

impl<T, S> UniqueStorage for HashSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Default,
{
}

impl<T, S> PositionalErase for HashSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Default,
{
    fn erase_at(&mut self, position: KeyHandle<T>) -> Option<T> {
        Self::take(self, &position.0)
    }
}

static_assertions::assert_impl_all!(BTreeSet<i32>: UniqueStorage, PositionalErase);
static_assertions::assert_impl_all!(HashSet<String>: UniqueStorage, PositionalErase);

// =============================================================================
// Tests
// =============================================================================
