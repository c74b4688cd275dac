//! Container capability: the primitives a backing store must expose.
//!
//! The algebra in [`crate::algebra`] is written once against these traits
//! and never against a concrete store. There are two refinement levels:
//!
//! - [`SetStorage`]: any associative store, repeating or not
//! - [`UniqueStorage`]: a store guaranteeing `count(e) <= 1`
//!
//! plus one optional capability, [`PositionalErase`], which backs
//! [`RemovableSet::remove`](crate::algebra::RemovableSet::remove). A store
//! that cannot mutate through a position simply does not implement it;
//! `remove` is then rejected at compile time rather than failing at runtime.
//!
//! # Positions
//!
//! A position is an opaque handle produced by the store itself
//! ([`SetStorage::raw_insert`], [`SetStorage::find`]) and consumed only by
//! the same store. Positions are invalidated by any later mutation.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use setwise::capability::SetStorage;
//!
//! let mut store: BTreeSet<i32> = BTreeSet::default();
//! let first = SetStorage::raw_insert(&mut store, 7);
//! let second = SetStorage::raw_insert(&mut store, 7);
//!
//! assert!(first.inserted);
//! assert!(!second.inserted);
//! assert_eq!(SetStorage::count(&store, &7), 1);
//! assert_eq!(store.element_at(&second.position), Some(&7));
//! ```

mod std_collections;

pub use std_collections::KeyHandle;

#[cfg(feature = "ahash")]
pub use std_collections::AHashSet;
#[cfg(feature = "fxhash")]
pub use std_collections::FxHashSet;

// =============================================================================
// RawInsertion
// =============================================================================

/// Outcome of [`SetStorage::raw_insert`].
///
/// `position` designates the stored element equal to the inserted value:
/// the new element when `inserted` is `true`, the previously stored one
/// otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawInsertion<P> {
    /// Where the equal element now lives.
    pub position: P,
    /// Whether a new element was stored.
    pub inserted: bool,
}

impl<P> RawInsertion<P> {
    /// Creates an insertion outcome.
    #[inline]
    #[must_use]
    pub const fn new(position: P, inserted: bool) -> Self {
        Self { position, inserted }
    }
}

// =============================================================================
// SetStorage
// =============================================================================

/// The minimal primitives of an associative backing store.
///
/// Construction of an empty store is [`Default::default`]. Every method is
/// total: absence is reported structurally (`0`, `None`, `false`), never
/// through an error.
///
/// Implementors that tolerate repeated elements (bags, multisets) report
/// `inserted == true` for every raw insertion; implementors that enforce
/// uniqueness should additionally implement [`UniqueStorage`].
pub trait SetStorage: Default {
    /// The stored value type. Ordering or hashing is the store's concern.
    type Element: Clone + Eq;

    /// Opaque handle designating one stored element.
    type Position: Clone;

    /// Forward iterator over a snapshot of the store.
    type Iter<'a>: Iterator<Item = &'a Self::Element>
    where
        Self: 'a;

    /// Stores `element` unless the store's uniqueness rule forbids it.
    fn raw_insert(&mut self, element: Self::Element) -> RawInsertion<Self::Position>;

    /// Number of stored occurrences equal to `element`.
    fn count(&self, element: &Self::Element) -> usize;

    /// Removes every stored occurrence equal to `key`, returning how many
    /// were removed. Erasing an absent key is a no-op returning `0`.
    fn erase(&mut self, key: &Self::Element) -> usize;

    /// Total occurrence count.
    ///
    /// Always equals the number of items one full pass of [`iter`](Self::iter)
    /// produces.
    fn len(&self) -> usize;

    /// Returns `true` if the store holds nothing.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over every stored occurrence.
    fn iter(&self) -> Self::Iter<'_>;

    /// Locates one stored occurrence equal to `element`.
    fn find(&self, element: &Self::Element) -> Option<Self::Position>;

    /// Dereferences a position, or `None` if a mutation after the position
    /// was produced invalidated it.
    fn element_at(&self, position: &Self::Position) -> Option<&Self::Element>;
}

/// A store guaranteeing at most one occurrence per equal-valued element.
///
/// This is a promise, not a check: implementing it for a store that keeps
/// duplicates breaks every relation in [`UniqueSet`](crate::algebra::UniqueSet).
pub trait UniqueStorage: SetStorage {}

/// Optional capability: removal through a position.
pub trait PositionalErase: UniqueStorage {
    /// Removes the element designated by `position` and returns the value
    /// that was stored there, or `None` if the position no longer
    /// designates a stored element.
    fn erase_at(&mut self, position: Self::Position) -> Option<Self::Element>;
}
