//! # setwise
//!
//! Boolean set algebra written once against an abstract container
//! capability, valid for stores that enforce uniqueness and for stores
//! that tolerate repeated elements.
//!
//! ## Overview
//!
//! The crate is layered:
//!
//! - **Capability** ([`capability`]): the primitives a backing store must
//!   expose (raw insertion, per-element count, erase-by-key, size, snapshot
//!   iteration, positional find), refined by [`UniqueStorage`] and the
//!   optional [`PositionalErase`].
//! - **Repeatable facade** ([`RepeatableSet`]): membership and bulk
//!   construction, valid for any store.
//! - **Unique facade** ([`UniqueSet`], [`RemovableSet`]): insertion with
//!   identity preservation, filtering, union, intersection, difference and
//!   every subset / superset / disjoint relation, against another container
//!   or against an arbitrary (possibly duplicated, possibly unbounded)
//!   sequence.
//! - **Storage** ([`storage`]): ready-made backing stores, [`InlineSet`]
//!   and [`SortedBag`].
//!
//! [`UniqueStorage`]: capability::UniqueStorage
//! [`PositionalErase`]: capability::PositionalErase
//! [`RepeatableSet`]: algebra::RepeatableSet
//! [`UniqueSet`]: algebra::UniqueSet
//! [`RemovableSet`]: algebra::RemovableSet
//! [`InlineSet`]: storage::InlineSet
//! [`SortedBag`]: storage::SortedBag
//!
//! ## Feature Flags
//!
//! - `storage`: the crate's own stores (enabled by default)
//! - `fxhash`: [`FxHashSet`](capability::FxHashSet) alias using `rustc-hash`
//! - `ahash`: [`AHashSet`](capability::AHashSet) alias using `ahash`
//! - `serde`: serialization for the crate's own stores
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use setwise::prelude::*;
//!
//! let odds: InlineSet<i32> = set_of![1, 3, 5];
//!
//! // Duplicates in the candidate never over-count.
//! assert!(odds.is_subset_iter([1, 1, 3, 5, 5, 7]));
//! assert!(odds.is_strict_superset_iter([1, 1, 3]));
//!
//! // Unbounded inputs are fine as long as the answer is reached.
//! assert!(odds.is_subset_iter(0..));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the capability traits, both facades and, when enabled,
/// the crate's own stores.
///
/// # Usage
///
/// ```rust
/// use setwise::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algebra::*;
    pub use crate::capability::*;
    pub use crate::set_of;

    #[cfg(feature = "storage")]
    pub use crate::storage::*;
}

pub mod algebra;
pub mod capability;

#[cfg(feature = "storage")]
pub mod storage;
