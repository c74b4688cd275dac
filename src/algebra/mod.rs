//! Set algebra facades written against the container capability.
//!
//! - [`RepeatableSet`]: membership and bulk construction, for every store
//! - [`UniqueSet`]: insertion, filtering, union, intersection, difference
//!   and the subset / superset / disjoint relations, for unique stores
//! - [`RemovableSet`]: removal, for unique stores with positional erase
//!
//! All three are blanket-implemented: any type implementing the matching
//! capability traits gets the facade for free.
//!
//! # Containers and sequences
//!
//! Every relation exists in two shapes. The base name takes another
//! container of the same type; the `_iter` variant takes any
//! [`IntoIterator`] of elements, which may repeat elements, have unknown
//! length, or never end:
//!
//! | Relation            | Container form        | Sequence form              |
//! |---------------------|-----------------------|----------------------------|
//! | ⊆                   | `is_subset`           | `is_subset_iter`           |
//! | ⊊                   | `is_strict_subset`    | `is_strict_subset_iter`    |
//! | ⊇                   | `is_superset`         | `is_superset_iter`         |
//! | ⊋                   | `is_strict_superset`  | `is_strict_superset_iter`  |
//! | disjoint            | `is_disjoint`         | `is_disjoint_iter`         |
//! | ∩                   | `intersection`        | `intersection_iter`        |
//!
//! Sequence relations stop consuming their input as soon as the answer is
//! known. A relation whose answer is never reached (say `is_subset_iter`
//! against an endless stream that never mentions some member) never
//! returns.
//!
//! # Examples
//!
//! ```rust
//! use setwise::prelude::*;
//!
//! let evens: InlineSet<i32> = set_of![2, 4, 6];
//!
//! assert!(evens.is_subset_iter([2, 2, 4, 4, 6, 6, 8]));
//! assert!(evens.is_strict_subset_iter([2, 2, 4, 4, 6, 6, 8]));
//! assert!(evens.is_strict_superset_iter([2, 2, 4]));
//! assert!(!evens.is_strict_superset_iter([2, 2, 4, 6]));
//! ```

mod macros;
mod repeatable;
mod sequence;
mod unique;

pub use repeatable::RepeatableSet;
pub use unique::Insertion;
pub use unique::RemovableSet;
pub use unique::UniqueSet;
