//! Backing stores shipped with the crate.
//!
//! The algebra never depends on these; they exist so that every refinement
//! level of the capability has a ready-made store:
//!
//! - [`InlineSet`]: unique, insertion-ordered, inline storage for small
//!   sets, needs only `Eq` on its elements
//! - [`SortedBag`]: repeating, sorted, keeps every occurrence
//!
//! # Examples
//!
//! ```rust
//! use setwise::prelude::*;
//!
//! let bag: SortedBag<i32> = set_of![3, 1, 1];
//! assert_eq!(bag.count(&1), 2);
//! assert_eq!(bag.len(), 3);
//!
//! let set: InlineSet<i32> = set_of![3, 1, 1];
//! assert_eq!(set.count(&1), 1);
//! assert_eq!(set.len(), 2);
//! ```

mod inline_set;
mod sorted_bag;

pub use inline_set::InlineSet;
pub use inline_set::InlineSetIntoIterator;
pub use sorted_bag::SortedBag;

/// Opaque index position used by the crate's own stores.
///
/// A slot designates an element by its offset in the store's backing
/// sequence and is invalidated by any mutation of that store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot(usize);

impl Slot {
    #[inline]
    const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    const fn index(self) -> usize {
        self.0
    }
}

/// Writes `{a, b, c}` roster notation.
fn write_roster<'a, T, I>(formatter: &mut std::fmt::Formatter<'_>, elements: I) -> std::fmt::Result
where
    T: std::fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    write!(formatter, "{{")?;
    let mut first = true;
    for element in elements {
        if first {
            first = false;
        } else {
            write!(formatter, ", ")?;
        }
        write!(formatter, "{element}")?;
    }
    write!(formatter, "}}")
}
