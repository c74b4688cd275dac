//! The `set_of!` literal.

/// Builds any store from a literal list of elements.
///
/// `set_of![a, b, c]` is exactly
/// [`RepeatableSet::from_sequence([a, b, c])`](crate::algebra::RepeatableSet::from_sequence):
/// literal construction has no semantics of its own. The store type comes
/// from inference.
///
/// # Syntax
///
/// - `set_of![]` - An empty store
/// - `set_of![a, b, ...]` - Raw-inserts each element in order
///
/// # Examples
///
/// ```
/// use setwise::prelude::*;
/// use std::collections::BTreeSet;
///
/// let unique: InlineSet<i32> = set_of![1, 1, 2];
/// let repeating: SortedBag<i32> = set_of![1, 1, 2];
/// let tree: BTreeSet<i32> = set_of![2, 1, 2,];
///
/// assert_eq!(unique.len(), 2);
/// assert_eq!(repeating.len(), 3);
/// assert_eq!(tree.len(), 2);
/// ```
#[macro_export]
macro_rules! set_of {
    () => {
        $crate::algebra::RepeatableSet::from_sequence([])
    };
    ($($element:expr),+ $(,)?) => {
        $crate::algebra::RepeatableSet::from_sequence([$($element),+])
    };
}
