//! Facade for stores that enforce uniqueness: the algebra core.

use super::repeatable::RepeatableSet;
use super::sequence;
use crate::capability::{PositionalErase, RawInsertion, SetStorage, UniqueStorage};

/// Outcome of [`UniqueSet::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Insertion<T> {
    /// `true` if the element was absent and is now stored.
    pub inserted: bool,
    /// The inserted element, or the previously stored element equal to it.
    pub member_after_insert: T,
}

/// The stored element equal to `element`, if any.
fn stored<'a, S: SetStorage>(set: &'a S, element: &S::Element) -> Option<&'a S::Element> {
    set.find(element).and_then(|position| set.element_at(&position))
}

// =============================================================================
// UniqueSet
// =============================================================================

/// Boolean set algebra over a unique store.
///
/// Blanket-implemented for every `UniqueStorage + Clone` type. Operations
/// that build a result never mutate their argument; `form_*` and
/// `subtract` mutate only `self`.
///
/// # Examples
///
/// ```rust
/// use setwise::prelude::*;
///
/// let odds: InlineSet<i32> = set_of![1, 3, 5];
///
/// assert!(odds.is_subset_iter([1, 3, 5, 7]));
/// assert!(!odds.is_subset_iter([1, 3]));
/// assert!(odds.is_superset_iter([1, 3]));
/// assert!(odds.is_disjoint_iter([2, 4, 6]));
///
/// let union = odds.union([2, 4, 6]);
/// let expected: InlineSet<i32> = set_of![1, 2, 3, 4, 5, 6];
/// assert_eq!(union, expected);
///
/// let intersection = odds.intersection_iter([1, 5]);
/// assert_eq!(intersection.as_slice(), &[1, 5]);
///
/// let mut difference = odds.clone();
/// difference.subtract([1, 5]);
/// assert_eq!(difference.as_slice(), &[3]);
/// ```
pub trait UniqueSet: UniqueStorage + RepeatableSet + Clone {
    // -------------------- Mutation -------------------- //

    /// Inserts `new_member` if no equal element is stored.
    ///
    /// Returns `inserted == true` and the new member when it was absent.
    /// Otherwise nothing is stored and `member_after_insert` is the element
    /// that was already there, which may differ from `new_member` in any
    /// part its equality ignores.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::prelude::*;
    ///
    /// let mut set: InlineSet<i32> = InlineSet::new();
    ///
    /// assert!(set.insert(123).inserted);
    /// let again = set.insert(123);
    /// assert!(!again.inserted);
    /// assert_eq!(again.member_after_insert, 123);
    /// assert_eq!(set.len(), 1);
    /// ```
    fn insert(&mut self, new_member: Self::Element) -> Insertion<Self::Element> {
        let RawInsertion { position, inserted } = self.raw_insert(new_member.clone());
        let member_after_insert = self.element_at(&position).cloned().unwrap_or(new_member);
        Insertion {
            inserted,
            member_after_insert,
        }
    }

    /// Adds every element of `other`, skipping those already present.
    fn form_union<I>(&mut self, other: I)
    where
        I: IntoIterator<Item = Self::Element>,
    {
        for item in other {
            self.raw_insert(item);
        }
    }

    /// Keeps only the elements also present in `other`.
    fn form_intersection(&mut self, other: &Self) {
        let before = self.len();
        *self = self.intersection(other);
        tracing::trace!(before, after = self.len(), "formed intersection with container");
    }

    /// Keeps only the elements that appear somewhere in `other`.
    fn form_intersection_iter<I>(&mut self, other: I)
    where
        I: IntoIterator<Item = Self::Element>,
    {
        let before = self.len();
        *self = self.intersection_iter(other);
        tracing::trace!(before, after = self.len(), "formed intersection with sequence");
    }

    /// Erases every element of `other`. Absent elements are ignored.
    fn subtract<I>(&mut self, other: I)
    where
        I: IntoIterator<Item = Self::Element>,
    {
        for item in other {
            self.erase(&item);
        }
    }

    // -------------------- Constructions -------------------- //

    /// A fresh set holding exactly the elements for which `is_included`
    /// returns `true`, evaluated in iteration order.
    #[must_use]
    fn filter<P>(&self, mut is_included: P) -> Self
    where
        P: FnMut(&Self::Element) -> bool,
    {
        let mut filtered = Self::default();
        for element in self.iter() {
            if is_included(element) {
                filtered.raw_insert(element.clone());
            }
        }
        filtered
    }

    /// Union x ∪ other.
    #[must_use]
    fn union<I>(&self, other: I) -> Self
    where
        I: IntoIterator<Item = Self::Element>,
    {
        let mut result = self.clone();
        result.form_union(other);
        result
    }

    /// Intersection x ∩ other of two sets.
    ///
    /// Iterates the smaller operand. Retained members always carry the
    /// value stored in `self`.
    #[must_use]
    fn intersection(&self, other: &Self) -> Self {
        let mut result = Self::default();
        if self.len() <= other.len() {
            for element in self.iter() {
                if other.contains(element) {
                    result.raw_insert(element.clone());
                }
            }
        } else {
            for element in other.iter() {
                if let Some(member) = stored(self, element) {
                    result.raw_insert(member.clone());
                }
            }
        }
        result
    }

    /// Intersection of the set with the elements of a sequence.
    ///
    /// Repeated items in `other` collapse. Retained members carry the value
    /// stored in `self`.
    #[must_use]
    fn intersection_iter<I>(&self, other: I) -> Self
    where
        I: IntoIterator<Item = Self::Element>,
    {
        let mut result = Self::default();
        for item in other {
            if let Some(member) = stored(self, &item) {
                result.raw_insert(member.clone());
            }
        }
        result
    }

    /// Difference x ∖ other.
    #[must_use]
    fn subtracting<I>(&self, other: I) -> Self
    where
        I: IntoIterator<Item = Self::Element>,
    {
        let mut result = self.clone();
        result.subtract(other);
        result
    }

    // -------------------- Relations with a container -------------------- //

    /// Subset relation ⊆.
    ///
    /// A larger set is rejected without iterating.
    fn is_subset(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }
        self.iter().all(|element| other.contains(element))
    }

    /// Strict subset relation ⊊.
    fn is_strict_subset(&self, other: &Self) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    /// Superset relation ⊇.
    fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Strict superset relation ⊋.
    fn is_strict_superset(&self, other: &Self) -> bool {
        self.len() > other.len() && other.is_subset(self)
    }

    /// Returns `true` if the sets share no element.
    fn is_disjoint(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return true;
        }
        let (smaller, larger) = if self.len() < other.len() {
            (self, other)
        } else {
            (other, self)
        };
        !smaller.iter().any(|element| larger.contains(element))
    }

    // -------------------- Relations with a sequence -------------------- //

    /// Returns `true` once every member of `self` has appeared in
    /// `possible_superset`.
    ///
    /// Repeated items never over-count. Returns as soon as the last missing
    /// member appears, without consuming the rest of the input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::prelude::*;
    ///
    /// let set: InlineSet<i32> = set_of![2, 4, 6];
    /// assert!(set.is_subset_iter([2, 2, 4, 4, 6, 6, 8]));
    /// assert!(!set.is_subset_iter([2, 2, 4, 4]));
    ///
    /// // Stops at 6; the rest of the range is never produced.
    /// assert!(set.is_subset_iter(1..));
    /// ```
    fn is_subset_iter<I>(&self, possible_superset: I) -> bool
    where
        I: IntoIterator<Item = Self::Element>,
    {
        sequence::is_subset(self, possible_superset)
    }

    /// Returns `true` if every member of `self` appears in
    /// `possible_strict_superset` and the sequence also holds at least one
    /// element that is not a member.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::prelude::*;
    ///
    /// let set: InlineSet<i32> = set_of![1, 3, 5];
    /// assert!(set.is_strict_subset_iter([1, 3, 5, 7]));
    /// assert!(set.is_strict_subset_iter([7, 1, 3, 5]));
    /// assert!(!set.is_strict_subset_iter([1, 3, 5, 3]));
    /// ```
    fn is_strict_subset_iter<I>(&self, possible_strict_superset: I) -> bool
    where
        I: IntoIterator<Item = Self::Element>,
    {
        sequence::is_strict_subset(self, possible_strict_superset)
    }

    /// Returns `true` if every element of `possible_subset` is a member.
    ///
    /// Stops at the first element that is not.
    fn is_superset_iter<I>(&self, possible_subset: I) -> bool
    where
        I: IntoIterator<Item = Self::Element>,
    {
        possible_subset
            .into_iter()
            .all(|element| self.contains(&element))
    }

    /// Returns `true` if every element of `possible_strict_subset` is a
    /// member and at least one member never appears in it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::prelude::*;
    ///
    /// let set: InlineSet<i32> = set_of![2, 4, 6];
    /// assert!(set.is_strict_superset_iter([2, 2, 4]));
    /// assert!(!set.is_strict_superset_iter([2, 2, 4, 6]));
    /// ```
    fn is_strict_superset_iter<I>(&self, possible_strict_subset: I) -> bool
    where
        I: IntoIterator<Item = Self::Element>,
    {
        sequence::is_strict_superset(self, possible_strict_subset)
    }

    /// Returns `true` if no element of `other` is a member.
    ///
    /// An empty set does not consume `other` at all.
    fn is_disjoint_iter<I>(&self, other: I) -> bool
    where
        I: IntoIterator<Item = Self::Element>,
    {
        self.is_empty() || other.into_iter().all(|element| !self.contains(&element))
    }
}

impl<S> UniqueSet for S where S: UniqueStorage + Clone {}

// =============================================================================
// RemovableSet
// =============================================================================

/// Removal, for unique stores that can erase through a position.
///
/// # Examples
///
/// ```rust
/// use setwise::prelude::*;
///
/// let mut set: InlineSet<i32> = set_of![1, 2];
///
/// assert_eq!(set.remove(&1), Some(1));
/// assert_eq!(set.remove(&1), None);
/// assert!(!set.contains(&1));
/// ```
pub trait RemovableSet: UniqueSet + PositionalErase {
    /// Removes `member` and returns the value that was stored, or `None`
    /// (leaving the set untouched) if it was absent.
    fn remove(&mut self, member: &Self::Element) -> Option<Self::Element> {
        let position = self.find(member)?;
        self.erase_at(position)
    }
}

impl<S> RemovableSet for S where S: UniqueSet + PositionalErase {}

// =============================================================================
// Tests
// =============================================================================

#[cfg(all(test, feature = "storage"))]
mod tests {
    use super::*;
    use crate::storage::InlineSet;
    use rstest::rstest;

    /// Equality on `key` only; `tag` rides along.
    #[derive(Debug, Clone)]
    struct Tagged {
        key: i32,
        tag: &'static str,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Tagged {}

    fn tagged(key: i32, tag: &'static str) -> Tagged {
        Tagged { key, tag }
    }

    #[rstest]
    fn test_insert_returns_previously_stored_member() {
        let mut set: InlineSet<Tagged> = InlineSet::new();
        set.insert(tagged(1, "first"));

        let insertion = set.insert(tagged(1, "second"));

        assert!(!insertion.inserted);
        assert_eq!(insertion.member_after_insert.tag, "first");
        assert_eq!(set.len(), 1);
    }

    #[rstest]
    fn test_intersection_keeps_values_of_self_from_either_side() {
        let small: InlineSet<Tagged> = [tagged(1, "small")].into_iter().collect();
        let large: InlineSet<Tagged> = [tagged(1, "large"), tagged(2, "large")]
            .into_iter()
            .collect();

        let iterated_self = small.intersection(&large);
        let iterated_other = large.intersection(&small);

        assert_eq!(iterated_self.as_slice()[0].tag, "small");
        assert_eq!(iterated_other.as_slice()[0].tag, "large");
    }

    #[rstest]
    fn test_intersection_iter_keeps_values_of_self() {
        let set: InlineSet<Tagged> = [tagged(4, "stored")].into_iter().collect();
        let result = set.intersection_iter([tagged(4, "candidate"), tagged(5, "candidate")]);

        assert_eq!(result.len(), 1);
        assert_eq!(result.as_slice()[0].tag, "stored");
    }

    #[rstest]
    fn test_remove_returns_stored_member() {
        let mut set: InlineSet<Tagged> = [tagged(9, "stored")].into_iter().collect();
        let removed = set.remove(&tagged(9, "probe"));

        assert_eq!(removed.map(|member| member.tag), Some("stored"));
        assert!(set.is_empty());
    }

    #[rstest]
    fn test_filter_evaluates_in_iteration_order() {
        let set: InlineSet<i32> = [5, 1, 4, 2].into_iter().collect();
        let mut visited = Vec::new();

        let filtered = set.filter(|element| {
            visited.push(*element);
            element % 2 == 0
        });

        assert_eq!(visited, vec![5, 1, 4, 2]);
        assert_eq!(filtered.as_slice(), &[4, 2]);
    }

    #[rstest]
    fn test_form_intersection_with_own_copy_is_identity() {
        let mut set: InlineSet<i32> = [1, 2, 3].into_iter().collect();
        let copy = set.clone();

        set.form_intersection(&copy);
        assert_eq!(set, copy);

        set.form_intersection_iter(copy.clone());
        assert_eq!(set, copy);
    }

    #[rstest]
    #[case(vec![], vec![], true)]
    #[case(vec![1], vec![], true)]
    #[case(vec![], vec![1], true)]
    #[case(vec![1, 2], vec![3, 4, 5], true)]
    #[case(vec![1, 2], vec![2, 3, 4], false)]
    #[case(vec![1, 2, 3], vec![3], false)]
    fn test_is_disjoint_either_size_order(
        #[case] left: Vec<i32>,
        #[case] right: Vec<i32>,
        #[case] expected: bool,
    ) {
        let left: InlineSet<i32> = left.into_iter().collect();
        let right: InlineSet<i32> = right.into_iter().collect();

        assert_eq!(left.is_disjoint(&right), expected);
        assert_eq!(right.is_disjoint(&left), expected);
    }
}
