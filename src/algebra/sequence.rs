//! Relations between a unique set and an arbitrary sequence.
//!
//! The candidate sequence may repeat elements, have unknown length, or be
//! unbounded, so nothing here sizes it up front. Instead a [`Coverage`]
//! walk counts how many *distinct* members of the reference set the input
//! has produced so far, using an auxiliary tracking set of the same store
//! type so that repeats never over-count. Every walk returns the instant
//! its answer is settled.

use super::repeatable::RepeatableSet;
use crate::capability::UniqueStorage;

/// What one input element contributed to a [`Coverage`] walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Observation {
    /// Not a member of the reference set.
    Foreign,
    /// A member already witnessed earlier in the input.
    Repeated,
    /// A member seen for the first time.
    Fresh,
}

/// Distinct-member counter over one pass of a candidate sequence.
struct Coverage<'a, S> {
    reference: &'a S,
    seen: S,
    distinct: usize,
}

impl<'a, S: UniqueStorage> Coverage<'a, S> {
    fn new(reference: &'a S) -> Self {
        Self {
            reference,
            seen: S::default(),
            distinct: 0,
        }
    }

    fn observe(&mut self, element: S::Element) -> Observation {
        if !self.reference.contains(&element) {
            Observation::Foreign
        } else if self.seen.raw_insert(element).inserted {
            self.distinct += 1;
            Observation::Fresh
        } else {
            Observation::Repeated
        }
    }

    /// Every member of the reference set has been witnessed.
    fn is_complete(&self) -> bool {
        self.distinct == self.reference.len()
    }

    const fn distinct(&self) -> usize {
        self.distinct
    }
}

pub(super) fn is_subset<S, I>(reference: &S, candidate: I) -> bool
where
    S: UniqueStorage,
    I: IntoIterator<Item = S::Element>,
{
    if reference.is_empty() {
        return true;
    }

    let mut coverage = Coverage::new(reference);
    for element in candidate {
        if coverage.observe(element) == Observation::Fresh && coverage.is_complete() {
            tracing::trace!(
                distinct = coverage.distinct(),
                "subset: every member witnessed, input left unconsumed"
            );
            return true;
        }
    }
    false
}

pub(super) fn is_strict_subset<S, I>(reference: &S, candidate: I) -> bool
where
    S: UniqueStorage,
    I: IntoIterator<Item = S::Element>,
{
    let mut coverage = Coverage::new(reference);
    // Latched once the input has produced a non-member.
    let mut has_extra = false;

    for element in candidate {
        match coverage.observe(element) {
            Observation::Foreign => {
                if coverage.is_complete() {
                    tracing::trace!(
                        distinct = coverage.distinct(),
                        "strict subset: extra element after full coverage"
                    );
                    return true;
                }
                has_extra = true;
            }
            Observation::Fresh if has_extra && coverage.is_complete() => {
                tracing::trace!(
                    distinct = coverage.distinct(),
                    "strict subset: full coverage after extra element"
                );
                return true;
            }
            Observation::Fresh | Observation::Repeated => {}
        }
    }
    false
}

pub(super) fn is_strict_superset<S, I>(reference: &S, candidate: I) -> bool
where
    S: UniqueStorage,
    I: IntoIterator<Item = S::Element>,
{
    let mut coverage = Coverage::new(reference);

    for element in candidate {
        match coverage.observe(element) {
            Observation::Foreign => return false,
            Observation::Fresh if coverage.is_complete() => {
                tracing::trace!(
                    reference_len = reference.len(),
                    "strict superset: candidate covers every member"
                );
                return false;
            }
            Observation::Fresh | Observation::Repeated => {}
        }
    }
    !coverage.is_complete()
}

// =============================================================================
// Tests
// =============================================================================
