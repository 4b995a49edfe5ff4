use ahash::AHashSet;
use std::hash::Hash;

/// Lazy set-difference over a sequence.
///
/// Yields, in first-encounter order, each source value that is not in the
/// excluded set and has not been yielded before. These are set semantics:
/// duplicates among the surviving values collapse too, so
/// `[1, 1, 2, 2, 3].except(2)` is `[1, 3]`, not `[1, 1, 3]`.
pub struct Except<I: Iterator> {
    source: I,
    seen: AHashSet<I::Item>,
}

impl<I> Except<I>
where
    I: Iterator,
    I::Item: Hash + Eq,
{
    pub(crate) fn new(source: I, excluded: impl IntoIterator<Item = I::Item>) -> Self {
        Self {
            source,
            // Pre-seeding the seen-set with the excluded values makes
            // exclusion and de-duplication the same check.
            seen: excluded.into_iter().collect(),
        }
    }
}

impl<I> Iterator for Except<I>
where
    I: Iterator,
    I::Item: Hash + Eq + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.source.by_ref() {
            if self.seen.insert(item.clone()) {
                return Some(item);
            }
        }
        None
    }
}
