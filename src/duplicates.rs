use ahash::AHashMap;
use std::hash::Hash;
use std::vec;

/// Iterator over the values that occur more than once in a sequence.
///
/// Each duplicated value is yielded exactly once, in the order its key was
/// first encountered in the input (stable grouping order), regardless of
/// how many times it repeats or where the repeats fall.
///
/// Execution is deferred: the source is not touched until the first call
/// to `next()`, which groups the entire input in one pass.
pub struct Duplicates<I: Iterator> {
    source: Option<I>,
    grouped: vec::IntoIter<I::Item>,
}

impl<I> Duplicates<I>
where
    I: Iterator,
    I::Item: Hash + Eq,
{
    pub(crate) fn new(source: I) -> Self {
        Self {
            source: Some(source),
            grouped: Vec::new().into_iter(),
        }
    }

    /// Counts every value, keeping the input position of each first
    /// occurrence, then keeps the keys seen at least twice.
    fn group(source: I) -> vec::IntoIter<I::Item> {
        let mut counts: AHashMap<I::Item, (usize, u32)> = AHashMap::new();

        for (position, item) in source.enumerate() {
            counts
                .entry(item)
                .and_modify(|(_, count)| *count += 1)
                .or_insert((position, 1));
        }

        let mut repeated: Vec<(usize, I::Item)> = counts
            .into_iter()
            .filter(|&(_, (_, count))| count > 1)
            .map(|(item, (first, _))| (first, item))
            .collect();

        // The hash map lost the input order; the first-occurrence
        // positions restore it.
        repeated.sort_unstable_by_key(|&(first, _)| first);

        repeated
            .into_iter()
            .map(|(_, item)| item)
            .collect::<Vec<_>>()
            .into_iter()
    }
}

impl<I> Iterator for Duplicates<I>
where
    I: Iterator,
    I::Item: Hash + Eq,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(source) = self.source.take() {
            self.grouped = Self::group(source);
        }
        self.grouped.next()
    }
}
