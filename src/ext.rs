use crate::duplicates::Duplicates;
use crate::except::Except;
use crate::singleton::singleton;
use std::hash::Hash;

/// Convenience predicates and transforms for any [`Iterator`].
///
/// The counting predicates (`has_at_least` and friends) consume only as
/// many elements as needed to decide, which makes them cheaper than
/// `count()` when the sequence length is unknown and usable on infinite
/// sequences.
///
/// ```
/// use seq_ext::SequenceExt;
///
/// assert!([1, 2, 3].iter().has_more_than(2));
/// assert!(!std::iter::empty::<u8>().has_at_least(1));
/// ```
pub trait SequenceExt: Iterator + Sized {
    /// Returns the sole element of the sequence, or `None` when the
    /// sequence is empty or holds more than one element.
    ///
    /// Fully materializes the source in a single pass.
    ///
    /// ```
    /// use seq_ext::SequenceExt;
    ///
    /// assert_eq!(std::iter::empty::<u8>().only(), None);
    /// assert_eq!([5].into_iter().only(), Some(5));
    /// assert_eq!([5, 6].into_iter().only(), None);
    /// ```
    fn only(self) -> Option<Self::Item> {
        let mut items: Vec<Self::Item> = self.collect();
        if items.len() > 1 {
            None
        } else {
            items.pop()
        }
    }

    /// Like [`only`](SequenceExt::only), but falls back to the type's
    /// default value instead of `None`.
    fn only_or_default(self) -> Self::Item
    where
        Self::Item: Default,
    {
        self.only().unwrap_or_default()
    }

    /// Returns true iff the sequence yields at least `amount` elements.
    ///
    /// Consumes at most `amount` elements.
    fn has_at_least(self, amount: usize) -> bool {
        self.take(amount).count() == amount
    }

    /// Returns true iff the sequence yields more than `amount` elements.
    ///
    /// Consumes at most `amount + 1` elements.
    fn has_more_than(self, amount: usize) -> bool {
        self.has_at_least(amount.saturating_add(1))
    }

    /// Returns true iff the sequence yields at most `amount` elements.
    ///
    /// Consumes at most `amount + 1` elements.
    fn has_at_most(self, amount: usize) -> bool {
        self.take(amount.saturating_add(1)).count() <= amount
    }

    /// Returns true iff the sequence yields fewer than `amount` elements.
    ///
    /// `has_less_than(_, 0)` is always false: no sequence has fewer than
    /// zero elements.
    fn has_less_than(self, amount: usize) -> bool {
        match amount.checked_sub(1) {
            Some(bound) => self.has_at_most(bound),
            None => false,
        }
    }

    /// Returns true iff the sequence yields no elements.
    ///
    /// Probes for a single element only.
    fn is_empty(mut self) -> bool {
        self.next().is_none()
    }

    /// Returns the values occurring more than once, each yielded a single
    /// time in the order its key first appeared.
    ///
    /// ```
    /// use seq_ext::SequenceExt;
    ///
    /// let dups: Vec<i32> = [1, 2, 2, 3, 3, 3, 4].into_iter().duplicates().collect();
    /// assert_eq!(dups, vec![2, 3]);
    /// ```
    fn duplicates(self) -> Duplicates<Self>
    where
        Self::Item: Hash + Eq,
    {
        Duplicates::new(self)
    }

    /// Subtracts `{item}` from the set formed by this sequence.
    ///
    /// Set-difference semantics: every occurrence of `item` is removed
    /// and the surviving values are de-duplicated as well.
    ///
    /// ```
    /// use seq_ext::SequenceExt;
    ///
    /// let rest: Vec<i32> = [1, 1, 2, 2, 3].into_iter().except(2).collect();
    /// assert_eq!(rest, vec![1, 3]);
    /// ```
    fn except(self, item: Self::Item) -> Except<Self>
    where
        Self::Item: Hash + Eq + Clone,
    {
        self.except_items(singleton(item))
    }

    /// General set difference: yields each value of this sequence that is
    /// not in `other`, de-duplicated, in first-encounter order.
    fn except_items(self, other: impl IntoIterator<Item = Self::Item>) -> Except<Self>
    where
        Self::Item: Hash + Eq + Clone,
    {
        Except::new(self, other)
    }

    /// Returns true iff any element equals `value`.
    ///
    /// Plain structural equality, so `Option` elements compare the way
    /// callers expect: `None` matches `None`. Stops at the first match.
    fn contains_item(mut self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.any(|item| item == *value)
    }
}

impl<I: Iterator> SequenceExt for I {}
