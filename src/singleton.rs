use std::iter::FusedIterator;

/// Wraps a single value as a lazy one-element sequence.
///
/// The adaptor is `Clone`, so callers needing a restartable sequence can
/// clone it before consuming:
///
/// ```
/// use seq_ext::singleton;
///
/// let one = singleton(42);
/// assert_eq!(one.clone().collect::<Vec<_>>(), vec![42]);
/// assert_eq!(one.count(), 1);
/// ```
pub fn singleton<T>(item: T) -> Singleton<T> {
    Singleton { item: Some(item) }
}

/// Iterator yielding exactly one value. See [`singleton`].
#[derive(Debug, Clone)]
pub struct Singleton<T> {
    item: Option<T>,
}

impl<T> Iterator for Singleton<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.item.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Singleton<T> {
    fn next_back(&mut self) -> Option<T> {
        self.item.take()
    }
}

impl<T> ExactSizeIterator for Singleton<T> {
    fn len(&self) -> usize {
        usize::from(self.item.is_some())
    }
}

impl<T> FusedIterator for Singleton<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yields_once() {
        let mut it = singleton('a');
        assert_eq!(it.next(), Some('a'));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_len() {
        let mut it = singleton(1);
        assert_eq!(it.len(), 1);
        it.next();
        assert_eq!(it.len(), 0);
    }

    #[test]
    fn test_restartable_via_clone() {
        let it = singleton("x");
        assert_eq!(it.clone().collect::<Vec<_>>(), vec!["x"]);
        assert_eq!(it.collect::<Vec<_>>(), vec!["x"]);
    }

    #[test]
    fn test_double_ended() {
        let mut it = singleton(5);
        assert_eq!(it.next_back(), Some(5));
        assert_eq!(it.next_back(), None);
    }
}
