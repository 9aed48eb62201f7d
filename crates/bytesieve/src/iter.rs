use core::iter::FusedIterator;

use crate::predicate::Predicate;

/// Double-ended iterator over the bytes of a view that satisfy its
/// predicate.
///
/// Rejected bytes are skipped lazily on every step; no filtered positions
/// are cached. Reverse iteration (`.rev()`) walks the raw buffer backward
/// with the same skipping behavior.
///
/// # Examples
///
/// ```rust
/// use bytesieve::{FilteredView, Predicate};
///
/// let view = FilteredView::with_predicate(b"a1b2c3", Predicate::new(|b: u8| b.is_ascii_digit()));
/// let forward: Vec<u8> = view.iter().collect();
/// let backward: Vec<u8> = view.iter().rev().collect();
/// assert_eq!(forward, b"123");
/// assert_eq!(backward, b"321");
/// ```
#[derive(Debug, Clone)]
pub struct Bytes<'a> {
    data: &'a [u8],
    front: usize,
    back: usize,
    pred: Predicate,
}

impl<'a> Bytes<'a> {
    pub(crate) fn new(data: &'a [u8], pred: Predicate) -> Self {
        Self {
            data,
            front: 0,
            back: data.len(),
            pred,
        }
    }
}

impl Iterator for Bytes<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        while self.front < self.back {
            let byte = self.data[self.front];
            self.front += 1;
            if self.pred.test(byte) {
                return Some(byte);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Anywhere between none and all of the remaining raw span may pass.
        (0, Some(self.back - self.front))
    }
}

impl DoubleEndedIterator for Bytes<'_> {
    fn next_back(&mut self) -> Option<u8> {
        while self.front < self.back {
            self.back -= 1;
            let byte = self.data[self.back];
            if self.pred.test(byte) {
                return Some(byte);
            }
        }
        None
    }
}

impl FusedIterator for Bytes<'_> {}
