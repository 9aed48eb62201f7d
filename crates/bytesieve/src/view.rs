use alloc::vec::Vec;
use core::{cmp::Ordering, fmt, ops::Index};

use bstr::ByteSlice;

use crate::{error::OutOfRange, iter::Bytes, predicate::Predicate};

/// A non-owning view over a byte buffer, exposing only the bytes that
/// satisfy a predicate.
///
/// The view borrows its backing buffer; the borrow checker guarantees the
/// buffer outlives every view and iterator derived from it. Filtering is
/// lazy: nothing is scanned at construction, and [`len`](Self::len),
/// [`is_empty`](Self::is_empty) and indexing each walk the raw buffer on
/// demand. The one allocating operation is [`to_bytes`](Self::to_bytes).
///
/// Cloning a view shares the same borrowed buffer and the same predicate
/// handle.
///
/// # Examples
///
/// ```rust
/// use bytesieve::{FilteredView, Predicate};
///
/// let view = FilteredView::with_predicate(b"cat", Predicate::new(|b| b == b'a'));
/// assert_eq!(view.len(), 1);
/// assert_eq!(view.at(0), Ok(b'a'));
/// assert_eq!(view.data(), b"cat");
/// ```
#[derive(Clone, Default)]
pub struct FilteredView<'a> {
    data: &'a [u8],
    pred: Predicate,
}

impl<'a> FilteredView<'a> {
    /// Creates a view over `data` with the accept-all predicate.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_predicate(data, Predicate::accept_all())
    }

    /// Creates a view over `data` filtered by `predicate`.
    #[must_use]
    pub fn with_predicate(data: &'a [u8], predicate: Predicate) -> Self {
        Self {
            data,
            pred: predicate,
        }
    }

    /// The raw, unfiltered backing buffer.
    #[must_use]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The view's predicate.
    #[must_use]
    pub fn predicate(&self) -> &Predicate {
        &self.pred
    }

    /// Number of bytes satisfying the predicate.
    ///
    /// Recomputed by scanning the raw buffer on every call, O(raw length).
    /// Nothing is cached: the predicate is re-consulted so that the result
    /// is always consistent with the current iteration behavior.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.iter().filter(|&&b| self.pred.test(b)).count()
    }

    /// Whether no byte satisfies the predicate.
    ///
    /// Short-circuits on the first accepted byte.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.data.iter().any(|&b| self.pred.test(b))
    }

    /// The byte at filtered index `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.iter().nth(index)
    }

    /// The byte at filtered index `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] when `index >= self.len()`, including `at(0)`
    /// on a view whose filtered sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bytesieve::{FilteredView, OutOfRange};
    ///
    /// let view = FilteredView::from("unsw");
    /// assert_eq!(view.at(3), Ok(b'w'));
    /// assert_eq!(view.at(4), Err(OutOfRange { index: 4, len: 4 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<u8, OutOfRange> {
        self.get(index).ok_or_else(|| OutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Materializes the filtered sequence as an owned byte vector, in raw
    /// order. The only allocating operation on a view.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.iter().collect()
    }

    /// Iterates over the bytes satisfying the predicate.
    #[must_use]
    pub fn iter(&self) -> Bytes<'a> {
        Bytes::new(self.data, self.pred.clone())
    }

    /// Moves the view out, leaving `self` in the default empty state
    /// (empty buffer, accept-all predicate).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bytesieve::FilteredView;
    ///
    /// let mut view = FilteredView::from("unsw");
    /// let taken = view.take();
    /// assert!(view.data().is_empty());
    /// assert_eq!(taken.data(), b"unsw");
    /// ```
    #[must_use]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Raw index of the `filtered`-th accepted byte.
    pub(crate) fn raw_index_of(&self, filtered: usize) -> Option<usize> {
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &b)| self.pred.test(b))
            .map(|(i, _)| i)
            .nth(filtered)
    }
}

impl<'a> From<&'a [u8]> for FilteredView<'a> {
    fn from(data: &'a [u8]) -> Self {
        Self::new(data)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for FilteredView<'a> {
    fn from(data: &'a [u8; N]) -> Self {
        Self::new(data)
    }
}

impl<'a> From<&'a str> for FilteredView<'a> {
    fn from(data: &'a str) -> Self {
        Self::new(data.as_bytes())
    }
}

/// Panics when `index` is outside the filtered range; use
/// [`at`](FilteredView::at) or [`get`](FilteredView::get) for checked
/// access.
impl Index<usize> for FilteredView<'_> {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        match self.raw_index_of(index) {
            Some(raw) => &self.data[raw],
            None => panic!("index {index} out of range for filtered view"),
        }
    }
}

impl<'a> IntoIterator for &FilteredView<'a> {
    type Item = u8;
    type IntoIter = Bytes<'a>;

    fn into_iter(self) -> Bytes<'a> {
        self.iter()
    }
}

// Comparison is over filtered sequences, never buffer identity, and never
// allocates.
impl PartialEq for FilteredView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for FilteredView<'_> {}

impl PartialOrd for FilteredView<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FilteredView<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl PartialEq<[u8]> for FilteredView<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.iter().eq(other.iter().copied())
    }
}

impl PartialEq<&[u8]> for FilteredView<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.iter().eq(other.iter().copied())
    }
}

impl PartialEq<str> for FilteredView<'_> {
    fn eq(&self, other: &str) -> bool {
        self.iter().eq(other.bytes())
    }
}

impl PartialEq<&str> for FilteredView<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.iter().eq(other.bytes())
    }
}

/// Writes the filtered sequence; non-UTF-8 bytes render lossily.
impl fmt::Display for FilteredView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.to_bytes().as_bstr(), f)
    }
}

impl fmt::Debug for FilteredView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteredView")
            .field("data", &self.data.as_bstr())
            .field("filtered", &self.to_bytes().as_bstr())
            .finish()
    }
}

/// Serializes the filtered sequence as a byte string.
#[cfg(feature = "serde")]
impl serde::Serialize for FilteredView<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.to_bytes())
    }
}
