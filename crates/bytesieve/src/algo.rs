//! Free functions deriving new views from an existing one.
//!
//! All three return views over the *same* backing buffer (or a subslice of
//! it); none copies filtered bytes into the result.

use alloc::{vec, vec::Vec};

use bstr::ByteSlice;

use crate::{predicate::Predicate, view::FilteredView};

/// Conjoins the view's predicate with every predicate in `predicates`,
/// left to right, and returns a view over the same backing buffer.
///
/// The conjunction short-circuits, so ordering affects efficiency but not
/// the result.
///
/// # Examples
///
/// ```rust
/// use bytesieve::{FilteredView, Predicate, compose};
///
/// let view = FilteredView::from("c / c++");
/// let combined = compose(
///     &view,
///     [
///         Predicate::new(|b: u8| matches!(b, b'c' | b'+' | b'/')),
///         Predicate::new(|b: u8| b != b' '),
///         Predicate::accept_all(),
///     ],
/// );
/// assert_eq!(combined.to_bytes(), b"c/c++");
/// ```
#[must_use]
pub fn compose<'a>(
    view: &FilteredView<'a>,
    predicates: impl IntoIterator<Item = Predicate>,
) -> FilteredView<'a> {
    let combined = predicates
        .into_iter()
        .fold(view.predicate().clone(), |acc, pred| acc.and(&pred));
    FilteredView::with_predicate(view.data(), combined)
}

/// Splits the filtered sequence of `view` on occurrences of the filtered
/// sequence of `token`.
///
/// Matching runs over the filtered sequences, so bytes rejected by either
/// predicate are transparent to it. Matches are non-overlapping, left to
/// right. Each gap between matches becomes one segment, including leading
/// and trailing empty ones, so a token match at the very end yields a
/// trailing empty segment. If the token never occurs, or its filtered
/// sequence is empty, the result is the whole view as a single segment.
///
/// Every segment is a view over a subslice of the original backing buffer,
/// carrying the original predicate.
///
/// # Examples
///
/// ```rust
/// use bytesieve::{FilteredView, split};
///
/// let segments = split(&FilteredView::from("xax"), &FilteredView::from("x"));
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments[0], "");
/// assert_eq!(segments[1], "a");
/// assert_eq!(segments[2], "");
/// ```
#[must_use]
pub fn split<'a>(view: &FilteredView<'a>, token: &FilteredView<'_>) -> Vec<FilteredView<'a>> {
    let needle = token.to_bytes();
    if needle.is_empty() {
        return vec![view.clone()];
    }

    let data = view.data();
    // Filtered bytes alongside their raw positions, so match boundaries in
    // the filtered sequence map back to raw spans.
    let mut raw = Vec::new();
    let mut haystack = Vec::new();
    for (i, &b) in data.iter().enumerate() {
        if view.predicate().test(b) {
            raw.push(i);
            haystack.push(b);
        }
    }

    let starts: Vec<usize> = haystack.find_iter(&needle).collect();
    if starts.is_empty() {
        return vec![view.clone()];
    }

    let segment = |from: usize, to: usize| -> FilteredView<'a> {
        let slice = if from < to {
            &data[raw[from]..=raw[to - 1]]
        } else {
            let anchor = raw.get(from).copied().unwrap_or(data.len());
            &data[anchor..anchor]
        };
        FilteredView::with_predicate(slice, view.predicate().clone())
    };

    let mut out = Vec::with_capacity(starts.len() + 1);
    let mut prev = 0;
    for start in starts {
        out.push(segment(prev, start));
        prev = start + needle.len();
    }
    out.push(segment(prev, haystack.len()));
    out
}

/// A view of the filtered sequence's bytes starting at filtered index
/// `pos`, for up to `count` bytes; `None` (or a count overrunning the end)
/// means "to the end".
///
/// When `pos` is at or past the filtered length the result is an empty view
/// that still carries the original predicate. The range restriction narrows
/// the borrowed slice to the raw span of the selected bytes, so the result
/// references the original backing buffer, not a copy.
///
/// # Examples
///
/// ```rust
/// use bytesieve::{FilteredView, substr};
///
/// let view = FilteredView::from("Siberian Husky");
/// assert_eq!(substr(&view, 9, None).to_bytes(), b"Husky");
/// assert_eq!(substr(&view, 0, Some(8)).to_bytes(), b"Siberian");
/// assert!(substr(&view, 99, None).is_empty());
/// ```
#[must_use]
pub fn substr<'a>(view: &FilteredView<'a>, pos: usize, count: Option<usize>) -> FilteredView<'a> {
    let data = view.data();
    let pred = view.predicate().clone();

    let raw: Vec<usize> = data
        .iter()
        .enumerate()
        .filter(|&(_, &b)| pred.test(b))
        .map(|(i, _)| i)
        .collect();

    if pos >= raw.len() {
        return FilteredView::with_predicate(&data[data.len()..], pred);
    }
    let end = count.map_or(raw.len(), |c| pos.saturating_add(c).min(raw.len()));
    if end <= pos {
        return FilteredView::with_predicate(&data[raw[pos]..raw[pos]], pred);
    }
    FilteredView::with_predicate(&data[raw[pos]..=raw[end - 1]], pred)
}
