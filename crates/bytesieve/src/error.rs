use thiserror::Error;

/// Returned by [`FilteredView::at`](crate::FilteredView::at) when the index
/// falls outside the filtered range.
///
/// Carries the offending index and the filtered length it was checked
/// against. This is the only checked error in the crate; the unchecked
/// entry points (`view[i]`) panic instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of range for filtered length {len}")]
pub struct OutOfRange {
    /// The requested filtered index.
    pub index: usize,
    /// The view's filtered length at the time of the call.
    pub len: usize,
}
