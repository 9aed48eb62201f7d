//! Non-owning, lazily filtered views over byte strings.
//!
//! A [`FilteredView`] borrows an existing byte buffer and exposes only the
//! bytes that satisfy a [`Predicate`], without copying the buffer or
//! materializing the filtered sequence unless explicitly asked to
//! ([`FilteredView::to_bytes`]). Iteration is double-ended and skips
//! rejected bytes lazily in both directions.
//!
//! The free functions [`compose`], [`split`] and [`substr`] derive further
//! views from an existing one; every derived view still borrows the original
//! backing buffer.
//!
//! ```rust
//! use bytesieve::{FilteredView, Predicate, substr};
//!
//! let view = FilteredView::with_predicate(
//!     b"only 90s kids understand",
//!     Predicate::new(|b: u8| b.is_ascii_digit() || b == b' '),
//! );
//! assert_eq!(view.len(), 5);
//! assert_eq!(view[2], b'0');
//!
//! let tail = substr(&FilteredView::from("Siberian Husky"), 9, None);
//! assert_eq!(tail.to_bytes(), b"Husky");
//! ```
//!
//! Views operate on single bytes; they are not Unicode-aware. A view never
//! owns or mutates its backing buffer, and the borrow checker ties every
//! view and iterator to the buffer's lifetime.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod algo;
mod error;
mod iter;
mod predicate;
mod view;

#[cfg(test)]
mod tests;

pub use algo::{compose, split, substr};
pub use error::OutOfRange;
pub use iter::Bytes;
pub use predicate::Predicate;
pub use view::FilteredView;
