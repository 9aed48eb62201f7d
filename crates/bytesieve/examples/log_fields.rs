//! Slice a log line into fields without copying the line.
//!
//! Run with: `cargo run --example log_fields`

use bytesieve::{FilteredView, Predicate, split, substr};

fn main() {
    let line = "2026-08-23 | INFO | scheduler | tick completed in 4ms";

    let trimmed = FilteredView::with_predicate(line.as_bytes(), Predicate::new(|b| b != b' '));
    for (i, field) in split(&trimmed, &FilteredView::from("|")).iter().enumerate() {
        println!("field {i}: {field}");
    }

    // Filtered indexing: the date's digits only.
    let digits =
        FilteredView::with_predicate(line.as_bytes(), Predicate::new(|b: u8| b.is_ascii_digit()));
    let year = substr(&digits, 0, Some(4));
    println!("year: {year}");
}
