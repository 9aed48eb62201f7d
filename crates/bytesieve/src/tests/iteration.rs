use alloc::vec::Vec;

use crate::{FilteredView, Predicate};

fn digits() -> Predicate {
    Predicate::new(|b| b.is_ascii_digit())
}

#[test]
fn forward_skips_rejected_bytes() {
    let view = FilteredView::with_predicate(b"a1b2c3", digits());
    let collected: Vec<u8> = view.iter().collect();
    assert_eq!(collected, b"123");
}

#[test]
fn reverse_is_forward_reversed() {
    let view = FilteredView::with_predicate(b"a1b2c3", digits());
    let forward: Vec<u8> = view.iter().collect();
    let mut backward: Vec<u8> = view.iter().rev().collect();
    backward.reverse();
    assert_eq!(forward, backward);
}

#[test]
fn leading_and_trailing_rejected_runs() {
    let view = FilteredView::with_predicate(b"xx1x2xx", digits());
    assert_eq!(view.iter().collect::<Vec<u8>>(), b"12");
    assert_eq!(view.iter().rev().collect::<Vec<u8>>(), b"21");
}

#[test]
fn ends_meet_in_the_middle() {
    let view = FilteredView::with_predicate(b"1a2a3", digits());
    let mut iter = view.iter();
    assert_eq!(iter.next(), Some(b'1'));
    assert_eq!(iter.next_back(), Some(b'3'));
    assert_eq!(iter.next(), Some(b'2'));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn fused_after_exhaustion() {
    let view = FilteredView::with_predicate(b"7", digits());
    let mut iter = view.iter();
    assert_eq!(iter.next(), Some(b'7'));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn nothing_accepted_yields_nothing() {
    let view = FilteredView::with_predicate(b"abc", digits());
    assert_eq!(view.iter().next(), None);
    assert_eq!(view.iter().next_back(), None);
}

#[test]
fn size_hint_bounds_the_raw_span() {
    let view = FilteredView::with_predicate(b"a1b2c3", digits());
    let mut iter = view.iter();
    assert_eq!(iter.size_hint(), (0, Some(6)));
    let _ = iter.next();
    let (lo, hi) = iter.size_hint();
    assert_eq!(lo, 0);
    assert!(hi.unwrap() <= 6);
}

#[test]
fn into_iterator_on_reference() {
    let view = FilteredView::with_predicate(b"a1b2c3", digits());
    let mut collected = Vec::new();
    for byte in &view {
        collected.push(byte);
    }
    assert_eq!(collected, b"123");
}

#[test]
fn iterator_outlives_the_view_value() {
    let buffer = b"a1b2c3";
    let iter = {
        let view = FilteredView::with_predicate(buffer, digits());
        view.iter()
    };
    // The iterator borrows the buffer, not the view.
    assert_eq!(iter.collect::<Vec<u8>>(), b"123");
}
