use crate::{FilteredView, OutOfRange, Predicate};

#[test]
fn at_returns_filtered_bytes_in_raw_order() {
    let view = FilteredView::with_predicate(b"a1b2c3", Predicate::new(|b| b.is_ascii_digit()));
    assert_eq!(view.at(0), Ok(b'1'));
    assert_eq!(view.at(1), Ok(b'2'));
    assert_eq!(view.at(2), Ok(b'3'));
}

#[test]
fn at_rejects_past_the_filtered_end() {
    let view = FilteredView::with_predicate(b"a1b2c3", Predicate::new(|b| b.is_ascii_digit()));
    assert_eq!(view.at(3), Err(OutOfRange { index: 3, len: 3 }));
}

#[test]
fn at_zero_fails_on_empty_view() {
    let view = FilteredView::with_predicate(b"xyz", Predicate::new(|_| false));
    assert_eq!(view.at(0), Err(OutOfRange { index: 0, len: 0 }));
    let empty = FilteredView::default();
    assert_eq!(empty.at(0), Err(OutOfRange { index: 0, len: 0 }));
}

#[test]
fn get_mirrors_at() {
    let view = FilteredView::with_predicate(b"cat", Predicate::new(|b| b == b'a'));
    assert_eq!(view.get(0), Some(b'a'));
    assert_eq!(view.get(1), None);
}

#[test]
fn index_operator_borrows_from_the_buffer() {
    let buffer = b"only 90s kids understand";
    let view =
        FilteredView::with_predicate(buffer, Predicate::new(|b| b.is_ascii_digit() || b == b' '));
    assert_eq!(view[2], b'0');
    // The reference points into the raw buffer, not a copy.
    assert!(core::ptr::eq(&view[0], &buffer[4]));
}

#[test]
#[should_panic(expected = "out of range")]
fn index_operator_panics_out_of_range() {
    let view = FilteredView::with_predicate(b"cat", Predicate::new(|b| b == b'a'));
    let _ = view[1];
}

#[test]
fn at_agrees_with_iterator_advance() {
    let view = FilteredView::with_predicate(b"stone cold", Predicate::new(|b| b != b'o'));
    for i in 0..view.len() {
        assert_eq!(view.at(i).unwrap(), view.iter().nth(i).unwrap());
    }
}

#[test]
fn out_of_range_displays_both_fields() {
    use alloc::string::ToString;
    let err = OutOfRange { index: 7, len: 3 };
    assert_eq!(err.to_string(), "index 7 out of range for filtered length 3");
}
