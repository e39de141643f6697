use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(span.contains(15));
    assert!(!span.contains(20));
}

#[test]
fn test_span_with_len() {
    let span = Span::with_len(4, 3);
    assert_eq!(span, Span::new(4, 7));
    assert_eq!(Span::with_len(u32::MAX - 2, 2).end, u32::MAX);
}

#[test]
#[should_panic(expected = "span end exceeds u32::MAX")]
fn test_span_with_len_overflow() {
    let _ = Span::with_len(u32::MAX - 1, 2);
}

#[test]
fn test_span_point_is_caret() {
    let caret = Span::point(42);
    assert!(caret.is_empty());
    assert_eq!(caret.len(), 0);
    // A caret contains nothing under half-open semantics, but touches itself.
    assert!(!caret.contains(42));
    assert!(caret.touches(42));
}

#[test]
fn test_span_touches_edges() {
    let span = Span::new(10, 20);
    assert!(span.touches(10));
    assert!(span.touches(15));
    assert!(span.touches(20));
    assert!(!span.touches(9));
    assert!(!span.touches(21));
}

#[test]
fn test_span_is_boundary() {
    let span = Span::new(10, 20);
    assert!(span.is_boundary(10));
    assert!(span.is_boundary(20));
    assert!(!span.is_boundary(15));
}

#[test]
fn test_span_contains_span() {
    let outer = Span::new(0, 30);
    assert!(outer.contains_span(Span::new(0, 30)));
    assert!(outer.contains_span(Span::new(5, 10)));
    assert!(outer.contains_span(Span::point(30)));
    assert!(!outer.contains_span(Span::new(25, 31)));
}

#[test]
fn test_span_merge_disjoint() {
    let a = Span::new(0, 10);
    let b = Span::new(20, 30);
    assert_eq!(a.merge(b), Span::new(0, 30));
}

#[test]
fn test_span_try_from_range_success() {
    let result = Span::try_from_range(50..100);
    let Ok(span) = result else {
        panic!("expected Ok for valid range");
    };
    assert_eq!(span.start, 50);
    assert_eq!(span.end, 100);
}

#[test]
fn test_span_try_from_range_start_too_large() {
    let large_start = u32::MAX as usize + 1;
    let result = Span::try_from_range(large_start..large_start + 10);
    assert!(matches!(result, Err(SpanError::StartTooLarge(_))));
}

#[test]
fn test_span_try_from_range_end_too_large() {
    let large_end = u32::MAX as usize + 1;
    let result = Span::try_from_range(0..large_end);
    assert!(matches!(result, Err(SpanError::EndTooLarge(_))));
}

#[test]
fn test_span_error_display() {
    let err = SpanError::StartTooLarge(0x1_0000_0000);
    let msg = format!("{err}");
    assert!(msg.contains("start"));
    assert!(msg.contains("0x100000000"));
}

#[test]
fn test_span_to_range() {
    let span = Span::new(10, 20);
    assert_eq!(span.to_range(), 10..20);
}

#[test]
fn test_span_debug_display() {
    let span = Span::new(100, 200);
    assert_eq!(format!("{span:?}"), "100..200");
    assert_eq!(format!("{span}"), "100..200");
}
