use super::*;

#[test]
fn rect_accessors_expose_edges() {
    let rect = Rect::from_xywh(2.0, 3.0, 10.0, 4.0);
    assert_eq!(rect.x(), 2.0);
    assert_eq!(rect.y(), 3.0);
    assert_eq!(rect.right(), 12.0);
    assert_eq!(rect.bottom(), 7.0);
}

#[test]
fn translate_keeps_size() {
    let rect = Rect::new(Point::new(1.0, 1.0), Size::new(5.0, 6.0)).translate(4.0, -1.0);
    assert_eq!(rect.position, Point::new(5.0, 0.0));
    assert_eq!(rect.size, Size::new(5.0, 6.0));
}

#[test]
fn contains_includes_edges() {
    let rect = Rect::from_size(Size::new(10.0, 10.0));
    assert!(rect.contains(0.0, 0.0));
    assert!(rect.contains(10.0, 10.0));
    assert!(!rect.contains(10.5, 3.0));
}

#[test]
fn empty_size_detects_degenerate_axes() {
    assert!(Size::ZERO.is_empty());
    assert!(Size::new(4.0, 0.0).is_empty());
    assert!(!Size::new(4.0, 1.0).is_empty());
}
