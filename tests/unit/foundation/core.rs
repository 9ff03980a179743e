use super::*;

#[test]
fn canvas_center_and_diagonal() {
    let c = Canvas::new(300.0, 400.0).unwrap();
    assert_eq!(c.center(), Point::new(150.0, 200.0));
    assert_eq!(c.diagonal(), 500.0);
    assert_eq!(c.bounds(), Rect::new(0.0, 0.0, 300.0, 400.0));
}

#[test]
fn canvas_rejects_degenerate_extents() {
    assert!(Canvas::new(0.0, 10.0).is_err());
    assert!(Canvas::new(10.0, -1.0).is_err());
    assert!(Canvas::new(f64::NAN, 10.0).is_err());
}

#[test]
fn rect_helpers_agree() {
    let a = rect_at(Point::new(10.0, 20.0), Size::new(4.0, 6.0));
    let b = rect_centered(Point::new(12.0, 23.0), Size::new(4.0, 6.0));
    assert_eq!(a, b);
    assert_eq!(a.x1, 14.0);
    assert_eq!(a.y1, 26.0);
}
