use super::*;

#[test]
fn insert_rejects_duplicate_words() {
    let mut frame = AllocationInFrame::keyframe();
    frame.add("apple", 10.0, Point::new(0.0, 0.0)).unwrap();
    let err = frame.add("apple", 12.0, Point::new(1.0, 1.0)).unwrap_err();
    assert!(err.to_string().contains("apple"));
    assert_eq!(frame.get("apple").unwrap().font_size, 10.0);
    assert_eq!(frame.len(), 1);
}

#[test]
fn keyframe_flag_is_kept() {
    assert!(AllocationInFrame::keyframe().is_static_keyframe());
    assert!(!AllocationInFrame::transition().is_static_keyframe());
}

#[test]
fn iteration_is_ordered_by_text() {
    let mut frame = AllocationInFrame::keyframe();
    frame.add("pear", 1.0, Point::ZERO).unwrap();
    frame.add("apple", 1.0, Point::ZERO).unwrap();
    frame.add("fig", 1.0, Point::ZERO).unwrap();
    assert_eq!(frame.words().collect::<Vec<_>>(), vec!["apple", "fig", "pear"]);
}

#[test]
fn placement_rect_uses_left_top() {
    let p = WordPlacement::new(12.0, Point::new(3.0, 4.0));
    assert_eq!(p.rect(Size::new(10.0, 2.0)), Rect::new(3.0, 4.0, 13.0, 6.0));
}

#[test]
fn timelapse_preserves_insertion_order() {
    let mut tl = AllocationTimelapse::new();
    tl.push("2022", AllocationInFrame::keyframe());
    tl.push("2020", AllocationInFrame::keyframe());
    tl.push("2020_to_2021", AllocationInFrame::transition());
    assert_eq!(tl.len(), 3);
    assert_eq!(tl.label(0), Some("2022"));
    assert_eq!(tl.label(1), Some("2020"));
    assert_eq!(tl.label(2), Some("2020_to_2021"));
    assert_eq!(tl.keyframe_count(), 2);
    assert!(tl.get_frame(3).is_none());
}

#[test]
fn timelapse_json_roundtrip_keeps_flags() {
    let mut frame = AllocationInFrame::keyframe();
    frame.add("apple", 10.0, Point::new(1.5, 2.5)).unwrap();
    let mut tl = AllocationTimelapse::new();
    tl.push("t0", frame);
    tl.push("t0_to_t1", AllocationInFrame::transition());

    let json = serde_json::to_string(&tl).unwrap();
    let back: AllocationTimelapse = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tl);
}
