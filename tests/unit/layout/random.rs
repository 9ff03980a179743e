use super::*;
use crate::foundation::collision::rects_overlap_strict;
use crate::foundation::core::Size;
use crate::foundation::math::Rng64;

#[test]
fn every_word_is_parked_off_canvas() {
    let canvas = Canvas::new(320.0, 240.0).unwrap();
    let words = [
        Word::new("alpha", 3.0, 10.0, Size::new(50.0, 10.0)),
        Word::new("beta", 2.0, 10.0, Size::new(40.0, 10.0)),
        Word::new("gamma", 1.0, 10.0, Size::new(50.0, 10.0)),
    ];
    let frame = allocate_randomly(&words, canvas, &mut Rng64::new(8)).unwrap();

    assert!(frame.is_static_keyframe());
    assert_eq!(frame.len(), 3);
    for w in &words {
        let p = frame.get(&w.text).unwrap();
        assert_eq!(p.font_size, 10.0);
        assert!(!rects_overlap_strict(&p.rect(w.text_size), &canvas.bounds()));
    }
}

#[test]
fn duplicate_words_are_rejected() {
    let w = Word::new("dup", 1.0, 10.0, Size::new(30.0, 10.0));
    let err = allocate_randomly(&[w.clone(), w], Canvas::default(), &mut Rng64::new(1));
    assert!(err.is_err());
}
