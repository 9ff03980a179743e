use super::*;
use crate::foundation::collision::{first_hitting_pair, rects_overlap_strict};
use crate::foundation::math::Rng64;
use crate::model::word::estimate_text_size;

fn allocator(w: f64, h: f64, settings: MagneticSettings) -> MagneticAllocator {
    MagneticAllocator::new(Canvas::new(w, h).unwrap(), settings).unwrap()
}

fn coarse() -> MagneticSettings {
    MagneticSettings {
        image_division: 100,
        ..MagneticSettings::default()
    }
}

fn word(text: &str, w: f64, h: f64) -> Word {
    Word::new(text, 1.0, h, Size::new(w, h))
}

fn random_words(seed: u64, n: usize) -> Vec<Word> {
    let mut rng = Rng64::new(seed);
    (0..n)
        .map(|i| {
            let h = 10.0 + (rng.next_f64_01() * 20.0).floor();
            let w = h * (1.0 + (rng.next_f64_01() * 3.0).floor());
            word(&format!("w{i:02}"), w, h)
        })
        .collect()
}

fn placed_rects(frame: &AllocationInFrame, words: &[Word]) -> Vec<Rect> {
    words
        .iter()
        .map(|w| frame.get(&w.text).unwrap().rect(w.text_size))
        .collect()
}

#[test]
fn single_word_is_centered() {
    let a = allocator(800.0, 600.0, coarse());
    let words = [word("solo", 100.0, 50.0)];
    let out = a
        .allocate(&words, &AllocationInFrame::keyframe(), &mut Rng64::new(1))
        .unwrap();

    assert!(out.frame.is_static_keyframe());
    assert_eq!(out.frame.len(), 1);
    let p = out.frame.get("solo").unwrap();
    assert_eq!(p.left_top, Point::new(350.0, 275.0));
    assert_eq!(p.font_size, 50.0);
    assert_eq!(out.entry_anchors.len(), 1);
}

#[test]
fn no_words_gives_empty_keyframe() {
    let a = allocator(100.0, 100.0, coarse());
    let out = a
        .allocate(&[], &AllocationInFrame::keyframe(), &mut Rng64::new(1))
        .unwrap();
    assert!(out.frame.is_empty());
    assert!(out.entry_anchors.is_empty());
}

#[test]
fn placed_words_never_overlap_and_stay_on_canvas() {
    let a = allocator(800.0, 600.0, coarse());
    for seed in [1_u64, 7, 42, 1234] {
        let words = random_words(seed, 30);
        let out = a
            .allocate(&words, &AllocationInFrame::keyframe(), &mut Rng64::new(seed))
            .unwrap();
        let rects = placed_rects(&out.frame, &words);
        assert_eq!(first_hitting_pair(&rects), None, "seed {seed}");

        let bounds = a.canvas().bounds();
        for r in &rects {
            let inside = r.x0 >= bounds.x0 && r.y0 >= bounds.y0 && r.x1 <= bounds.x1 && r.y1 <= bounds.y1;
            assert!(inside, "seed {seed}: {r:?} leaves the canvas");
        }
    }
}

#[test]
fn too_small_canvas_exhausts_allocation_space() {
    let a = allocator(100.0, 100.0, coarse());
    let words = [word("a", 90.0, 40.0), word("b", 90.0, 40.0), word("c", 90.0, 40.0)];
    let err = a
        .allocate(&words, &AllocationInFrame::keyframe(), &mut Rng64::new(3))
        .unwrap_err();
    assert!(matches!(err, CloudError::AllocationSpaceExhausted { ref word } if word == "b"));
}

#[test]
fn score_prefers_smaller_movement_at_equal_center_distance() {
    let a = allocator(200.0, 200.0, MagneticSettings::default());
    let near = Point::new(100.0, 130.0);
    let far = Point::new(100.0, 70.0);
    let origin = Point::new(100.0, 180.0);
    assert!(a.score(near, origin) < a.score(far, origin));
}

#[test]
fn candidate_on_the_side_of_the_previous_position_wins() {
    let a = allocator(200.0, 200.0, coarse());
    let placed = [Rect::new(80.0, 90.0, 120.0, 110.0)];
    let frontier = MagnetOuterFrontier {
        from_up: vec![Point::new(100.0, 91.0)],
        from_down: vec![Point::new(100.0, 109.0)],
        ..MagnetOuterFrontier::default()
    };
    let size = Size::new(20.0, 10.0);

    let below = a
        .best_candidate(&frontier, &placed, size, Point::new(100.0, 180.0))
        .unwrap();
    assert_eq!(below.center, Point::new(100.0, 117.0));

    let above = a
        .best_candidate(&frontier, &placed, size, Point::new(100.0, 20.0))
        .unwrap();
    assert_eq!(above.center, Point::new(100.0, 83.0));
}

#[test]
fn equal_scores_keep_the_first_side() {
    let a = allocator(200.0, 200.0, coarse());
    let placed = [Rect::new(80.0, 90.0, 120.0, 110.0)];
    let frontier = MagnetOuterFrontier {
        from_up: vec![Point::new(100.0, 91.0)],
        from_down: vec![Point::new(100.0, 109.0)],
        ..MagnetOuterFrontier::default()
    };
    let best = a
        .best_candidate(&frontier, &placed, Size::new(20.0, 10.0), Point::new(100.0, 100.0))
        .unwrap();
    assert!(best.center.y > 100.0);
}

#[test]
fn word_stays_near_its_previous_position() {
    let a = allocator(400.0, 400.0, coarse());
    let words = [word("a", 100.0, 20.0), word("b", 40.0, 20.0)];
    let mut previous = AllocationInFrame::keyframe();
    previous.add("a", 20.0, Point::new(150.0, 190.0)).unwrap();
    previous.add("b", 20.0, Point::new(300.0, 190.0)).unwrap();

    let out = a.allocate(&words, &previous, &mut Rng64::new(5)).unwrap();
    let b = out.frame.get("b").unwrap();
    assert!(b.left_top.x > 250.0, "{b:?}");
    assert!(out.entry_anchors.is_empty());
}

#[test]
fn missing_words_are_reconciled_both_ways() {
    let a = allocator(400.0, 300.0, coarse());
    let words = [word("stay", 80.0, 20.0), word("new", 30.0, 10.0)];
    let mut previous = AllocationInFrame::keyframe();
    previous.add("stay", 20.0, Point::new(160.0, 140.0)).unwrap();
    previous.add("gone", 12.0, Point::new(10.0, 10.0)).unwrap();

    let out = a.allocate(&words, &previous, &mut Rng64::new(11)).unwrap();
    let keys: Vec<&str> = out.frame.words().collect();
    assert_eq!(keys, vec!["gone", "new", "stay"]);

    let bounds = a.canvas().bounds();
    let gone = out.frame.get("gone").unwrap();
    assert_eq!(gone.font_size, 12.0);
    assert!(!rects_overlap_strict(&gone.rect(estimate_text_size("gone", 12.0)), &bounds));

    assert_eq!(out.entry_anchors.len(), 1);
    let (text, anchor) = &out.entry_anchors[0];
    assert_eq!(text, "new");
    assert_eq!(anchor.font_size, 10.0);
    assert!(!rects_overlap_strict(&anchor.rect(Size::new(30.0, 10.0)), &bounds));
    assert!(!previous.contains("new"));
}

#[test]
fn parallel_side_search_matches_sequential() {
    let seq = allocator(600.0, 400.0, coarse());
    let par = allocator(
        600.0,
        400.0,
        MagneticSettings {
            parallel_sides: true,
            ..coarse()
        },
    );
    for seed in [2_u64, 99] {
        let words = random_words(seed, 20);
        let prev = AllocationInFrame::keyframe();
        let a = seq.allocate(&words, &prev, &mut Rng64::new(seed)).unwrap();
        let b = par.allocate(&words, &prev, &mut Rng64::new(seed)).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn negative_weights_are_rejected() {
    let err = MagneticAllocator::new(
        Canvas::default(),
        MagneticSettings {
            movement_weight: -1.0,
            ..MagneticSettings::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, CloudError::Validation(_)));
}
