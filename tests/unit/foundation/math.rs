use super::*;

#[test]
fn rng_is_deterministic_per_seed() {
    let mut a = Rng64::new(7);
    let mut b = Rng64::new(7);
    for _ in 0..16 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
    let mut c = Rng64::new(8);
    assert_ne!(Rng64::new(7).next_u64(), c.next_u64());
}

#[test]
fn rng_samples_stay_in_unit_interval() {
    let mut rng = Rng64::new(42);
    for _ in 0..1000 {
        let v = rng.next_f64();
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn fixed_sequence_cycles() {
    let mut s = FixedSequence::new(vec![0.25, 0.5]);
    assert_eq!(s.next_f64(), 0.25);
    assert_eq!(s.next_f64(), 0.5);
    assert_eq!(s.next_f64(), 0.25);
    assert_eq!(FixedSequence::new(vec![]).next_f64(), 0.0);
}

#[test]
fn distance_sq_matches_hypot() {
    let d = distance_sq(kurbo::Point::new(0.0, 0.0), kurbo::Point::new(3.0, 4.0));
    assert_eq!(d, 25.0);
}
