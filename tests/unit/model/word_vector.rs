use super::*;

#[test]
fn ranking_is_descending_with_text_tiebreak() {
    let v = WordVector::from_pairs([("b", 2.0), ("a", 2.0), ("c", 5.0), ("d", 1.0)]);
    let ranked = v.ranking(0, usize::MAX);
    let words: Vec<_> = ranked.iter().map(|(w, _)| w.as_str()).collect();
    assert_eq!(words, vec!["c", "a", "b", "d"]);
}

#[test]
fn ranking_slices_and_clamps() {
    let v = WordVector::from_pairs([("x", 3.0), ("y", 2.0), ("z", 1.0)]);
    assert_eq!(v.ranking(1, 2), vec![("y".to_string(), 2.0)]);
    assert_eq!(v.ranking(0, 10).len(), 3);
    assert!(v.ranking(5, 10).is_empty());
}

#[test]
fn add_overwrites_weight() {
    let mut v = WordVector::new();
    v.add("x", 1.0);
    v.add("x", 4.0);
    assert_eq!(v.len(), 1);
    assert_eq!(v.get_weight("x"), Some(4.0));
    assert_eq!(v.get_weight("nope"), None);
}

#[test]
fn timelapse_parses_from_json() {
    let json = r#"[
        {"label": "2020", "weights": {"apple": 3.0, "banana": 1.0}},
        {"label": "2021", "weights": {"apple": 1.0}}
    ]"#;
    let tl: TimelapseWordVector = serde_json::from_str(json).unwrap();
    assert_eq!(tl.len(), 2);
    assert_eq!(tl.get(0).unwrap().label, "2020");
    assert_eq!(tl.get(1).unwrap().weights.get_weight("apple"), Some(1.0));
}

#[test]
fn validate_rejects_non_finite_weights() {
    let tl = TimelapseWordVector::from_pairs([("t0", vec![("a", f64::NAN)])]);
    let err = tl.validate().unwrap_err();
    assert!(err.to_string().contains("t0"));
}
