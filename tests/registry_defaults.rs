use mpp_styles::{CriteriaKey, StyleRecord, StyleRegistry, global};

const BUILTIN_KEYS: [&str; 5] = [
    "miext.maintainability.MIwoc",
    "miext.halstead.H_Volume",
    "std.code.complexity.cyclomatic",
    "std.code.lines.comments",
    "std.code.lines.total",
];

#[test]
fn every_builtin_key_maps_to_its_own_record() {
    let reg = global();
    for key in BUILTIN_KEYS {
        let r = reg.get(key).unwrap_or_else(|| panic!("missing {key}"));
        assert_eq!(r.criteria, key);
        assert!(r.key().is_ok());
    }
}

#[test]
fn unknown_key_is_absent() {
    assert!(global().get("nonexistent.key").is_none());
    assert!(!global().contains("nonexistent.key"));
}

#[test]
fn cyclomatic_complexity_defaults() {
    let r = global().get("std.code.complexity.cyclomatic").unwrap();
    assert_eq!(r.criteria_label, "cyclomatic complexity");
    assert_eq!(r.index, 12);
}

#[test]
fn maintainability_label_has_no_trailing_space() {
    let r = global().get("miext.maintainability.MIwoc").unwrap();
    assert_eq!(r.criteria_label, "MI w/o comments");
    assert_eq!(r.index, 11);
}

#[test]
fn halstead_volume_colors() {
    let r = global().get("miext.halstead.H_Volume").unwrap();
    assert_eq!(r.background_color, "lightblue");
    assert_eq!(r.border_color, "blue");
}

#[test]
fn keys_match_builtins_exactly() {
    let mut keys: Vec<&str> = global().keys().collect();
    keys.sort_unstable();
    let mut expected = BUILTIN_KEYS.to_vec();
    expected.sort_unstable();
    assert_eq!(keys, expected);
}

#[test]
fn re_registering_a_key_replaces_it() {
    let reg = StyleRegistry::builtin()
        .to_builder()
        .set(StyleRecord::new(
            "miext.halstead.H_Volume",
            "Halstead V",
            "wheat",
            "brown",
            2,
        ))
        .build();
    let r = reg.get("miext.halstead.H_Volume").unwrap();
    assert_eq!(r.criteria_label, "Halstead V");
    assert_eq!(r.background_color, "wheat");
    assert_eq!(r.border_color, "brown");
    assert_eq!(r.index, 2);
    assert_eq!(reg.len(), BUILTIN_KEYS.len());
}

#[test]
fn registry_is_shareable_across_threads() {
    let handles: Vec<_> = BUILTIN_KEYS
        .iter()
        .map(|&k| std::thread::spawn(move || global().get(k).map(|r| r.index)))
        .collect();
    let mut idx: Vec<i32> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    idx.sort_unstable();
    assert_eq!(idx, [6, 11, 12, 13, 14]);
}

#[test]
fn criteria_namespaces_of_builtins() {
    let namespaces: Vec<String> = global()
        .ordered()
        .iter()
        .map(|r| CriteriaKey::parse(&r.criteria).unwrap().namespace().to_string())
        .collect();
    assert_eq!(
        namespaces,
        [
            "miext.halstead",
            "miext.maintainability",
            "std.code.complexity",
            "std.code.lines",
            "std.code.lines",
        ]
    );
}
