use crate::casing::{CaseStrategy, Caser, FoldCaser, LowerCaser};
use pretty_assertions::assert_eq;

const SAMPLES: &[&str] = &[
    "/",
    "/HeLLo/World",
    "/already/lower",
    "/Straße/GRÜßE",
    "/ΣΊΣΥΦΟΣ/Ωmega",
    "/İstanbul/ǅemal",
    "/ﬁle/ＦＵＬＬ",
    "/mixed%20Encoded/A-B_C.TXT",
];

//-----------------------------------------------------------------------------
// Lower
//-----------------------------------------------------------------------------
#[test]
fn lower_maps_letters_and_keeps_separators() {
    // Act
    let out = LowerCaser.transform("/HeLLo/World");

    // Assert
    assert_eq!(out, "/hello/world");
}

#[test]
fn lower_preserves_non_letters() {
    let out = LowerCaser.transform("/V1/Items-42_%2F.JSON");

    assert_eq!(out, "/v1/items-42_%2f.json");
}

#[test]
fn lower_keeps_sharp_s() {
    let out = LowerCaser.transform("/STRAßE");

    assert_eq!(out, "/straße");
}

#[test]
fn lower_is_idempotent() {
    for s in SAMPLES {
        let once = LowerCaser.transform(s);
        let twice = LowerCaser.transform(&once);
        assert_eq!(once, twice, "lower not idempotent for {s}");
    }
}

//-----------------------------------------------------------------------------
// Fold
//-----------------------------------------------------------------------------
#[test]
fn fold_expands_sharp_s() {
    // Act
    let out = FoldCaser.transform("/straße");

    // Assert
    assert_eq!(out, "/strasse");
    assert!(!out.contains('ß'));
}

#[test]
fn fold_handles_ascii_fast_path() {
    let out = FoldCaser.transform("/API/Users/ABC");

    assert_eq!(out, "/api/users/abc");
}

#[test]
fn fold_unifies_final_sigma() {
    assert_eq!(FoldCaser.transform("/ΟΔΟΣ"), FoldCaser.transform("/οδος"));
}

#[test]
fn fold_may_change_length() {
    let input = "/ﬁle";

    let out = FoldCaser.transform(input);

    assert_eq!(out, "/file");
    assert!(out.chars().count() > input.chars().count());
}

#[test]
fn fold_is_idempotent() {
    for s in SAMPLES {
        let once = FoldCaser.transform(s);
        let twice = FoldCaser.transform(&once);
        assert_eq!(once, twice, "fold not idempotent for {s}");
    }
}

#[test]
fn fold_never_touches_slashes() {
    for s in SAMPLES {
        let slashes_in = s.matches('/').count();
        let slashes_out = FoldCaser.transform(s).matches('/').count();
        assert_eq!(slashes_in, slashes_out);
    }
}

//-----------------------------------------------------------------------------
// Strategy dispatch
//-----------------------------------------------------------------------------
#[test]
fn strategy_dispatches_to_variant() {
    assert_eq!(CaseStrategy::lower().transform("/Straße"), "/straße");
    assert_eq!(CaseStrategy::fold().transform("/Straße"), "/strasse");
    assert_eq!(CaseStrategy::lower().name(), "lower");
    assert_eq!(CaseStrategy::fold().name(), "fold");
}
