//! Link classification across every route shape.

mod common;

use common::{link, router};
use d3_tooltips::tooltip::TooltipKind;

fn classify(path: &str) -> Option<(TooltipKind, String, String, Option<String>)> {
    router()
        .classify(&link(path))
        .map(|r| (r.kind, r.folder, r.key, r.owner_class))
}

fn expect(path: &str, kind: TooltipKind, folder: &str, key: &str) {
    let (got_kind, got_folder, got_key, _) =
        classify(path).unwrap_or_else(|| panic!("{path} should classify"));
    assert_eq!(got_kind, kind, "{path}");
    assert_eq!(got_folder, folder, "{path}");
    assert_eq!(got_key, key, "{path}");
}

#[test]
fn test_all_route_shapes() {
    expect("item/the-gavel", TooltipKind::Item, "", "the-gavel");
    expect("artisan/blacksmith/recipe/cruel-axe", TooltipKind::Recipe, "blacksmith", "cruel-axe");
    expect("class/barbarian/active/bash", TooltipKind::Skill, "barbarian", "bash");
    expect("class/monk/passive/resolve", TooltipKind::Skill, "monk", "resolve");
    expect("follower/templar/skill/heal", TooltipKind::Skill, "templar", "heal");
    expect("calculator/wizard#aZbYcX!abcd!aZbYcZ", TooltipKind::Calculator, "wizard", "aZbYcX!abcd!aZbYcZ");
    expect("class/barbarian/active/bash#a", TooltipKind::Rune, "bash", "bash-a");
    expect("class/barbarian/active/bash#a+", TooltipKind::SkillAndRune, "bash", "bash-a");
}

#[test]
fn test_rune_links_keep_owner_class() {
    let (_, _, _, owner) = classify("class/witch-doctor/active/haunt#c+").unwrap();
    assert_eq!(owner.as_deref(), Some("witch-doctor"));
    let (_, _, _, owner) = classify("class/witch-doctor/active/haunt").unwrap();
    assert_eq!(owner, None);
}

#[test]
fn test_nested_key_is_rejected() {
    assert!(classify("item/sets/the-gavel").is_none());
    assert!(classify("class/barbarian/active/bash/extra").is_none());
}

#[test]
fn test_region_and_locale_are_captured() {
    let request = router()
        .classify("http://eu.example.org/d3/de/item/the-gavel")
        .unwrap();
    assert_eq!(request.region, "eu");
    assert_eq!(request.locale, "de");
}

#[test]
fn test_non_tooltip_links() {
    let r = router();
    assert!(r.classify("https://usa.example.org/d3/en/item/the-gavel").is_none());
    assert!(r.classify("https://us.example.org/d3/eng/item/the-gavel").is_none());
    assert!(r.classify("not a url").is_none());
}

#[test]
fn test_classify_is_idempotent() {
    let r = router();
    for path in [
        "item/the-gavel",
        "class/barbarian/active/bash#a+",
        "calculator/monk#abc!de!aZ",
    ] {
        assert_eq!(r.classify(&link(path)), r.classify(&link(path)));
    }
}

#[test]
fn test_query_strings_are_not_routed() {
    assert!(classify("item/the-gavel?x=1").is_none());
    assert!(classify("class/monk/passive/resolve?lang=en").is_none());
}
