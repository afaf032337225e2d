//! A simulated design session over the canned test catalog: one filter per
//! session, mutated as the user edits the form, re-evaluated against every
//! relevant progression on each change.

use mechforge_core::faction::Faction;
use mechforge_core::filter::LegalityFilter;
use mechforge_core::option::Direction;
use mechforge_core::progression::{RulesLevel, TechBase};
use mechforge_core::test_utils::{
    clan_er_ppc, comstar_improved_plate, er_large_laser, medium_laser, mek_chain_registry,
};

#[test]
fn succession_wars_inner_sphere_design() {
    // 3025, pure Inner Sphere, standard rules, era-based dates.
    let filter = LegalityFilter {
        year: 3025,
        tech_base: TechBase::InnerSphere,
        rules_level: RulesLevel::Standard,
        faction: Some(Faction::FederatedSuns),
        era_based_progression: true,
        hide_extinct: true,
    };

    assert!(filter.is_legal(&medium_laser()));
    // Lostech: extinct 2950, not recovered until 3037.
    assert!(!filter.is_legal(&er_large_laser()));
    // Clan tech does not exist for this design.
    assert!(!filter.is_legal(&clan_er_ppc()));
}

#[test]
fn moving_the_date_forward_recovers_lostech() {
    let mut filter = LegalityFilter {
        year: 3025,
        tech_base: TechBase::InnerSphere,
        rules_level: RulesLevel::Standard,
        era_based_progression: true,
        ..LegalityFilter::default()
    };
    assert!(!filter.is_legal(&er_large_laser()));

    filter.year = 3040;
    assert!(filter.is_legal(&er_large_laser()));
}

#[test]
fn switching_to_mixed_tech_opens_the_clan_path() {
    let mut filter = LegalityFilter {
        year: 3000,
        tech_base: TechBase::InnerSphere,
        rules_level: RulesLevel::Standard,
        era_based_progression: true,
        ..LegalityFilter::default()
    };
    // Extinct in the Inner Sphere in 3000.
    assert!(!filter.is_legal(&er_large_laser()));
    assert!(!filter.is_legal(&clan_er_ppc()));

    filter.tech_base = TechBase::All;
    assert!(filter.is_legal(&er_large_laser()));
    assert!(filter.is_legal(&clan_er_ppc()));
}

#[test]
fn comstar_exclusive_production_window() {
    let mut filter = LegalityFilter {
        year: 2860,
        tech_base: TechBase::InnerSphere,
        rules_level: RulesLevel::Advanced,
        faction: Some(Faction::ComStar),
        era_based_progression: true,
        ..LegalityFilter::default()
    };
    assert!(filter.is_legal(&comstar_improved_plate()));

    filter.faction = Some(Faction::DraconisCombine);
    assert_eq!(
        filter.effective_rules_level(&comstar_improved_plate()),
        Some(RulesLevel::Experimental)
    );
    assert!(!filter.is_legal(&comstar_improved_plate()));
}

#[test]
fn weight_class_navigation_for_the_unit_picker() {
    let registry = mek_chain_registry();
    registry.verify_links().unwrap();

    let standard = registry.get("mek_standard").unwrap();
    let heavier = standard.adjacent(&registry, Direction::Next).unwrap();
    assert_eq!(heavier.key, "mek_superheavy");
    assert_eq!(heavier.lightest(&registry).key, "mek_ultralight");
}
