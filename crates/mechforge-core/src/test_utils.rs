//! Canned progressions and registries for tests.
//!
//! Available to unit tests and, behind the `test-utils` feature, to the
//! data and integration crates.

use crate::faction::Faction;
use crate::option::{ConstructionOption, OptionKind, UnitOption, UnitType};
use crate::progression::{Camp, RulesLevel, TechBase, TechProgression};
use crate::rating::Rating;
use crate::registry::{Registry, RegistryBuilder};
use crate::timeline::{StageDate, TechStage};

/// Mixed-tech item that went common early and never died out.
pub fn medium_laser() -> TechProgression {
    TechProgression::builder(TechBase::All)
        .rating(Rating::C)
        .availability([Rating::C, Rating::C, Rating::C, Rating::C])
        .static_rules_level(RulesLevel::Standard)
        .stage_both(TechStage::Prototype, StageDate::new(2290))
        .stage_both(TechStage::Production, StageDate::new(2300))
        .stage_both(TechStage::Common, StageDate::new(2310))
        .build()
}

/// Inner Sphere item lost in the Succession Wars and recovered centuries
/// later. Carries Clan reference dates that never went extinct.
pub fn er_large_laser() -> TechProgression {
    TechProgression::builder(TechBase::All)
        .rating(Rating::E)
        .availability([Rating::E, Rating::F, Rating::D, Rating::C])
        .static_rules_level(RulesLevel::Standard)
        .stage(Camp::InnerSphere, TechStage::Prototype, StageDate::new(2610))
        .stage(Camp::InnerSphere, TechStage::Production, StageDate::new(2620))
        .stage(Camp::InnerSphere, TechStage::Extinct, StageDate::new(2950))
        .stage(
            Camp::InnerSphere,
            TechStage::Reintroduced,
            StageDate::new(3037),
        )
        .stage(Camp::Clan, TechStage::Common, StageDate::new(2820))
        .build()
}

/// Clan-only item, unavailable to pure Inner Sphere designs.
pub fn clan_er_ppc() -> TechProgression {
    TechProgression::builder(TechBase::Clan)
        .rating(Rating::F)
        .availability([Rating::X, Rating::X, Rating::D, Rating::D])
        .static_rules_level(RulesLevel::Standard)
        .stage(Camp::Clan, TechStage::Prototype, StageDate::approximate(2823))
        .stage(Camp::Clan, TechStage::Production, StageDate::new(2826))
        .stage(Camp::Clan, TechStage::Common, StageDate::new(2830))
        .build()
}

/// ComStar-restricted production milestone on an otherwise open item.
pub fn comstar_improved_plate() -> TechProgression {
    TechProgression::builder(TechBase::InnerSphere)
        .rating(Rating::D)
        .availability([Rating::X, Rating::F, Rating::E, Rating::D])
        .static_rules_level(RulesLevel::Advanced)
        .stage(Camp::InnerSphere, TechStage::Prototype, StageDate::new(2850))
        .stage(
            Camp::InnerSphere,
            TechStage::Production,
            StageDate::restricted(2854, vec![Faction::ComStar]),
        )
        .build()
}

/// A unit bracket with chain links.
pub fn unit_bracket(
    key: &str,
    unit_type: UnitType,
    min: f64,
    max: f64,
    increment: f64,
    prev: Option<&str>,
    next: Option<&str>,
) -> ConstructionOption {
    ConstructionOption {
        key: key.to_string(),
        name: key.replace('_', " "),
        progression: medium_laser(),
        kind: OptionKind::Unit(UnitOption {
            unit_type,
            min_weight: min,
            max_weight: max,
            weight_increment: increment,
            prev_weight_class: prev.map(str::to_string),
            next_weight_class: next.map(str::to_string),
        }),
    }
}

/// A three-bracket battle mek chain: ultralight, standard, superheavy.
pub fn mek_chain_registry() -> Registry {
    let mut builder = RegistryBuilder::new();
    builder
        .register(unit_bracket(
            "mek_ultralight",
            UnitType::BattleMek,
            10.0,
            15.0,
            5.0,
            None,
            Some("mek_standard"),
        ))
        .unwrap();
    builder
        .register(unit_bracket(
            "mek_standard",
            UnitType::BattleMek,
            20.0,
            100.0,
            5.0,
            Some("mek_ultralight"),
            Some("mek_superheavy"),
        ))
        .unwrap();
    builder
        .register(unit_bracket(
            "mek_superheavy",
            UnitType::BattleMek,
            105.0,
            200.0,
            5.0,
            Some("mek_standard"),
            None,
        ))
        .unwrap();
    builder.build()
}
