//! Property-based tests for the progression engine.
//!
//! Uses proptest to generate random timelines, progressions, and filter
//! policies, then verifies the documented resolution defaults hold.

use mechforge_core::faction::Faction;
use mechforge_core::filter::LegalityFilter;
use mechforge_core::progression::{Camp, RulesLevel, TechBase, TechProgression};
use mechforge_core::rating::{Era, Rating};
use mechforge_core::timeline::{StageDate, TechStage};
use proptest::prelude::*;

// ===========================================================================
// Generators
// ===========================================================================

fn arb_rating() -> impl Strategy<Value = Rating> {
    prop_oneof![
        Just(Rating::A),
        Just(Rating::B),
        Just(Rating::C),
        Just(Rating::D),
        Just(Rating::E),
        Just(Rating::F),
        Just(Rating::X),
    ]
}

fn arb_tech_base() -> impl Strategy<Value = TechBase> {
    prop_oneof![
        Just(TechBase::InnerSphere),
        Just(TechBase::Clan),
        Just(TechBase::All),
    ]
}

fn arb_faction() -> impl Strategy<Value = Faction> {
    prop_oneof![
        Just(Faction::FederatedSuns),
        Just(Faction::ComStar),
        Just(Faction::ClanWolf),
        Just(Faction::Mercenary),
    ]
}

/// A progression with an ordered milestone sequence in one camp and,
/// optionally, a plain production date in the other.
fn arb_progression() -> impl Strategy<Value = TechProgression> {
    (
        arb_tech_base(),
        arb_rating(),
        proptest::array::uniform4(arb_rating()),
        2200..3000i32,
        1..20i32,
        1..50i32,
        proptest::option::of(2800..3100i32),
        proptest::bool::ANY,
    )
        .prop_map(
            |(tech_base, rating, avail, proto, to_prod, to_common, clan_prod, approx)| {
                let mut builder = TechProgression::builder(tech_base)
                    .rating(rating)
                    .availability(avail)
                    .stage(
                        Camp::InnerSphere,
                        TechStage::Prototype,
                        if approx {
                            StageDate::approximate(proto)
                        } else {
                            StageDate::new(proto)
                        },
                    )
                    .stage(
                        Camp::InnerSphere,
                        TechStage::Production,
                        StageDate::new(proto + to_prod),
                    )
                    .stage(
                        Camp::InnerSphere,
                        TechStage::Common,
                        StageDate::new(proto + to_prod + to_common),
                    );
                if let Some(year) = clan_prod {
                    builder = builder.stage(Camp::Clan, TechStage::Production, StageDate::new(year));
                }
                builder.build()
            },
        )
}

fn arb_filter() -> impl Strategy<Value = LegalityFilter> {
    (
        2000..3200i32,
        arb_tech_base(),
        prop_oneof![
            Just(RulesLevel::Standard),
            Just(RulesLevel::Advanced),
            Just(RulesLevel::Experimental),
            Just(RulesLevel::Unofficial),
        ],
        proptest::option::of(arb_faction()),
        proptest::bool::ANY,
        proptest::bool::ANY,
    )
        .prop_map(
            |(year, tech_base, rules_level, faction, era_based, hide_extinct)| LegalityFilter {
                year,
                tech_base,
                rules_level,
                faction,
                era_based_progression: era_based,
                hide_extinct,
            },
        )
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Mixed-tech fallback is symmetric: a stage present in exactly one
    /// camp reads the same from both camps.
    #[test]
    fn all_base_fallback_symmetry(year in 2200..3000i32, clan_side in proptest::bool::ANY) {
        let camp = if clan_side { Camp::Clan } else { Camp::InnerSphere };
        let p = TechProgression::builder(TechBase::All)
            .stage(camp, TechStage::Production, StageDate::new(year))
            .build();
        prop_assert_eq!(p.date(TechStage::Production, Camp::InnerSphere), Some(year));
        prop_assert_eq!(p.date(TechStage::Production, Camp::Clan), Some(year));
    }

    /// A stage with no data in either camp is unknown from both camps,
    /// whatever the tech base.
    #[test]
    fn absent_stage_is_unknown(p in arb_progression()) {
        for camp in Camp::BOTH {
            prop_assert_eq!(p.date(TechStage::Reintroduced, camp), None);
        }
    }

    /// Era availability codes are positional and unaffected by anything else.
    #[test]
    fn era_codes_positional(codes in proptest::array::uniform4(arb_rating())) {
        let p = TechProgression::builder(TechBase::All)
            .availability(codes)
            .build();
        for era in Era::ALL {
            prop_assert_eq!(p.base_availability(era), codes[era.index()]);
        }
    }

    /// Two successive evaluations with unchanged inputs always agree.
    #[test]
    fn legality_is_idempotent(p in arb_progression(), filter in arb_filter()) {
        prop_assert_eq!(filter.is_legal(&p), filter.is_legal(&p));
        prop_assert_eq!(
            filter.effective_rules_level(&p),
            filter.effective_rules_level(&p)
        );
    }

    /// The extinction window is exactly [extinct, reintroduced).
    #[test]
    fn extinction_window_is_half_open(
        extinct in 2500..2900i32,
        gap in 1..400i32,
        probe in 2400..3400i32,
    ) {
        let reintro = extinct + gap;
        let p = TechProgression::builder(TechBase::InnerSphere)
            .stage(Camp::InnerSphere, TechStage::Production, StageDate::new(2400))
            .stage(Camp::InnerSphere, TechStage::Extinct, StageDate::new(extinct))
            .stage(Camp::InnerSphere, TechStage::Reintroduced, StageDate::new(reintro))
            .build();
        let expected = probe >= extinct && probe < reintro;
        prop_assert_eq!(p.extinct_at(probe, Camp::InnerSphere), expected);
        prop_assert_eq!(p.extinct(probe), expected);
    }

    /// Raising the rules-level ceiling never turns a legal option illegal.
    #[test]
    fn relaxing_ceiling_is_monotonic(p in arb_progression(), filter in arb_filter()) {
        if filter.is_legal(&p) {
            let relaxed = LegalityFilter {
                rules_level: RulesLevel::Unofficial,
                ..filter
            };
            prop_assert!(relaxed.is_legal(&p));
        }
    }

    /// Queries against an arbitrary progression never panic for any stage
    /// or camp, and approximate flags survive resolution.
    #[test]
    fn resolution_is_total(p in arb_progression(), year in 2000..3200i32) {
        for camp in Camp::BOTH {
            for stage in TechStage::ALL {
                if let Some(date) = p.stage_date(stage, camp) {
                    prop_assert_eq!(Some(date.year), p.date(stage, camp));
                }
            }
            let _ = p.extinct_at(year, camp);
        }
    }
}
