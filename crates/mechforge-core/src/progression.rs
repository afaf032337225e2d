//! The resolved, queryable technology progression.
//!
//! A [`TechProgression`] combines a tech-base classification, a qualitative
//! rating, per-era availability codes, both camps' milestone timelines, and
//! a fixed rules-level fallback. It is built once through
//! [`TechProgressionBuilder`] and immutable afterward; every query is a pure
//! lookup with documented defaults for missing data.

use crate::rating::{Era, Rating};
use crate::timeline::{StageDate, TechStage, Timeline};
use serde::{Deserialize, Serialize};

/// One of the two parallel invention lineages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Camp {
    InnerSphere,
    Clan,
}

impl Camp {
    /// Both camps, Inner Sphere first.
    pub const BOTH: [Camp; 2] = [Camp::InnerSphere, Camp::Clan];

    /// The opposite camp.
    pub fn other(self) -> Camp {
        match self {
            Camp::InnerSphere => Camp::Clan,
            Camp::Clan => Camp::InnerSphere,
        }
    }
}

/// Which camp(s) a technology belongs to, or which camps a design accepts
/// when used as a filter constraint. `All` merges both camps' timelines at
/// query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechBase {
    InnerSphere,
    Clan,
    All,
}

impl TechBase {
    /// Whether the given camp is covered by this tech base.
    pub fn admits(self, camp: Camp) -> bool {
        match self {
            TechBase::All => true,
            TechBase::InnerSphere => camp == Camp::InnerSphere,
            TechBase::Clan => camp == Camp::Clan,
        }
    }
}

/// Rules-complexity classification, ordered from least to most restrictive.
/// A filter's rules level acts as a ceiling against this ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum RulesLevel {
    #[default]
    Standard,
    Advanced,
    Experimental,
    Unofficial,
}

/// An immutable technology progression record.
///
/// Constructed once (typically from static data at startup) and never
/// mutated; safe to share across threads without synchronization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechProgression {
    tech_base: TechBase,
    rating: Rating,
    era_availability: [Rating; Era::COUNT],
    inner_sphere: Timeline,
    clan: Timeline,
    static_rules_level: RulesLevel,
}

impl TechProgression {
    /// Start building a progression for the given tech base.
    pub fn builder(tech_base: TechBase) -> TechProgressionBuilder {
        TechProgressionBuilder {
            tech_base,
            rating: Rating::default(),
            era_availability: [Rating::X; Era::COUNT],
            inner_sphere: Timeline::new(),
            clan: Timeline::new(),
            static_rules_level: RulesLevel::default(),
        }
    }

    pub fn tech_base(&self) -> TechBase {
        self.tech_base
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn static_rules_level(&self) -> RulesLevel {
        self.static_rules_level
    }

    /// The availability code for one canonical era. Independent of year and
    /// faction.
    pub fn base_availability(&self, era: Era) -> Rating {
        self.era_availability[era.index()]
    }

    /// All four era availability codes in era order.
    pub fn era_availability(&self) -> &[Rating; Era::COUNT] {
        &self.era_availability
    }

    /// The raw timeline declared for a camp, without cross-camp fallback.
    pub fn timeline(&self, camp: Camp) -> &Timeline {
        match camp {
            Camp::InnerSphere => &self.inner_sphere,
            Camp::Clan => &self.clan,
        }
    }

    /// The resolved milestone for a stage as seen from a camp.
    ///
    /// The camp's own declared data always wins. When the tech base is
    /// `All` and the camp has no entry for the stage, the other camp's
    /// entry is used instead. A single-camp progression never falls back:
    /// a query for the other camp returns only that camp's own declared
    /// (reference) data, or `None`.
    pub fn stage_date(&self, stage: TechStage, camp: Camp) -> Option<&StageDate> {
        let own = self.timeline(camp).date(stage);
        if own.is_some() {
            return own;
        }
        if self.tech_base == TechBase::All {
            self.timeline(camp.other()).date(stage)
        } else {
            None
        }
    }

    /// The resolved year for a stage as seen from a camp. `None` means the
    /// stage is not reached, a defined default rather than an error.
    pub fn date(&self, stage: TechStage, camp: Camp) -> Option<i32> {
        self.stage_date(stage, camp).map(|d| d.year)
    }

    /// Whether the technology is inside its extinction window at `year` as
    /// seen from one camp.
    ///
    /// Extinction deliberately reads the camp's own declared window and
    /// never the other camp's: a camp without its own extinction date is
    /// not extinct, which is what lets mixed tech stay usable through
    /// either camp.
    pub fn extinct_at(&self, year: i32, camp: Camp) -> bool {
        self.timeline(camp).extinct_at(year)
    }

    /// Whether the technology is extinct at `year` overall. A mixed-tech
    /// (`All`) progression is extinct only when both camps are extinct
    /// simultaneously; a single-camp progression follows its own camp.
    pub fn extinct(&self, year: i32) -> bool {
        match self.tech_base {
            TechBase::All => {
                self.extinct_at(year, Camp::InnerSphere) && self.extinct_at(year, Camp::Clan)
            }
            TechBase::InnerSphere => self.extinct_at(year, Camp::InnerSphere),
            TechBase::Clan => self.extinct_at(year, Camp::Clan),
        }
    }
}

/// Mutable staging structure for [`TechProgression`].
///
/// All mutation is confined here; the terminal [`build`](Self::build)
/// produces the immutable value object.
#[derive(Debug, Clone)]
pub struct TechProgressionBuilder {
    tech_base: TechBase,
    rating: Rating,
    era_availability: [Rating; Era::COUNT],
    inner_sphere: Timeline,
    clan: Timeline,
    static_rules_level: RulesLevel,
}

impl TechProgressionBuilder {
    pub fn rating(mut self, rating: Rating) -> Self {
        self.rating = rating;
        self
    }

    /// Set all four era availability codes at once, in era order.
    pub fn availability(mut self, codes: [Rating; Era::COUNT]) -> Self {
        self.era_availability = codes;
        self
    }

    pub fn static_rules_level(mut self, level: RulesLevel) -> Self {
        self.static_rules_level = level;
        self
    }

    /// Record a milestone for one camp.
    pub fn stage(mut self, camp: Camp, stage: TechStage, date: StageDate) -> Self {
        match camp {
            Camp::InnerSphere => self.inner_sphere.set(stage, date),
            Camp::Clan => self.clan.set(stage, date),
        }
        self
    }

    /// Record the same milestone for both camps.
    pub fn stage_both(self, stage: TechStage, date: StageDate) -> Self {
        self.stage(Camp::InnerSphere, stage, date.clone())
            .stage(Camp::Clan, stage, date)
    }

    /// Finalize into the immutable progression.
    pub fn build(self) -> TechProgression {
        TechProgression {
            tech_base: self.tech_base,
            rating: self.rating,
            era_availability: self.era_availability,
            inner_sphere: self.inner_sphere,
            clan: self.clan,
            static_rules_level: self.static_rules_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_with_is_only_production() -> TechProgression {
        TechProgression::builder(TechBase::All)
            .stage(Camp::InnerSphere, TechStage::Production, StageDate::new(2443))
            .build()
    }

    #[test]
    fn all_base_falls_back_to_other_camp() {
        let p = mixed_with_is_only_production();
        assert_eq!(p.date(TechStage::Production, Camp::InnerSphere), Some(2443));
        assert_eq!(p.date(TechStage::Production, Camp::Clan), Some(2443));
    }

    #[test]
    fn all_base_fallback_works_both_directions() {
        let p = TechProgression::builder(TechBase::All)
            .stage(Camp::Clan, TechStage::Common, StageDate::new(2824))
            .build();
        assert_eq!(p.date(TechStage::Common, Camp::InnerSphere), Some(2824));
        assert_eq!(p.date(TechStage::Common, Camp::Clan), Some(2824));
    }

    #[test]
    fn own_camp_data_wins_over_fallback() {
        let p = TechProgression::builder(TechBase::All)
            .stage(Camp::InnerSphere, TechStage::Prototype, StageDate::new(2460))
            .stage(Camp::Clan, TechStage::Prototype, StageDate::new(2820))
            .build();
        assert_eq!(p.date(TechStage::Prototype, Camp::InnerSphere), Some(2460));
        assert_eq!(p.date(TechStage::Prototype, Camp::Clan), Some(2820));
    }

    #[test]
    fn single_camp_base_does_not_fall_back() {
        let p = TechProgression::builder(TechBase::InnerSphere)
            .stage(Camp::InnerSphere, TechStage::Production, StageDate::new(2443))
            .build();
        assert_eq!(p.date(TechStage::Production, Camp::Clan), None);
    }

    #[test]
    fn single_camp_base_still_exposes_reference_data() {
        // A progression may carry secondary-camp data for reference.
        let p = TechProgression::builder(TechBase::InnerSphere)
            .stage(Camp::InnerSphere, TechStage::Production, StageDate::new(3035))
            .stage(Camp::Clan, TechStage::Production, StageDate::new(2824))
            .build();
        assert_eq!(p.date(TechStage::Production, Camp::Clan), Some(2824));
    }

    #[test]
    fn absent_everywhere_is_unknown() {
        let p = mixed_with_is_only_production();
        assert_eq!(p.date(TechStage::Reintroduced, Camp::InnerSphere), None);
        assert_eq!(p.date(TechStage::Reintroduced, Camp::Clan), None);
    }

    #[test]
    fn era_availability_is_positional() {
        let p = TechProgression::builder(TechBase::All)
            .availability([Rating::C, Rating::D, Rating::E, Rating::F])
            .build();
        assert_eq!(p.base_availability(Era::StarLeague), Rating::C);
        assert_eq!(p.base_availability(Era::SuccessionWars), Rating::D);
        assert_eq!(p.base_availability(Era::ClanInvasion), Rating::E);
        assert_eq!(p.base_availability(Era::DarkAge), Rating::F);
    }

    #[test]
    fn mixed_extinction_requires_both_camps() {
        // Extinct in the Inner Sphere, never in the Clans.
        let p = TechProgression::builder(TechBase::All)
            .stage(Camp::InnerSphere, TechStage::Production, StageDate::new(2600))
            .stage(Camp::InnerSphere, TechStage::Extinct, StageDate::new(2800))
            .stage(Camp::Clan, TechStage::Production, StageDate::new(2600))
            .build();
        assert!(p.extinct_at(2900, Camp::InnerSphere));
        assert!(!p.extinct_at(2900, Camp::Clan));
        assert!(!p.extinct(2900));
    }

    #[test]
    fn single_camp_extinction() {
        let p = TechProgression::builder(TechBase::InnerSphere)
            .stage(Camp::InnerSphere, TechStage::Extinct, StageDate::new(2800))
            .stage(Camp::InnerSphere, TechStage::Reintroduced, StageDate::new(3035))
            .build();
        assert!(p.extinct(2800));
        assert!(p.extinct(3034));
        assert!(!p.extinct(3035));
    }

    #[test]
    fn rules_level_ordering() {
        assert!(RulesLevel::Standard < RulesLevel::Advanced);
        assert!(RulesLevel::Advanced < RulesLevel::Experimental);
        assert!(RulesLevel::Experimental < RulesLevel::Unofficial);
    }

    #[test]
    fn tech_base_admission() {
        assert!(TechBase::All.admits(Camp::InnerSphere));
        assert!(TechBase::All.admits(Camp::Clan));
        assert!(TechBase::Clan.admits(Camp::Clan));
        assert!(!TechBase::Clan.admits(Camp::InnerSphere));
    }

    #[test]
    fn serde_round_trip() {
        let p = TechProgression::builder(TechBase::All)
            .rating(Rating::E)
            .availability([Rating::D, Rating::F, Rating::D, Rating::C])
            .static_rules_level(RulesLevel::Advanced)
            .stage(Camp::InnerSphere, TechStage::Prototype, StageDate::approximate(2460))
            .stage(Camp::Clan, TechStage::Common, StageDate::new(2830))
            .build();
        let json = serde_json::to_string(&p).unwrap();
        let restored: TechProgression = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, p);
    }
}
