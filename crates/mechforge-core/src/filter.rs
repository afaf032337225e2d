//! Legality evaluation against a technology progression.
//!
//! A [`LegalityFilter`] is a small mutable policy value scoped to a single
//! design session. The surrounding application mutates its fields as the
//! user edits form inputs and re-runs [`LegalityFilter::is_legal`] against
//! the relevant progressions; evaluation is deterministic and
//! side-effect-free, so repeated calls with identical inputs always agree.

use crate::faction::Faction;
use crate::progression::{Camp, RulesLevel, TechBase, TechProgression};
use crate::timeline::TechStage;
use serde::{Deserialize, Serialize};

/// The policy under which legality is decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalityFilter {
    /// The in-universe game date.
    pub year: i32,
    /// Which camps are acceptable to the current design. `All` means the
    /// design may source from either camp (mixed tech).
    pub tech_base: TechBase,
    /// Ceiling on the effective rules level.
    pub rules_level: RulesLevel,
    /// The faction the design is built for, if any. Checked against
    /// milestone restriction sets.
    pub faction: Option<Faction>,
    /// When set, the rules level is inferred from the stage reached by
    /// `year` instead of using the progression's static classification.
    pub era_based_progression: bool,
    /// When set, progressions extinct in every usable camp are rejected.
    pub hide_extinct: bool,
}

impl Default for LegalityFilter {
    fn default() -> Self {
        LegalityFilter {
            year: 3025,
            tech_base: TechBase::All,
            rules_level: RulesLevel::Standard,
            faction: None,
            era_based_progression: false,
            hide_extinct: true,
        }
    }
}

impl LegalityFilter {
    /// The effective rules level for a progression at the filter's date.
    ///
    /// With era-based progression off this is the static classification.
    /// With it on, the level is inferred independently per admitted camp
    /// from the stage reached by `year` (prototype = experimental,
    /// production = advanced, common = standard) and the most permissive
    /// result wins: a design need only satisfy one valid sourcing path.
    /// `None` means the technology is not yet introduced anywhere the
    /// filter can see.
    pub fn effective_rules_level(&self, progression: &TechProgression) -> Option<RulesLevel> {
        if !self.era_based_progression {
            return Some(progression.static_rules_level());
        }

        let mut best: Option<RulesLevel> = None;
        for camp in Camp::BOTH {
            if !self.tech_base.admits(camp) {
                continue;
            }
            if let Some(level) = self.inferred_level(progression, camp) {
                best = Some(best.map_or(level, |b| b.min(level)));
            }
        }
        best
    }

    /// Rules level inferred from the progression's date data for one camp.
    /// A milestone restricted to factions that exclude the filter's faction
    /// counts as not reached.
    fn inferred_level(&self, progression: &TechProgression, camp: Camp) -> Option<RulesLevel> {
        let reached = |stage: TechStage| {
            progression
                .stage_date(stage, camp)
                .is_some_and(|d| self.year >= d.year && d.open_to(self.faction))
        };

        if reached(TechStage::Common) {
            Some(RulesLevel::Standard)
        } else if reached(TechStage::Production) {
            Some(RulesLevel::Advanced)
        } else if reached(TechStage::Prototype) {
            Some(RulesLevel::Experimental)
        } else {
            None
        }
    }

    /// Whether the progression may be used under this policy.
    pub fn is_legal(&self, progression: &TechProgression) -> bool {
        // A pure single-camp technology is out if the design rejects that camp.
        let usable_camps: Vec<Camp> = Camp::BOTH
            .into_iter()
            .filter(|&c| self.tech_base.admits(c) && progression.tech_base().admits(c))
            .collect();
        if usable_camps.is_empty() {
            return false;
        }

        // Extinction masks legality only when every usable camp is extinct
        // at the same time.
        if self.hide_extinct
            && usable_camps
                .iter()
                .all(|&c| progression.extinct_at(self.year, c))
        {
            return false;
        }

        // Rules-level ceiling. No effective level means not yet introduced.
        match self.effective_rules_level(progression) {
            None => false,
            Some(level) => level <= self.rules_level,
        }
    }
}
