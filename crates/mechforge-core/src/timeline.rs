//! Per-camp lifecycle timelines.
//!
//! A [`Timeline`] records the calendar year at which a technology reached
//! each lifecycle milestone within one invention camp. Every milestone is
//! optional: absence means "stage not reached / not applicable" and is a
//! defined default for every query, never an error.

use crate::faction::Faction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A milestone in a technology's lifecycle. Ordering matters: a later
/// stage's year is assumed not to precede an earlier stage's year within
/// the same camp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechStage {
    Prototype,
    Production,
    Common,
    Extinct,
    Reintroduced,
}

impl TechStage {
    /// Number of lifecycle stages.
    pub const COUNT: usize = 5;

    /// All stages in lifecycle order.
    pub const ALL: [TechStage; TechStage::COUNT] = [
        TechStage::Prototype,
        TechStage::Production,
        TechStage::Common,
        TechStage::Extinct,
        TechStage::Reintroduced,
    ];

    /// Stable index into per-stage arrays.
    pub fn index(self) -> usize {
        match self {
            TechStage::Prototype => 0,
            TechStage::Production => 1,
            TechStage::Common => 2,
            TechStage::Extinct => 3,
            TechStage::Reintroduced => 4,
        }
    }
}

impl fmt::Display for TechStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TechStage::Prototype => "prototype",
            TechStage::Production => "production",
            TechStage::Common => "common",
            TechStage::Extinct => "extinct",
            TechStage::Reintroduced => "reintroduced",
        };
        write!(f, "{label}")
    }
}

/// The resolved date for one milestone: the year, whether the year is only
/// approximate, and the factions the milestone is restricted to.
///
/// The approximate flag is informational (display only) and never affects
/// legality. An empty faction set means the milestone is universal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageDate {
    pub year: i32,
    #[serde(default)]
    pub approximate: bool,
    #[serde(default)]
    pub factions: Vec<Faction>,
}

impl StageDate {
    /// An exact, universally available date.
    pub fn new(year: i32) -> Self {
        StageDate {
            year,
            approximate: false,
            factions: Vec::new(),
        }
    }

    /// An approximate date ("circa").
    pub fn approximate(year: i32) -> Self {
        StageDate {
            year,
            approximate: true,
            factions: Vec::new(),
        }
    }

    /// A date restricted to the given factions.
    pub fn restricted(year: i32, factions: Vec<Faction>) -> Self {
        StageDate {
            year,
            approximate: false,
            factions,
        }
    }

    /// Whether this milestone applies to the given faction. `None` means the
    /// caller imposes no faction, which always passes; a non-empty
    /// restriction set must contain the faction.
    pub fn open_to(&self, faction: Option<Faction>) -> bool {
        match faction {
            None => true,
            Some(f) => self.factions.is_empty() || self.factions.contains(&f),
        }
    }
}

/// The milestone record for one invention camp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    stages: [Option<StageDate>; TechStage::COUNT],
}

impl Timeline {
    /// An empty timeline: no stage reached.
    pub fn new() -> Self {
        Timeline::default()
    }

    /// Record a milestone, replacing any previous entry for the stage.
    pub fn set(&mut self, stage: TechStage, date: StageDate) {
        self.stages[stage.index()] = Some(date);
    }

    /// Direct lookup of a milestone. `None` means the stage was not reached.
    pub fn date(&self, stage: TechStage) -> Option<&StageDate> {
        self.stages[stage.index()].as_ref()
    }

    /// The best-known year for a stage, if any.
    pub fn year(&self, stage: TechStage) -> Option<i32> {
        self.date(stage).map(|d| d.year)
    }

    /// Whether no milestone has been recorded at all.
    pub fn is_empty(&self) -> bool {
        self.stages.iter().all(Option::is_none)
    }

    /// Whether the technology is inside its extinction window at `year`:
    /// an extinction date exists, `year` is at or after it, and the
    /// technology has not yet been reintroduced by `year`.
    pub fn extinct_at(&self, year: i32) -> bool {
        match self.year(TechStage::Extinct) {
            None => false,
            Some(extinct) => {
                year >= extinct
                    && self
                        .year(TechStage::Reintroduced)
                        .is_none_or(|reintro| year < reintro)
            }
        }
    }
}
