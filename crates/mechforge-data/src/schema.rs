//! Serde structs for catalog data files.
//!
//! These define the on-disk format for construction options and their
//! technology progressions. They are deserialized from RON, JSON, or TOML
//! and then resolved into engine types by the loader. Years are written as
//! plain integers or strings, with a leading `~` marking an approximate
//! date: `prototype = "~2460"`.

use mechforge_core::faction::Faction;
use mechforge_core::option::{MotiveType, UnitType};
use mechforge_core::progression::{RulesLevel, TechBase};
use serde::Deserialize;

/// Top-level catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub options: Vec<OptionData>,
}

/// One construction option in a data file.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionData {
    pub key: String,
    pub name: String,
    pub tech_base: TechBase,
    /// Tech rating letter, `A`-`F` or `X`.
    pub rating: String,
    /// Four era availability letters separated by dashes, e.g. `"C-D-E-X"`.
    pub availability: String,
    #[serde(default)]
    pub rules_level: RulesLevel,
    #[serde(default)]
    pub inner_sphere: TimelineData,
    #[serde(default)]
    pub clan: TimelineData,
    /// Present for unit-scale options; absent for plain equipment.
    #[serde(default)]
    pub unit: Option<UnitData>,
}

/// Milestone dates for one camp. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimelineData {
    #[serde(default)]
    pub prototype: Option<StageDateData>,
    #[serde(default)]
    pub production: Option<StageDateData>,
    #[serde(default)]
    pub common: Option<StageDateData>,
    #[serde(default)]
    pub extinct: Option<StageDateData>,
    #[serde(default)]
    pub reintroduced: Option<StageDateData>,
}

/// A milestone date, supporting a short year form and a full form with
/// faction restrictions.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StageDateData {
    /// Short form: exact year as an integer.
    Year(i32),
    /// Short form: year as a string, `"2470"` or approximate `"~2470"`.
    Text(String),
    /// Full form with an optional faction restriction set.
    Full {
        year: YearData,
        #[serde(default)]
        factions: Vec<Faction>,
    },
}

/// A year written either as an integer or as a (possibly `~`-prefixed) string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum YearData {
    Num(i32),
    Text(String),
}

/// Unit-scale data: weight bracket, chain links, optional motive type.
#[derive(Debug, Clone, Deserialize)]
pub struct UnitData {
    #[serde(rename = "type")]
    pub unit_type: UnitType,
    pub min_weight: f64,
    pub max_weight: f64,
    pub weight_increment: f64,
    /// Key of the next lighter bracket for the same archetype.
    #[serde(default)]
    pub previous: Option<String>,
    /// Key of the next heavier bracket for the same archetype.
    #[serde(default)]
    pub next: Option<String>,
    /// Present for vehicle options only.
    #[serde(default)]
    pub motive: Option<MotiveType>,
}
