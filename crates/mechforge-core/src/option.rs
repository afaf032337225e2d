//! Construction options and weight-class chain navigation.
//!
//! A [`ConstructionOption`] wraps a [`TechProgression`] under a stable key.
//! Unit-scale options additionally carry a weight bracket and key links to
//! the adjacent brackets of the same archetype. The links are plain keys
//! resolved through the [`Registry`] at call time, never object aliases:
//! the registry stays the single owner of every option.

use crate::progression::TechProgression;
use crate::registry::Registry;
use serde::{Deserialize, Serialize};

/// The unit archetype a construction option belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    BattleMek,
    IndustrialMek,
    ProtoMek,
    CombatVehicle,
    SupportVehicle,
    BattleArmor,
    AerospaceFighter,
    ConventionalFighter,
    Dropship,
    Infantry,
}

/// Locomotion type for vehicle-scoped options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotiveType {
    Tracked,
    Wheeled,
    Hover,
    Vtol,
    Naval,
    Wige,
}

/// Direction of travel along a weight-class chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the lighter bracket.
    Previous,
    /// Toward the heavier bracket.
    Next,
}

/// The weight bracket and chain links of a unit-scale option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitOption {
    pub unit_type: UnitType,
    /// Minimum design weight in tons, inclusive.
    pub min_weight: f64,
    /// Maximum design weight in tons, inclusive.
    pub max_weight: f64,
    /// Granularity of legal weights within the bracket, in tons.
    pub weight_increment: f64,
    /// Key of the next lighter bracket for the same archetype, if any.
    #[serde(default)]
    pub prev_weight_class: Option<String>,
    /// Key of the next heavier bracket for the same archetype, if any.
    #[serde(default)]
    pub next_weight_class: Option<String>,
}

impl UnitOption {
    /// The stored chain link for a direction, if any.
    pub fn link(&self, direction: Direction) -> Option<&str> {
        match direction {
            Direction::Previous => self.prev_weight_class.as_deref(),
            Direction::Next => self.next_weight_class.as_deref(),
        }
    }
}

/// What kind of option this is, with the data specific to that kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    /// A piece of equipment; no weight bracket of its own.
    Equipment,
    /// A unit-scale option with a weight bracket.
    Unit(UnitOption),
    /// A vehicle option: a weight bracket plus a motive type.
    Vehicle { unit: UnitOption, motive: MotiveType },
}

/// A named, keyed construction option. Owned exclusively by the registry;
/// consumers hold non-owning references obtained by key lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructionOption {
    /// Unique stable identifier.
    pub key: String,
    /// Human-readable name.
    pub name: String,
    pub progression: TechProgression,
    pub kind: OptionKind,
}

impl ConstructionOption {
    /// The unit-scale data, for both unit and vehicle options.
    pub fn unit(&self) -> Option<&UnitOption> {
        match &self.kind {
            OptionKind::Equipment => None,
            OptionKind::Unit(unit) => Some(unit),
            OptionKind::Vehicle { unit, .. } => Some(unit),
        }
    }

    /// The motive type, for vehicle options only.
    pub fn motive(&self) -> Option<MotiveType> {
        match &self.kind {
            OptionKind::Vehicle { motive, .. } => Some(*motive),
            _ => None,
        }
    }

    /// The adjacent weight-class option in the given direction.
    ///
    /// `None` when this is not a unit option, when no link is stored, or
    /// when the stored key is not in the registry. An unresolved key means
    /// "no adjacent class", never a failure.
    pub fn adjacent<'a>(
        &self,
        registry: &'a Registry,
        direction: Direction,
    ) -> Option<&'a ConstructionOption> {
        let key = self.unit()?.link(direction)?;
        registry.find(key)
    }

    /// Follow the chain to its end in the given direction. Traversal is
    /// bounded by the registry size, so a malformed cyclic chain terminates
    /// instead of hanging.
    pub fn chain_end<'a>(
        &'a self,
        registry: &'a Registry,
        direction: Direction,
    ) -> &'a ConstructionOption {
        let mut current = self;
        for _ in 0..registry.len() {
            match current.adjacent(registry, direction) {
                Some(next) => current = next,
                None => break,
            }
        }
        current
    }

    /// The lightest bracket reachable from this option.
    pub fn lightest<'a>(&'a self, registry: &'a Registry) -> &'a ConstructionOption {
        self.chain_end(registry, Direction::Previous)
    }

    /// The heaviest bracket reachable from this option.
    pub fn heaviest<'a>(&'a self, registry: &'a Registry) -> &'a ConstructionOption {
        self.chain_end(registry, Direction::Next)
    }
}
