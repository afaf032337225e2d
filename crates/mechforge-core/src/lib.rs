//! Mechforge Core -- the technology progression and availability engine.
//!
//! This crate decides, for any piece of equipment or unit-construction
//! option, whether it is legal under a given game date, faction, tech base,
//! and rules-level constraint, and what its in-universe availability is.
//! It reconciles two independent invention camps with their own milestone
//! timelines, approximate dates, faction-restricted introduction windows,
//! per-era availability codes, and extinction/reintroduction windows.
//!
//! # Lifecycle
//!
//! All mutation is confined to builders. [`progression::TechProgression`]
//! values are built once from static data and immutable afterward;
//! [`registry::Registry`] is populated once at startup through
//! [`registry::RegistryBuilder`] and frozen by `build()`. Every query is a
//! pure, synchronous computation: unknown dates resolve to documented
//! defaults, never errors, so two identical [`filter::LegalityFilter`]
//! evaluations always agree.
//!
//! # Key Types
//!
//! - [`progression::TechProgression`] -- the resolved, queryable record:
//!   tech base, rating, per-era availability codes, both camps' timelines,
//!   static rules level.
//! - [`timeline::Timeline`] -- per-camp milestone record with approximate
//!   flags and faction restriction sets.
//! - [`filter::LegalityFilter`] -- the per-session policy evaluated against
//!   progressions to enable or disable choices.
//! - [`option::ConstructionOption`] -- keyed wrapper around a progression;
//!   unit-scale options link to adjacent weight brackets by key.
//! - [`registry::Registry`] -- immutable key-to-option lookup, frozen at
//!   startup and shared by reference.

pub mod faction;
pub mod filter;
pub mod option;
pub mod progression;
pub mod rating;
pub mod registry;
pub mod timeline;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
