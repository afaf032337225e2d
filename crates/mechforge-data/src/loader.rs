//! Resolution pipeline: reads catalog files, resolves them into engine
//! types, and builds the immutable registry.
//!
//! Provides extension-based format detection (RON/JSON/TOML) and the
//! fail-fast parsing of rating letters, availability codes, and year
//! strings. Any malformed record aborts the load; a registry is only ever
//! built from fully valid data.

use crate::schema::{CatalogData, OptionData, StageDateData, TimelineData, YearData};
use mechforge_core::option::{ConstructionOption, OptionKind, UnitOption};
use mechforge_core::progression::{Camp, TechProgression};
use mechforge_core::rating::{Era, ParseRatingError, Rating};
use mechforge_core::registry::{Registry, RegistryBuilder, RegistryError};
use mechforge_core::timeline::{StageDate, TechStage};
use std::path::{Path, PathBuf};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur during catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// Two catalog files with the same base name but different formats exist.
    #[error("conflicting formats: {a} and {b}")]
    ConflictingFormats { a: PathBuf, b: PathBuf },

    /// A deserialization error occurred.
    #[error("{format:?} parse error: {detail}")]
    Parse { format: Format, detail: String },

    /// A year value could not be parsed.
    #[error("invalid year in option '{key}': {value:?}")]
    InvalidYear { key: String, value: String },

    /// A rating letter outside the valid alphabet.
    #[error("in option '{key}': {source}")]
    InvalidRating {
        key: String,
        source: ParseRatingError,
    },

    /// The availability code does not have exactly four letters.
    #[error("invalid availability code in option '{key}': {value:?}")]
    InvalidAvailability { key: String, value: String },

    /// A registry construction error (e.g. duplicate key).
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported catalog file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, DataLoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(DataLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// File discovery
// ===========================================================================

/// Scan a directory for a catalog file with the given base name (without
/// extension).
///
/// Looks for `{base_name}.ron`, `{base_name}.toml`, and `{base_name}.json`.
/// Returns `Ok(None)` if no file is found, or `Err(ConflictingFormats)` if
/// multiple formats exist for the same base name.
pub fn find_catalog_file(dir: &Path, base_name: &str) -> Result<Option<PathBuf>, DataLoadError> {
    let extensions = ["ron", "toml", "json"];
    let mut found: Option<PathBuf> = None;

    for ext in &extensions {
        let candidate = dir.join(format!("{base_name}.{ext}"));
        if candidate.exists() {
            if let Some(ref existing) = found {
                return Err(DataLoadError::ConflictingFormats {
                    a: existing.clone(),
                    b: candidate,
                });
            }
            found = Some(candidate);
        }
    }

    Ok(found)
}

// ===========================================================================
// Loading
// ===========================================================================

/// Load a catalog file (format detected from the extension) and build the
/// registry from it.
pub fn load_catalog_file(path: &Path) -> Result<Registry, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    load_catalog_str(&content, format)
}

/// Build a registry from catalog text in the given format.
pub fn load_catalog_str(content: &str, format: Format) -> Result<Registry, DataLoadError> {
    let data: CatalogData = match format {
        Format::Ron => ron::from_str(content).map_err(|e| DataLoadError::Parse {
            format,
            detail: e.to_string(),
        })?,
        Format::Json => serde_json::from_str(content).map_err(|e| DataLoadError::Parse {
            format,
            detail: e.to_string(),
        })?,
        Format::Toml => toml::from_str(content).map_err(|e| DataLoadError::Parse {
            format,
            detail: e.to_string(),
        })?,
    };

    let mut builder = RegistryBuilder::new();
    for option in data.options {
        builder.register(resolve_option(option)?)?;
    }
    Ok(builder.build())
}

// ===========================================================================
// Resolution
// ===========================================================================

/// Resolve one data record into an engine construction option.
fn resolve_option(data: OptionData) -> Result<ConstructionOption, DataLoadError> {
    let rating: Rating = data
        .rating
        .parse()
        .map_err(|source| DataLoadError::InvalidRating {
            key: data.key.clone(),
            source,
        })?;
    let availability = parse_availability(&data.key, &data.availability)?;

    let mut builder = TechProgression::builder(data.tech_base)
        .rating(rating)
        .availability(availability)
        .static_rules_level(data.rules_level);

    for (camp, timeline) in [
        (Camp::InnerSphere, &data.inner_sphere),
        (Camp::Clan, &data.clan),
    ] {
        for (stage, entry) in stage_entries(timeline) {
            if let Some(raw) = entry {
                builder = builder.stage(camp, stage, resolve_stage_date(&data.key, raw)?);
            }
        }
    }

    let kind = match data.unit {
        None => OptionKind::Equipment,
        Some(unit) => {
            let resolved = UnitOption {
                unit_type: unit.unit_type,
                min_weight: unit.min_weight,
                max_weight: unit.max_weight,
                weight_increment: unit.weight_increment,
                prev_weight_class: unit.previous,
                next_weight_class: unit.next,
            };
            match unit.motive {
                Some(motive) => OptionKind::Vehicle {
                    unit: resolved,
                    motive,
                },
                None => OptionKind::Unit(resolved),
            }
        }
    };

    Ok(ConstructionOption {
        key: data.key,
        name: data.name,
        progression: builder.build(),
        kind,
    })
}

fn stage_entries(timeline: &TimelineData) -> [(TechStage, &Option<StageDateData>); 5] {
    [
        (TechStage::Prototype, &timeline.prototype),
        (TechStage::Production, &timeline.production),
        (TechStage::Common, &timeline.common),
        (TechStage::Extinct, &timeline.extinct),
        (TechStage::Reintroduced, &timeline.reintroduced),
    ]
}

fn resolve_stage_date(key: &str, raw: &StageDateData) -> Result<StageDate, DataLoadError> {
    let (year_data, factions) = match raw {
        StageDateData::Year(year) => return Ok(StageDate::new(*year)),
        StageDateData::Text(text) => (YearData::Text(text.clone()), Vec::new()),
        StageDateData::Full { year, factions } => (year.clone(), factions.clone()),
    };
    let (year, approximate) = match &year_data {
        YearData::Num(year) => (*year, false),
        YearData::Text(text) => parse_year(key, text)?,
    };
    Ok(StageDate {
        year,
        approximate,
        factions,
    })
}

/// Parse a year string: `"2470"` exact, `"~2470"` approximate.
fn parse_year(key: &str, text: &str) -> Result<(i32, bool), DataLoadError> {
    let trimmed = text.trim();
    let (digits, approximate) = match trimmed.strip_prefix('~') {
        Some(rest) => (rest, true),
        None => (trimmed, false),
    };
    let year = digits
        .parse::<i32>()
        .map_err(|_| DataLoadError::InvalidYear {
            key: key.to_string(),
            value: text.to_string(),
        })?;
    Ok((year, approximate))
}

/// Parse a four-letter availability code, e.g. `"C-D-E-X"`, in era order.
fn parse_availability(key: &str, code: &str) -> Result<[Rating; Era::COUNT], DataLoadError> {
    let invalid = || DataLoadError::InvalidAvailability {
        key: key.to_string(),
        value: code.to_string(),
    };
    let mut out = [Rating::X; Era::COUNT];
    let mut parts = code.split('-');
    for slot in &mut out {
        let part = parts.next().ok_or_else(invalid)?;
        *slot = part.trim().parse().map_err(|_| invalid())?;
    }
    if parts.next().is_some() {
        return Err(invalid());
    }
    Ok(out)
}

// ===========================================================================
// Tests
// ===========================================================================
