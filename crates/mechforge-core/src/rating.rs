use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A qualitative tech rating, ordered from most to least available.
///
/// `A` through `F` grade how sophisticated or scarce a technology is;
/// `X` means "not available at all" and sorts above everything else.
/// The same alphabet doubles as the per-era availability code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Rating {
    A,
    B,
    #[default]
    C,
    D,
    E,
    F,
    /// Unavailable. Maximal restriction.
    X,
}

impl Rating {
    /// The single-letter code used in data files and summary tables.
    pub fn letter(self) -> char {
        match self {
            Rating::A => 'A',
            Rating::B => 'B',
            Rating::C => 'C',
            Rating::D => 'D',
            Rating::E => 'E',
            Rating::F => 'F',
            Rating::X => 'X',
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A rating letter outside `A`-`F`/`X`. Raised at construction time, never
/// during queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid rating letter: {0:?}")]
pub struct ParseRatingError(pub String);

impl FromStr for Rating {
    type Err = ParseRatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Rating::A),
            "B" => Ok(Rating::B),
            "C" => Ok(Rating::C),
            "D" => Ok(Rating::D),
            "E" => Ok(Rating::E),
            "F" => Ok(Rating::F),
            "X" => Ok(Rating::X),
            other => Err(ParseRatingError(other.to_string())),
        }
    }
}

/// One of the four canonical historical eras used for availability codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Era {
    StarLeague,
    SuccessionWars,
    ClanInvasion,
    DarkAge,
}

impl Era {
    /// Number of canonical eras.
    pub const COUNT: usize = 4;

    /// All eras in chronological order.
    pub const ALL: [Era; Era::COUNT] = [
        Era::StarLeague,
        Era::SuccessionWars,
        Era::ClanInvasion,
        Era::DarkAge,
    ];

    /// Stable index into per-era availability arrays.
    pub fn index(self) -> usize {
        match self {
            Era::StarLeague => 0,
            Era::SuccessionWars => 1,
            Era::ClanInvasion => 2,
            Era::DarkAge => 3,
        }
    }

    /// Inverse of [`Era::index`]. Panics on an out-of-range index; an index
    /// not in `0..4` is a programming error, not a domain condition.
    pub fn from_index(index: usize) -> Era {
        Era::ALL[index]
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Era::StarLeague => "Star League",
            Era::SuccessionWars => "Succession Wars",
            Era::ClanInvasion => "Clan Invasion",
            Era::DarkAge => "Dark Age",
        };
        write!(f, "{label}")
    }
}
