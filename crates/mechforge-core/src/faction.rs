use serde::{Deserialize, Serialize};

/// A political or organizational entity that can hold exclusive access to a
/// technology milestone.
///
/// Factions only ever appear as restriction sets on timeline milestones: a
/// non-empty set means the milestone applies inside those factions only, an
/// empty set means it is universal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Faction {
    CapellanConfederation,
    ComStar,
    DraconisCombine,
    FederatedSuns,
    FreeRasalhagueRepublic,
    FreeWorldsLeague,
    LyranCommonwealth,
    Mercenary,
    Periphery,
    TerranHegemony,
    WordOfBlake,
    ClanGhostBear,
    ClanJadeFalcon,
    ClanSmokeJaguar,
    ClanSnowRaven,
    ClanWolf,
}

impl Faction {
    /// Whether this faction belongs to the Clan invention lineage.
    pub fn is_clan(self) -> bool {
        matches!(
            self,
            Faction::ClanGhostBear
                | Faction::ClanJadeFalcon
                | Faction::ClanSmokeJaguar
                | Faction::ClanSnowRaven
                | Faction::ClanWolf
        )
    }
}
