use super::errors::ExtensionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const WOW_RETAIL: &str = "worldofwarcraft";
pub const WOW_CLASSIC: &str = "worldofwarcraftclassic";

/// Supported World of Warcraft game variants
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GameId {
    #[serde(rename = "worldofwarcraft")]
    Retail,
    #[serde(rename = "worldofwarcraftclassic")]
    Classic,
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameId {
    type Err = ExtensionError;

    // Host identifiers are compared exactly; "WorldOfWarcraft" is a different game.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            WOW_RETAIL => Ok(GameId::Retail),
            WOW_CLASSIC => Ok(GameId::Classic),
            _ => Err(ExtensionError::UnrecognisedGame(s.to_string())),
        }
    }
}

impl GameId {
    pub const ALL: [GameId; 2] = [GameId::Retail, GameId::Classic];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameId::Retail => WOW_RETAIL,
            GameId::Classic => WOW_CLASSIC,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GameId::Retail => "World of Warcraft",
            GameId::Classic => "World of Warcraft Classic",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            GameId::Retail => "WoW",
            GameId::Classic => "WoW Classic",
        }
    }

    /// Folder under the install root that holds this variant's client.
    pub fn client_folder(&self) -> &'static str {
        match self {
            GameId::Retail => "_retail_",
            GameId::Classic => "_classic_",
        }
    }

    /// True when `id` names one of the supported variants.
    pub fn is_supported(id: &str) -> bool {
        id.parse::<GameId>().is_ok()
    }
}
