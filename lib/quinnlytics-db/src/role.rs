use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Lane assignment of a participant, as stored and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Top,
    Jungle,
    Middle,
    Bottom,
    Support,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Top,
        Role::Jungle,
        Role::Middle,
        Role::Bottom,
        Role::Support,
    ];

    /// Parse a position as reported by the Riot API (or as stored). The
    /// API's `UTILITY` is always read as [`Role::Support`].
    pub fn from_position(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "top" => Some(Role::Top),
            "jungle" => Some(Role::Jungle),
            "middle" => Some(Role::Middle),
            "bottom" => Some(Role::Bottom),
            "utility" | "support" => Some(Role::Support),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Top => "TOP",
            Role::Jungle => "JUNGLE",
            Role::Middle => "MIDDLE",
            Role::Bottom => "BOTTOM",
            Role::Support => "SUPPORT",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
