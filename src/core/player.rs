//! Player tokens and per-player data storage.
//!
//! ## PlayerToken
//!
//! A position always has exactly two sides, addressed by the wire tokens
//! `"p1"` and `"p2"`.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerToken`. Iteration always
//! visits `p1` before `p2`, which keeps every derived listing stable.

use serde::{Deserialize, Deserializer, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::error::ParsePlayerError;

/// One of the two sides of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerToken {
    P1,
    P2,
}

impl PlayerToken {
    /// Both tokens in table order.
    pub const ALL: [PlayerToken; 2] = [PlayerToken::P1, PlayerToken::P2];

    /// The wire token (`"p1"` or `"p2"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PlayerToken::P1 => "p1",
            PlayerToken::P2 => "p2",
        }
    }

    /// Human-readable label used in target selection lists.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PlayerToken::P1 => "Player 1",
            PlayerToken::P2 => "Player 2",
        }
    }

    /// The other side of the table.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerToken::P1 => PlayerToken::P2,
            PlayerToken::P2 => PlayerToken::P1,
        }
    }

    const fn slot(self) -> usize {
        match self {
            PlayerToken::P1 => 0,
            PlayerToken::P2 => 1,
        }
    }
}

impl std::fmt::Display for PlayerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerToken {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p1" => Ok(PlayerToken::P1),
            "p2" => Ok(PlayerToken::P2),
            other => Err(ParsePlayerError {
                raw: other.to_string(),
            }),
        }
    }
}

/// Deserialize an optional player where an empty string means "unset".
///
/// Selection lists submit `""` for their placeholder option.
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<PlayerToken>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(token) => token.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use ccg_position::core::{PlayerMap, PlayerToken};
///
/// let mut life: PlayerMap<i64> = PlayerMap::with_value(20);
/// life[PlayerToken::P2] = 17;
///
/// assert_eq!(life[PlayerToken::P1], 20);
/// assert_eq!(life[PlayerToken::P2], 17);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerToken) -> T) -> Self {
        Self {
            data: [factory(PlayerToken::P1), factory(PlayerToken::P2)],
        }
    }

    /// Create a PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, player: PlayerToken) -> &T {
        &self.data[player.slot()]
    }

    pub fn get_mut(&mut self, player: PlayerToken) -> &mut T {
        &mut self.data[player.slot()]
    }

    /// Iterate over (PlayerToken, &T) pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerToken, &T)> {
        PlayerToken::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerToken, &mut T) pairs in table order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerToken, &mut T)> {
        PlayerToken::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Iterate over the values in table order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<PlayerToken> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerToken) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerToken> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerToken) -> &mut Self::Output {
        self.get_mut(player)
    }
}
