//! Session configuration.
//!
//! A `SessionConfig` fixes the starting conditions of an authoring
//! session: the life total both sides start on, who is active, how stack
//! entries are numbered and where the permanent counter starts. Every
//! field has a default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};

use super::player::PlayerToken;

/// Starting life total for both players.
pub const DEFAULT_STARTING_LIFE: i64 = 20;

/// How stack entry identifiers are assigned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackIdPolicy {
    /// `spell_{len + 1}` at push time.
    ///
    /// This is the numbering downstream engines have seen so far. After
    /// removing an earlier entry, a later push can repeat an id that is
    /// still on the stack.
    #[default]
    Positional,

    /// `spell_{n}` from a dedicated counter that never goes backwards.
    Monotonic,
}

/// Starting conditions for a session.
///
/// ```
/// use ccg_position::core::{PlayerToken, SessionConfig, StackIdPolicy};
///
/// let config = SessionConfig::from_json(r#"{"activePlayer": "p2", "stackIds": "monotonic"}"#).unwrap();
/// assert_eq!(config.active_player, PlayerToken::P2);
/// assert_eq!(config.stack_ids, StackIdPolicy::Monotonic);
/// assert_eq!(config.starting_life, 20);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    pub starting_life: i64,
    pub active_player: PlayerToken,
    pub stack_ids: StackIdPolicy,
    /// First sequence number handed to a permanent.
    pub id_seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_life: DEFAULT_STARTING_LIFE,
            active_player: PlayerToken::P1,
            stack_ids: StackIdPolicy::default(),
            id_seed: 1,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn with_starting_life(mut self, life: i64) -> Self {
        self.starting_life = life;
        self
    }

    #[must_use]
    pub fn with_active_player(mut self, player: PlayerToken) -> Self {
        self.active_player = player;
        self
    }

    #[must_use]
    pub fn with_stack_ids(mut self, policy: StackIdPolicy) -> Self {
        self.stack_ids = policy;
        self
    }

    #[must_use]
    pub fn with_id_seed(mut self, seed: u64) -> Self {
        self.id_seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.starting_life, 20);
        assert_eq!(config.active_player, PlayerToken::P1);
        assert_eq!(config.stack_ids, StackIdPolicy::Positional);
        assert_eq!(config.id_seed, 1);
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = SessionConfig::from_json("{}").unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::new()
            .with_starting_life(30)
            .with_active_player(PlayerToken::P2)
            .with_stack_ids(StackIdPolicy::Monotonic)
            .with_id_seed(100);

        assert_eq!(config.starting_life, 30);
        assert_eq!(config.active_player, PlayerToken::P2);
        assert_eq!(config.stack_ids, StackIdPolicy::Monotonic);
        assert_eq!(config.id_seed, 100);
    }

    #[test]
    fn test_rejects_unknown_policy() {
        assert!(SessionConfig::from_json(r#"{"stackIds": "random"}"#).is_err());
    }
}
