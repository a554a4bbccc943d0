//! User actions relayed from the presentation layer.
//!
//! Every button press in an authoring UI maps to one `Action`. Actions are
//! plain data, so a session can be recorded as a JSON list and replayed
//! with [`GameState::apply`](super::GameState::apply).
//!
//! Field values are kept in the form the UI submits them: card names and
//! targets are raw strings where `""` means "nothing selected", and life
//! totals are whatever text was typed.
//!
//! ## Example
//!
//! ```
//! use ccg_position::core::{Action, PlayerToken};
//!
//! let script = r#"[
//!     {"action": "addPermanent", "player": "p1", "card": "Grizzly Bears"},
//!     {"action": "castSpell", "spell": "Lightning Bolt", "controller": "", "target": "p1_1"}
//! ]"#;
//! let actions: Vec<Action> = serde_json::from_str(script).unwrap();
//!
//! assert_eq!(
//!     actions[0],
//!     Action::AddPermanent {
//!         player: PlayerToken::P1,
//!         card: "Grizzly Bears".into(),
//!     }
//! );
//! ```

use serde::{Deserialize, Serialize};

use super::entity::PermanentId;
use super::player::{empty_as_none, PlayerToken};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Action {
    /// Put a card onto a player's battlefield.
    AddPermanent { player: PlayerToken, card: String },

    /// Remove a permanent by id.
    RemovePermanent { player: PlayerToken, id: PermanentId },

    /// Cast a spell onto the stack.
    ///
    /// An unset controller falls back to the active player.
    CastSpell {
        spell: String,
        #[serde(default, deserialize_with = "empty_as_none")]
        controller: Option<PlayerToken>,
        #[serde(default)]
        target: String,
    },

    /// Remove the stack entry at a zero-based position.
    RemoveSpell { index: usize },

    /// Overwrite a life total field with raw text.
    SetLife { player: PlayerToken, value: String },

    SetActivePlayer { player: PlayerToken },

    /// Set or clear the player holding priority.
    SetPriorityPlayer {
        #[serde(default, deserialize_with = "empty_as_none")]
        player: Option<PlayerToken>,
    },

    /// Set or clear the current phase name.
    SetPhase {
        #[serde(default)]
        phase: Option<String>,
    },
}

impl Action {
    /// Short name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddPermanent { .. } => "addPermanent",
            Action::RemovePermanent { .. } => "removePermanent",
            Action::CastSpell { .. } => "castSpell",
            Action::RemoveSpell { .. } => "removeSpell",
            Action::SetLife { .. } => "setLife",
            Action::SetActivePlayer { .. } => "setActivePlayer",
            Action::SetPriorityPlayer { .. } => "setPriorityPlayer",
            Action::SetPhase { .. } => "setPhase",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_spell_defaults() {
        let action: Action =
            serde_json::from_str(r#"{"action": "castSpell", "spell": "Shock"}"#).unwrap();

        assert_eq!(
            action,
            Action::CastSpell {
                spell: "Shock".into(),
                controller: None,
                target: String::new(),
            }
        );
    }

    #[test]
    fn test_remove_permanent_parses_id() {
        let action: Action = serde_json::from_str(
            r#"{"action": "removePermanent", "player": "p2", "id": "p2_4"}"#,
        )
        .unwrap();

        assert_eq!(
            action,
            Action::RemovePermanent {
                player: PlayerToken::P2,
                id: PermanentId::from_raw("p2_4"),
            }
        );
        assert_eq!(action.name(), "removePermanent");
    }

    #[test]
    fn test_priority_player_can_be_cleared() {
        let action: Action =
            serde_json::from_str(r#"{"action": "setPriorityPlayer", "player": ""}"#).unwrap();
        assert_eq!(action, Action::SetPriorityPlayer { player: None });
    }

    #[test]
    fn test_unknown_action_rejected() {
        assert!(serde_json::from_str::<Action>(r#"{"action": "shuffle"}"#).is_err());
        assert!(serde_json::from_str::<Action>(
            r#"{"action": "addPermanent", "player": "p3", "card": "Bear"}"#
        )
        .is_err());
    }
}
