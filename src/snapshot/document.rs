//! The exported position document.
//!
//! This is the one artifact handed to the rules engine:
//!
//! ```json
//! {
//!   "cards": { "<name>": { ... } },
//!   "activePlayer": "p1",
//!   "boards": {
//!     "p1": { "player": "p1", "life": 20, "permanents": [ ... ] },
//!     "p2": { "player": "p2", "life": 20, "permanents": [ ... ] }
//!   },
//!   "stack": [ ... ]
//! }
//! ```
//!
//! `priorityPlayer` and `currentPhase` are written only when set.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cards::{CardDefinition, Permanent};
use crate::core::entity::StackEntryId;
use crate::core::error::SnapshotError;
use crate::core::player::PlayerToken;
use crate::stack::{StackEntry, StackEntryKind};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Definitions of the cards the position mentions, sorted by name.
    pub cards: BTreeMap<String, CardDefinition>,

    pub active_player: PlayerToken,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_player: Option<PlayerToken>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_phase: Option<String>,

    pub boards: Boards,

    /// Bottom to top.
    pub stack: Vec<StackEntryRecord>,
}

impl Document {
    /// Indented JSON, as shown to the user.
    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Single-line JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Both sides of the table, keyed `p1` / `p2`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boards {
    pub p1: BoardDocument,
    pub p2: BoardDocument,
}

impl Boards {
    #[must_use]
    pub fn board(&self, player: PlayerToken) -> &BoardDocument {
        match player {
            PlayerToken::P1 => &self.p1,
            PlayerToken::P2 => &self.p2,
        }
    }
}

/// One side of the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDocument {
    pub player: PlayerToken,
    pub life: i64,
    pub permanents: Vec<Permanent>,
}

/// Wire form of a stack entry.
///
/// The target is spread over three string fields; at most one of them is
/// non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackEntryRecord {
    pub id: StackEntryId,
    pub kind: StackEntryKind,
    pub source_name: String,
    pub controller: PlayerToken,
    pub target_id: String,
    pub target_stack_id: String,
    pub target_player: String,
}

impl From<&StackEntry> for StackEntryRecord {
    fn from(entry: &StackEntry) -> Self {
        Self {
            id: entry.id.clone(),
            kind: entry.kind,
            source_name: entry.source_name.clone(),
            controller: entry.controller,
            target_id: entry.target.target_id().to_string(),
            target_stack_id: entry.target.target_stack_id().to_string(),
            target_player: entry.target.target_player().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::PermanentId;
    use crate::stack::Target;
    use serde_json::json;

    #[test]
    fn test_stack_record_wire_shape() {
        let entry = StackEntry {
            id: StackEntryId::new(1),
            kind: StackEntryKind::Spell,
            source_name: "Bolt".into(),
            controller: PlayerToken::P1,
            target: Target::Permanent(PermanentId::from_raw("p1_2")),
        };

        assert_eq!(
            serde_json::to_value(StackEntryRecord::from(&entry)).unwrap(),
            json!({
                "id": "spell_1",
                "kind": "SPELL",
                "sourceName": "Bolt",
                "controller": "p1",
                "targetId": "p1_2",
                "targetStackId": "",
                "targetPlayer": ""
            })
        );
    }

    #[test]
    fn test_optional_keys_omitted() {
        let empty_board = |player| BoardDocument {
            player,
            life: 20,
            permanents: Vec::new(),
        };
        let doc = Document {
            cards: BTreeMap::new(),
            active_player: PlayerToken::P1,
            priority_player: None,
            current_phase: None,
            boards: Boards {
                p1: empty_board(PlayerToken::P1),
                p2: empty_board(PlayerToken::P2),
            },
            stack: Vec::new(),
        };

        let value = serde_json::to_value(&doc).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert!(!keys.contains(&"priorityPlayer".to_string()));
        assert!(!keys.contains(&"currentPhase".to_string()));
        assert_eq!(value["boards"]["p2"]["player"], json!("p2"));
        assert_eq!(doc.boards.board(PlayerToken::P2).life, 20);
    }
}
