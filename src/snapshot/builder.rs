//! Building the exported document from session state.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use super::document::{BoardDocument, Boards, Document, StackEntryRecord};
use crate::cards::{CardCatalog, CardDefinition};
use crate::core::error::SnapshotError;
use crate::core::player::PlayerToken;
use crate::core::state::GameState;

/// Projects a [`GameState`] into a [`Document`] using a catalog.
///
/// Building is a pure function of state and catalog: the same inputs give
/// byte-identical JSON.
///
/// ## Example
///
/// ```
/// use ccg_position::cards::{CardCatalog, CardDefinition};
/// use ccg_position::core::{GameState, PlayerToken};
/// use ccg_position::snapshot::SnapshotBuilder;
///
/// let mut catalog = CardCatalog::new();
/// catalog.insert("Grizzly Bears", CardDefinition::with_types(["CREATURE"]).with_stats(2, 2));
/// catalog.insert("Giant Growth", CardDefinition::with_types(["INSTANT"]));
///
/// let mut state = GameState::new();
/// state.add_permanent(PlayerToken::P1, "Grizzly Bears");
///
/// let doc = SnapshotBuilder::new(&catalog).build(&state).unwrap();
/// assert_eq!(doc.cards.len(), 1); // Giant Growth is not in the position
/// assert_eq!(doc.boards.p1.life, 20);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SnapshotBuilder<'a> {
    catalog: &'a CardCatalog,
}

impl<'a> SnapshotBuilder<'a> {
    #[must_use]
    pub fn new(catalog: &'a CardCatalog) -> Self {
        Self { catalog }
    }

    /// Build the document.
    ///
    /// Fails only when a life field is not an integer.
    pub fn build(&self, state: &GameState) -> Result<Document, SnapshotError> {
        let board = |player: PlayerToken| -> Result<BoardDocument, SnapshotError> {
            Ok(BoardDocument {
                player,
                life: parse_life(player, state.life(player))?,
                permanents: state.battlefield(player).list(),
            })
        };
        let boards = Boards {
            p1: board(PlayerToken::P1)?,
            p2: board(PlayerToken::P2)?,
        };

        let cards = self.used_cards(state);
        let stack: Vec<StackEntryRecord> = state.stack().iter().map(StackEntryRecord::from).collect();
        debug!(
            "snapshot: {} card definitions, {} permanents, {} stack entries",
            cards.len(),
            boards.p1.permanents.len() + boards.p2.permanents.len(),
            stack.len()
        );

        Ok(Document {
            cards,
            active_player: state.active_player(),
            priority_player: state.priority_player(),
            current_phase: state.phase().map(str::to_string),
            boards,
            stack,
        })
    }

    /// Catalog entries for every card the position mentions.
    ///
    /// Names the catalog does not know are left out.
    #[must_use]
    pub fn used_cards(&self, state: &GameState) -> BTreeMap<String, CardDefinition> {
        referenced_cards(state)
            .into_iter()
            .filter_map(|name| {
                let card = self.catalog.lookup(name);
                if card.is_none() {
                    debug!("snapshot: no definition for {name:?}, leaving it out");
                }
                card.map(|card| (name.to_string(), card.clone()))
            })
            .collect()
    }
}

/// Distinct card names used by permanents and stack entries.
#[must_use]
pub fn referenced_cards(state: &GameState) -> BTreeSet<&str> {
    let on_battlefield = state.permanents().map(|p| p.name.as_str());
    let on_stack = state.stack().iter().map(|e| e.source_name.as_str());
    on_battlefield.chain(on_stack).collect()
}

/// Parse a life field.
///
/// Surrounding whitespace is allowed; anything else that is not an
/// integer is an error.
pub fn parse_life(player: PlayerToken, raw: &str) -> Result<i64, SnapshotError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| SnapshotError::InvalidLife {
            player,
            raw: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_life() {
        assert_eq!(parse_life(PlayerToken::P1, "20").unwrap(), 20);
        assert_eq!(parse_life(PlayerToken::P1, " 7 ").unwrap(), 7);
        assert_eq!(parse_life(PlayerToken::P1, "-3").unwrap(), -3);
        assert_eq!(parse_life(PlayerToken::P1, "0").unwrap(), 0);
    }

    #[test]
    fn test_parse_life_rejects_non_integers() {
        for raw in ["", "twenty", "17abc", "2.5", "NaN"] {
            match parse_life(PlayerToken::P2, raw) {
                Err(SnapshotError::InvalidLife { player, raw: got }) => {
                    assert_eq!(player, PlayerToken::P2);
                    assert_eq!(got, raw);
                }
                other => panic!("{raw:?} should fail, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_referenced_cards_deduplicates() {
        let mut state = GameState::new();
        state.add_permanent(PlayerToken::P1, "Bear");
        state.add_permanent(PlayerToken::P2, "Bear");
        state.cast_spell("Bolt", None, "");
        state.cast_spell("Bolt", None, "");

        let names: Vec<_> = referenced_cards(&state).into_iter().collect();
        assert_eq!(names, vec!["Bear", "Bolt"]);
    }

    #[test]
    fn test_build_fails_on_bad_life() {
        let catalog = CardCatalog::new();
        let mut state = GameState::new();
        state.set_life(PlayerToken::P2, "lots");

        let err = SnapshotBuilder::new(&catalog).build(&state).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::InvalidLife {
                player: PlayerToken::P2,
                ..
            }
        ));
        assert!(err.to_string().contains("p2"));
    }
}
