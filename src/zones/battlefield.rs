//! Per-player battlefield store.
//!
//! A `Battlefield` is an ordered list of permanents: insertion order is
//! display order and export order. Identifiers come from the session's
//! shared `IdAllocator`, so both sides draw from one counter.

use im::Vector;
use log::{debug, warn};

use crate::cards::Permanent;
use crate::core::entity::IdAllocator;
use crate::core::player::PlayerToken;

/// One player's side of the battlefield.
///
/// ## Usage
///
/// ```
/// use ccg_position::core::{IdAllocator, PlayerToken};
/// use ccg_position::zones::Battlefield;
///
/// let mut ids = IdAllocator::new();
/// let mut field = Battlefield::new(PlayerToken::P1);
///
/// let bear = field.add_permanent("Grizzly Bears", &mut ids).unwrap();
/// assert_eq!(bear.id.as_str(), "p1_1");
///
/// // Empty selections are ignored.
/// assert!(field.add_permanent("", &mut ids).is_none());
/// assert_eq!(field.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Battlefield {
    player: PlayerToken,
    permanents: Vector<Permanent>,
}

impl Battlefield {
    #[must_use]
    pub fn new(player: PlayerToken) -> Self {
        Self {
            player,
            permanents: Vector::new(),
        }
    }

    /// The player this side belongs to; controller of everything on it.
    #[must_use]
    pub fn player(&self) -> PlayerToken {
        self.player
    }

    /// Put a card onto this battlefield.
    ///
    /// Returns `None` and leaves the store untouched when `card` is empty or
    /// the allocator has no ids left.
    pub fn add_permanent(&mut self, card: &str, ids: &mut IdAllocator) -> Option<Permanent> {
        if card.is_empty() {
            debug!("{}: ignoring add with no card selected", self.player);
            return None;
        }

        let Some(id) = ids.next_permanent_id(self.player) else {
            warn!("{}: permanent ids exhausted; not adding {card}", self.player);
            return None;
        };
        let permanent = Permanent::new(id, card, self.player);
        debug!("{}: added {}", self.player, permanent.label());
        self.permanents.push_back(permanent.clone());
        Some(permanent)
    }

    /// Remove the permanent with the given id.
    ///
    /// Unknown ids are a no-op and return `None`.
    pub fn remove_permanent(&mut self, id: &str) -> Option<Permanent> {
        let Some(index) = self.position(id) else {
            debug!("{}: no permanent {id} to remove", self.player);
            return None;
        };
        let removed = self.permanents.remove(index);
        debug!("{}: removed {}", self.player, removed.label());
        Some(removed)
    }

    /// Look up a permanent by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Permanent> {
        self.permanents.iter().find(|p| p.id.as_str() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Permanent> {
        self.permanents.iter()
    }

    /// Owned copy of the permanents in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Permanent> {
        self.permanents.iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.permanents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.permanents.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.permanents.iter().position(|p| p.id.as_str() == id)
    }
}
