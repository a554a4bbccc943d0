//! Object identifiers and their allocation.
//!
//! ## ID Layout
//!
//! - Permanents: `{player}_{n}` where `n` comes from a single counter shared
//!   by both battlefields, so `p1_1`, `p2_2`, `p1_3` is a valid sequence.
//! - Stack entries: `spell_{n}`.
//!
//! The counter lives in an `IdAllocator` owned by the session state rather
//! than in a global, so independent sessions never interfere.
//!
//! ## Usage
//!
//! ```
//! use ccg_position::core::{IdAllocator, PlayerToken};
//!
//! let mut ids = IdAllocator::new();
//! assert_eq!(ids.next_permanent_id(PlayerToken::P1).unwrap().as_str(), "p1_1");
//! assert_eq!(ids.next_permanent_id(PlayerToken::P2).unwrap().as_str(), "p2_2");
//! ```

use serde::{Deserialize, Serialize};

use super::player::PlayerToken;

/// Identifier of a permanent on either battlefield.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermanentId(String);

impl PermanentId {
    /// Build the identifier for sequence number `seq` under `player`.
    #[must_use]
    pub fn new(player: PlayerToken, seq: u64) -> Self {
        Self(format!("{player}_{seq}"))
    }

    /// Wrap an identifier received as text (e.g. from a selection list).
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PermanentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of an entry on the stack.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StackEntryId(String);

impl StackEntryId {
    /// Build the identifier `spell_{seq}`.
    #[must_use]
    pub fn new(seq: u32) -> Self {
        Self(format!("spell_{seq}"))
    }

    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StackEntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Session-wide permanent id counter.
///
/// Monotonic: a sequence number is handed out once and never again, even
/// after the permanent that carried it is removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdAllocator {
    /// `None` once the last sequence number has been handed out.
    next: Option<u64>,
}

impl IdAllocator {
    /// Allocator whose first id uses sequence number 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: Some(1) }
    }

    /// Allocator seeded at an explicit sequence number.
    ///
    /// A seed of 0 is bumped to 1; ids are 1-based.
    #[must_use]
    pub const fn starting_at(seed: u64) -> Self {
        Self {
            next: Some(if seed == 0 { 1 } else { seed }),
        }
    }

    /// Sequence number the next allocation will use, or `None` when the
    /// counter is exhausted.
    #[must_use]
    pub const fn peek(&self) -> Option<u64> {
        self.next
    }

    /// Allocate the next permanent id for `player`.
    ///
    /// Returns `None` once every sequence number has been issued; the
    /// counter never wraps, so an id is never handed out twice.
    pub fn next_permanent_id(&mut self, player: PlayerToken) -> Option<PermanentId> {
        let seq = self.next?;
        self.next = seq.checked_add(1);
        Some(PermanentId::new(player, seq))
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
