//! Card instances on the battlefield.
//!
//! A `Permanent` is one copy of a card placed on a player's side. Its card
//! name is not checked against the catalog; an export simply has no
//! definition to include for a name the catalog does not know.

use serde::{Deserialize, Serialize};

use crate::core::entity::PermanentId;
use crate::core::player::PlayerToken;

/// A card on the battlefield.
///
/// Serializes as `{ "id", "name", "controller" }`, the shape the rules
/// engine reads.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permanent {
    /// Session-unique identifier.
    pub id: PermanentId,

    /// Card name, a key into the catalog.
    pub name: String,

    pub controller: PlayerToken,
}

impl Permanent {
    #[must_use]
    pub fn new(id: PermanentId, name: impl Into<String>, controller: PlayerToken) -> Self {
        Self {
            id,
            name: name.into(),
            controller,
        }
    }

    /// Selection-list label, e.g. `"Grizzly Bears (p1_1)"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.id)
    }
}
