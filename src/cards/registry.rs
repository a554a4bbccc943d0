//! Card catalog for definition lookup by name.
//!
//! The `CardCatalog` is the read-only table of card definitions for a
//! session. Unknown names are never an error: lookups return `None` and
//! classification returns `false`.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::definition::CardDefinition;

/// On-disk / on-wire shape of a catalog: `{"cards": {name: definition}}`.
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    cards: FxHashMap<String, CardDefinition>,
}

/// Catalog of card definitions keyed by card name.
///
/// ## Example
///
/// ```
/// use ccg_position::cards::{CardCatalog, CardDefinition};
///
/// let mut catalog = CardCatalog::new();
/// catalog.insert("Lightning Bolt", CardDefinition::with_types(["INSTANT"]));
///
/// assert!(catalog.is_spell_like("Lightning Bolt"));
/// assert!(!catalog.is_creature_like("Lightning Bolt"));
/// assert!(catalog.lookup("Giant Growth").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<String, CardDefinition>,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the catalog document format.
    ///
    /// A document without a `cards` key yields an empty catalog.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(Self { cards: file.cards })
    }

    /// Add or replace a definition, returning the one it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        card: CardDefinition,
    ) -> Option<CardDefinition> {
        self.cards.insert(name.into(), card)
    }

    /// Get a card definition by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&CardDefinition> {
        self.cards.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cards.contains_key(name)
    }

    /// `true` iff the card exists and carries the `CREATURE` tag.
    #[must_use]
    pub fn is_creature_like(&self, name: &str) -> bool {
        self.lookup(name).is_some_and(CardDefinition::is_creature_like)
    }

    /// `true` iff the card exists and carries `INSTANT` or `SORCERY`.
    #[must_use]
    pub fn is_spell_like(&self, name: &str) -> bool {
        self.lookup(name).is_some_and(CardDefinition::is_spell_like)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over (name, definition) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CardDefinition)> {
        self.cards.iter().map(|(name, card)| (name.as_str(), card))
    }

    /// Names of cards matching a predicate, sorted.
    pub fn names_where<F>(&self, predicate: F) -> Vec<&str>
    where
        F: Fn(&CardDefinition) -> bool,
    {
        let mut names: Vec<&str> = self
            .iter()
            .filter(|(_, card)| predicate(*card))
            .map(|(name, _)| name)
            .collect();
        names.sort_unstable();
        names
    }

    /// Cards offered for the battlefield pickers, sorted by name.
    pub fn creature_names(&self) -> Vec<&str> {
        self.names_where(CardDefinition::is_creature_like)
    }

    /// Cards offered for the cast-spell picker, sorted by name.
    pub fn spell_names(&self) -> Vec<&str> {
        self.names_where(CardDefinition::is_spell_like)
    }
}

impl FromIterator<(String, CardDefinition)> for CardCatalog {
    fn from_iter<I: IntoIterator<Item = (String, CardDefinition)>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
