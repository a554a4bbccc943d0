//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card as published
//! by the catalog. For example, "Lightning Bolt" is an instant with some
//! rules text; "Grizzly Bears" is a 2/2 creature.
//!
//! The catalog format carries more than this crate interprets (spell
//! targets, effect lists, triggered abilities). Those keys are kept in
//! `extra` untouched so an exported position hands them on to the rules
//! engine exactly as they were read.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Type tag marking a card that can sit on the battlefield as a creature.
pub const CREATURE: &str = "CREATURE";
/// Type tag for instants.
pub const INSTANT: &str = "INSTANT";
/// Type tag for sorceries.
pub const SORCERY: &str = "SORCERY";

/// Static card definition.
///
/// ## Example
///
/// ```
/// use ccg_position::cards::CardDefinition;
///
/// let bears = CardDefinition::with_types(["CREATURE"]).with_stats(2, 2);
/// assert!(bears.is_creature_like());
/// assert!(!bears.is_spell_like());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDefinition {
    /// Ordered type tags (`CREATURE`, `INSTANT`, ...).
    #[serde(default)]
    pub types: SmallVec<[String; 2]>,

    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub subtypes: SmallVec<[String; 2]>,

    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub keywords: SmallVec<[String; 2]>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toughness: Option<i64>,

    /// Rules text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Catalog keys this crate passes through without interpreting.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl CardDefinition {
    /// Create a definition with the given type tags.
    #[must_use]
    pub fn with_types<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set power and toughness (builder pattern).
    #[must_use]
    pub fn with_stats(mut self, power: i64, toughness: i64) -> Self {
        self.power = Some(power);
        self.toughness = Some(toughness);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtypes.push(subtype.into());
        self
    }

    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    /// Attach a pass-through key.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Check for an exact type tag.
    #[must_use]
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }

    /// Creature-like cards can be added to a battlefield.
    #[must_use]
    pub fn is_creature_like(&self) -> bool {
        self.has_type(CREATURE)
    }

    /// Spell-like cards can be cast onto the stack.
    #[must_use]
    pub fn is_spell_like(&self) -> bool {
        self.has_type(INSTANT) || self.has_type(SORCERY)
    }

    /// `"power/toughness"` when both are known.
    #[must_use]
    pub fn stats(&self) -> Option<String> {
        match (self.power, self.toughness) {
            (Some(p), Some(t)) => Some(format!("{p}/{t}")),
            _ => None,
        }
    }
}
