//! Spell targets.
//!
//! Selection lists carry targets as one string: a player token, a
//! permanent id, or `stack:<entry id>`. That string is decoded once, when a
//! spell is cast, into a [`Target`]; nothing past that point handles the
//! ambiguous form.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::entity::{PermanentId, StackEntryId};
use crate::core::player::PlayerToken;

use super::spell_stack::SpellStack;

/// Prefix marking a stack entry in a raw target string.
pub const STACK_PREFIX: &str = "stack:";

/// What a stack entry is aimed at.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    #[default]
    None,
    Permanent(PermanentId),
    Stack(StackEntryId),
    Player(PlayerToken),
}

impl Target {
    /// Decode a raw selection value.
    ///
    /// Precedence:
    /// 1. `stack:<id>` → `Stack`
    /// 2. `p1` / `p2` → `Player`
    /// 3. any other non-empty value → `Permanent`
    /// 4. empty, or a bare `stack:` → `None`
    ///
    /// Neither stack ids nor permanent ids are checked; a stack id missing
    /// from `stack` is kept and logged.
    ///
    /// ```
    /// use ccg_position::stack::{SpellStack, Target};
    /// use ccg_position::core::PlayerToken;
    ///
    /// let stack = SpellStack::new();
    /// assert_eq!(Target::resolve("p2", &stack), Target::Player(PlayerToken::P2));
    /// assert_eq!(Target::resolve("", &stack), Target::None);
    /// ```
    #[must_use]
    pub fn resolve(raw: &str, stack: &SpellStack) -> Self {
        if let Some(entry) = raw.strip_prefix(STACK_PREFIX) {
            if entry.is_empty() {
                return Target::None;
            }
            if !stack.contains(entry) {
                warn!("target {raw:?} names no entry currently on the stack");
            }
            return Target::Stack(StackEntryId::from_raw(entry));
        }
        if let Ok(player) = raw.parse::<PlayerToken>() {
            return Target::Player(player);
        }
        if raw.is_empty() {
            return Target::None;
        }
        Target::Permanent(PermanentId::from_raw(raw))
    }

    /// Encode back to the selection-list form.
    #[must_use]
    pub fn raw(&self) -> String {
        match self {
            Target::None => String::new(),
            Target::Permanent(id) => id.to_string(),
            Target::Stack(id) => format!("{STACK_PREFIX}{id}"),
            Target::Player(player) => player.to_string(),
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Target::None)
    }

    /// Permanent id, or `""`.
    #[must_use]
    pub fn target_id(&self) -> &str {
        match self {
            Target::Permanent(id) => id.as_str(),
            _ => "",
        }
    }

    /// Stack entry id, or `""`.
    #[must_use]
    pub fn target_stack_id(&self) -> &str {
        match self {
            Target::Stack(id) => id.as_str(),
            _ => "",
        }
    }

    /// Player token, or `""`.
    #[must_use]
    pub fn target_player(&self) -> &str {
        match self {
            Target::Player(player) => player.as_str(),
            _ => "",
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::None => f.write_str("no target"),
            other => f.write_str(&other.raw()),
        }
    }
}

/// One row of a target selection list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetOption {
    /// Raw value submitted when this row is picked.
    pub value: String,
    pub label: String,
}

impl TargetOption {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}
