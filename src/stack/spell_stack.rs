//! The spell stack store.
//!
//! Spells are appended on top and can be pulled out from any position.
//! Index 0 is the bottom of the stack, the last entry is the top and
//! resolves first. Nothing resolves here; the stack only records the
//! position for export.

use im::Vector;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::config::StackIdPolicy;
use crate::core::entity::StackEntryId;
use crate::core::player::{PlayerMap, PlayerToken};
use crate::zones::Battlefield;

use super::target::{Target, TargetOption, STACK_PREFIX};

/// What kind of object a stack entry is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StackEntryKind {
    #[default]
    Spell,
}

/// An entry on the stack.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StackEntry {
    pub id: StackEntryId,

    pub kind: StackEntryKind,

    /// Name of the card being cast.
    pub source_name: String,

    /// Who cast it.
    pub controller: PlayerToken,

    pub target: Target,
}

impl StackEntry {
    /// Selection-list label, e.g. `"Stack item: spell_1 (Lightning Bolt)"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Stack item: {} ({})", self.id, self.source_name)
    }
}

/// Ordered store of pending spells.
///
/// ## Identifier numbering
///
/// Under [`StackIdPolicy::Positional`] a new entry is named after the
/// stack height at push time, so removing an entry from the middle and
/// pushing again can repeat an id. [`StackIdPolicy::Monotonic`] uses its
/// own counter and never repeats.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpellStack {
    /// index 0 = bottom, last = top
    entries: Vector<StackEntry>,

    policy: StackIdPolicy,

    /// Next sequence number under the monotonic policy.
    next_id: u32,
}

impl Default for SpellStack {
    fn default() -> Self {
        Self::new()
    }
}

impl SpellStack {
    /// Empty stack with positional numbering.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(StackIdPolicy::default())
    }

    #[must_use]
    pub fn with_policy(policy: StackIdPolicy) -> Self {
        Self {
            entries: Vector::new(),
            policy,
            next_id: 1,
        }
    }

    #[must_use]
    pub fn policy(&self) -> StackIdPolicy {
        self.policy
    }

    /// Cast a spell onto the top of the stack.
    ///
    /// - An empty `spell` is ignored and returns `None`.
    /// - `controller` falls back to `active` when unset.
    /// - `raw_target` is decoded with [`Target::resolve`] against the
    ///   entries already on the stack.
    pub fn push_spell(
        &mut self,
        spell: &str,
        controller: Option<PlayerToken>,
        raw_target: &str,
        active: PlayerToken,
    ) -> Option<StackEntry> {
        if spell.is_empty() {
            debug!("stack: ignoring cast with no spell selected");
            return None;
        }

        let target = Target::resolve(raw_target, self);
        let entry = StackEntry {
            id: self.allocate_id(),
            kind: StackEntryKind::Spell,
            source_name: spell.to_string(),
            controller: controller.unwrap_or(active),
            target,
        };
        debug!(
            "stack: {} casts {} as {} -> {}",
            entry.controller, entry.source_name, entry.id, entry.target
        );
        self.entries.push_back(entry.clone());
        Some(entry)
    }

    /// Remove the entry at a zero-based position.
    ///
    /// Later entries shift down; out-of-range positions are a no-op.
    pub fn remove_at(&mut self, index: usize) -> Option<StackEntry> {
        if index >= self.entries.len() {
            debug!("stack: no entry at position {index} to remove");
            return None;
        }
        let removed = self.entries.remove(index);
        debug!("stack: removed {} ({})", removed.id, removed.source_name);
        Some(removed)
    }

    /// First entry with the given id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&StackEntry> {
        self.entries.iter().find(|e| e.id.as_str() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Peek at the top of the stack.
    #[must_use]
    pub fn peek_top(&self) -> Option<&StackEntry> {
        self.entries.back()
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &StackEntry> {
        self.entries.iter()
    }

    /// Owned copy of the entries, bottom to top.
    #[must_use]
    pub fn list(&self) -> Vec<StackEntry> {
        self.entries.iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Everything a new spell could target, in display order: both
    /// players, then every permanent (p1's side first, each in insertion
    /// order), then every stack entry bottom to top.
    #[must_use]
    pub fn available_targets(&self, battlefields: &PlayerMap<Battlefield>) -> Vec<TargetOption> {
        let players = PlayerToken::ALL
            .into_iter()
            .map(|p| TargetOption::new(p.as_str(), p.label()));
        let permanents = battlefields
            .values()
            .flat_map(Battlefield::iter)
            .map(|p| TargetOption::new(p.id.as_str(), p.label()));
        let entries = self
            .entries
            .iter()
            .map(|e| TargetOption::new(format!("{STACK_PREFIX}{}", e.id), e.label()));

        players.chain(permanents).chain(entries).collect()
    }

    fn allocate_id(&mut self) -> StackEntryId {
        match self.policy {
            StackIdPolicy::Positional => StackEntryId::new(self.entries.len() as u32 + 1),
            StackIdPolicy::Monotonic => {
                let seq = self.next_id;
                self.next_id += 1;
                StackEntryId::new(seq)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::{IdAllocator, PermanentId};

    fn ids(stack: &SpellStack) -> Vec<&str> {
        stack.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_push_appends_on_top() {
        let mut stack = SpellStack::new();
        stack.push_spell("Bolt", None, "", PlayerToken::P1);
        stack.push_spell("Shock", None, "", PlayerToken::P1);

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek_top().map(|e| e.source_name.as_str()), Some("Shock"));
        assert_eq!(ids(&stack), vec!["spell_1", "spell_2"]);
    }

    #[test]
    fn test_controller_defaults_to_active() {
        let mut stack = SpellStack::new();
        let defaulted = stack.push_spell("Bolt", None, "", PlayerToken::P2).unwrap();
        let explicit = stack
            .push_spell("Bolt", Some(PlayerToken::P1), "", PlayerToken::P2)
            .unwrap();

        assert_eq!(defaulted.controller, PlayerToken::P2);
        assert_eq!(explicit.controller, PlayerToken::P1);
    }

    #[test]
    fn test_empty_spell_is_ignored() {
        let mut stack = SpellStack::new();
        assert!(stack.push_spell("", Some(PlayerToken::P1), "p2", PlayerToken::P1).is_none());
        assert!(stack.is_empty());
    }

    #[test]
    fn test_push_resolves_target() {
        let mut stack = SpellStack::new();
        let first = stack
            .push_spell("Bolt", Some(PlayerToken::P1), "p1_2", PlayerToken::P1)
            .unwrap();
        let second = stack
            .push_spell("Counterspell", Some(PlayerToken::P2), "stack:spell_1", PlayerToken::P1)
            .unwrap();

        assert_eq!(first.target, Target::Permanent(PermanentId::from_raw("p1_2")));
        assert_eq!(second.target, Target::Stack(StackEntryId::new(1)));
        assert_eq!(second.kind, StackEntryKind::Spell);
    }

    #[test]
    fn test_target_resolved_before_push() {
        let mut stack = SpellStack::new();
        let entry = stack
            .push_spell("Bolt", None, "stack:spell_7", PlayerToken::P1)
            .unwrap();
        assert_eq!(entry.id.as_str(), "spell_1");
        assert_eq!(entry.target, Target::Stack(StackEntryId::from_raw("spell_7")));
    }

    #[test]
    fn test_remove_at_shifts_down() {
        let mut stack = SpellStack::new();
        for spell in ["A", "B", "C"] {
            stack.push_spell(spell, None, "", PlayerToken::P1);
        }

        let removed = stack.remove_at(1).unwrap();
        assert_eq!(removed.source_name, "B");
        let names: Vec<_> = stack.iter().map(|e| e.source_name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut stack = SpellStack::new();
        stack.push_spell("A", None, "", PlayerToken::P1);
        let before = stack.clone();

        assert!(stack.remove_at(1).is_none());
        assert!(stack.remove_at(usize::MAX).is_none());
        assert_eq!(stack, before);
    }

    #[test]
    fn test_positional_ids_can_repeat_after_removal() {
        let mut stack = SpellStack::new();
        stack.push_spell("A", None, "", PlayerToken::P1);
        stack.push_spell("B", None, "", PlayerToken::P1);
        stack.remove_at(0);
        stack.push_spell("C", None, "", PlayerToken::P1);

        assert_eq!(ids(&stack), vec!["spell_2", "spell_2"]);
    }

    #[test]
    fn test_monotonic_ids_never_repeat() {
        let mut stack = SpellStack::with_policy(StackIdPolicy::Monotonic);
        stack.push_spell("A", None, "", PlayerToken::P1);
        stack.push_spell("B", None, "", PlayerToken::P1);
        stack.remove_at(0);
        stack.push_spell("C", None, "", PlayerToken::P1);

        assert_eq!(ids(&stack), vec!["spell_2", "spell_3"]);
    }

    #[test]
    fn test_available_targets_order() {
        let mut alloc = IdAllocator::new();
        let mut fields = PlayerMap::new(Battlefield::new);
        fields[PlayerToken::P2].add_permanent("Elf", &mut alloc);
        fields[PlayerToken::P1].add_permanent("Bear", &mut alloc);

        let mut stack = SpellStack::new();
        stack.push_spell("Bolt", None, "", PlayerToken::P1);

        let values: Vec<_> = stack
            .available_targets(&fields)
            .into_iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(values, vec!["p1", "p2", "p1_2", "p2_1", "stack:spell_1"]);

        let labels: Vec<_> = stack
            .available_targets(&fields)
            .into_iter()
            .map(|o| o.label)
            .collect();
        assert_eq!(labels[0], "Player 1");
        assert_eq!(labels[2], "Bear (p1_2)");
        assert_eq!(labels[4], "Stack item: spell_1 (Bolt)");
    }
}
