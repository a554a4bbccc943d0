//! Session state: everything an authored position consists of.
//!
//! ## GameState
//!
//! - Both battlefields and the spell stack
//! - Life totals as the raw text the user typed
//! - Active player, and optionally priority player and phase
//! - The permanent id allocator
//!
//! All mutation goes through `&mut self`, so one writer at a time is
//! enforced by the borrow checker. The stores are persistent `im`
//! vectors, which makes `clone()` a cheap read-only snapshot that can be
//! handed to readers between mutations.

use log::debug;

use super::action::Action;
use super::config::SessionConfig;
use super::entity::IdAllocator;
use super::player::{PlayerMap, PlayerToken};
use crate::cards::Permanent;
use crate::stack::{SpellStack, StackEntry, TargetOption};
use crate::zones::Battlefield;

/// Complete authoring state for one session.
///
/// ## Example
///
/// ```
/// use ccg_position::core::{GameState, PlayerToken};
///
/// let mut state = GameState::new();
/// let bear = state.add_permanent(PlayerToken::P1, "Grizzly Bears").unwrap();
/// let bolt = state.cast_spell("Lightning Bolt", None, bear.id.as_str()).unwrap();
///
/// assert_eq!(bolt.controller, PlayerToken::P1); // active player
/// assert_eq!(bolt.target.target_id(), "p1_1");
/// ```
#[derive(Clone, Debug)]
pub struct GameState {
    battlefields: PlayerMap<Battlefield>,
    stack: SpellStack,

    /// Life fields as entered; parsed when a snapshot is built.
    life: PlayerMap<String>,

    active_player: PlayerToken,
    priority_player: Option<PlayerToken>,
    phase: Option<String>,

    ids: IdAllocator,
}

impl GameState {
    /// Empty position with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&SessionConfig::default())
    }

    /// Empty position with the given starting conditions.
    #[must_use]
    pub fn with_config(config: &SessionConfig) -> Self {
        Self {
            battlefields: PlayerMap::new(Battlefield::new),
            stack: SpellStack::with_policy(config.stack_ids),
            life: PlayerMap::with_value(config.starting_life.to_string()),
            active_player: config.active_player,
            priority_player: None,
            phase: None,
            ids: IdAllocator::starting_at(config.id_seed),
        }
    }

    // === Battlefields ===

    #[must_use]
    pub fn battlefield(&self, player: PlayerToken) -> &Battlefield {
        &self.battlefields[player]
    }

    #[must_use]
    pub fn battlefields(&self) -> &PlayerMap<Battlefield> {
        &self.battlefields
    }

    /// Put a card onto `player`'s battlefield. Empty names are ignored.
    pub fn add_permanent(&mut self, player: PlayerToken, card: &str) -> Option<Permanent> {
        self.battlefields[player].add_permanent(card, &mut self.ids)
    }

    /// Remove a permanent from `player`'s battlefield. Unknown ids are ignored.
    pub fn remove_permanent(&mut self, player: PlayerToken, id: &str) -> Option<Permanent> {
        self.battlefields[player].remove_permanent(id)
    }

    /// Find a permanent on either battlefield.
    #[must_use]
    pub fn permanent(&self, id: &str) -> Option<&Permanent> {
        self.battlefields.values().find_map(|field| field.get(id))
    }

    /// All permanents, p1's side first, each in insertion order.
    pub fn permanents(&self) -> impl Iterator<Item = &Permanent> {
        self.battlefields.values().flat_map(Battlefield::iter)
    }

    // === Stack ===

    #[must_use]
    pub fn stack(&self) -> &SpellStack {
        &self.stack
    }

    /// Cast a spell; an unset controller means the active player.
    pub fn cast_spell(
        &mut self,
        spell: &str,
        controller: Option<PlayerToken>,
        raw_target: &str,
    ) -> Option<StackEntry> {
        self.stack
            .push_spell(spell, controller, raw_target, self.active_player)
    }

    /// Remove the stack entry at a zero-based position.
    pub fn remove_spell(&mut self, index: usize) -> Option<StackEntry> {
        self.stack.remove_at(index)
    }

    /// Target selection list for the next cast.
    #[must_use]
    pub fn available_targets(&self) -> Vec<TargetOption> {
        self.stack.available_targets(&self.battlefields)
    }

    // === Table ===

    /// Raw life field for `player`.
    #[must_use]
    pub fn life(&self, player: PlayerToken) -> &str {
        &self.life[player]
    }

    /// Overwrite a life field. Not validated until a snapshot is built.
    pub fn set_life(&mut self, player: PlayerToken, value: impl Into<String>) {
        self.life[player] = value.into();
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerToken {
        self.active_player
    }

    pub fn set_active_player(&mut self, player: PlayerToken) {
        self.active_player = player;
    }

    #[must_use]
    pub fn priority_player(&self) -> Option<PlayerToken> {
        self.priority_player
    }

    pub fn set_priority_player(&mut self, player: Option<PlayerToken>) {
        self.priority_player = player;
    }

    #[must_use]
    pub fn phase(&self) -> Option<&str> {
        self.phase.as_deref()
    }

    /// Set the phase name; an empty name clears it.
    pub fn set_phase(&mut self, phase: Option<String>) {
        self.phase = phase.filter(|p| !p.is_empty());
    }

    // === Actions ===

    /// Apply one relayed user action.
    ///
    /// Returns `false` when the action was a no-op (empty selection,
    /// unknown id, out-of-range index).
    pub fn apply(&mut self, action: Action) -> bool {
        let name = action.name();
        let changed = match action {
            Action::AddPermanent { player, card } => self.add_permanent(player, &card).is_some(),
            Action::RemovePermanent { player, id } => {
                self.remove_permanent(player, id.as_str()).is_some()
            }
            Action::CastSpell {
                spell,
                controller,
                target,
            } => self.cast_spell(&spell, controller, &target).is_some(),
            Action::RemoveSpell { index } => self.remove_spell(index).is_some(),
            Action::SetLife { player, value } => {
                self.set_life(player, value);
                true
            }
            Action::SetActivePlayer { player } => {
                self.set_active_player(player);
                true
            }
            Action::SetPriorityPlayer { player } => {
                self.set_priority_player(player);
                true
            }
            Action::SetPhase { phase } => {
                self.set_phase(phase);
                true
            }
        };
        if !changed {
            debug!("{name}: no-op");
        }
        changed
    }

    /// Apply a sequence of actions, returning how many changed the state.
    pub fn apply_all(&mut self, actions: impl IntoIterator<Item = Action>) -> usize {
        actions
            .into_iter()
            .map(|action| self.apply(action))
            .filter(|&changed| changed)
            .count()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
