//! The priority stack of pending spells.
//!
//! ## Model
//!
//! - [`SpellStack`]: ordered entries, bottom to top; push on top, remove
//!   from anywhere by position
//! - [`StackEntry`]: one cast spell with its controller and [`Target`]
//! - [`Target`]: none, a permanent, a player, or another stack entry
//!
//! ## Example Usage
//!
//! ```
//! use ccg_position::core::PlayerToken;
//! use ccg_position::stack::{SpellStack, Target};
//!
//! let mut stack = SpellStack::new();
//! stack.push_spell("Lightning Bolt", Some(PlayerToken::P1), "p2", PlayerToken::P1);
//! let counter = stack
//!     .push_spell("Counterspell", Some(PlayerToken::P2), "stack:spell_1", PlayerToken::P1)
//!     .unwrap();
//!
//! assert_eq!(counter.id.as_str(), "spell_2");
//! assert_eq!(counter.target.target_stack_id(), "spell_1");
//! assert_eq!(stack.peek_top().unwrap().source_name, "Counterspell");
//! ```

mod spell_stack;
mod target;

pub use spell_stack::{SpellStack, StackEntry, StackEntryKind};
pub use target::{Target, TargetOption, STACK_PREFIX};
