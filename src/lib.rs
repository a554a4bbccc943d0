//! # ccg-position
//!
//! Authoring model for two-player card game positions.
//!
//! A user lays out both battlefields, a stack of pending spells with
//! targets, life totals and the active player; the position is then
//! exported as a JSON document for an external rules engine to resolve.
//! Nothing here enforces game rules or checks that targets are legal.
//!
//! ## Modules
//!
//! - `core`: Player tokens, identifiers, actions, configuration, errors, session state
//! - `cards`: Card definitions, the name-keyed catalog, catalog loading
//! - `zones`: Per-player battlefield store
//! - `stack`: Spell stack store and target resolution
//! - `snapshot`: The exported document and its builder
//!
//! ## Example
//!
//! ```
//! use ccg_position::{CardCatalog, CardDefinition, GameState, PlayerToken, SnapshotBuilder};
//!
//! let mut catalog = CardCatalog::new();
//! catalog.insert("Grizzly Bears", CardDefinition::with_types(["CREATURE"]).with_stats(2, 2));
//! catalog.insert("Lightning Bolt", CardDefinition::with_types(["INSTANT"]));
//!
//! let mut state = GameState::new();
//! let bear = state.add_permanent(PlayerToken::P2, "Grizzly Bears").unwrap();
//! state.cast_spell("Lightning Bolt", Some(PlayerToken::P1), bear.id.as_str());
//!
//! let json = SnapshotBuilder::new(&catalog).build(&state).unwrap().to_json().unwrap();
//! assert!(json.contains(r#""targetId":"p2_1""#));
//! ```

pub mod cards;
pub mod core;
pub mod snapshot;
pub mod stack;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, CatalogError, GameState, IdAllocator, PermanentId, PlayerMap, PlayerToken,
    SessionConfig, SnapshotError, StackEntryId, StackIdPolicy,
};

pub use crate::cards::{
    load_catalog, CardCatalog, CardDefinition, CatalogLoad, CatalogSource, CatalogStatus,
    FileSource, Permanent,
};

pub use crate::zones::Battlefield;

pub use crate::stack::{SpellStack, StackEntry, StackEntryKind, Target, TargetOption};

pub use crate::snapshot::{Document, SnapshotBuilder};
