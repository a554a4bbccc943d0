//! Core session types: players, identifiers, actions, configuration,
//! errors and the session state.
//!
//! Everything here is independent of how the position is displayed or
//! which engine ends up consuming it.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod state;

pub use action::Action;
pub use config::{SessionConfig, StackIdPolicy, DEFAULT_STARTING_LIFE};
pub use entity::{IdAllocator, PermanentId, StackEntryId};
pub use error::{CatalogError, ParsePlayerError, SnapshotError};
pub use player::{PlayerMap, PlayerToken};
pub use state::GameState;
