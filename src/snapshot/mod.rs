//! Exporting a position for the rules engine.
//!
//! [`SnapshotBuilder`] reads the session state and the catalog and
//! produces a [`Document`]. The document is a one-way projection; it is
//! never loaded back into a session.

mod builder;
mod document;

pub use builder::{parse_life, referenced_cards, SnapshotBuilder};
pub use document::{BoardDocument, Boards, Document, StackEntryRecord};
