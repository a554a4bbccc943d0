//! Battlefield zones.
//!
//! Each player has one [`Battlefield`]; the session state holds them in a
//! `PlayerMap` and hands them the shared id allocator on every add.

mod battlefield;

pub use battlefield::Battlefield;
