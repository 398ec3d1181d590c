//! `flock-spatial` — radius neighbor queries over a position snapshot.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                     |
//! |-----------|--------------------------------------------------------------|
//! | [`point`] | `IndexPoint` — maps `Vec2`/`Vec3` onto `rstar` points         |
//! | [`index`] | `NeighborIndex` — bulk-loaded R-tree, rebuilt every tick     |
//!
//! The index never fails: an empty snapshot builds an empty tree and every
//! query against it returns nothing.

pub mod index;
pub mod point;


pub use index::NeighborIndex;
pub use point::IndexPoint;
