#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The exact-cover engine.
//!
//! `matrix` builds the static incidence structure between placements and
//! constraints, `state` holds the per-search counters together with the
//! invertible select/deselect primitive, and `search` runs the backtracking
//! walk that enumerates exact covers.

pub mod matrix;
pub mod search;
pub mod state;
