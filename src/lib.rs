//! Workspace host crate: re-exports `placefinder-core` so the demos can use
//! `placefinder_rs::prelude::*`.
pub use placefinder_core::*;
