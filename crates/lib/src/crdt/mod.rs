//! Conflict-free Replicated Data Types (CRDTs) backing the replica state.
//!
//! This module provides the building blocks the merge engine is made of. Each one
//! merges deterministically, so replicas converge without coordination.
//!
//! # Core Types
//!
//! - [`WitnessSet`] - A keyed last-write-wins set recording when a key was last touched
//!
//! # Traits
//!
//! - [`Data`] - Marker trait for types that can be shipped between replicas
//! - [`CRDT`] - Core trait defining merge semantics for conflict resolution
//! - [`Witness`] - Key and timestamp extraction for witness set entries

pub mod traits;
pub mod witness;

pub use traits::{CRDT, Data, MergeReport};
pub use witness::{MergeOutcome, Witness, WitnessSet};
