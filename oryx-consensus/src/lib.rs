//! Consensus checks for Oryx.
//!
//! This crate currently holds the checkpoint subsystem: a small, trusted
//! set of hard-coded (height, hash) pairs, the hardened-checkpoint check
//! that vetoes alternate histories at those heights, and the
//! sync-checkpoint policy that rejects blocks behind the presumed-final
//! part of the best chain.
#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod checkpoint;
pub mod config;

pub use checkpoint::{CheckpointSet, CHECKPOINT_SPAN};
pub use config::Config;
