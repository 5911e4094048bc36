//! Consensus parameters for each Oryx network.
//!
//! Network mode is an explicit input: callers select a [`Network`] and
//! pass it to the components that need it, rather than reading a global
//! flag.

mod genesis;
mod network;

pub use genesis::genesis_hash;
pub use network::Network;
