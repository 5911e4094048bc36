//! Configuration for consensus checks.

use serde::{Deserialize, Serialize};

use oryx_chain::parameters::Network;

use crate::checkpoint::CHECKPOINT_SPAN;

/// Consensus configuration section.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// The network whose checkpoint list is used.
    pub network: Network,

    /// The minimum number of blocks a candidate must be behind the
    /// best-chain tip to qualify as the sync checkpoint.
    ///
    /// The default is [`CHECKPOINT_SPAN`]. Smaller values accept deeper
    /// reorganizations sooner; they are mainly useful for tests.
    pub checkpoint_span: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: Network::Mainnet,
            checkpoint_span: CHECKPOINT_SPAN,
        }
    }
}
