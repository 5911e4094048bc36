//! Genesis consensus parameters for each Oryx network.

use crate::{block, parameters::Network};

/// Returns the hash for the genesis block in `network`.
pub fn genesis_hash(network: Network) -> block::Hash {
    match network {
        // oryx-cli getblockhash 0
        Network::Mainnet => "4b0d7f133c5267d715d4d8992635a5490d1edd6b7072cce3f8fe116aba983b6a",
        // oryx-cli -testnet getblockhash 0
        Network::Testnet => "00000b7e804f1f44b1cdcf2c4f39a4747dc5ef4e5e274e166b44f151e336b118",
    }
    .parse()
    .expect("hard-coded hash parses")
}
