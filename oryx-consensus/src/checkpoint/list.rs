//! Checkpoint lists for hardened-checkpoint and sync-checkpoint checks
//!
//! Each checkpoint consists of a block height and block hash.

#[cfg(test)]
mod tests;

use std::{
    collections::{BTreeMap, HashSet},
    str::FromStr,
};

use lazy_static::lazy_static;

use oryx_chain::{
    block,
    parameters::{self, Network},
    BoxError,
};

const MAINNET_CHECKPOINTS: &str = include_str!("main-checkpoints.txt");
const TESTNET_CHECKPOINTS: &str = include_str!("test-checkpoints.txt");

lazy_static! {
    /// The hard-coded mainnet checkpoint list, parsed once per process.
    static ref MAINNET_CHECKPOINT_LIST: CheckpointList = MAINNET_CHECKPOINTS
        .parse()
        .expect("hard-coded Mainnet checkpoint list parses and validates");

    /// The hard-coded testnet checkpoint list, parsed once per process.
    ///
    /// The testnet currently has no checkpoints, so this list is empty.
    static ref TESTNET_CHECKPOINT_LIST: CheckpointList = TESTNET_CHECKPOINTS
        .parse()
        .expect("hard-coded Testnet checkpoint list parses and validates");
}

/// A list of block height and hash checkpoints.
///
/// Checkpoints should be chosen to avoid forks or chain reorganizations,
/// which only happen in the last few hundred blocks in the chain.
///
/// This is actually a bijective map, but since it is read-only, we use a
/// BTreeMap, and do the value uniqueness check on initialisation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CheckpointList(BTreeMap<block::Height, block::Hash>);

impl FromStr for CheckpointList {
    type Err = BoxError;

    /// Parse a string into a CheckpointList.
    ///
    /// Each line has one checkpoint, consisting of a `block::Height` and
    /// `block::Hash`, separated by a single space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut checkpoint_list: Vec<(block::Height, block::Hash)> = Vec::new();

        for checkpoint in s.lines() {
            let fields = checkpoint.split(' ').collect::<Vec<_>>();
            if let [height, hash] = fields[..] {
                checkpoint_list.push((height.parse()?, hash.parse()?));
            } else {
                Err(format!("Invalid checkpoint format: expected 2 space-separated fields but found {}: '{}'", fields.len(), checkpoint))?;
            };
        }

        CheckpointList::from_list(checkpoint_list)
    }
}

impl CheckpointList {
    /// Returns the hard-coded checkpoint list for `network`.
    ///
    /// The embedded lists are validated when they are first parsed, and a
    /// malformed list is a fatal configuration error: it panics, so the
    /// node never starts with bad checkpoint data.
    pub fn new(network: Network) -> Self {
        match network {
            Network::Mainnet => MAINNET_CHECKPOINT_LIST.clone(),
            Network::Testnet => TESTNET_CHECKPOINT_LIST.clone(),
        }
    }

    /// Create a new checkpoint list from `list`.
    ///
    /// Checkpoint heights and checkpoint hashes must be unique, and if the
    /// list checkpoints the genesis block, its hash must match a known
    /// network genesis hash. An empty list is valid: a network without
    /// checkpoints leaves every height unconstrained.
    pub fn from_list(
        list: impl IntoIterator<Item = (block::Height, block::Hash)>,
    ) -> Result<Self, BoxError> {
        // BTreeMap silently ignores duplicates, so we count the checkpoints
        // before adding them to the map
        let original_checkpoints: Vec<(block::Height, block::Hash)> = list.into_iter().collect();
        let original_len = original_checkpoints.len();

        let checkpoints: BTreeMap<block::Height, block::Hash> =
            original_checkpoints.into_iter().collect();

        // This check rejects duplicate heights, whether they have the same or
        // different hashes
        if checkpoints.len() != original_len {
            Err("checkpoint heights must be unique")?;
        }

        let block_hashes: HashSet<&block::Hash> = checkpoints.values().collect();
        if block_hashes.len() != original_len {
            Err("checkpoint hashes must be unique")?;
        }

        // [0; 32] is the null hash, used as the parent hash of genesis blocks
        if block_hashes.contains(&block::Hash([0; 32])) {
            Err("checkpoint list contains invalid checkpoint hash: found null hash")?;
        }

        if let Some(hash) = checkpoints.get(&block::Height(0)) {
            if hash != &parameters::genesis_hash(Network::Mainnet)
                && hash != &parameters::genesis_hash(Network::Testnet)
            {
                Err("the genesis checkpoint does not match the Mainnet or Testnet genesis hash")?;
            }
        }

        let checkpoints = CheckpointList(checkpoints);
        if checkpoints.max_height() > Some(block::Height::MAX) {
            Err("checkpoint list contains invalid checkpoint: checkpoint height is greater than the maximum block height")?;
        }

        Ok(checkpoints)
    }

    /// Return true if there is a checkpoint at `height`.
    ///
    /// See `BTreeMap::contains_key()` for details.
    pub fn contains(&self, height: block::Height) -> bool {
        self.0.contains_key(&height)
    }

    /// Returns the hash corresponding to the checkpoint at `height`,
    /// or None if there is no checkpoint at that height.
    ///
    /// See `BTreeMap::get()` for details.
    pub fn hash(&self, height: block::Height) -> Option<block::Hash> {
        self.0.get(&height).cloned()
    }

    /// Returns the number of checkpoints in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the list has no checkpoints.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the block height of the highest checkpoint in the checkpoint
    /// list, or None if the list is empty.
    pub fn max_height(&self) -> Option<block::Height> {
        self.0.keys().next_back().cloned()
    }

    /// Iterate over the checkpoints from the highest height to the lowest.
    pub(crate) fn iter_descending(
        &self,
    ) -> impl Iterator<Item = (block::Height, block::Hash)> + '_ {
        self.0.iter().rev().map(|(height, hash)| (*height, *hash))
    }
}
