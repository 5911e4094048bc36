//! Checkpoint-based block acceptance checks for Oryx.
//!
//! A [`CheckpointSet`] binds a hard-coded [`CheckpointList`] to a network
//! and a maturity span. It answers two kinds of question for the
//! chain-validation subsystem:
//!
//! - hardened checkpoints: is a candidate (height, hash) consistent with
//!   the hard-coded history? Any block at a checkpointed height with a
//!   mismatching hash is rejected.
//! - sync checkpoint: which recent block on the best chain is presumed
//!   final? Incoming blocks at or below it are rejected, which caps how
//!   deep a reorganization this node will ever accept.
//!
//! Every operation is a synchronous, bounded read of the checkpoint table
//! and the caller's block-index snapshot. Nothing here holds state across
//! calls, so a `CheckpointSet` can be shared freely between threads.

mod list;


pub use list::CheckpointList;

use oryx_chain::{
    block,
    chain_index::{ChainIndex, Entry},
    parameters::Network,
};

use crate::config::Config;

/// The minimum number of blocks a candidate must be behind the best-chain
/// tip to qualify as the sync checkpoint.
///
/// Blocks within this window are still subject to reorganization, so the
/// sync checkpoint is always selected behind it.
pub const CHECKPOINT_SPAN: u32 = 500;

/// The hard-coded checkpoints for one network, coupled with the
/// sync-checkpoint selection policy.
#[derive(Clone, Debug)]
pub struct CheckpointSet {
    /// The network whose checkpoint list is active.
    network: Network,

    /// The checkpoint list for `network`.
    list: CheckpointList,

    /// The maturity span used by [`sync_checkpoint`](Self::sync_checkpoint).
    checkpoint_span: u32,
}

impl CheckpointSet {
    /// Returns the checkpoint set for `network`, with the default
    /// [`CHECKPOINT_SPAN`].
    ///
    /// # Panics
    ///
    /// If the embedded checkpoint data for `network` is malformed. This is
    /// a fatal configuration error, checked before the node starts.
    pub fn new(network: Network) -> Self {
        let list = CheckpointList::new(network);

        tracing::info!(
            ?network,
            checkpoints = list.len(),
            max_height = ?list.max_height(),
            "loaded hard-coded checkpoints"
        );

        CheckpointSet {
            network,
            list,
            checkpoint_span: CHECKPOINT_SPAN,
        }
    }

    /// Returns the checkpoint set selected by `config`.
    pub fn from_config(config: &Config) -> Self {
        CheckpointSet {
            checkpoint_span: config.checkpoint_span,
            ..CheckpointSet::new(config.network)
        }
    }

    /// Returns a checkpoint set over an explicit `list` and span, for
    /// callers that don't use the embedded per-network data.
    pub fn from_parts(network: Network, list: CheckpointList, checkpoint_span: u32) -> Self {
        CheckpointSet {
            network,
            list,
            checkpoint_span,
        }
    }

    /// Returns the network this checkpoint set is bound to.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Check a candidate block against the hardened checkpoints.
    ///
    /// Returns false only if `height` is checkpointed and `hash` differs
    /// from the stored hash. Non-checkpointed heights are unconstrained by
    /// this check: the table is a blacklist of known-bad alternate
    /// histories, not a complete chain description.
    pub fn check_hardened(&self, height: block::Height, hash: &block::Hash) -> bool {
        match self.list.hash(height) {
            Some(checkpoint_hash) => checkpoint_hash == *hash,
            None => true,
        }
    }

    /// Returns the height of the highest checkpoint, as a coarse
    /// lower-bound estimate of the total number of blocks in the network.
    ///
    /// Returns `Height(0)` if the active list has no checkpoints. Used for
    /// sync progress reporting only; it carries no correctness guarantee
    /// beyond "at least this many blocks are known to exist".
    pub fn total_blocks_estimate(&self) -> block::Height {
        self.list.max_height().unwrap_or(block::Height(0))
    }

    /// Returns the highest checkpointed block present in `index`, or
    /// `None` if the local index contains none of the checkpoint hashes.
    ///
    /// The list is scanned from the highest checkpoint down, so a node
    /// that has only synced part of the checkpoint history still gets its
    /// most recent usable sync anchor.
    pub fn last_checkpoint<C: ChainIndex>(&self, index: &C) -> Option<Entry> {
        self.list
            .iter_descending()
            .find_map(|(_height, hash)| index.entry(&hash))
    }

    /// Automatically select a suitable sync checkpoint: the most recent
    /// block on the best chain that is at least the maturity span behind
    /// the tip, or the genesis block if the chain is shorter than the
    /// span.
    ///
    /// The walk is O(span): it follows parent handles from the tip and
    /// stops at the first block outside the maturity window.
    ///
    /// # Panics
    ///
    /// If `index` has no best tip, or a parent handle does not resolve.
    /// Callers must only invoke this on a consistent index snapshot with
    /// at least the genesis block.
    pub fn sync_checkpoint<C: ChainIndex>(&self, index: &C) -> Entry {
        let tip = index
            .best_tip()
            .expect("sync checkpoint selection needs a best-chain tip");

        // Search backward for the first block outside the maturity window
        let mut candidate = tip;
        while candidate.height.0.saturating_add(self.checkpoint_span) > tip.height.0 {
            match candidate.parent {
                Some(parent) => {
                    candidate = index
                        .entry(&parent)
                        .expect("parent handles resolve in a consistent index snapshot");
                }
                None => break,
            }
        }

        candidate
    }

    /// Check a candidate block height against the synchronized checkpoint.
    ///
    /// Returns false if `height` is at or below the current sync
    /// checkpoint: blocks there are presumed final and no longer subject
    /// to reorganization. The gate is monotone: the sync checkpoint height
    /// never decreases as the best chain advances, so a rejected height
    /// stays rejected.
    ///
    /// # Panics
    ///
    /// As [`sync_checkpoint`](Self::sync_checkpoint): `index` must have a
    /// best tip.
    pub fn check_sync<C: ChainIndex>(&self, height: block::Height, index: &C) -> bool {
        let sync_checkpoint = self.sync_checkpoint(index);

        height > sync_checkpoint.height
    }
}
