//! Oryx interfaces for read access to the block index and best-chain tip.
//!
//! The block index and the best-chain tip are owned and mutated by the
//! chain-validation subsystem. Consumers of this trait only read them,
//! and must call it under whatever locking discipline the owner uses, so
//! that a single call observes one consistent snapshot of the index.

use crate::block;

#[cfg(any(test, feature = "proptest-impl"))]
pub mod mock;

/// A read-only copy of one block-index entry.
///
/// Entries are handles, not owning references: the parent link is the
/// parent's block hash, resolved against the index on demand. The
/// genesis entry has no parent.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    /// The height of this block in the chain.
    pub height: block::Height,

    /// The hash of this block, which is also its index key.
    pub hash: block::Hash,

    /// The hash of this block's parent, or `None` for the genesis block.
    pub parent: Option<block::Hash>,
}

/// An interface for querying the block index and the best-chain tip.
///
/// This trait helps avoid dependencies between this crate and the state
/// subsystem that owns the index.
pub trait ChainIndex {
    /// Returns the index entry for the block with `hash`, or `None` if
    /// the block is not in the local index.
    fn entry(&self, hash: &block::Hash) -> Option<Entry>;

    /// Returns the entry at the tip of the current best chain, or `None`
    /// if the index has no blocks yet.
    fn best_tip(&self) -> Option<Entry>;
}
