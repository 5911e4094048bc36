//! Mock [`ChainIndex`]es for use in tests.

use std::collections::HashMap;

use crate::block;

use super::{ChainIndex, Entry};

/// An in-memory [`ChainIndex`] with an externally-set best tip.
#[derive(Clone, Debug, Default)]
pub struct MockChainIndex {
    entries: HashMap<block::Hash, Entry>,
    best_tip: Option<block::Hash>,
}

impl MockChainIndex {
    /// Create an empty mock index with no best tip.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a linear chain of `len` blocks starting at genesis, with the
    /// best tip at height `len - 1`. Block hashes come from [`mock_hash`].
    pub fn linear_chain(len: u32) -> Self {
        let mut index = Self::new();
        for height in 0..len {
            index.insert(Entry {
                height: block::Height(height),
                hash: mock_hash(height),
                parent: height.checked_sub(1).map(mock_hash),
            });
        }
        if len > 0 {
            index.set_best_tip(mock_hash(len - 1));
        }
        index
    }

    /// Insert `entry`, returning any previous entry with the same hash.
    pub fn insert(&mut self, entry: Entry) -> Option<Entry> {
        self.entries.insert(entry.hash, entry)
    }

    /// Mark the block with `hash` as the best-chain tip.
    pub fn set_best_tip(&mut self, hash: block::Hash) {
        self.best_tip = Some(hash);
    }

    /// Extend a [`linear_chain`](Self::linear_chain) index up to
    /// `new_len` blocks, moving the best tip to the new last block.
    pub fn extend_linear_chain(&mut self, new_len: u32) {
        for height in 0..new_len {
            if !self.entries.contains_key(&mock_hash(height)) {
                self.insert(Entry {
                    height: block::Height(height),
                    hash: mock_hash(height),
                    parent: height.checked_sub(1).map(mock_hash),
                });
            }
        }
        if new_len > 0 {
            self.set_best_tip(mock_hash(new_len - 1));
        }
    }
}

impl ChainIndex for MockChainIndex {
    fn entry(&self, hash: &block::Hash) -> Option<Entry> {
        self.entries.get(hash).copied()
    }

    fn best_tip(&self) -> Option<Entry> {
        self.entry(&self.best_tip?)
    }
}

/// A deterministic, non-null hash for the mock block at `height`.
pub fn mock_hash(height: u32) -> block::Hash {
    let mut bytes = [0xcc; 32];
    bytes[..4].copy_from_slice(&height.to_le_bytes());
    block::Hash(bytes)
}
