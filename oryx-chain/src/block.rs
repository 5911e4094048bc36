//! Blocks and block-related structures (heights, hashes)

mod hash;
mod height;

#[cfg(any(test, feature = "proptest-impl"))]
mod arbitrary;

pub use hash::Hash;
pub use height::Height;
