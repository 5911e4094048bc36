//! Blockchain-related datastructures for Oryx.
#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod block;
pub mod chain_index;
pub mod parameters;
pub mod serialization;

/// A boxed error for fallible constructors and test results.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
