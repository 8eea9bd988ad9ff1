//! Adversarial pattern selection
//!
//! For each guess, the adversary reveals whichever pattern keeps the most
//! candidates alive and narrows the candidate set to that group.

pub mod partition;
mod selector;

pub use partition::{Group, PartitionMap, rank};
pub use selector::{apply, partition};
