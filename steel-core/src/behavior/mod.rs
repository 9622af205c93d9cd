//! Block behaviours that interact with entities.

pub mod block;
pub mod blocks;

pub use block::{BlockBehaviors, BlockBehaviour};
