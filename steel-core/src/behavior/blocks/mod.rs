//! Individual block behaviours.

pub mod magma_block;
