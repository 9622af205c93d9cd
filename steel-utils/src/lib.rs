//! Shared primitives for the Steel workspace: identifiers, vector math,
//! Java-compatible randomness and lock aliases.

mod identifier;
pub mod locks;
pub mod math;
pub mod random;
pub mod types;

/// Entity status ids broadcast to clients (hurt flash, death animation, ...).
#[allow(missing_docs, reason = "generated from build_assets/entity_events.json")]
#[rustfmt::skip]
#[path = "generated/entity_events.rs"]
pub mod entity_events;

pub use identifier::Identifier;
