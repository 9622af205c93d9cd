//! Sound event registry entries.

use steel_utils::Identifier;

/// A sound that can be played in the world.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct SoundEvent {
    /// The sound's resource key.
    pub key: Identifier,
}

/// A reference to a registered sound event.
pub type SoundEventRef = &'static SoundEvent;
