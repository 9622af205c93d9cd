//! Armor damage reduction.

use crate::entity::LivingEntity;
use crate::entity::attributes::{Attribute, AttributeProvider};

/// An entity's defensive attributes at the moment of a hit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ArmorSnapshot {
    /// Armor points.
    pub armor: f64,
    /// Armor toughness.
    pub toughness: f64,
}

impl ArmorSnapshot {
    /// Reads armor and toughness for `entity`.
    pub fn of(entity: &dyn LivingEntity, attributes: &dyn AttributeProvider) -> Self {
        Self {
            armor: attributes.get(entity, Attribute::Armor),
            toughness: attributes.get(entity, Attribute::ArmorToughness),
        }
    }

    /// Applies this snapshot's reduction to `raw`.
    #[must_use]
    pub fn reduce(self, raw: f32) -> f32 {
        normalize(raw, self.armor, self.toughness)
    }
}

/// Damage left after armor.
///
/// `reduction = min(20, max(armor / 5, armor - raw / (2 + toughness / 4))) / 25`
/// and the result is `raw * (1 - reduction)`.
#[must_use]
pub fn normalize(raw: f32, armor: f64, toughness: f64) -> f32 {
    let raw = f64::from(raw);
    let points = (armor / 5.0).max(armor - raw / (2.0 + toughness / 4.0));
    let reduction = points.min(20.0) / 25.0;
    (raw * (1.0 - reduction)) as f32
}
