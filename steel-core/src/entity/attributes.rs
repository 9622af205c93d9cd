//! Entity attributes and their modifiers.
//!
//! Matches vanilla `AttributeInstance` value calculation: `AddValue`
//! modifiers are summed onto the base, `AddMultipliedBase` modifiers add
//! multiples of that sum, `AddMultipliedTotal` modifiers multiply the result,
//! and the final value is clamped to the attribute's range.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use steel_utils::Identifier;

use crate::entity::LivingEntity;

/// Attributes the simulation reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// `minecraft:max_health`
    MaxHealth,
    /// `minecraft:armor`
    Armor,
    /// `minecraft:armor_toughness`
    ArmorToughness,
    /// `minecraft:attack_damage`
    AttackDamage,
}

impl Attribute {
    /// Value used when an entity has no instance for the attribute.
    #[must_use]
    pub const fn default_value(self) -> f64 {
        match self {
            Self::MaxHealth => 20.0,
            Self::Armor | Self::ArmorToughness => 0.0,
            Self::AttackDamage => 2.0,
        }
    }

    /// Inclusive range the computed value is clamped to.
    #[must_use]
    pub const fn range(self) -> (f64, f64) {
        match self {
            Self::MaxHealth => (1.0, 1024.0),
            Self::Armor => (0.0, 30.0),
            Self::ArmorToughness => (0.0, 20.0),
            Self::AttackDamage => (0.0, 2048.0),
        }
    }
}

/// An attribute modifier operation type.
///
/// Matches vanilla `AttributeModifier.Operation` ordinal values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AttributeModifierOperation {
    /// Adds the value directly to the base: `base + value`
    AddValue = 0,
    /// Adds `base * value` to the result (additive with other multiplied_base modifiers)
    AddMultipliedBase = 1,
    /// Multiplies the current result by `(1 + value)` (multiplicative with others)
    AddMultipliedTotal = 2,
}

/// A single attribute modifier.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeModifier {
    /// The modifier's id, e.g. `minecraft:armor.chestplate`. Re-adding an id replaces it.
    pub id: Identifier,
    /// The modifier amount.
    pub amount: f64,
    /// The modifier operation.
    pub operation: AttributeModifierOperation,
}

/// Base value plus modifiers for one attribute.
#[derive(Clone, Debug)]
pub struct AttributeInstance {
    attribute: Attribute,
    base_value: f64,
    modifiers: SmallVec<[AttributeModifier; 2]>,
}

impl AttributeInstance {
    /// Creates an instance at the attribute's default value.
    #[must_use]
    pub fn new(attribute: Attribute) -> Self {
        Self {
            attribute,
            base_value: attribute.default_value(),
            modifiers: SmallVec::new(),
        }
    }

    /// The base value before modifiers.
    #[must_use]
    pub const fn base_value(&self) -> f64 {
        self.base_value
    }

    /// Adds a modifier, replacing any with the same id.
    pub fn add_modifier(&mut self, modifier: AttributeModifier) {
        self.remove_modifier(&modifier.id);
        self.modifiers.push(modifier);
    }

    /// Removes the modifier with `id`, if present.
    pub fn remove_modifier(&mut self, id: &Identifier) {
        self.modifiers.retain(|modifier| &modifier.id != id);
    }

    /// The computed value.
    #[must_use]
    pub fn value(&self) -> f64 {
        let mut base = self.base_value;
        for modifier in self.with_operation(AttributeModifierOperation::AddValue) {
            base += modifier.amount;
        }

        let mut value = base;
        for modifier in self.with_operation(AttributeModifierOperation::AddMultipliedBase) {
            value += base * modifier.amount;
        }
        for modifier in self.with_operation(AttributeModifierOperation::AddMultipliedTotal) {
            value *= 1.0 + modifier.amount;
        }

        let (min, max) = self.attribute.range();
        value.clamp(min, max)
    }

    fn with_operation(
        &self,
        operation: AttributeModifierOperation,
    ) -> impl Iterator<Item = &AttributeModifier> {
        self.modifiers
            .iter()
            .filter(move |modifier| modifier.operation == operation)
    }
}

/// All attribute instances of one entity.
#[derive(Clone, Debug, Default)]
pub struct AttributeMap {
    instances: FxHashMap<Attribute, AttributeInstance>,
}

impl AttributeMap {
    /// The instance for `attribute`, created at its default if missing.
    pub fn instance_mut(&mut self, attribute: Attribute) -> &mut AttributeInstance {
        self.instances
            .entry(attribute)
            .or_insert_with(|| AttributeInstance::new(attribute))
    }

    /// Sets the base value of `attribute`.
    pub fn set_base(&mut self, attribute: Attribute, value: f64) {
        self.instance_mut(attribute).base_value = value;
    }

    /// The computed value of `attribute`.
    #[must_use]
    pub fn get_value(&self, attribute: Attribute) -> f64 {
        self.instances
            .get(&attribute)
            .map_or_else(|| attribute.default_value(), AttributeInstance::value)
    }
}

/// Resolves attribute values for the damage pipeline.
pub trait AttributeProvider: Send + Sync {
    /// The computed value of `attribute` on `entity`.
    fn get(&self, entity: &dyn LivingEntity, attribute: Attribute) -> f64;
}

/// Reads attributes straight from the entity's own [`AttributeMap`].
#[derive(Clone, Copy, Debug, Default)]
pub struct EntityAttributes;

impl AttributeProvider for EntityAttributes {
    fn get(&self, entity: &dyn LivingEntity, attribute: Attribute) -> f64 {
        entity.living_base().attributes.lock().get_value(attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modifier(path: &'static str, amount: f64, operation: AttributeModifierOperation) -> AttributeModifier {
        AttributeModifier {
            id: Identifier::vanilla_static(path),
            amount,
            operation,
        }
    }

    #[test]
    fn test_modifier_order_matches_vanilla() {
        let mut instance = AttributeInstance::new(Attribute::Armor);
        instance.add_modifier(modifier("a", 4.0, AttributeModifierOperation::AddValue));
        instance.add_modifier(modifier("b", 0.5, AttributeModifierOperation::AddMultipliedBase));
        instance.add_modifier(modifier("c", 0.5, AttributeModifierOperation::AddMultipliedTotal));
        // (0 + 4) + 4 * 0.5 = 6, then * 1.5 = 9
        assert!((instance.value() - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_same_id_replaces() {
        let mut instance = AttributeInstance::new(Attribute::Armor);
        instance.add_modifier(modifier("chest", 6.0, AttributeModifierOperation::AddValue));
        instance.add_modifier(modifier("chest", 8.0, AttributeModifierOperation::AddValue));
        assert!((instance.value() - 8.0).abs() < 1e-9);
        instance.remove_modifier(&Identifier::vanilla_static("chest"));
        assert!(instance.value().abs() < 1e-9);
    }

    #[test]
    fn test_value_is_clamped() {
        let mut map = AttributeMap::default();
        map.set_base(Attribute::Armor, 100.0);
        assert!((map.get_value(Attribute::Armor) - 30.0).abs() < 1e-9);
        assert!((map.get_value(Attribute::ArmorToughness)).abs() < 1e-9);
    }
}
