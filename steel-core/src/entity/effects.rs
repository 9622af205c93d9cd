//! Mob effects (potion effects) with tick-down durations.

use rustc_hash::FxHashMap;

/// Effects the damage pipeline cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MobEffect {
    /// Immunity to fire, lava, hot floors and fireballs.
    FireResistance,
    /// Heals over time.
    Regeneration,
    /// Extra health that absorbs damage.
    Absorption,
}

/// An applied effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MobEffectInstance {
    /// The effect.
    pub effect: MobEffect,
    /// Remaining ticks.
    pub duration: i32,
    /// Level minus one.
    pub amplifier: u8,
}

impl MobEffectInstance {
    /// Creates an effect instance.
    #[must_use]
    pub const fn new(effect: MobEffect, duration: i32, amplifier: u8) -> Self {
        Self {
            effect,
            duration,
            amplifier,
        }
    }
}

/// The active effects of one entity.
#[derive(Clone, Debug, Default)]
pub struct MobEffects {
    active: FxHashMap<MobEffect, MobEffectInstance>,
}

impl MobEffects {
    /// Applies an effect. A weaker or shorter instance never replaces a
    /// stronger one.
    pub fn add(&mut self, instance: MobEffectInstance) {
        match self.active.get(&instance.effect) {
            Some(current)
                if current.amplifier > instance.amplifier
                    || (current.amplifier == instance.amplifier
                        && current.duration >= instance.duration) => {}
            _ => {
                self.active.insert(instance.effect, instance);
            }
        }
    }

    /// Whether `effect` is active.
    #[must_use]
    pub fn has(&self, effect: MobEffect) -> bool {
        self.active.contains_key(&effect)
    }

    /// The active instance of `effect`.
    #[must_use]
    pub fn get(&self, effect: MobEffect) -> Option<MobEffectInstance> {
        self.active.get(&effect).copied()
    }

    /// Removes every effect.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Counts every duration down by one tick and drops expired effects.
    pub fn tick(&mut self) {
        self.active.retain(|_, instance| {
            instance.duration -= 1;
            instance.duration > 0
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_expires() {
        let mut effects = MobEffects::default();
        effects.add(MobEffectInstance::new(MobEffect::FireResistance, 2, 0));
        effects.tick();
        assert!(effects.has(MobEffect::FireResistance));
        effects.tick();
        assert!(!effects.has(MobEffect::FireResistance));
    }

    #[test]
    fn test_weaker_effect_does_not_replace() {
        let mut effects = MobEffects::default();
        effects.add(MobEffectInstance::new(MobEffect::Regeneration, 100, 1));
        effects.add(MobEffectInstance::new(MobEffect::Regeneration, 900, 0));
        assert_eq!(effects.get(MobEffect::Regeneration).map(|e| e.amplifier), Some(1));
        effects.add(MobEffectInstance::new(MobEffect::Regeneration, 900, 1));
        assert_eq!(effects.get(MobEffect::Regeneration).map(|e| e.duration), Some(900));
    }
}
