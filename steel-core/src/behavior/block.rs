//! The block behaviour trait and its registry.

use rustc_hash::FxHashMap;
use steel_utils::Identifier;

use crate::behavior::blocks::magma_block::MagmaBlock;
use crate::combat::CombatContext;
use crate::entity::LivingEntity;

/// Behaviour attached to a block type.
pub trait BlockBehaviour: Send + Sync {
    /// Called each tick a living entity stands on top of the block.
    fn step_on(&self, _entity: &dyn LivingEntity, _ctx: &CombatContext<'_>) {}
}

/// Block behaviours keyed by block id.
#[derive(Default)]
pub struct BlockBehaviors {
    behaviors: FxHashMap<Identifier, Box<dyn BlockBehaviour>>,
}

impl BlockBehaviors {
    /// Behaviours for the vanilla blocks this crate implements.
    #[must_use]
    pub fn vanilla() -> Self {
        let mut behaviors = Self::default();
        behaviors.register(MagmaBlock::KEY, MagmaBlock);
        behaviors
    }

    /// Registers `behavior` for `block`.
    pub fn register(&mut self, block: Identifier, behavior: impl BlockBehaviour + 'static) {
        self.behaviors.insert(block, Box::new(behavior));
    }

    /// The behaviour for `block`, if it has one.
    #[must_use]
    pub fn get(&self, block: &Identifier) -> Option<&dyn BlockBehaviour> {
        self.behaviors.get(block).map(Box::as_ref)
    }

    /// Runs `block`'s step behaviour for `entity`. Blocks without one do nothing.
    pub fn step_on(&self, block: &Identifier, entity: &dyn LivingEntity, ctx: &CombatContext<'_>) {
        if let Some(behavior) = self.get(block) {
            behavior.step_on(entity, ctx);
        }
    }
}
