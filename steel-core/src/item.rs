//! Item stacks as far as drops and inventories need them.

use steel_utils::Identifier;

/// A stack of items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemStack {
    /// The item's key, `minecraft:air` for an empty stack.
    pub item: Identifier,
    /// Number of items in the stack.
    pub count: i32,
}

impl ItemStack {
    /// The key used by empty stacks.
    pub const AIR: Identifier = Identifier::vanilla_static("air");

    /// Creates a stack of `count` items.
    #[must_use]
    pub const fn new(item: Identifier, count: i32) -> Self {
        Self { item, count }
    }

    /// An empty stack.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Self::AIR, 0)
    }

    /// Whether the stack holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count <= 0 || self.item == Self::AIR
    }

    /// Whether this stack is of the given item.
    #[must_use]
    pub fn is(&self, item: &Identifier) -> bool {
        !self.is_empty() && &self.item == item
    }
}

impl Default for ItemStack {
    fn default() -> Self {
        Self::empty()
    }
}

/// Item keys referenced by gameplay code.
pub mod items {
    use steel_utils::Identifier;

    /// Saves its holder from a lethal hit.
    pub const TOTEM_OF_UNDYING: Identifier = Identifier::vanilla_static("totem_of_undying");
    /// Dropped by slimes.
    pub const SLIME_BALL: Identifier = Identifier::vanilla_static("slime_ball");
    /// Dropped by magma cubes.
    pub const MAGMA_CREAM: Identifier = Identifier::vanilla_static("magma_cream");
    /// Dropped by zombies.
    pub const ROTTEN_FLESH: Identifier = Identifier::vanilla_static("rotten_flesh");
    /// Dropped by cows.
    pub const LEATHER: Identifier = Identifier::vanilla_static("leather");
    /// Dropped by cows.
    pub const BEEF: Identifier = Identifier::vanilla_static("beef");
    /// Dropped by blazes.
    pub const BLAZE_ROD: Identifier = Identifier::vanilla_static("blaze_rod");
    /// A weapon.
    pub const IRON_SWORD: Identifier = Identifier::vanilla_static("iron_sword");
}
