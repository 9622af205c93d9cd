//! A scripted fight that walks the combat pipeline through its main paths:
//! melee kills, a tamed wolf, player-lit TNT, a magma floor, a slime split,
//! a totem save and finally a player death.

use std::sync::Arc;

use steel_core::behavior::blocks::magma_block::MagmaBlock;
use steel_core::entity::damage::{DamageCause, DamageRequest};
use steel_core::entity::mob::Mob;
use steel_core::entity::primed_tnt::PrimedTnt;
use steel_core::entity::{Entity, LivingEntity};
use steel_core::item::{ItemStack, items};
use steel_core::player::inventory::OFFHAND_SLOT;
use steel_core::player::{GameProfile, Player};
use steel_core::scoreboard::criteria;
use steel_core::server::Server;
use steel_core::world::{WorldBroadcast, WorldService};
use steel_registry::vanilla_entity_types::{COW, MAGMA_CUBE, SLIME, WOLF, ZOMBIE};
use steel_utils::math::Vector3;

/// Ticks between scripted attacks, longer than the no-damage window.
const ATTACK_INTERVAL: u64 = 25;

/// Actors spawned on the first tick.
struct Cast {
    steve: Arc<Player>,
    zombie: Arc<Mob>,
    wolf: Arc<Mob>,
    cow: Arc<Mob>,
    slime: Arc<Mob>,
    magma_cube: Arc<Mob>,
}

/// Drives the scripted fight, one step per server tick.
#[derive(Default)]
pub struct Arena {
    cast: Option<Cast>,
}

impl Arena {
    /// Runs whatever the script schedules for `tick`.
    pub fn on_tick(&mut self, server: &Server, tick: u64) {
        let Some(cast) = &self.cast else {
            self.cast = Some(setup(server));
            return;
        };

        match tick {
            t if t % ATTACK_INTERVAL == 0 && t <= 100 => {
                server.hurt(&*cast.zombie, &DamageRequest::melee(cast.steve.clone(), 6.0));
                server.hurt(&*cast.cow, &DamageRequest::melee(cast.wolf.clone(), 4.0));
            }
            120 => {
                let tnt: Arc<dyn Entity> = Arc::new(PrimedTnt::new(
                    cast.slime.position(),
                    Some(&cast.steve),
                ));
                server.world.add_entity(tnt.clone());
                server.hurt(
                    &*cast.slime,
                    &DamageRequest::by_entity(tnt, DamageCause::EntityExplosion, 20.0),
                );
            }
            140..=180 => {
                server.step_on(&MagmaBlock::KEY, &*cast.magma_cube);
                server.step_on(&MagmaBlock::KEY, &*cast.steve);
            }
            200 => {
                cast.steve
                    .inventory
                    .lock()
                    .set_item(OFFHAND_SLOT, ItemStack::new(items::TOTEM_OF_UNDYING, 1));
                server.hurt(&*cast.steve, &DamageRequest::environment(DamageCause::Void, 50.0));
            }
            260 => {
                server.hurt(&*cast.steve, &DamageRequest::environment(DamageCause::Void, 50.0));
            }
            _ => {}
        }

        for broadcast in server.world.take_broadcasts() {
            if let WorldBroadcast::Message(message) = broadcast {
                log::info!("[chat] {message}");
            }
        }
        if tick % 100 == 0 {
            log::info!(
                "Tick {tick}: {} entities, Steve at {:.1} hp",
                server.world.entity_count(),
                cast.steve.living_base().get_health()
            );
        }
    }
}

fn setup(server: &Server) -> Cast {
    if !server.scoreboard.add_objective("hp", criteria::HEALTH) {
        log::warn!("Objective hp already exists");
    }

    let steve = server.spawn_player(GameProfile::offline("Steve"), Vector3::new(0.5, 64.0, 0.5));
    steve
        .inventory
        .lock()
        .set_item(0, ItemStack::new(items::IRON_SWORD, 1));

    let zombie = server.spawn_mob(ZOMBIE, Vector3::new(2.5, 64.0, 0.5));
    let wolf = server.spawn_mob(WOLF, Vector3::new(-2.5, 64.0, 0.5));
    wolf.tame(&steve);
    let cow = server.spawn_mob(COW, Vector3::new(-4.5, 64.0, 2.5));

    let slime = server.spawn_mob(SLIME, Vector3::new(8.5, 64.0, 8.5));
    slime.set_size(4);
    slime.entity_base().set_custom_name(Some("Gloop".to_string()));
    let magma_cube = server.spawn_mob(MAGMA_CUBE, Vector3::new(-8.5, 64.0, -8.5));
    magma_cube.set_size(2);

    log::info!("Arena ready with {} entities", server.world.entity_count());
    Cast {
        steve,
        zombie,
        wolf,
        cow,
        slime,
        magma_cube,
    }
}
