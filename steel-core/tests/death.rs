//! Health, death, loot, experience, species hooks and the tick loop.

mod common;

use std::sync::Arc;
use std::sync::atomic::Ordering;

use common::{advance, approx, dropped_items, harness, harness_with, orbs, reset_window};
use steel_core::behavior::blocks::magma_block::MagmaBlock;
use steel_core::combat::health::{HealthChange, set_health};
use steel_core::combat::hurt::HurtOutcome;
use steel_core::combat::loot::{ExperienceReward, LootEntry, LootTable};
use steel_core::entity::damage::{DamageCause, DamageRequest};
use steel_core::entity::effects::MobEffect;
use steel_core::entity::mob::{Hand, Mob};
use steel_core::entity::{Entity, LivingEntity};
use steel_core::item::{ItemStack, items};
use steel_core::player::entity_state::Shoulder;
use steel_core::player::inventory::OFFHAND_SLOT;
use steel_core::stats::Stat;
use steel_core::world::{WorldBroadcast, WorldService};
use steel_registry::GameRuleValue;
use steel_registry::vanilla_entity_types::{COW, MAGMA_CUBE, SLIME, WOLF, ZOMBIE};
use steel_registry::vanilla_game_rules::{DO_MOB_LOOT, KEEP_INVENTORY};
use steel_utils::entity_events::EntityStatus;
use steel_utils::math::Vector3;

fn void(amount: f32) -> DamageRequest {
    DamageRequest::environment(DamageCause::Void, amount)
}

fn offspring_of(h: &common::Harness, parent: &Mob) -> Vec<Arc<dyn Entity>> {
    h.server.world.entities_where(|entity| {
        entity.id() != parent.id() && entity.entity_type() == parent.entity_type()
    })
}

#[test]
fn test_set_health_clamps() {
    let h = harness();
    let ctx = h.server.combat_context();
    let cow = h.server.spawn_mob(COW, Vector3::ZERO);

    assert_eq!(set_health(&*cow, 15.0, &ctx), HealthChange::Alive);
    assert!(approx(cow.living_base().get_health(), 10.0));

    assert_eq!(set_health(&*cow, 4.25, &ctx), HealthChange::Alive);
    assert!(approx(cow.living_base().get_health(), 4.25));

    assert_eq!(set_health(&*cow, -5.0, &ctx), HealthChange::Died);
    assert!(approx(cow.living_base().get_health(), 0.0));
    assert!(cow.living_base().is_dead());
}

#[test]
fn test_death_handling_runs_once() {
    let h = harness();
    let ctx = h.server.combat_context();
    let zombie = h.server.spawn_mob(ZOMBIE, Vector3::ZERO);

    assert_eq!(set_health(&*zombie, 0.0, &ctx), HealthChange::Died);
    assert_eq!(set_health(&*zombie, 0.0, &ctx), HealthChange::AlreadyDead);
    assert_eq!(
        h.server.hurt(&*zombie, &void(5.0)),
        HurtOutcome::Blocked
    );

    assert_eq!(h.events.death_count(), 1);
    let deaths = h
        .server
        .world
        .take_broadcasts()
        .into_iter()
        .filter(|broadcast| {
            *broadcast
                == WorldBroadcast::EntityEvent {
                    entity_id: zombie.id(),
                    status: EntityStatus::Death,
                }
        })
        .count();
    assert_eq!(deaths, 1);
}

#[test]
fn test_revived_entity_dies_again() {
    let h = harness();
    let ctx = h.server.combat_context();
    let player = h.player("Steve");
    let zombie = h.server.spawn_mob(ZOMBIE, Vector3::ZERO);

    assert_eq!(set_health(&*zombie, 0.0, &ctx), HealthChange::Died);
    assert_eq!(set_health(&*zombie, 10.0, &ctx), HealthChange::Alive);
    assert!(!zombie.living_base().is_dead());
    assert_eq!(zombie.living_base().get_death_time(), 0);

    let outcome = h.server.hurt(&*zombie, &DamageRequest::melee(player.clone(), 50.0));

    assert_eq!(
        outcome,
        HurtOutcome::Applied {
            damage: 50.0,
            killed: true
        }
    );
    assert!(zombie.living_base().is_dead());
    assert_eq!(h.events.death_count(), 2);
    assert_eq!(
        h.server
            .stats
            .get(player.uuid(), &Stat::KillEntity(ZOMBIE.key.clone())),
        1
    );
    assert!(!orbs(&h.server).is_empty());
}

#[test]
fn test_mob_loot_off_drops_nothing() {
    let h = harness();
    h.server
        .world
        .set_game_rule(DO_MOB_LOOT, GameRuleValue::Bool(false));
    let player = h.player("Steve");
    let cow = h.server.spawn_mob(COW, Vector3::ZERO);

    h.server.hurt(&*cow, &DamageRequest::melee(player.clone(), 50.0));

    assert!(cow.living_base().is_dead());
    assert!(dropped_items(&h.server).is_empty());
    assert!(orbs(&h.server).is_empty());
    let events = h.events.death_events.lock();
    assert!(events[0].drops.is_empty());
    assert_eq!(events[0].dropped_exp, 0);
}

#[test]
fn test_player_kill_drops_loot_and_experience() {
    let h = harness();
    let player = h.player("Steve");
    let cow = h.server.spawn_mob(COW, Vector3::new(10.3, 64.0, -3.7));

    h.server.hurt(&*cow, &DamageRequest::melee(player.clone(), 50.0));

    let items = dropped_items(&h.server);
    assert!(items.iter().any(|stack| stack.is(&items::BEEF)));
    assert!(items.iter().all(|stack| stack.count > 0));

    let orbs = orbs(&h.server);
    let total: i32 = orbs.iter().map(|orb| orb.value).sum();
    assert!((1..=3).contains(&total));
    assert_eq!(h.events.death_events.lock()[0].dropped_exp, total);
    for orb in &orbs {
        assert!((10.0..11.0).contains(&orb.position.x));
        assert!((-4.0..-3.0).contains(&orb.position.z));
        assert!((orb.position.y - 64.0).abs() < f64::EPSILON);
        assert_eq!(orb.source, Some(cow.uuid()));
    }
}

#[test]
fn test_experience_requires_recent_player_hit() {
    for (gap, expect_orbs) in [(50, true), (100, true), (101, false), (150, false)] {
        let h = harness();
        let player = h.player("Steve");
        let zombie = h.server.spawn_mob(ZOMBIE, Vector3::ZERO);

        advance(&*zombie, 100);
        h.server.hurt(&*zombie, &DamageRequest::melee(player.clone(), 1.0));
        advance(&*zombie, gap);
        h.server.hurt(&*zombie, &void(100.0));

        assert!(zombie.living_base().is_dead());
        let orbs = orbs(&h.server);
        assert_eq!(!orbs.is_empty(), expect_orbs, "gap {gap}");
        if expect_orbs {
            // Zombies give 5 experience: one orb of 3 and two of 1.
            let mut values: Vec<i32> = orbs.iter().map(|orb| orb.value).collect();
            values.sort_unstable();
            assert_eq!(values, [1, 1, 3]);
            // The kill came from the void, but the last damager when the orbs
            // spawned was still the player.
            assert!(orbs.iter().all(|orb| orb.trigger == Some(player.uuid())));
        }
    }
}

#[test]
fn test_unhurt_mob_drops_items_but_no_experience() {
    let h = harness();
    let cow = h.server.spawn_mob(COW, Vector3::ZERO);

    h.server.hurt(&*cow, &void(50.0));

    assert!(orbs(&h.server).is_empty());
    assert!(dropped_items(&h.server).iter().any(|stack| stack.is(&items::BEEF)));
}

#[test]
fn test_cancelled_death_event_keeps_items_but_not_orbs() {
    let h = harness();
    h.events.cancel_death.store(true, Ordering::Relaxed);
    let player = h.player("Steve");
    let cow = h.server.spawn_mob(COW, Vector3::ZERO);

    h.server.hurt(&*cow, &DamageRequest::melee(player.clone(), 50.0));

    assert!(dropped_items(&h.server).is_empty());
    assert!(!orbs(&h.server).is_empty());
}

#[test]
fn test_broken_loot_table_is_isolated() {
    let h = harness_with(|server| {
        server.loot_tables.insert(
            ZOMBIE.key.clone(),
            LootTable {
                entries: vec![LootEntry::new(items::ROTTEN_FLESH, 3, 1)],
                experience: ExperienceReward::Range(5, 5),
            },
        );
    });
    let player = h.player("Steve");
    let zombie = h.server.spawn_mob(ZOMBIE, Vector3::ZERO);

    let outcome = h.server.hurt(&*zombie, &DamageRequest::melee(player.clone(), 50.0));

    assert_eq!(
        outcome,
        HurtOutcome::Applied {
            damage: 50.0,
            killed: true
        }
    );
    assert_eq!(h.events.death_count(), 1);
    assert!(dropped_items(&h.server).is_empty());
    assert!(orbs(&h.server).is_empty());
}

#[test]
fn test_large_slime_splits() {
    let h = harness();
    let slime = h.server.spawn_mob(SLIME, Vector3::new(4.0, 70.0, 4.0));
    slime.set_size(4);
    slime.entity_base().set_custom_name(Some("Gloop".to_string()));

    h.server.hurt(&*slime, &void(100.0));

    let offspring = offspring_of(&h, &slime);
    assert!((2..=4).contains(&offspring.len()), "{} offspring", offspring.len());
    assert_eq!(
        usize::try_from(h.events.split_events.lock()[0].count).ok(),
        Some(offspring.len())
    );
    for child in &offspring {
        let mob = child
            .as_any()
            .downcast_ref::<Mob>()
            .expect("offspring are mobs");
        assert_eq!(mob.size(), 2);
        assert!(approx(mob.living_base().get_health(), 4.0));
        assert_eq!(mob.custom_name().as_deref(), Some("Gloop"));
        let offset = mob.position() - slime.position();
        assert!((0.5..3.0).contains(&offset.x));
        assert!((0.5..3.0).contains(&offset.z));
        assert!(offset.y.abs() < f64::EPSILON);
    }
}

#[test]
fn test_magma_cube_splits_into_magma_cubes() {
    let h = harness();
    h.events.split_count.store(Some(3));
    let cube = h.server.spawn_mob(MAGMA_CUBE, Vector3::ZERO);
    cube.set_size(2);

    h.server.hurt(&*cube, &void(100.0));

    let offspring = offspring_of(&h, &cube);
    assert_eq!(offspring.len(), 3);
    assert!(offspring.iter().all(|child| child.custom_name().is_none()));
}

#[test]
fn test_cancelled_split_spawns_nothing() {
    let h = harness();
    h.events.cancel_split.store(true, Ordering::Relaxed);
    let slime = h.server.spawn_mob(SLIME, Vector3::ZERO);
    slime.set_size(4);

    h.server.hurt(&*slime, &void(100.0));

    assert!(offspring_of(&h, &slime).is_empty());
    assert_eq!(h.events.split_events.lock().len(), 1);
}

#[test]
fn test_zero_split_count_spawns_nothing() {
    let h = harness();
    h.events.split_count.store(Some(0));
    let slime = h.server.spawn_mob(SLIME, Vector3::ZERO);
    slime.set_size(4);

    h.server.hurt(&*slime, &void(100.0));

    assert!(offspring_of(&h, &slime).is_empty());
}

#[test]
fn test_smallest_slime_does_not_split() {
    let h = harness();
    let slime = h.server.spawn_mob(SLIME, Vector3::ZERO);

    h.server.hurt(&*slime, &void(100.0));

    assert!(offspring_of(&h, &slime).is_empty());
    assert!(h.events.split_events.lock().is_empty());
}

#[test]
fn test_player_death_drops_inventory_and_broadcasts() {
    let h = harness();
    let player = h.player("Steve");
    player.set_display_name(Some("Sir Steve".to_string()));
    {
        let mut inventory = player.inventory.lock();
        inventory.set_item(0, ItemStack::new(items::IRON_SWORD, 1));
        inventory.set_item(5, ItemStack::new(items::BEEF, 3));
    }
    player
        .entity_state
        .set_shoulder_entity(Shoulder::Left, Some(WOLF));
    // Cancelling a player death changes nothing.
    h.events.cancel_player_death.store(true, Ordering::Relaxed);

    h.server.hurt(&*player, &void(100.0));

    assert!(player.living_base().is_dead());
    assert!(player.inventory.lock().is_empty());
    assert_eq!(dropped_items(&h.server).len(), 2);
    assert!(
        h.server
            .world
            .take_broadcasts()
            .contains(&WorldBroadcast::Message("Sir Steve died.".to_string()))
    );
    assert!(player.entity_state.shoulder_entity(Shoulder::Left).is_none());
    assert_eq!(h.server.stats.get(player.uuid(), &Stat::Deaths), 1);
    // Players never go through the mob loot path.
    assert_eq!(h.events.death_count(), 0);
}

#[test]
fn test_keep_inventory_keeps_items() {
    let h = harness();
    h.server
        .world
        .set_game_rule(KEEP_INVENTORY, GameRuleValue::Bool(true));
    let player = h.player("Steve");
    player
        .inventory
        .lock()
        .set_item(0, ItemStack::new(items::IRON_SWORD, 1));
    *h.events.death_message.lock() = Some("Steve fell out of the world".to_string());

    h.server.hurt(&*player, &void(100.0));

    assert!(dropped_items(&h.server).is_empty());
    assert!(!player.inventory.lock().is_empty());
    assert!(h.events.player_death_events.lock()[0].drops.is_empty());
    assert!(h.server.world.take_broadcasts().contains(&WorldBroadcast::Message(
        "Steve fell out of the world".to_string()
    )));
}

#[test]
fn test_totem_saves_player() {
    let h = harness();
    let player = h.player("Steve");
    player
        .inventory
        .lock()
        .set_item(OFFHAND_SLOT, ItemStack::new(items::TOTEM_OF_UNDYING, 1));

    let outcome = h.server.hurt(&*player, &void(100.0));

    assert_eq!(
        outcome,
        HurtOutcome::Applied {
            damage: 100.0,
            killed: false
        }
    );
    let living = player.living_base();
    assert!(!living.is_dead());
    assert!(approx(living.get_health(), 1.0));
    assert!(living.has_effect(MobEffect::Regeneration));
    assert!(living.has_effect(MobEffect::Absorption));
    assert!(living.has_effect(MobEffect::FireResistance));
    assert!(!player.holds_totem());
    assert!(h.server.world.take_broadcasts().contains(&WorldBroadcast::EntityEvent {
        entity_id: player.id(),
        status: EntityStatus::TotemOfUndying
    }));
    assert!(h.events.player_death_events.lock().is_empty());
}

#[test]
fn test_totem_saves_mob() {
    let h = harness();
    let zombie = h.server.spawn_mob(ZOMBIE, Vector3::ZERO);
    zombie.set_item_in_hand(Hand::Main, ItemStack::new(items::TOTEM_OF_UNDYING, 1));

    h.server.hurt(&*zombie, &void(100.0));

    assert!(!zombie.living_base().is_dead());
    assert!(approx(zombie.living_base().get_health(), 1.0));
    assert!(zombie.item_in_hand(Hand::Main).is_empty());
    assert_eq!(h.events.resurrect_events.lock().len(), 1);
    assert_eq!(h.events.death_count(), 0);
}

#[test]
fn test_cancelled_resurrect_lets_player_die() {
    let h = harness();
    h.events.cancel_resurrect.store(true, Ordering::Relaxed);
    let player = h.player("Steve");
    player
        .inventory
        .lock()
        .set_item(0, ItemStack::new(items::TOTEM_OF_UNDYING, 1));

    h.server.hurt(&*player, &void(100.0));

    assert!(player.living_base().is_dead());
    assert_eq!(h.events.resurrect_events.lock().len(), 1);
    assert_eq!(h.events.player_death_events.lock().len(), 1);
    // The totem was never used, so it drops with the rest of the inventory.
    assert!(
        dropped_items(&h.server)
            .iter()
            .any(|stack| stack.is(&items::TOTEM_OF_UNDYING))
    );
}

#[test]
fn test_magma_block_burns_unless_sneaking() {
    let h = harness();
    let zombie = h.server.spawn_mob(ZOMBIE, Vector3::ZERO);
    let cube = h.server.spawn_mob(MAGMA_CUBE, Vector3::ZERO);
    cube.set_size(2);
    let player = h.player("Steve");

    h.server.step_on(&MagmaBlock::KEY, &*zombie);
    h.server.step_on(&MagmaBlock::KEY, &*cube);
    player.entity_state.set_crouching(true);
    h.server.step_on(&MagmaBlock::KEY, &*player);

    assert!(approx(zombie.living_base().get_health(), 19.0));
    assert!(approx(cube.living_base().get_health(), 4.0));
    assert!(approx(player.living_base().get_health(), 20.0));
    assert_eq!(h.events.damage_events.lock()[0].cause, DamageCause::HotFloor);

    player.entity_state.set_crouching(false);
    reset_window(&*player);
    h.server.step_on(&MagmaBlock::KEY, &*player);
    assert!(approx(player.living_base().get_health(), 19.0));
}

#[test]
fn test_dead_entities_are_removed_after_animation() {
    let h = harness();
    let zombie = h.server.spawn_mob(ZOMBIE, Vector3::ZERO);
    h.server.hurt(&*zombie, &void(100.0));

    for _ in 0..19 {
        h.server.tick();
    }
    assert!(h.server.world.get_entity(zombie.id()).is_some());
    h.server.tick();
    assert!(h.server.world.get_entity(zombie.id()).is_none());
    assert_eq!(h.server.tick_count(), 20);
}

#[test]
fn test_window_decays_with_ticks() {
    let h = harness();
    let zombie = h.server.spawn_mob(ZOMBIE, Vector3::ZERO);
    h.server
        .hurt(&*zombie, &DamageRequest::environment(DamageCause::Contact, 1.0));

    for _ in 0..20 {
        h.server.tick();
    }

    assert_eq!(zombie.living_base().get_invulnerable_time(), 0);
    assert!(
        h.server
            .hurt(&*zombie, &DamageRequest::environment(DamageCause::Contact, 1.0))
            .is_applied()
    );
}

#[tokio::test]
async fn test_run_stops_on_cancel() {
    let h = harness();
    let token = h.server.cancel_token.clone();

    h.server
        .run(|_, tick| {
            if tick == 3 {
                token.cancel();
            }
        })
        .await;

    assert_eq!(h.server.tick_count(), 3);
}
