#![allow(missing_docs)]

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use steel_core::combat::armor::normalize;
use steel_core::combat::health::set_health;
use steel_core::config::SteelConfig;
use steel_core::entity::LivingEntity;
use steel_core::entity::damage::{DamageCause, DamageRequest};
use steel_core::event::NoListeners;
use steel_core::player::GameProfile;
use steel_core::server::Server;
use steel_registry::vanilla_entity_types::{COW, SLIME, ZOMBIE};
use steel_utils::math::Vector3;
use tokio_util::sync::CancellationToken;

fn server() -> Server {
    let config = SteelConfig {
        seed: "bench".to_string(),
        ..SteelConfig::default()
    };
    Server::new(config, Arc::new(NoListeners), CancellationToken::new())
}

// ── Armor ───────────────────────────────────────────────────────────────────

fn bench_armor_normalize(c: &mut Criterion) {
    c.bench_function("armor_normalize", |b| {
        b.iter(|| black_box(normalize(black_box(10.0), black_box(12.0), black_box(2.0))));
    });
}

// ── Hurt ────────────────────────────────────────────────────────────────────

fn bench_melee_hit(c: &mut Criterion) {
    let server = server();
    let player = server.spawn_player(GameProfile::offline("Bench"), Vector3::ZERO);
    let zombie = server.spawn_mob(ZOMBIE, Vector3::new(1.0, 0.0, 0.0));

    c.bench_function("melee_hit_survivable", |b| {
        b.iter(|| {
            zombie.living_base().set_invulnerable_time(0);
            set_health(&*zombie, 20.0, &server.combat_context());
            black_box(server.hurt(&*zombie, &DamageRequest::melee(player.clone(), 1.0)))
        });
    });
}

fn bench_gated_hit(c: &mut Criterion) {
    let server = server();
    let cow = server.spawn_mob(COW, Vector3::ZERO);
    cow.living_base().set_invulnerable_time(i32::MAX);
    let request = DamageRequest::environment(DamageCause::Contact, 1.0);

    c.bench_function("gated_hit", |b| {
        b.iter(|| black_box(server.hurt(&*cow, black_box(&request))));
    });
}

// ── Death ───────────────────────────────────────────────────────────────────

fn bench_lethal_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("lethal_hit");
    for size in [1, 4] {
        group.bench_with_input(BenchmarkId::new("slime", size), &size, |b, &size| {
            b.iter_with_setup(
                || {
                    let server = server();
                    let player = server.spawn_player(GameProfile::offline("Bench"), Vector3::ZERO);
                    let slime = server.spawn_mob(SLIME, Vector3::ZERO);
                    slime.set_size(size);
                    (server, player, slime)
                },
                |(server, player, slime)| {
                    black_box(server.hurt(&*slime, &DamageRequest::melee(player, 100.0)))
                },
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_armor_normalize,
    bench_melee_hit,
    bench_gated_hit,
    bench_lethal_hit,
);
criterion_main!(benches);
