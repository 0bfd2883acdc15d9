//! Tests for the simulation engine: frame pipeline, weapons, collisions,
//! progression, and run outcomes.

use glam::DVec2;

use nightswarm_core::commands::PlayerCommand;
use nightswarm_core::components::{Enemy, Health, Pickup, Player, Projectile, WeaponLoadout};
use nightswarm_core::constants::*;
use nightswarm_core::enums::{RunPhase, UpgradeId};
use nightswarm_core::events::GameEvent;
use nightswarm_core::types::Position;

use crate::engine::{SimConfig, SimEngine};
use crate::progression::{self, ProgressState};
use crate::world_setup;

/// Engine with spawning disabled, so tests control every enemy.
fn quiet_engine() -> SimEngine {
    SimEngine::new(SimConfig {
        seed: 1,
        spawn_probability: 0.0,
    })
}

fn enemy_count(engine: &SimEngine) -> usize {
    engine.world().query::<&Enemy>().iter().count()
}

fn projectile_count(engine: &SimEngine) -> usize {
    engine.world().query::<&Projectile>().iter().count()
}

fn pickup_count(engine: &SimEngine) -> usize {
    engine.world().query::<&Pickup>().iter().count()
}

fn enemy_hp(engine: &SimEngine) -> Option<f64> {
    engine
        .world()
        .query::<(&Enemy, &Health)>()
        .iter()
        .next()
        .map(|(_, (_, h))| h.hp)
}

/// Set the seeker timer just past its cooldown so the next frame fires.
fn force_seeker_ready(engine: &mut SimEngine) {
    for (_entity, (_player, loadout)) in engine
        .world_mut()
        .query_mut::<(&Player, &mut WeaponLoadout)>()
    {
        loadout.seeker.since_fired_ms = loadout.seeker.cooldown_ms + 1.0;
    }
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = SimEngine::new(SimConfig {
        seed: 12345,
        ..Default::default()
    });
    let mut engine_b = SimEngine::new(SimConfig {
        seed: 12345,
        ..Default::default()
    });

    engine_a.init_run();
    engine_b.init_run();

    let intent = Some(DVec2::new(1.0, 0.0));
    for _ in 0..300 {
        let snap_a = engine_a.advance(NOMINAL_FRAME_MS, intent);
        let snap_b = engine_b.advance(NOMINAL_FRAME_MS, intent);

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = SimEngine::new(SimConfig {
        seed: 111,
        ..Default::default()
    });
    let mut engine_b = SimEngine::new(SimConfig {
        seed: 222,
        ..Default::default()
    });

    engine_a.init_run();
    engine_b.init_run();

    // Spawn rolls with different seeds diverge quickly at p = 0.02/frame.
    let mut diverged = false;
    for _ in 0..1000 {
        let snap_a = engine_a.advance(NOMINAL_FRAME_MS, None);
        let snap_b = engine_b.advance(NOMINAL_FRAME_MS, None);
        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce divergent output");
}

// ---- Frame contract ----

#[test]
fn test_zero_dt_is_noop() {
    let mut engine = quiet_engine();
    engine.init_run();
    // Enemy parked on the orb ring: a real frame would damage it.
    engine.spawn_enemy_at(Position::new(1050.0, 1000.0), 0.0);

    // Flush the start-of-run event so the compared snapshots are bare.
    engine.advance(0.0, None);

    let snap_a = engine.advance(0.0, Some(DVec2::new(1.0, 0.0)));
    let snap_b = engine.advance(0.0, Some(DVec2::new(1.0, 0.0)));

    let json_a = serde_json::to_string(&snap_a).unwrap();
    let json_b = serde_json::to_string(&snap_b).unwrap();
    assert_eq!(json_a, json_b, "Zero-dt frames must not change anything");
    assert_eq!(snap_a.frame, 0);
    assert_eq!(snap_a.elapsed_ms, 0.0);
    assert_eq!(enemy_hp(&engine), Some(ENEMY_HP));
    assert_eq!(snap_a.player.position, Position::new(1000.0, 1000.0));
}

#[test]
fn test_player_stays_in_arena() {
    let mut engine = quiet_engine();
    engine.init_run();

    // Push into the top-left corner far longer than needed to reach it.
    for _ in 0..600 {
        let snap = engine.advance(NOMINAL_FRAME_MS, Some(DVec2::new(-1.0, -1.0)));
        let pos = snap.player.position;
        assert!(pos.0.x >= PLAYER_RADIUS && pos.0.x <= ARENA_WIDTH - PLAYER_RADIUS);
        assert!(pos.0.y >= PLAYER_RADIUS && pos.0.y <= ARENA_HEIGHT - PLAYER_RADIUS);
    }

    let snap = engine.advance(NOMINAL_FRAME_MS, Some(DVec2::new(-1.0, -1.0)));
    assert_eq!(
        snap.player.position,
        Position::new(PLAYER_RADIUS, PLAYER_RADIUS)
    );
}

#[test]
fn test_levelup_pause_halts_simulation() {
    let mut engine = quiet_engine();
    engine.init_run();
    engine.progress_mut().exp = 40;
    world_setup::spawn_pickup(engine.world_mut(), Position::new(1050.0, 1000.0));

    let snap = engine.advance(NOMINAL_FRAME_MS, None);
    assert_eq!(snap.phase, RunPhase::LevelUp);
    let frame = snap.frame;

    // Paused: further advances change nothing.
    let snap = engine.advance(NOMINAL_FRAME_MS, Some(DVec2::new(1.0, 0.0)));
    assert_eq!(snap.frame, frame);
    assert_eq!(snap.player.position, Position::new(1000.0, 1000.0));

    // Choosing an upgrade resumes.
    engine.apply_upgrade(UpgradeId::Heal);
    let snap = engine.advance(NOMINAL_FRAME_MS, None);
    assert_eq!(snap.phase, RunPhase::Playing);
    assert_eq!(snap.frame, frame + 1);
    assert!(snap.upgrade_choices.is_empty());
}

// ---- Spawner ----

#[test]
fn test_spawner_places_enemies_outside_arena() {
    let mut engine = SimEngine::new(SimConfig {
        seed: 9,
        spawn_probability: 1.0,
    });
    engine.init_run();

    for _ in 0..50 {
        engine.advance(NOMINAL_FRAME_MS, None);
    }
    assert!(enemy_count(&engine) > 0, "p=1.0 must spawn every frame");

    // Every enemy either spawned on an edge offset or has walked inward
    // since; speeds are bounded, so nobody is far outside.
    for (_entity, (_enemy, pos)) in engine.world().query::<(&Enemy, &Position)>().iter() {
        assert!(pos.0.x >= -ENEMY_SPAWN_OFFSET && pos.0.x <= ARENA_WIDTH + ENEMY_SPAWN_OFFSET);
        assert!(pos.0.y >= -ENEMY_SPAWN_OFFSET && pos.0.y <= ARENA_HEIGHT + ENEMY_SPAWN_OFFSET);
    }
}

// ---- Enemy contact ----

#[test]
fn test_contact_hit_consumes_enemy() {
    let mut engine = quiet_engine();
    engine.init_run();
    // Adjacent: distance 20 < player 15 + enemy 10.
    engine.spawn_enemy_at(Position::new(1020.0, 1000.0), 0.0);

    let snap = engine.advance(NOMINAL_FRAME_MS, None);

    assert_eq!(snap.player.hp, PLAYER_MAX_HP - ENEMY_CONTACT_DAMAGE);
    assert_eq!(enemy_count(&engine), 0, "Enemy is consumed on contact");
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::PlayerHit { .. })));
    assert_eq!(snap.phase, RunPhase::Playing);
}

#[test]
fn test_lethal_contact_loses_run() {
    let mut engine = quiet_engine();
    engine.init_run();
    // Ten simultaneous melee hits empty the 100 hp bar exactly.
    for _ in 0..10 {
        engine.spawn_enemy_at(Position::new(1020.0, 1000.0), 0.0);
    }

    let snap = engine.advance(NOMINAL_FRAME_MS, None);

    assert_eq!(snap.player.hp, 0.0, "hp clamps at zero, never negative");
    assert_eq!(snap.phase, RunPhase::Lost);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::RunLost { .. })));
}

// ---- Orbit weapon ----

#[test]
fn test_orbit_field_damages_every_frame() {
    let mut engine = quiet_engine();
    engine.init_run();

    // Park an enemy on the ring where the leading orb will be on frame 2
    // (the ring turns 0.05 rad per frame before the damage check). The
    // orb drifts ~2.5 units/frame, far less than the 20-unit contact
    // radius, so frames 1..3 all overlap.
    let angle: f64 = 2.0 * ORBIT_ANGULAR_SPEED;
    let enemy_pos = Position::new(
        1000.0 + ORBIT_RING_RADIUS * angle.cos(),
        1000.0 + ORBIT_RING_RADIUS * angle.sin(),
    );
    engine.spawn_enemy_at(enemy_pos, 0.0);

    engine.advance(NOMINAL_FRAME_MS, None);
    engine.advance(NOMINAL_FRAME_MS, None);
    assert_eq!(
        enemy_hp(&engine),
        Some(ENEMY_HP - 2.0 * ORBIT_DAMAGE),
        "Two frames in the field cost two frames of damage"
    );

    // Third frame kills: payout lands before the pickup pass, and the
    // pickup dropped 50 units away is inside the magnet radius, so it is
    // collected in the same frame.
    let snap = engine.advance(NOMINAL_FRAME_MS, None);
    assert_eq!(enemy_count(&engine), 0);
    assert_eq!(pickup_count(&engine), 0);
    assert_eq!(snap.score, SCORE_PER_KILL);
    assert_eq!(snap.exp, PICKUP_VALUE);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::EnemySlain { .. })));
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::PickupCollected { .. })));
}

#[test]
fn test_kill_pays_out_once() {
    let mut engine = quiet_engine();
    engine.init_run();

    let angle: f64 = ORBIT_ANGULAR_SPEED;
    let enemy_pos = Position::new(
        1000.0 + ORBIT_RING_RADIUS * angle.cos(),
        1000.0 + ORBIT_RING_RADIUS * angle.sin(),
    );
    let enemy = engine.spawn_enemy_at(enemy_pos, 0.0);
    // One frame of orb damage kills outright.
    engine
        .world_mut()
        .query_one_mut::<&mut Health>(enemy)
        .unwrap()
        .hp = ORBIT_DAMAGE;

    let snap = engine.advance(NOMINAL_FRAME_MS, None);

    assert_eq!(enemy_count(&engine), 0);
    assert_eq!(snap.score, SCORE_PER_KILL, "Exactly one payout per kill");
    let slain = snap
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::EnemySlain { .. }))
        .count();
    assert_eq!(slain, 1);
}

// ---- Seeker weapon ----

#[test]
fn test_seeker_holds_fire_without_target() {
    let mut engine = quiet_engine();
    engine.init_run();

    // Well past the cooldown with no target: no round, timer keeps going.
    for _ in 0..150 {
        engine.advance(NOMINAL_FRAME_MS, None);
    }
    assert_eq!(projectile_count(&engine), 0);

    // The frame after a target appears, the round goes out immediately.
    engine.spawn_enemy_at(Position::new(1500.0, 1000.0), 0.0);
    let snap = engine.advance(NOMINAL_FRAME_MS, None);
    assert_eq!(projectile_count(&engine), 1);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::SeekerFired { .. })));

    // Firing reset the timer: no immediate refire.
    engine.advance(NOMINAL_FRAME_MS, None);
    assert_eq!(projectile_count(&engine), 1);
}

#[test]
fn test_seeker_round_consumed_on_nonlethal_hit() {
    let mut engine = quiet_engine();
    engine.init_run();
    // 100 units out: beyond melee range and the orb ring's reach.
    engine.spawn_enemy_at(Position::new(1100.0, 1000.0), 0.0);
    force_seeker_ready(&mut engine);

    engine.advance(NOMINAL_FRAME_MS, None);
    assert_eq!(projectile_count(&engine), 1);
    for _ in 0..25 {
        engine.advance(NOMINAL_FRAME_MS, None);
    }
    let snap = engine.advance(NOMINAL_FRAME_MS, None);

    // One hit: 30 - 20 hp left, round consumed, no payout.
    assert_eq!(enemy_hp(&engine), Some(ENEMY_HP - SEEKER_DAMAGE));
    assert_eq!(projectile_count(&engine), 0);
    assert_eq!(snap.score, 0);
    assert_eq!(pickup_count(&engine), 0);

    // Second round finishes the enemy. The pickup drops exactly on the
    // magnet boundary (distance 100), which is not strictly inside, so
    // it stays on the ground.
    force_seeker_ready(&mut engine);
    for _ in 0..25 {
        engine.advance(NOMINAL_FRAME_MS, None);
    }
    let snap = engine.advance(NOMINAL_FRAME_MS, None);
    assert_eq!(enemy_count(&engine), 0);
    assert_eq!(snap.score, SCORE_PER_KILL);
    assert_eq!(pickup_count(&engine), 1);
}

#[test]
fn test_seeker_round_flies_straight_after_target_dies() {
    let mut engine = quiet_engine();
    engine.init_run();
    let enemy = engine.spawn_enemy_at(Position::new(1300.0, 1000.0), 0.0);
    force_seeker_ready(&mut engine);

    // Fire; the round advances once in the launch frame.
    engine.advance(NOMINAL_FRAME_MS, None);
    assert_eq!(projectile_count(&engine), 1);

    // Target vanishes; the round keeps its last heading (+x) and speed.
    engine.world_mut().despawn(enemy).unwrap();
    engine.advance(NOMINAL_FRAME_MS, None);
    engine.advance(NOMINAL_FRAME_MS, None);

    let round_pos = {
        let mut query = engine.world().query::<(&Projectile, &Position)>();
        query
            .iter()
            .next()
            .map(|(_, (_, p))| *p)
            .expect("round still in flight")
    };
    assert!((round_pos.0.x - (1000.0 + 3.0 * SEEKER_SPEED)).abs() < 1e-9);
    assert!((round_pos.0.y - 1000.0).abs() < 1e-9);
}

// ---- Progression ----

#[test]
fn test_level_up_threshold() {
    let mut progress = ProgressState::default();
    progress.exp = 49;
    assert!(!progress.try_level_up());
    assert_eq!(progress.level, 1);

    progress.exp += 1;
    assert!(progress.try_level_up());
    assert_eq!(progress.level, 2);
    assert_eq!(progress.exp, 0);

    // Next threshold scales with the new level.
    assert_eq!(progress.required_exp(), 100);
}

#[test]
fn test_pickup_collection_triggers_level_up() {
    let mut engine = quiet_engine();
    engine.init_run();
    engine.progress_mut().exp = 40;
    world_setup::spawn_pickup(engine.world_mut(), Position::new(1050.0, 1000.0));

    let snap = engine.advance(NOMINAL_FRAME_MS, None);

    assert_eq!(snap.phase, RunPhase::LevelUp);
    assert_eq!(snap.level, 2);
    assert_eq!(snap.exp, 0);
    assert_eq!(snap.upgrade_choices.len(), 3);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::LevelUp { level: 2 })));
}

#[test]
fn test_upgrades_mutate_loadout() {
    let mut world = hecs::World::new();
    world_setup::spawn_player(&mut world);

    progression::apply_upgrade(&mut world, UpgradeId::AddOrb);
    progression::apply_upgrade(&mut world, UpgradeId::FasterSeeker);

    let loadout = world
        .query_mut::<&WeaponLoadout>()
        .into_iter()
        .next()
        .map(|(_, l)| l.clone())
        .unwrap();
    assert_eq!(loadout.orbit.count, ORBIT_START_COUNT + 1);
    assert!((loadout.seeker.cooldown_ms - SEEKER_COOLDOWN_MS * UPGRADE_COOLDOWN_FACTOR).abs() < 1e-9);
}

#[test]
fn test_heal_clamps_to_max_hp() {
    let mut world = hecs::World::new();
    world_setup::spawn_player(&mut world);
    for (_entity, (_player, health)) in world.query_mut::<(&Player, &mut Health)>() {
        health.hp = 90.0;
    }

    progression::apply_upgrade(&mut world, UpgradeId::Heal);

    let hp = world
        .query_mut::<(&Player, &Health)>()
        .into_iter()
        .next()
        .map(|(_, (_, h))| h.hp)
        .unwrap();
    assert_eq!(hp, PLAYER_MAX_HP, "Heal never exceeds max hp");
}

// ---- Run outcomes ----

#[test]
fn test_win_at_run_duration() {
    let mut engine = quiet_engine();
    engine.init_run();

    for _ in 0..59 {
        engine.advance(1000.0, None);
    }
    let snap = engine.advance(1000.0, None);

    assert_eq!(snap.elapsed_ms, RUN_DURATION_MS);
    assert_eq!(snap.phase, RunPhase::Won);
    assert_eq!(snap.player.hp, PLAYER_MAX_HP);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::RunWon { .. })));
}

#[test]
fn test_win_beats_lethal_final_frame() {
    let mut engine = quiet_engine();
    engine.init_run();
    for _ in 0..59 {
        engine.advance(1000.0, None);
    }

    // Final frame: a melee hit empties the bar, but the timer also
    // expires. The win check runs last and takes precedence.
    for (_entity, (_player, health)) in
        engine.world_mut().query_mut::<(&Player, &mut Health)>()
    {
        health.hp = ENEMY_CONTACT_DAMAGE;
    }
    engine.spawn_enemy_at(Position::new(1020.0, 1000.0), 0.0);

    let snap = engine.advance(1000.0, None);
    assert_eq!(snap.phase, RunPhase::Won);
}

#[test]
fn test_restart_resets_run() {
    let mut engine = quiet_engine();
    engine.init_run();
    for _ in 0..10 {
        engine.spawn_enemy_at(Position::new(1020.0, 1000.0), 0.0);
    }
    let snap = engine.advance(NOMINAL_FRAME_MS, None);
    assert_eq!(snap.phase, RunPhase::Lost);

    engine.queue_command(PlayerCommand::Restart);
    let snap = engine.advance(NOMINAL_FRAME_MS, None);

    assert_eq!(snap.phase, RunPhase::Playing);
    assert_eq!(snap.player.hp, PLAYER_MAX_HP);
    assert_eq!(snap.score, 0);
    assert_eq!(snap.level, 1);
    assert_eq!(enemy_count(&engine), 0);
    assert!(snap.events.iter().any(|e| matches!(e, GameEvent::RunStarted)));
}

#[test]
fn test_start_run_command_only_from_start_screen() {
    let mut engine = quiet_engine();

    engine.queue_command(PlayerCommand::StartRun);
    let snap = engine.advance(0.0, None);
    assert_eq!(snap.phase, RunPhase::Playing);

    // Mid-run, StartRun and Restart are ignored.
    engine.advance(NOMINAL_FRAME_MS, None);
    engine.queue_command(PlayerCommand::StartRun);
    engine.queue_command(PlayerCommand::Restart);
    let snap = engine.advance(NOMINAL_FRAME_MS, None);
    assert_eq!(snap.phase, RunPhase::Playing);
    assert_eq!(snap.frame, 2, "Run was not reset");
}
