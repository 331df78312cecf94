// Host-side tests for the steam particle recycler.

use desk_core::*;
use glam::{Vec2, Vec3};

fn horizontal_offset(p: Vec3, center: Vec2) -> f32 {
    Vec2::new(p.x, p.z).distance(center)
}

#[test]
fn default_pool_spawns_inside_band_and_disc() {
    let pool = ParticlePool::new(SteamConfig::default(), 7);
    assert_eq!(pool.len(), STEAM_COUNT);
    assert_eq!(pool.positions().len(), STEAM_COUNT * 3);
    let center = Vec2::from(STEAM_CENTER);
    for i in 0..pool.len() {
        let p = pool.position(i).expect("in range");
        assert!(horizontal_offset(p, center) <= STEAM_RADIUS + 1e-5);
        assert!(p.y >= STEAM_EMISSION_HEIGHT);
        assert!(p.y <= STEAM_EMISSION_HEIGHT + STEAM_INITIAL_SPREAD);
        let v = pool.particle(i).expect("in range").velocity;
        assert!(v.x.abs() <= STEAM_JITTER && v.z.abs() <= STEAM_JITTER);
        assert!(v.y >= STEAM_RISE_MIN && v.y <= STEAM_RISE_MAX);
    }
    assert!(pool.position(pool.len()).is_none());
}

#[test]
fn particles_stay_below_dissipation_and_respawn_on_disc() {
    let config = SteamConfig::default();
    let center = config.center;
    let mut pool = ParticlePool::new(config.clone(), 99);
    let mut respawns = 0;
    for frame in 0..2000 {
        let before: Vec<Vec3> = (0..pool.len()).filter_map(|i| pool.position(i)).collect();
        pool.tick(frame as f64 / 60.0);
        for (i, prev) in before.iter().enumerate() {
            let p = pool.position(i).expect("in range");
            assert!(p.y <= config.dissipation_height, "particle {} at {}", i, p.y);
            if p.y < prev.y {
                respawns += 1;
                assert_eq!(p.y, config.emission_height);
                assert!(horizontal_offset(p, center) <= config.radius + 1e-5);
            }
        }
    }
    assert!(respawns > 0, "nothing ever respawned");
}

#[test]
fn tick_never_changes_particle_count() {
    let mut pool = ParticlePool::new(SteamConfig::default(), 3);
    for frame in 0..500 {
        pool.tick(frame as f64 * 0.016);
        assert_eq!(pool.len(), STEAM_COUNT);
        assert_eq!(pool.positions().len(), STEAM_COUNT * 3);
    }
}

#[test]
fn single_particle_on_point_disc_resets_exactly() {
    let config = SteamConfig {
        count: 1,
        center: Vec2::ZERO,
        radius: 0.0,
        emission_height: 1.5,
        dissipation_height: 4.0,
        ..SteamConfig::default()
    };
    let mut pool = ParticlePool::new(config, 1);
    let mut t = 0.0;
    let mut prev_y = pool.position(0).expect("one particle").y;
    let mut crossed = false;
    for _ in 0..10_000 {
        t += 1.0 / 60.0;
        pool.tick(t);
        let p = pool.position(0).expect("one particle");
        if p.y < prev_y {
            assert!(p.y >= 1.5 && p.y <= 1.5 + STEAM_RISE_MAX);
            assert_eq!(p.y, 1.5);
            assert_eq!((p.x, p.z), (0.0, 0.0));
            crossed = true;
            break;
        }
        prev_y = p.y;
    }
    assert!(crossed, "particle never reached the dissipation height");
}

#[test]
fn respawn_keeps_velocity_by_default() {
    let config = SteamConfig {
        count: 4,
        ..SteamConfig::default()
    };
    let mut pool = ParticlePool::new(config, 11);
    let velocities: Vec<Vec3> = (0..4).map(|i| pool.particle(i).unwrap().velocity).collect();
    for frame in 0..1000 {
        pool.tick(frame as f64 / 60.0);
    }
    for (i, v) in velocities.iter().enumerate() {
        assert_eq!(pool.particle(i).unwrap().velocity, *v);
    }
}

#[test]
fn respawn_can_rerandomize_velocity() {
    let config = SteamConfig {
        count: 4,
        rerandomize_velocity_on_respawn: true,
        ..SteamConfig::default()
    };
    let mut pool = ParticlePool::new(config.clone(), 11);
    let velocities: Vec<Vec3> = (0..4).map(|i| pool.particle(i).unwrap().velocity).collect();
    for frame in 0..1000 {
        pool.tick(frame as f64 / 60.0);
    }
    let changed = (0..4).any(|i| pool.particle(i).unwrap().velocity != velocities[i]);
    assert!(changed);
    for i in 0..4 {
        let v = pool.particle(i).unwrap().velocity;
        assert!(v.y >= config.rise_min && v.y <= config.rise_max);
    }
}

#[test]
fn same_seed_same_plume() {
    let mut a = ParticlePool::new(SteamConfig::default(), 2024);
    let mut b = ParticlePool::new(SteamConfig::default(), 2024);
    for frame in 0..300 {
        a.tick(frame as f64 / 60.0);
        b.tick(frame as f64 / 60.0);
    }
    assert_eq!(a.positions(), b.positions());
}

#[test]
fn empty_pool_is_fine() {
    let mut pool = ParticlePool::new(
        SteamConfig {
            count: 0,
            ..SteamConfig::default()
        },
        0,
    );
    pool.tick(1.0);
    assert!(pool.is_empty());
    assert!(pool.positions().is_empty());
}

#[test]
fn initial_spread_is_clamped_to_band() {
    let config = SteamConfig {
        initial_spread: 50.0,
        ..SteamConfig::default()
    };
    let pool = ParticlePool::new(config.clone(), 5);
    for i in 0..pool.len() {
        assert!(pool.position(i).unwrap().y <= config.dissipation_height);
    }
}

#[test]
fn validation_rejects_inverted_band() {
    let config = SteamConfig {
        emission_height: 4.0,
        dissipation_height: 1.5,
        ..SteamConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::EmptyBand { .. })
    ));
    let negative = SteamConfig {
        radius: -1.0,
        ..SteamConfig::default()
    };
    assert!(matches!(
        negative.validate(),
        Err(ConfigError::Negative { field: "radius", .. })
    ));
    let rise = SteamConfig {
        rise_min: 0.1,
        rise_max: 0.01,
        ..SteamConfig::default()
    };
    assert!(matches!(
        rise.validate(),
        Err(ConfigError::InvertedRange { field: "rise", .. })
    ));
    assert!(SteamConfig::default().validate().is_ok());
}
