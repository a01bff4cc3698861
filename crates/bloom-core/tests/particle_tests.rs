// Host-side tests for particle motion and lifetime.

use bloom_core::constants::*;
use bloom_core::{Color, Particle};
use glam::Vec2;
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::TAU;

const PINK: Color = Color::new(255, 182, 193);

fn low_rng() -> StepRng {
    // Every draw is 0.0, so each attribute sits at the bottom of its range
    StepRng::new(0, 0)
}

#[test]
fn new_particle_uses_lowest_values_for_zero_draws() {
    let p = Particle::new(Vec2::new(10.0, 20.0), PINK, Some(0.0), &mut low_rng());
    assert_eq!(p.position, Vec2::new(10.0, 20.0));
    assert_eq!(p.size, PARTICLE_SIZE_MIN);
    assert!((p.velocity - Vec2::new(PARTICLE_SPEED_MIN, 0.0)).length() < 1e-6);
    assert_eq!(p.decay, PARTICLE_DECAY_MIN);
    assert_eq!(p.rotation, 0.0);
    assert!((p.rotation_speed + PARTICLE_SPIN_SPAN * 0.5).abs() < 1e-7);
    assert_eq!(p.life, 1.0);
    assert_eq!(p.friction, 0.995);
    assert_eq!(p.color, PINK);
}

#[test]
fn one_frame_moves_damps_spins_and_decays() {
    let mut p = Particle::new(Vec2::new(10.0, 20.0), PINK, Some(0.0), &mut low_rng());
    let v0 = p.velocity;
    let rot0 = p.rotation;
    p.update(1.0);
    assert!((p.position - Vec2::new(11.0, 20.0)).length() < 1e-5);
    assert!((p.velocity - v0 * 0.995).length() < 1e-6);
    assert!((p.rotation - (rot0 + p.rotation_speed)).abs() < 1e-6);
    assert!((p.life - (1.0 - PARTICLE_DECAY_MIN)).abs() < 1e-7);
}

#[test]
fn random_particles_stay_within_documented_ranges() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let p = Particle::new(Vec2::ZERO, PINK, None, &mut rng);
        assert!(p.size >= 2.0 && p.size < 6.0, "size {}", p.size);
        let speed = p.velocity.length();
        assert!(speed >= 1.0 - 1e-5 && speed < 3.0 + 1e-5, "speed {speed}");
        assert!(p.decay >= 0.0005 && p.decay < 0.0015, "decay {}", p.decay);
        assert!(p.rotation >= 0.0 && p.rotation < TAU);
        assert!(p.rotation_speed.abs() <= 0.025);
    }
}

#[test]
fn life_never_increases_and_reaches_zero() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut p = Particle::new(Vec2::new(50.0, 50.0), PINK, None, &mut rng);
    let mut prev = p.life;
    let mut frames = 0;
    while p.is_alive() {
        p.update(1.0);
        assert!(p.life <= prev, "life went up at frame {frames}");
        prev = p.life;
        frames += 1;
        assert!(frames <= 2001, "particle outlived the slowest decay");
    }
    assert!(p.life <= 0.0);
}

#[test]
fn fractional_frames_match_whole_frames_for_life_and_damping() {
    let mut rng = StdRng::seed_from_u64(3);
    let base = Particle::new(Vec2::ZERO, PINK, Some(1.0), &mut rng);

    let mut whole = base.clone();
    whole.update(1.0);

    let mut halves = base.clone();
    halves.update(0.5);
    halves.update(0.5);

    assert!((whole.life - halves.life).abs() < 1e-6);
    assert!((whole.velocity - halves.velocity).length() < 1e-5);
    assert!((whole.rotation - halves.rotation).abs() < 1e-6);
}

#[test]
fn alphas_follow_life_and_clamp_at_zero() {
    let mut p = Particle::new(Vec2::ZERO, PINK, Some(0.0), &mut low_rng());
    let (core, mid) = p.alphas();
    assert!((core - 0.9).abs() < 1e-6);
    assert!((mid - 0.5).abs() < 1e-6);

    p.life = -0.01;
    assert!(!p.is_alive());
    assert_eq!(p.alphas(), (0.0, 0.0));
}
