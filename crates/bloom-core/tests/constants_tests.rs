// Host-side tests for tuning constants and their relationships.

use bloom_core::constants::*;
use bloom_core::{BurstShape, Color, SceneParams, PALETTE};
use std::f32::consts::TAU;

#[test]
#[allow(clippy::assertions_on_constants)]
fn burst_counts_add_up() {
    assert_eq!(RING_PARTICLES + SCATTER_PARTICLES, 78);
    assert_eq!(PETAL_COUNT, 12);
    assert_eq!(STAR_COUNT, 150);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rates_are_small_and_positive() {
    assert!(PARTICLE_FRICTION > 0.0 && PARTICLE_FRICTION < 1.0);
    assert!(PARTICLE_DECAY_MIN > 0.0);
    assert!(PETAL_SPEED_MIN > 0.0);
    assert!(STAR_SPEED_MIN > 0.0);
    assert!(TRAIL_ALPHA > 0.0 && TRAIL_ALPHA < 1.0);
    assert!(MAX_FRAME_DT_SEC * REFERENCE_FPS > 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gradient_stops_are_ordered() {
    assert!(PARTICLE_GRADIENT_MID_STOP > 0.0 && PARTICLE_GRADIENT_MID_STOP < 1.0);
    assert!(PETAL_GRADIENT_MID_STOP > 0.0 && PETAL_GRADIENT_MID_STOP < 1.0);
    assert!(PARTICLE_ALPHA_MID < PARTICLE_ALPHA_CORE);
    // Pulse never drives a star fully dark or past its base brightness
    assert!(STAR_PULSE_BASE - STAR_PULSE_DEPTH > 0.0);
    assert!(STAR_PULSE_BASE + STAR_PULSE_DEPTH <= 1.0);
}

#[test]
fn even_angles_cover_a_full_turn() {
    assert_eq!(even_angle(0, 48), 0.0);
    assert!((even_angle(12, 48) - TAU / 4.0).abs() < 1e-6);
    assert!(even_angle(47, 48) < TAU);
    assert_eq!(even_angle(3, 0), 3.0 * TAU);
}

#[test]
fn palette_and_defaults() {
    assert_eq!(PALETTE.len(), 5);
    assert_eq!(PALETTE[0], Color::new(255, 182, 193));
    let params = SceneParams::default();
    assert_eq!(params.trail_color, Color::new(26, 26, 46));
    assert_eq!(params.star_count, STAR_COUNT);
    let burst = BurstShape::default();
    assert_eq!(burst.ring_particles, 48);
    assert_eq!(burst.scatter_particles, 30);
    assert_eq!(SOUND_FILES.len(), 7);
    assert!(SOUND_FILES.iter().all(|f| f.ends_with(".ogg")));
}
