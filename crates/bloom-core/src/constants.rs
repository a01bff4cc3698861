use std::f32::consts::TAU;

// Shared tuning constants for the simulation. Rates are expressed per
// reference frame (1/60 s); `Scene::step` scales them by elapsed time.

// Timing
pub const REFERENCE_FPS: f32 = 60.0;
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp for backgrounded tabs

// Population
pub const STAR_COUNT: usize = 150;
pub const PETAL_COUNT: usize = 12;
pub const RING_PARTICLES: usize = 48; // evenly spaced burst ring
pub const SCATTER_PARTICLES: usize = 30; // random-direction scatter

// Particle
pub const PARTICLE_FRICTION: f32 = 0.995;
pub const PARTICLE_SIZE_MIN: f32 = 2.0;
pub const PARTICLE_SIZE_SPAN: f32 = 4.0;
pub const PARTICLE_SPEED_MIN: f32 = 1.0;
pub const PARTICLE_SPEED_SPAN: f32 = 2.0;
pub const PARTICLE_DECAY_MIN: f32 = 0.0005;
pub const PARTICLE_DECAY_SPAN: f32 = 0.001;
pub const PARTICLE_SPIN_SPAN: f32 = 0.05; // centered on zero
pub const PARTICLE_ALPHA_CORE: f32 = 0.9;
pub const PARTICLE_ALPHA_MID: f32 = 0.5;
pub const PARTICLE_GRADIENT_MID_STOP: f32 = 0.7;

// Star
pub const STAR_SIZE_MAX: f32 = 1.5;
pub const STAR_SPEED_MIN: f32 = 0.1;
pub const STAR_SPEED_SPAN: f32 = 0.2;
pub const STAR_BRIGHTNESS_MIN: f32 = 0.5;
pub const STAR_BRIGHTNESS_SPAN: f32 = 0.5;
pub const STAR_PULSE_SPEED_MIN: f32 = 0.01;
pub const STAR_PULSE_SPEED_SPAN: f32 = 0.03;
pub const STAR_PULSE_BASE: f32 = 0.7;
pub const STAR_PULSE_DEPTH: f32 = 0.3;
pub const STAR_GLOW_SCALE: f32 = 2.0; // glow radius = size * scale

// Effect / petals
pub const EFFECT_TIME_STEP: f32 = 0.02;
pub const EFFECT_SPIN_RATE: f32 = 0.2; // radians per unit of effect time
pub const PETAL_MAX_SIZE_MIN: f32 = 100.0;
pub const PETAL_MAX_SIZE_SPAN: f32 = 50.0;
pub const PETAL_SPEED_MIN: f32 = 0.5;
pub const PETAL_SPEED_SPAN: f32 = 0.5;
pub const PETAL_OPACITY_START: f32 = 0.9;
pub const PETAL_OPACITY_EXPONENT: f32 = 1.2;
pub const PETAL_GRADIENT_MID_STOP: f32 = 0.6;
pub const PETAL_SHINE_ALPHA: f32 = 0.4;
pub const PETAL_BULGE: f32 = 0.2; // half-width of the petal relative to its length

// Background trail
pub const TRAIL_RGB: [u8; 3] = [26, 26, 46];
pub const TRAIL_ALPHA: f32 = 0.08;

// Sound assets, fetched relative to the page
pub const SOUND_FILES: [&str; 7] = [
    "maou_se_inst_piano2_0.ogg",
    "maou_se_inst_piano2_1.ogg",
    "maou_se_inst_piano2_2.ogg",
    "maou_se_inst_piano2_3.ogg",
    "maou_se_inst_piano2_4.ogg",
    "maou_se_inst_piano2_5.ogg",
    "maou_se_inst_piano2_6.ogg",
];

/// Angle of the `index`-th of `count` evenly spaced directions around a full turn.
#[inline]
pub fn even_angle(index: usize, count: usize) -> f32 {
    (index as f32 / count.max(1) as f32) * TAU
}
