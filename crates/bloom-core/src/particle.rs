use crate::constants::*;
use crate::palette::Color;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// A drifting, spinning speck emitted by an effect.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: Color,
    pub size: f32,
    pub life: f32,
    pub decay: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub friction: f32,
}

impl Particle {
    /// Spawn at `origin` heading along `angle`, or a random direction when `None`.
    pub fn new<R: Rng + ?Sized>(
        origin: Vec2,
        color: Color,
        angle: Option<f32>,
        rng: &mut R,
    ) -> Self {
        let size = rng.gen::<f32>() * PARTICLE_SIZE_SPAN + PARTICLE_SIZE_MIN;
        let speed = rng.gen::<f32>() * PARTICLE_SPEED_SPAN + PARTICLE_SPEED_MIN;
        let heading = match angle {
            Some(a) => a,
            None => rng.gen::<f32>() * TAU,
        };
        let decay = rng.gen::<f32>() * PARTICLE_DECAY_SPAN + PARTICLE_DECAY_MIN;
        let rotation = rng.gen::<f32>() * TAU;
        let rotation_speed = (rng.gen::<f32>() - 0.5) * PARTICLE_SPIN_SPAN;
        Self {
            position: origin,
            velocity: Vec2::from_angle(heading) * speed,
            color,
            size,
            life: 1.0,
            decay,
            rotation,
            rotation_speed,
            friction: PARTICLE_FRICTION,
        }
    }

    /// Advance by `frames` reference frames (1.0 at 60 Hz).
    pub fn update(&mut self, frames: f32) {
        self.position += self.velocity * frames;
        self.velocity *= self.friction.powf(frames);
        self.rotation += self.rotation_speed * frames;
        self.life -= self.decay * frames;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Gradient alphas at the center and at the mid stop.
    pub fn alphas(&self) -> (f32, f32) {
        let life = self.life.max(0.0);
        (life * PARTICLE_ALPHA_CORE, life * PARTICLE_ALPHA_MID)
    }
}
