use crate::constants::*;
use crate::palette::{random_color, Color};
use crate::particle::Particle;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

/// One growing, fading sector of a bloom.
#[derive(Clone, Debug)]
pub struct Petal {
    pub angle: f32,
    pub size: f32,
    pub max_size: f32,
    pub opacity: f32,
    pub speed: f32,
}

impl Petal {
    fn new<R: Rng + ?Sized>(angle: f32, rng: &mut R) -> Self {
        Self {
            angle,
            size: 0.0,
            max_size: PETAL_MAX_SIZE_MIN + rng.gen::<f32>() * PETAL_MAX_SIZE_SPAN,
            opacity: PETAL_OPACITY_START,
            speed: PETAL_SPEED_MIN + rng.gen::<f32>() * PETAL_SPEED_SPAN,
        }
    }

    #[inline]
    pub fn is_growing(&self) -> bool {
        self.size < self.max_size
    }

    fn grow(&mut self, frames: f32) {
        self.size += self.speed * frames;
        let ratio = self.size / self.max_size;
        self.opacity = (PETAL_OPACITY_START - ratio.powf(PETAL_OPACITY_EXPONENT)).max(0.0);
    }
}

/// Burst counts used when an effect is spawned.
#[derive(Clone, Copy, Debug)]
pub struct BurstShape {
    pub petals: usize,
    pub ring_particles: usize,
    pub scatter_particles: usize,
}

impl Default for BurstShape {
    fn default() -> Self {
        Self {
            petals: PETAL_COUNT,
            ring_particles: RING_PARTICLES,
            scatter_particles: SCATTER_PARTICLES,
        }
    }
}

/// A click-triggered flower: petals that open and fade while slowly spinning.
#[derive(Clone, Debug)]
pub struct Effect {
    pub origin: Vec2,
    pub color: Color,
    pub petals: SmallVec<[Petal; PETAL_COUNT]>,
    pub time: f32,
}

impl Effect {
    /// Build the flower at `origin` and push its burst particles onto `particles`.
    ///
    /// The ring particles come first, in angle order, followed by the scatter
    /// particles. The effect keeps no handle on any of them.
    pub fn spawn<R: Rng + ?Sized>(
        origin: Vec2,
        shape: BurstShape,
        rng: &mut R,
        particles: &mut Vec<Particle>,
    ) -> Self {
        let color = random_color(rng);
        let petals = (0..shape.petals)
            .map(|i| Petal::new(even_angle(i, shape.petals), rng))
            .collect::<SmallVec<_>>();

        particles.reserve(shape.ring_particles + shape.scatter_particles);
        for i in 0..shape.ring_particles {
            let angle = even_angle(i, shape.ring_particles);
            particles.push(Particle::new(origin, color, Some(angle), rng));
        }
        for _ in 0..shape.scatter_particles {
            particles.push(Particle::new(origin, color, None, rng));
        }

        Self {
            origin,
            color,
            petals,
            time: 0.0,
        }
    }

    /// Advance by `frames` reference frames. Returns whether any petal was still growing.
    pub fn update(&mut self, frames: f32) -> bool {
        self.time += EFFECT_TIME_STEP * frames;
        let mut alive = false;
        for petal in self.petals.iter_mut().filter(|p| p.is_growing()) {
            petal.grow(frames);
            alive = true;
        }
        alive
    }

    /// Rotation applied to `petal` when drawing.
    #[inline]
    pub fn petal_rotation(&self, petal: &Petal) -> f32 {
        petal.angle + self.time * EFFECT_SPIN_RATE
    }

    /// Petals that still contribute pixels.
    pub fn visible_petals(&self) -> impl Iterator<Item = &Petal> {
        self.petals.iter().filter(|p| p.opacity > 0.0)
    }
}
