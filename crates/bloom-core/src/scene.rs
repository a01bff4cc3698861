//! The simulation context: every star, particle and effect, plus the random
//! source they are built from.
//!
//! A front-end owns one `Scene`, forwards clicks and resizes to it, calls
//! [`Scene::step`] once per display refresh and then draws what it exposes.

use crate::constants::*;
use crate::effect::{BurstShape, Effect};
use crate::palette::Color;
use crate::particle::Particle;
use crate::star::Star;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::Rng;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct SceneParams {
    pub star_count: usize,
    pub burst: BurstShape,
    pub trail_color: Color,
    pub trail_alpha: f32,
    pub reference_fps: f32,
    pub max_frame_dt: Duration,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            star_count: STAR_COUNT,
            burst: BurstShape::default(),
            trail_color: Color::from_array(TRAIL_RGB),
            trail_alpha: TRAIL_ALPHA,
            reference_fps: REFERENCE_FPS,
            max_frame_dt: Duration::from_secs_f32(MAX_FRAME_DT_SEC),
        }
    }
}

impl SceneParams {
    /// Elapsed time expressed in reference frames, after clamping to `max_frame_dt`.
    pub fn frames_for(&self, dt: Duration) -> f32 {
        dt.min(self.max_frame_dt).as_secs_f32() * self.reference_fps
    }
}

pub struct Scene<R> {
    params: SceneParams,
    viewport: Viewport,
    rng: R,
    stars: Vec<Star>,
    particles: Vec<Particle>,
    effects: Vec<Effect>,
    frame_count: u64,
}

impl<R> Scene<R> {
    pub fn params(&self) -> &SceneParams {
        &self.params
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// The scene's random source, shared with whatever else reacts to a click.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl<R: Rng> Scene<R> {
    pub fn new(viewport: Viewport, params: SceneParams, mut rng: R) -> Self {
        let stars = (0..params.star_count)
            .map(|_| Star::new(viewport, &mut rng))
            .collect::<Vec<_>>();
        log::info!(
            "[scene] created {}x{} with {} stars",
            viewport.width,
            viewport.height,
            stars.len()
        );
        Self {
            params,
            viewport,
            rng,
            stars,
            particles: Vec::new(),
            effects: Vec::new(),
            frame_count: 0,
        }
    }

    /// New surface bounds. Entities already outside them are left where they are.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        log::debug!("[scene] resized to {}x{}", self.viewport.width, self.viewport.height);
    }

    /// Spawn one bloom at `(x, y)` along with its burst particles.
    pub fn handle_click(&mut self, x: f32, y: f32) -> &Effect {
        let effect = Effect::spawn(
            Vec2::new(x, y),
            self.params.burst,
            &mut self.rng,
            &mut self.particles,
        );
        self.effects.push(effect);
        &self.effects[self.effects.len() - 1]
    }

    /// Advance by wall-clock time since the previous step.
    pub fn step(&mut self, dt: Duration) {
        let frames = self.params.frames_for(dt);
        self.advance(frames);
    }

    /// Advance by exactly one reference frame.
    pub fn step_frame(&mut self) {
        self.advance(1.0);
    }

    fn advance(&mut self, frames: f32) {
        let viewport = self.viewport;
        for star in &mut self.stars {
            star.update(frames, viewport, &mut self.rng);
        }
        self.particles.retain_mut(|p| {
            p.update(frames);
            p.is_alive()
        });
        self.effects.retain_mut(|e| e.update(frames));
        self.frame_count += 1;
    }

    /// Drop every transient entity. Stars stay; they live as long as the scene.
    pub fn teardown(&mut self) {
        log::info!(
            "[scene] teardown after {} frames ({} effects, {} particles dropped)",
            self.frame_count,
            self.effects.len(),
            self.particles.len()
        );
        self.effects.clear();
        self.particles.clear();
    }
}

impl<R> std::fmt::Debug for Scene<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("viewport", &self.viewport)
            .field("stars", &self.stars.len())
            .field("particles", &self.particles.len())
            .field("effects", &self.effects.len())
            .field("frame_count", &self.frame_count)
            .finish()
    }
}
