use crate::constants::*;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Background point that scrolls down, twinkles, and wraps back to the top.
#[derive(Clone, Debug)]
pub struct Star {
    pub position: Vec2,
    pub size: f32,
    pub speed: f32,
    pub brightness: f32,
    pub pulse_speed: f32,
    pub pulse_angle: f32,
    pub current_brightness: f32,
}

impl Star {
    /// A star scattered anywhere inside `viewport`.
    pub fn new<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self {
        let mut star = Self {
            position: Vec2::ZERO,
            size: 0.0,
            speed: 0.0,
            brightness: 0.0,
            pulse_speed: 0.0,
            pulse_angle: 0.0,
            current_brightness: 0.0,
        };
        star.reset(viewport, rng);
        star.current_brightness = star.pulsed_brightness();
        star
    }

    pub fn reset<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        self.position = Vec2::new(
            rng.gen::<f32>() * viewport.width,
            rng.gen::<f32>() * viewport.height,
        );
        self.size = rng.gen::<f32>() * STAR_SIZE_MAX;
        self.speed = rng.gen::<f32>() * STAR_SPEED_SPAN + STAR_SPEED_MIN;
        self.brightness = rng.gen::<f32>() * STAR_BRIGHTNESS_SPAN + STAR_BRIGHTNESS_MIN;
        self.pulse_speed = rng.gen::<f32>() * STAR_PULSE_SPEED_SPAN + STAR_PULSE_SPEED_MIN;
        self.pulse_angle = rng.gen::<f32>() * TAU;
    }

    /// Advance by `frames` reference frames, recycling the star once it falls below `viewport`.
    pub fn update<R: Rng + ?Sized>(&mut self, frames: f32, viewport: Viewport, rng: &mut R) {
        self.position.y += self.speed * frames;
        if self.position.y > viewport.height {
            self.reset(viewport, rng);
            self.position.y = 0.0;
        }
        self.pulse_angle += self.pulse_speed * frames;
        self.current_brightness = self.pulsed_brightness();
    }

    #[inline]
    pub fn glow_radius(&self) -> f32 {
        self.size * STAR_GLOW_SCALE
    }

    fn pulsed_brightness(&self) -> f32 {
        self.brightness * (STAR_PULSE_BASE + self.pulse_angle.sin() * STAR_PULSE_DEPTH)
    }
}
