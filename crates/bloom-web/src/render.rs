//! Canvas2D painter for the scene.
//!
//! Every draw call replays geometry computed by `bloom_core`; the painter only
//! owns the context and turns colors into CSS strings. Canvas calls that return
//! `Result` are discarded: they fail only for non-finite input.

use crate::style::{rgba, transparent};
use bloom_core::constants::*;
use bloom_core::{Color, Effect, FlowerPath, Particle, PetalPath, Scene, Star};
use std::f64::consts::TAU;
use web_sys as web;

pub struct Painter {
    ctx: web::CanvasRenderingContext2d,
}

impl Painter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    pub fn draw_scene<R>(&self, scene: &Scene<R>) {
        let params = scene.params();
        let viewport = scene.viewport();
        self.fade(params.trail_color, params.trail_alpha, viewport.width, viewport.height);
        for star in scene.stars() {
            self.draw_star(star);
        }
        for particle in scene.particles() {
            self.draw_particle(particle);
        }
        for effect in scene.effects() {
            self.draw_effect(effect);
        }
    }

    // Low-alpha wash instead of a clear, so moving shapes leave trails
    fn fade(&self, color: Color, alpha: f32, width: f32, height: f32) {
        self.ctx.set_fill_style_str(&rgba(color, alpha));
        self.ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn draw_star(&self, star: &Star) {
        let x = star.position.x as f64;
        let y = star.position.y as f64;
        let r = star.glow_radius() as f64;
        let Ok(gradient) = self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) else {
            return;
        };
        _ = gradient.add_color_stop(0.0, &rgba(Color::WHITE, star.current_brightness));
        _ = gradient.add_color_stop(1.0, &transparent(Color::WHITE));
        self.ctx.begin_path();
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        _ = self.ctx.arc(x, y, r, 0.0, TAU);
        self.ctx.fill();
    }

    fn draw_particle(&self, particle: &Particle) {
        let ctx = &self.ctx;
        ctx.save();
        _ = ctx.translate(particle.position.x as f64, particle.position.y as f64);
        _ = ctx.rotate(particle.rotation as f64);

        let path = FlowerPath::new(particle.size);
        ctx.begin_path();
        ctx.move_to(path.start.x as f64, path.start.y as f64);
        for seg in &path.segments {
            ctx.bezier_curve_to(
                seg.c1.x as f64,
                seg.c1.y as f64,
                seg.c2.x as f64,
                seg.c2.y as f64,
                seg.to.x as f64,
                seg.to.y as f64,
            );
        }

        let (core, mid) = particle.alphas();
        if let Ok(gradient) =
            ctx.create_radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, particle.size as f64)
        {
            _ = gradient.add_color_stop(0.0, &rgba(particle.color, core));
            _ = gradient.add_color_stop(PARTICLE_GRADIENT_MID_STOP, &rgba(particle.color, mid));
            _ = gradient.add_color_stop(1.0, &transparent(particle.color));
            ctx.set_fill_style_canvas_gradient(&gradient);
            ctx.fill();
        }
        ctx.restore();
    }

    fn draw_effect(&self, effect: &Effect) {
        let ctx = &self.ctx;
        for petal in effect.visible_petals() {
            ctx.save();
            _ = ctx.translate(effect.origin.x as f64, effect.origin.y as f64);
            _ = ctx.rotate(effect.petal_rotation(petal) as f64);

            let size = petal.size as f64;
            let path = PetalPath::new(petal.size);
            ctx.begin_path();
            ctx.move_to(0.0, 0.0);
            for seg in [path.outward, path.inward] {
                ctx.quadratic_curve_to(
                    seg.ctrl.x as f64,
                    seg.ctrl.y as f64,
                    seg.to.x as f64,
                    seg.to.y as f64,
                );
            }

            if let Ok(body) = ctx.create_radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, size) {
                _ = body.add_color_stop(0.0, &rgba(effect.color, petal.opacity));
                _ = body.add_color_stop(
                    PETAL_GRADIENT_MID_STOP,
                    &rgba(effect.color, petal.opacity * 0.5),
                );
                _ = body.add_color_stop(1.0, &transparent(Color::WHITE));
                ctx.set_fill_style_canvas_gradient(&body);
                ctx.fill();
            }

            // Gloss across the petal
            let (a, b) = PetalPath::shine_axis(petal.size);
            let shine = ctx.create_linear_gradient(a.x as f64, a.y as f64, b.x as f64, b.y as f64);
            _ = shine.add_color_stop(0.0, &rgba(Color::WHITE, petal.opacity * PETAL_SHINE_ALPHA));
            _ = shine.add_color_stop(1.0, &transparent(Color::WHITE));
            ctx.set_fill_style_canvas_gradient(&shine);
            ctx.fill();

            ctx.restore();
        }
    }
}
