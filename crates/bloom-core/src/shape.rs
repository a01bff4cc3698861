//! Outline geometry for particles and petals, in local (unrotated) space.
//!
//! The renderer translates and rotates the canvas, then replays these
//! segments. Keeping the control points here lets the host tests check the
//! silhouettes without a drawing surface.

use crate::constants::PETAL_BULGE;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    pub c1: Vec2,
    pub c2: Vec2,
    pub to: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadSegment {
    pub ctrl: Vec2,
    pub to: Vec2,
}

/// Closed four-lobe outline through the top, right, bottom and left points at radius `size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowerPath {
    pub start: Vec2,
    pub segments: [CubicSegment; 4],
}

impl FlowerPath {
    pub fn new(size: f32) -> Self {
        let s = size;
        let h = size * 0.5;
        Self {
            start: Vec2::new(0.0, -s),
            segments: [
                CubicSegment {
                    c1: Vec2::new(h, -s),
                    c2: Vec2::new(s, -h),
                    to: Vec2::new(s, 0.0),
                },
                CubicSegment {
                    c1: Vec2::new(s, h),
                    c2: Vec2::new(h, s),
                    to: Vec2::new(0.0, s),
                },
                CubicSegment {
                    c1: Vec2::new(-h, s),
                    c2: Vec2::new(-s, h),
                    to: Vec2::new(-s, 0.0),
                },
                CubicSegment {
                    c1: Vec2::new(-s, -h),
                    c2: Vec2::new(-h, -s),
                    to: Vec2::new(0.0, -s),
                },
            ],
        }
    }
}

/// Teardrop from the origin out to `(size, 0)` and back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PetalPath {
    pub outward: QuadSegment,
    pub inward: QuadSegment,
}

impl PetalPath {
    pub fn new(size: f32) -> Self {
        let bulge = size * PETAL_BULGE;
        Self {
            outward: QuadSegment {
                ctrl: Vec2::new(size * 0.5, -bulge),
                to: Vec2::new(size, 0.0),
            },
            inward: QuadSegment {
                ctrl: Vec2::new(size * 0.5, bulge),
                to: Vec2::ZERO,
            },
        }
    }

    /// Endpoints of the gloss gradient laid across the petal.
    pub fn shine_axis(size: f32) -> (Vec2, Vec2) {
        (
            Vec2::new(0.0, -size * PETAL_BULGE),
            Vec2::new(size * 0.8, size * PETAL_BULGE),
        )
    }
}
