// Host-side tests for CSS color helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use bloom_core::{Color, PALETTE};
use style::*;

#[test]
fn rgba_formats_channels_and_alpha() {
    assert_eq!(rgba(PALETTE[0], 0.9), "rgba(255, 182, 193, 0.9)");
    assert_eq!(rgba(Color::new(26, 26, 46), 0.08), "rgba(26, 26, 46, 0.08)");
}

#[test]
fn rgba_clamps_alpha_into_range() {
    assert_eq!(rgba(Color::WHITE, 1.7), "rgba(255, 255, 255, 1)");
    assert_eq!(rgba(Color::WHITE, -0.3), "rgba(255, 255, 255, 0)");
    assert_eq!(rgba(Color::WHITE, f32::NAN), "rgba(255, 255, 255, 0)");
}

#[test]
fn transparent_keeps_the_hue() {
    assert_eq!(transparent(PALETTE[2]), "rgba(176, 224, 230, 0)");
}
