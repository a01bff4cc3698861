use bloom_core::Color;

// CSS color strings handed to Canvas2D fill styles and gradient stops.

#[inline]
pub fn rgba(color: Color, alpha: f32) -> String {
    // NaN and out-of-range alphas would make the canvas reject the whole stop
    let a = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
    format!("rgba({}, {}, {}, {})", color.r, color.g, color.b, a)
}

#[inline]
pub fn transparent(color: Color) -> String {
    rgba(color, 0.0)
}
