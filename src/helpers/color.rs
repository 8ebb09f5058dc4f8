//! Color helpers used by the style resolver.

use gpui::Rgba;

/// Returns `color` with its alpha channel replaced.
pub fn with_alpha(color: Rgba, alpha: f32) -> Rgba {
    Rgba { a: alpha, ..color }
}

/// Linearly interpolates every channel from `from` toward `to`.
///
/// `amount` is clamped to `0.0..=1.0`; `0.0` yields `from`, `1.0` yields `to`.
pub fn mix(from: Rgba, to: Rgba, amount: f32) -> Rgba {
    let t = amount.clamp(0.0, 1.0);
    let lerp = |a: f32, b: f32| a + (b - a) * t;

    Rgba {
        r: lerp(from.r, to.r),
        g: lerp(from.g, to.g),
        b: lerp(from.b, to.b),
        a: lerp(from.a, to.a),
    }
}
