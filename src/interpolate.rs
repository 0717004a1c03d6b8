//! Interpolation between colors.

use num_traits::Float;

use crate::color::{for_each_model, Color};
use crate::model::ColorModel;

/// Linearly interpolate between `a` and `b`.
pub(crate) fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Interpolate between two hue angles along the shorter arc of the color
/// wheel, so 350 to 10 passes through 0 rather than 180. Antipodal hues
/// rotate forward.
pub(crate) fn hue_lerp(a: f64, b: f64, t: f64) -> f64 {
    let mut delta = (b - a).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    crate::math::normalize_hue(a + delta * t)
}

fn mix<T: ColorModel>(from: &T, to: &Color, t: f64) -> T {
    let end = T::from_color(to);
    let start = from.channels();
    let finish = end.channels();

    let values = T::CHANNELS
        .iter()
        .enumerate()
        .map(|(i, channel)| {
            if channel.is_hue {
                hue_lerp(start[i], finish[i], t)
            } else {
                lerp(start[i], finish[i], t)
            }
        })
        .collect::<Vec<_>>();
    let alpha = lerp(from.alpha() as f64, end.alpha() as f64, t).round() as u8;
    T::from_channels(&values, alpha)
}

impl Color {
    /// Interpolate between this color and `other` at position `t` in
    /// `[0, 1]`, in this color's space. `other` is converted into this space
    /// first; hue channels follow the circular shortest path.
    pub fn interpolate(&self, other: &Color, t: f64) -> Color {
        for_each_model!(self, m => mix(m, other, t))
    }
}
