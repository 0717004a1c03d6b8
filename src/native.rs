//! Casts between colors and packed 8-bit RGBA, the layout GUI toolkits and
//! framebuffers speak natively.

use crate::color::{Color, Space};
use crate::model::Model;
use crate::models::Rgb;

impl Color {
    /// Cast this color to 8-bit RGBA channels, converting to RGB first.
    /// Channels round half away from zero.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let rgb = self.to_rgb();
        [rgb.red8(), rgb.green8(), rgb.blue8(), rgb.alpha()]
    }

    /// Cast 8-bit RGBA channels into a color in the given space.
    pub fn from_rgba8(rgba: [u8; 4], space: Space) -> Color {
        let [red, green, blue, alpha] = rgba;
        let rgb = Rgb::from_channels(&[red as f64, green as f64, blue as f64], alpha);
        Color::Rgb(rgb).to_space(space)
    }

    /// Pack this color into a `u32` in `0xRRGGBBAA` order.
    pub fn to_packed(&self) -> u32 {
        u32::from_be_bytes(self.to_rgba8())
    }

    /// Unpack a `0xRRGGBBAA` value into a color in the given space.
    pub fn from_packed(packed: u32, space: Space) -> Color {
        Color::from_rgba8(packed.to_be_bytes(), space)
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        color.to_rgba8()
    }
}

impl From<[u8; 4]> for Color {
    fn from(rgba: [u8; 4]) -> Self {
        Color::from_rgba8(rgba, Space::Rgb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_packed()
    }
}

impl From<u32> for Color {
    fn from(packed: u32) -> Self {
        Color::from_packed(packed, Space::Rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::OPAQUE;
    use crate::model::ColorModel;
    use crate::models::{Hsv, Rgb};

    #[test]
    fn exact_colors_survive_a_trip_through_another_space() {
        let yellow = Color::from_rgba8([255, 255, 0, 255], Space::Hsv);
        assert_eq!(yellow.space(), Space::Hsv);
        assert_eq!(yellow.to_rgba8(), [255, 255, 0, 255]);
    }

    #[test]
    fn packing_is_rrggbbaa() {
        let color = Color::from(Rgb::new(0x12 as f64, 0x34 as f64, 0x56 as f64, 0x78).unwrap());
        assert_eq!(color.to_packed(), 0x12345678);

        let back = Color::from_packed(0x12345678, Space::Rgb);
        assert_eq!(back, color);
    }

    #[test]
    fn fractional_channels_round_half_away_from_zero() {
        let color = Color::from(Rgb::new(127.5, 127.49, 0.5, OPAQUE).unwrap());
        assert_eq!(color.to_rgba8(), [128, 127, 1, 255]);
    }

    #[test]
    fn conversions_from_native_values_use_the_requested_space() {
        let teal = Color::from_packed(0x008080FF, Space::Hsl);
        assert_eq!(teal.space(), Space::Hsl);
        assert_eq!(teal.to_rgba8(), [0, 128, 128, 255]);

        let hsv = Hsv::from_rgba8([0, 128, 128, 255]);
        assert_eq!(hsv.to_rgba8(), [0, 128, 128, 255]);
    }
}
