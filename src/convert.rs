//! Pure conversion formulas between RGB and every other supported space.
//!
//! RGB is the interchange space: each color space defines exactly one
//! forward and one inverse mapping against it, so N spaces need only 2N
//! formulas instead of N squared direct paths. The functions here take and
//! return channel values in the models' native ranges; their callers in
//! `models` do the wrapping and the clamping of float fuzz.
//!
//! Achromatic inputs have no meaningful hue; these formulas report hue 0 for
//! them so every output is a valid channel value.

use crate::math::{almost_zero, normalize_hue, transform, transform_3x3, Transform};
use crate::models::Rgb;

/// White point of the D65 standard illuminant on the 100-based XYZ scale,
/// derived from the sRGB matrix so that white maps to LAB (100, 0, 0).
pub(crate) const D65_WHITE: [f64; 3] = [95.04559270516716, 100.0, 108.90577507598784];

/// Perceived-brightness weights for the red, green and blue channels, from
/// Finley's HSP model.
const PR: f64 = 0.299;
const PG: f64 = 0.587;
const PB: f64 = 0.114;

fn to_unit(rgb: &Rgb) -> (f64, f64, f64) {
    (
        rgb.red() / 255.0,
        rgb.green() / 255.0,
        rgb.blue() / 255.0,
    )
}

/// Calculate the hue in degrees from unit RGB components and return it along
/// with the min and max component values.
fn rgb_to_hue_with_min_max(red: f64, green: f64, blue: f64) -> (f64, f64, f64) {
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let delta = max - min;

    let hue = if almost_zero(delta) {
        0.0
    } else {
        60.0 * if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        }
    };

    (normalize_hue(hue), min, max)
}

/// RGB to HSL: hue in degrees, saturation and lightness in `[0, 100]`.
pub(crate) fn rgb_to_hsl(rgb: &Rgb) -> (f64, f64, f64) {
    let (red, green, blue) = to_unit(rgb);
    let (hue, min, max) = rgb_to_hue_with_min_max(red, green, blue);

    let lightness = (min + max) / 2.0;
    let delta = max - min;

    let saturation =
        if almost_zero(delta) || almost_zero(lightness) || almost_zero(1.0 - lightness) {
            0.0
        } else {
            (max - lightness) / lightness.min(1.0 - lightness)
        };

    (hue, saturation * 100.0, lightness * 100.0)
}

/// HSL to RGB, each output channel in `[0, 255]`.
pub(crate) fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (f64, f64, f64) {
    let saturation = saturation / 100.0;
    let lightness = lightness / 100.0;

    if saturation <= 0.0 {
        let gray = lightness * 255.0;
        return (gray, gray, gray);
    }

    let hue = normalize_hue(hue);

    macro_rules! f {
        ($n:expr) => {{
            let k = ($n + hue / 30.0) % 12.0;
            let a = saturation * lightness.min(1.0 - lightness);
            (lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)) * 255.0
        }};
    }

    (f!(0.0), f!(8.0), f!(4.0))
}

/// RGB to HSV: hue in degrees, saturation and value in `[0, 100]`.
pub(crate) fn rgb_to_hsv(rgb: &Rgb) -> (f64, f64, f64) {
    let (red, green, blue) = to_unit(rgb);
    let (hue, min, max) = rgb_to_hue_with_min_max(red, green, blue);

    let saturation = if almost_zero(max) {
        0.0
    } else {
        (max - min) / max
    };

    (hue, saturation * 100.0, max * 100.0)
}

/// HSV to RGB, each output channel in `[0, 255]`.
pub(crate) fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> (f64, f64, f64) {
    let saturation = saturation / 100.0;
    let value = value / 100.0;

    let hue = normalize_hue(hue) / 60.0;
    let chroma = value * saturation;
    let x = chroma * (1.0 - (hue % 2.0 - 1.0).abs());

    let (red, green, blue) = match hue as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let m = value - chroma;
    ((red + m) * 255.0, (green + m) * 255.0, (blue + m) * 255.0)
}

/// RGB to CMYK, each output channel in `[0, 100]`.
pub(crate) fn rgb_to_cmyk(rgb: &Rgb) -> (f64, f64, f64, f64) {
    let (red, green, blue) = to_unit(rgb);
    let max = red.max(green).max(blue);

    if almost_zero(max) {
        return (0.0, 0.0, 0.0, 100.0);
    }

    (
        (max - red) / max * 100.0,
        (max - green) / max * 100.0,
        (max - blue) / max * 100.0,
        (1.0 - max) * 100.0,
    )
}

/// CMYK to RGB, each output channel in `[0, 255]`.
pub(crate) fn cmyk_to_rgb(cyan: f64, magenta: f64, yellow: f64, black: f64) -> (f64, f64, f64) {
    let white = 1.0 - black / 100.0;
    (
        255.0 * (1.0 - cyan / 100.0) * white,
        255.0 * (1.0 - magenta / 100.0) * white,
        255.0 * (1.0 - yellow / 100.0) * white,
    )
}

/// RGB to HSI: hue in degrees, saturation and intensity in `[0, 100]`.
pub(crate) fn rgb_to_hsi(rgb: &Rgb) -> (f64, f64, f64) {
    let (red, green, blue) = to_unit(rgb);

    let intensity = (red + green + blue) / 3.0;
    if almost_zero(intensity) {
        return (0.0, 0.0, 0.0);
    }

    let min = red.min(green).min(blue);
    let saturation = 1.0 - min / intensity;

    let hue = if almost_zero(saturation) {
        0.0
    } else {
        let numerator = 0.5 * ((red - green) + (red - blue));
        let denominator = ((red - green) * (red - green) + (red - blue) * (green - blue)).sqrt();
        let angle = (numerator / denominator).clamp(-1.0, 1.0).acos().to_degrees();
        if blue > green {
            360.0 - angle
        } else {
            angle
        }
    };

    (normalize_hue(hue), saturation * 100.0, intensity * 100.0)
}

/// HSI to RGB, each output channel in `[0, 255]`.
///
/// HSI contains combinations no RGB value can reach (high saturation at high
/// intensity); those come out above the RGB range and are clamped by the
/// model constructor.
pub(crate) fn hsi_to_rgb(hue: f64, saturation: f64, intensity: f64) -> (f64, f64, f64) {
    let saturation = saturation / 100.0;
    let intensity = intensity / 100.0;
    let hue = normalize_hue(hue);

    // Within each 120 degree sector one channel sits at the minimum, one is
    // driven by the hue angle and the third takes the remainder.
    let sector = |offset: f64| {
        let angle = (hue - offset).to_radians();
        let low = intensity * (1.0 - saturation);
        let peak =
            intensity * (1.0 + saturation * angle.cos() / (std::f64::consts::FRAC_PI_3 - angle).cos());
        let rest = 3.0 * intensity - low - peak;
        (low, peak, rest)
    };

    let (red, green, blue) = if hue < 120.0 {
        let (low, peak, rest) = sector(0.0);
        (peak, rest, low)
    } else if hue < 240.0 {
        let (low, peak, rest) = sector(120.0);
        (low, peak, rest)
    } else {
        let (low, peak, rest) = sector(240.0);
        (rest, low, peak)
    };

    (red * 255.0, green * 255.0, blue * 255.0)
}

/// RGB to HSP: hue in degrees, saturation and perceived brightness in
/// `[0, 100]`, following Finley's perceived-brightness model.
pub(crate) fn rgb_to_hsp(rgb: &Rgb) -> (f64, f64, f64) {
    let (red, green, blue) = to_unit(rgb);

    let brightness = (red * red * PR + green * green * PG + blue * blue * PB).sqrt();

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    if almost_zero(max - min) {
        return (0.0, 0.0, brightness * 100.0);
    }

    let (hue, saturation) = if red >= green && red >= blue {
        if blue >= green {
            (
                1.0 - (blue - green) / ((red - green) * 6.0),
                1.0 - green / red,
            )
        } else {
            ((green - blue) / ((red - blue) * 6.0), 1.0 - blue / red)
        }
    } else if green >= red && green >= blue {
        if red >= blue {
            (
                2.0 / 6.0 - (red - blue) / ((green - blue) * 6.0),
                1.0 - blue / green,
            )
        } else {
            (
                2.0 / 6.0 + (blue - red) / ((green - red) * 6.0),
                1.0 - red / green,
            )
        }
    } else if green >= red {
        (
            4.0 / 6.0 - (green - red) / ((blue - red) * 6.0),
            1.0 - red / blue,
        )
    } else {
        (
            4.0 / 6.0 + (red - green) / ((blue - green) * 6.0),
            1.0 - green / blue,
        )
    };

    (
        normalize_hue(hue * 360.0),
        saturation * 100.0,
        brightness * 100.0,
    )
}

/// HSP to RGB, each output channel in `[0, 255]`.
///
/// The inverse of Finley's model; the fully saturated case degenerates to a
/// two-channel mix and is handled separately.
pub(crate) fn hsp_to_rgb(hue: f64, saturation: f64, brightness: f64) -> (f64, f64, f64) {
    let hue = normalize_hue(hue) / 360.0;
    let saturation = saturation / 100.0;
    let brightness = brightness / 100.0;

    let min_over_max = 1.0 - saturation;

    let (red, green, blue) = if min_over_max > 0.0 {
        let mom2 = min_over_max * min_over_max;
        let part_for = |h: f64| 1.0 + h * (1.0 / min_over_max - 1.0);

        if hue < 1.0 / 6.0 {
            let h = 6.0 * hue;
            let part = part_for(h);
            let blue = brightness / (PR / mom2 + PG * part * part + PB).sqrt();
            let red = blue / min_over_max;
            let green = blue + h * (red - blue);
            (red, green, blue)
        } else if hue < 2.0 / 6.0 {
            let h = 6.0 * (2.0 / 6.0 - hue);
            let part = part_for(h);
            let blue = brightness / (PG / mom2 + PR * part * part + PB).sqrt();
            let green = blue / min_over_max;
            let red = blue + h * (green - blue);
            (red, green, blue)
        } else if hue < 3.0 / 6.0 {
            let h = 6.0 * (hue - 2.0 / 6.0);
            let part = part_for(h);
            let red = brightness / (PG / mom2 + PB * part * part + PR).sqrt();
            let green = red / min_over_max;
            let blue = red + h * (green - red);
            (red, green, blue)
        } else if hue < 4.0 / 6.0 {
            let h = 6.0 * (4.0 / 6.0 - hue);
            let part = part_for(h);
            let red = brightness / (PB / mom2 + PG * part * part + PR).sqrt();
            let blue = red / min_over_max;
            let green = red + h * (blue - red);
            (red, green, blue)
        } else if hue < 5.0 / 6.0 {
            let h = 6.0 * (hue - 4.0 / 6.0);
            let part = part_for(h);
            let green = brightness / (PB / mom2 + PR * part * part + PG).sqrt();
            let blue = green / min_over_max;
            let red = green + h * (blue - green);
            (red, green, blue)
        } else {
            let h = 6.0 * (1.0 - hue);
            let part = part_for(h);
            let green = brightness / (PR / mom2 + PB * part * part + PG).sqrt();
            let red = green / min_over_max;
            let blue = green + h * (red - green);
            (red, green, blue)
        }
    } else if hue < 1.0 / 6.0 {
        let h = 6.0 * hue;
        let red = (brightness * brightness / (PR + PG * h * h)).sqrt();
        (red, red * h, 0.0)
    } else if hue < 2.0 / 6.0 {
        let h = 6.0 * (2.0 / 6.0 - hue);
        let green = (brightness * brightness / (PG + PR * h * h)).sqrt();
        (green * h, green, 0.0)
    } else if hue < 3.0 / 6.0 {
        let h = 6.0 * (hue - 2.0 / 6.0);
        let green = (brightness * brightness / (PG + PB * h * h)).sqrt();
        (0.0, green, green * h)
    } else if hue < 4.0 / 6.0 {
        let h = 6.0 * (4.0 / 6.0 - hue);
        let blue = (brightness * brightness / (PB + PG * h * h)).sqrt();
        (0.0, blue * h, blue)
    } else if hue < 5.0 / 6.0 {
        let h = 6.0 * (hue - 4.0 / 6.0);
        let blue = (brightness * brightness / (PB + PR * h * h)).sqrt();
        (blue * h, 0.0, blue)
    } else {
        let h = 6.0 * (1.0 - hue);
        let red = (brightness * brightness / (PR + PB * h * h)).sqrt();
        (red, 0.0, red * h)
    };

    (red * 255.0, green * 255.0, blue * 255.0)
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const RGB_TO_XYZ: Transform = transform_3x3(
    0.4123907992659595,  0.21263900587151036, 0.01933081871559185,
    0.35758433938387796, 0.7151686787677559,  0.11919477979462599,
    0.1804807884018343,  0.07219231536073371, 0.9505321522496606,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_RGB: Transform = transform_3x3(
     3.2409699419045213, -0.9692436362808798,  0.05563007969699361,
    -1.5373831775700935,  1.8759675015077206, -0.20397695888897657,
    -0.4986107602930033,  0.04155505740717561, 1.0569715142428786,
);

fn srgb_to_linear(value: f64) -> f64 {
    let abs = value.abs();
    if abs < 0.04045 {
        value / 12.92
    } else {
        value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(value: f64) -> f64 {
    let abs = value.abs();
    if abs > 0.0031308 {
        value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
    } else {
        12.92 * value
    }
}

/// RGB to CIE-XYZ under the D65 illuminant, on the 100-based scale.
pub(crate) fn rgb_to_xyz(rgb: &Rgb) -> (f64, f64, f64) {
    let (red, green, blue) = to_unit(rgb);
    let [x, y, z] = transform(
        &RGB_TO_XYZ,
        srgb_to_linear(red),
        srgb_to_linear(green),
        srgb_to_linear(blue),
    );
    (x * 100.0, y * 100.0, z * 100.0)
}

/// CIE-XYZ to RGB. Out-of-gamut XYZ values are clamped into the RGB cube.
pub(crate) fn xyz_to_rgb(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let [red, green, blue] = transform(&XYZ_TO_RGB, x / 100.0, y / 100.0, z / 100.0);
    (
        linear_to_srgb(red).clamp(0.0, 1.0) * 255.0,
        linear_to_srgb(green).clamp(0.0, 1.0) * 255.0,
        linear_to_srgb(blue).clamp(0.0, 1.0) * 255.0,
    )
}

const KAPPA: f64 = 24389.0 / 27.0;
const EPSILON: f64 = 216.0 / 24389.0;

/// RGB to CIE-LAB, through D65-normalized XYZ.
pub(crate) fn rgb_to_lab(rgb: &Rgb) -> (f64, f64, f64) {
    let (x, y, z) = rgb_to_xyz(rgb);

    let f = |v: f64| {
        if v > EPSILON {
            v.cbrt()
        } else {
            (KAPPA * v + 16.0) / 116.0
        }
    };

    let f0 = f(x / D65_WHITE[0]);
    let f1 = f(y / D65_WHITE[1]);
    let f2 = f(z / D65_WHITE[2]);

    (116.0 * f1 - 16.0, 500.0 * (f0 - f1), 200.0 * (f1 - f2))
}

/// CIE-LAB to RGB, through D65 XYZ.
pub(crate) fn lab_to_rgb(lightness: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let f1 = (lightness + 16.0) / 116.0;
    let f0 = f1 + a / 500.0;
    let f2 = f1 - b / 200.0;

    let f0_cubed = f0 * f0 * f0;
    let x = if f0_cubed > EPSILON {
        f0_cubed
    } else {
        (116.0 * f0 - 16.0) / KAPPA
    };

    let y = if lightness > KAPPA * EPSILON {
        f1 * f1 * f1
    } else {
        lightness / KAPPA
    };

    let f2_cubed = f2 * f2 * f2;
    let z = if f2_cubed > EPSILON {
        f2_cubed
    } else {
        (116.0 * f2 - 16.0) / KAPPA
    };

    xyz_to_rgb(x * D65_WHITE[0], y * D65_WHITE[1], z * D65_WHITE[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_channel_eq;
    use crate::color::OPAQUE;
    use crate::model::ColorModel;
    use crate::models::{Cmyk, Hsi, Hsl, Hsp, Hsv, Lab, Xyz};

    fn rgb(red: f64, green: f64, blue: f64) -> Rgb {
        Rgb::new(red, green, blue, OPAQUE).unwrap()
    }

    #[test]
    fn primary_anchors() {
        let red = rgb(255.0, 0.0, 0.0);

        let (h, s, l) = rgb_to_hsl(&red);
        assert_channel_eq!(h, 0.0);
        assert_channel_eq!(s, 100.0);
        assert_channel_eq!(l, 50.0);

        let (h, s, v) = rgb_to_hsv(&red);
        assert_channel_eq!(h, 0.0);
        assert_channel_eq!(s, 100.0);
        assert_channel_eq!(v, 100.0);

        let (c, m, y, k) = rgb_to_cmyk(&red);
        assert_channel_eq!(c, 0.0);
        assert_channel_eq!(m, 100.0);
        assert_channel_eq!(y, 100.0);
        assert_channel_eq!(k, 0.0);

        let (h, s, i) = rgb_to_hsi(&red);
        assert_channel_eq!(h, 0.0);
        assert_channel_eq!(s, 100.0);
        assert_channel_eq!(i, 100.0 / 3.0);

        let (h, s, p) = rgb_to_hsp(&red);
        assert_channel_eq!(h, 0.0);
        assert_channel_eq!(s, 100.0);
        assert_channel_eq!(p, PR.sqrt() * 100.0);
    }

    #[test]
    fn secondary_hues_land_on_their_angles() {
        let yellow = rgb(255.0, 255.0, 0.0);
        assert_channel_eq!(rgb_to_hsl(&yellow).0, 60.0);
        assert_channel_eq!(rgb_to_hsv(&yellow).0, 60.0);
        assert_channel_eq!(rgb_to_hsi(&yellow).0, 60.0);

        let cyan = rgb(0.0, 255.0, 255.0);
        assert_channel_eq!(rgb_to_hsl(&cyan).0, 180.0);

        let blue = rgb(0.0, 0.0, 255.0);
        assert_channel_eq!(rgb_to_hsi(&blue).0, 240.0);
    }

    #[test]
    fn achromatic_colors_have_zero_hue_and_saturation() {
        let gray = rgb(128.0, 128.0, 128.0);

        let (h, s, l) = rgb_to_hsl(&gray);
        assert_channel_eq!(h, 0.0);
        assert_channel_eq!(s, 0.0);
        assert_channel_eq!(l, 128.0 / 255.0 * 100.0);

        let (h, s, _) = rgb_to_hsp(&gray);
        assert_channel_eq!(h, 0.0);
        assert_channel_eq!(s, 0.0);

        let (_, s, i) = rgb_to_hsi(&gray);
        assert_channel_eq!(s, 0.0);
        assert_channel_eq!(i, 128.0 / 255.0 * 100.0);
    }

    #[test]
    fn white_and_black_in_lab() {
        let (l, a, b) = rgb_to_lab(&rgb(255.0, 255.0, 255.0));
        assert_channel_eq!(l, 100.0);
        assert_channel_eq!(a, 0.0);
        assert_channel_eq!(b, 0.0);

        let (l, a, b) = rgb_to_lab(&rgb(0.0, 0.0, 0.0));
        assert_channel_eq!(l, 0.0);
        assert_channel_eq!(a, 0.0);
        assert_channel_eq!(b, 0.0);
    }

    #[test]
    fn white_hits_the_xyz_white_point() {
        let (x, y, z) = rgb_to_xyz(&rgb(255.0, 255.0, 255.0));
        assert_channel_eq!(x, D65_WHITE[0]);
        assert_channel_eq!(y, D65_WHITE[1]);
        assert_channel_eq!(z, D65_WHITE[2]);
    }

    #[test]
    fn every_space_round_trips_through_rgb() {
        let samples = [
            rgb(210.0, 105.0, 30.0),
            rgb(123.0, 45.0, 210.0),
            rgb(0.0, 128.0, 64.0),
            rgb(250.0, 250.0, 5.0),
            rgb(1.0, 2.0, 3.0),
        ];

        for sample in samples {
            for space_trip in [
                Hsl::from_rgb(&sample).to_rgb(),
                Hsv::from_rgb(&sample).to_rgb(),
                Hsi::from_rgb(&sample).to_rgb(),
                Hsp::from_rgb(&sample).to_rgb(),
                Cmyk::from_rgb(&sample).to_rgb(),
                Lab::from_rgb(&sample).to_rgb(),
                Xyz::from_rgb(&sample).to_rgb(),
            ] {
                assert_channel_eq!(space_trip.red(), sample.red());
                assert_channel_eq!(space_trip.green(), sample.green());
                assert_channel_eq!(space_trip.blue(), sample.blue());
            }
        }
    }

    #[test]
    fn hsv_yellow_is_exact_in_integers() {
        let (r, g, b) = hsv_to_rgb(60.0, 100.0, 100.0);
        assert_eq!(r.round(), 255.0);
        assert_eq!(g.round(), 255.0);
        assert_eq!(b.round(), 0.0);
    }

    #[test]
    fn out_of_gamut_lab_clamps_into_the_rgb_cube() {
        // A color far outside what sRGB can represent.
        let (r, g, b) = lab_to_rgb(50.0, -128.0, 127.0);
        for channel in [r, g, b] {
            assert!((0.0..=255.0).contains(&channel));
        }
    }
}
