//! The capability set shared by every color model.
//!
//! [`Model`] is the per-space plumbing generated by the `color_model!` macro;
//! [`ColorModel`] layers the shared operations on top of it, implemented once
//! in terms of each model's round-trip through the RGB interchange space.
//! Models override a provided method only where a direct path is cheaper.

use rand::Rng;

use crate::color::{Color, ColorError, Space, OPAQUE};
use crate::interpolate::{hue_lerp, lerp};
use crate::math::step_toward;
use crate::models::{Hsl, Rgb};

/// Metadata for one channel of a color space.
///
/// The per-channel tables drive validation, list parsing, extrapolation,
/// random generation, inversion and hue-aware interpolation generically, so
/// none of those operations are repeated per space.
#[derive(Clone, Copy, Debug)]
pub struct Channel {
    /// The channel name, as reported in errors.
    pub name: &'static str,
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound; infinite for channels without one.
    pub max: f64,
    /// Finite full-scale value, used where an upper reference is needed
    /// (extrapolation, random generation, inversion). Equal to `max` for
    /// closed channels.
    pub scale: f64,
    /// Whether this channel is an angle on the color wheel.
    pub is_hue: bool,
}

/// The alpha channel, shared by every space.
pub(crate) const ALPHA: Channel = Channel::linear("alpha", 0.0, 255.0);

impl Channel {
    /// A linear channel with a closed range.
    pub const fn linear(name: &'static str, min: f64, max: f64) -> Self {
        Self {
            name,
            min,
            max,
            scale: max,
            is_hue: false,
        }
    }

    /// A hue channel in degrees.
    pub const fn hue(name: &'static str) -> Self {
        Self {
            name,
            min: 0.0,
            max: 360.0,
            scale: 360.0,
            is_hue: true,
        }
    }

    /// A non-negative channel without an upper validation bound; `scale`
    /// names the nominal full-scale value.
    pub const fn open(name: &'static str, scale: f64) -> Self {
        Self {
            name,
            min: 0.0,
            max: f64::INFINITY,
            scale,
            is_hue: false,
        }
    }

    /// Validate a value against this channel's closed range. NaN is out of
    /// range.
    pub fn check(&self, value: f64) -> Result<(), ColorError> {
        if value >= self.min && value <= self.max {
            Ok(())
        } else {
            Err(ColorError::InvalidChannelValue {
                channel: self.name,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Force a value into this channel's range. Absorbs the float error that
    /// conversion results can carry; strict validation happens in `new`.
    pub(crate) fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    /// Rescale a `[0, 1]` value to this channel's native range.
    pub(crate) fn from_unit(&self, value: f64) -> f64 {
        self.min + value * (self.scale - self.min)
    }

    /// The complement of a value within this channel's range; hue channels
    /// rotate 180 degrees instead.
    pub(crate) fn complement(&self, value: f64) -> f64 {
        if self.is_hue {
            crate::math::normalize_hue(value + 180.0)
        } else {
            self.min + self.scale - value
        }
    }
}

/// Per-space model plumbing, implemented by the `color_model!` macro for
/// every color space struct.
pub trait Model: Sized {
    /// The space discriminant for this model.
    const SPACE: Space;
    /// Channel metadata, in declaration order, without alpha.
    const CHANNELS: &'static [Channel];

    /// The stored channel values, in declaration order, without alpha.
    fn channels(&self) -> Vec<f64>;

    /// The alpha channel.
    fn alpha(&self) -> u8;

    /// Return a copy with the alpha channel replaced.
    fn with_alpha(&self, alpha: u8) -> Self;

    /// Build a model from channel values in declaration order, forcing each
    /// into its channel range. Conversion results go through here so float
    /// error just outside a bound cannot poison a value; strict validation
    /// is the constructor's job.
    fn from_channels(values: &[f64], alpha: u8) -> Self;

    /// The space discriminant of this value.
    fn space(&self) -> Space {
        Self::SPACE
    }
}

/// The capability set shared by every color model.
///
/// Conversions between two spaces always run through RGB: N spaces need only
/// the 2N formulas against RGB instead of N squared direct paths. The small
/// precision cost is mitigated by RGB storing unrounded channels.
pub trait ColorModel: Model + Copy + Into<Color> {
    /// Convert this model to RGB, carrying the alpha channel. Identity for
    /// RGB itself.
    fn to_rgb(&self) -> Rgb;

    /// Build this model from an RGB value, keeping its alpha.
    fn from_rgb(rgb: &Rgb) -> Self;

    /// Convert any model into this space.
    ///
    /// A source already in this space is reconstructed from its stored
    /// channels without an RGB round-trip, so the identity conversion is
    /// lossless.
    fn from_model(other: &impl ColorModel) -> Self {
        if other.space() == Self::SPACE {
            Self::from_channels(&other.channels(), other.alpha())
        } else {
            Self::from_rgb(&other.to_rgb())
        }
    }

    /// Build this model from a [`Color`] of any space.
    fn from_color(color: &Color) -> Self {
        if color.space() == Self::SPACE {
            Self::from_channels(&color.channels(), color.alpha())
        } else {
            Self::from_rgb(&color.to_rgb())
        }
    }

    /// Convert this model into another space.
    fn convert<T: ColorModel>(&self) -> T {
        T::from_model(self)
    }

    /// Build this model from a list of channel values in their native
    /// ranges, optionally followed by an alpha value in `[0, 255]`.
    ///
    /// An empty list fails with [`ColorError::MissingInput`]; any other
    /// length besides N and N+1 fails with [`ColorError::InvalidListLength`].
    fn from_list(values: &[f64]) -> Result<Self, ColorError> {
        let count = Self::CHANNELS.len();
        if values.is_empty() {
            return Err(ColorError::MissingInput);
        }
        if values.len() != count && values.len() != count + 1 {
            return Err(ColorError::InvalidListLength {
                expected: count,
                found: values.len(),
            });
        }

        for (channel, &value) in Self::CHANNELS.iter().zip(values) {
            channel.check(value)?;
        }
        let alpha = match values.get(count) {
            Some(&alpha) => {
                ALPHA.check(alpha)?;
                alpha.round() as u8
            }
            None => OPAQUE,
        };

        Ok(Self::from_channels(&values[..count], alpha))
    }

    /// Build this model from channel values normalized to `[0, 1]`, each
    /// rescaled to its native range, optionally followed by a normalized
    /// alpha. Length rules are the same as [`ColorModel::from_list`].
    fn extrapolate(values: &[f64]) -> Result<Self, ColorError> {
        let count = Self::CHANNELS.len();
        if values.is_empty() {
            return Err(ColorError::MissingInput);
        }
        if values.len() != count && values.len() != count + 1 {
            return Err(ColorError::InvalidListLength {
                expected: count,
                found: values.len(),
            });
        }

        for (channel, &value) in Self::CHANNELS.iter().zip(values) {
            if !(0.0..=1.0).contains(&value) {
                return Err(ColorError::InvalidChannelValue {
                    channel: channel.name,
                    value,
                    min: 0.0,
                    max: 1.0,
                });
            }
        }
        let scaled = Self::CHANNELS
            .iter()
            .zip(values)
            .map(|(channel, &value)| channel.from_unit(value))
            .collect::<Vec<_>>();
        let alpha = match values.get(count) {
            Some(&alpha) => {
                if !(0.0..=1.0).contains(&alpha) {
                    return Err(ColorError::InvalidChannelValue {
                        channel: ALPHA.name,
                        value: alpha,
                        min: 0.0,
                        max: 1.0,
                    });
                }
                (alpha * 255.0).round() as u8
            }
            None => OPAQUE,
        };

        Ok(Self::from_channels(&scaled, alpha))
    }

    /// Parse a 3- or 6-digit hex string and convert the result into this
    /// space.
    fn from_hex(hex: &str) -> Result<Self, ColorError> {
        Ok(Self::from_rgb(&Rgb::from_hex(hex)?))
    }

    /// Generate a fully opaque color with every channel drawn uniformly from
    /// its full range.
    fn random() -> Self {
        let mut rng = rand::thread_rng();
        let values = Self::CHANNELS
            .iter()
            .map(|channel| rng.gen_range(channel.min..=channel.scale))
            .collect::<Vec<_>>();
        Self::from_channels(&values, OPAQUE)
    }

    /// Generate a fully opaque color with each channel drawn uniformly from
    /// its `[min, max]` bound pair.
    ///
    /// Each bound pair must satisfy `min <= max` and lie within the
    /// channel's valid range, or the call fails with
    /// [`ColorError::InvalidBounds`].
    fn random_in(min: &[f64], max: &[f64]) -> Result<Self, ColorError> {
        let count = Self::CHANNELS.len();
        if min.len() != count {
            return Err(ColorError::InvalidListLength {
                expected: count,
                found: min.len(),
            });
        }
        if max.len() != count {
            return Err(ColorError::InvalidListLength {
                expected: count,
                found: max.len(),
            });
        }

        let mut rng = rand::thread_rng();
        let mut values = Vec::with_capacity(count);
        for ((channel, &lo), &hi) in Self::CHANNELS.iter().zip(min).zip(max) {
            if !(lo <= hi) || channel.check(lo).is_err() || channel.check(hi).is_err() {
                return Err(ColorError::InvalidBounds {
                    channel: channel.name,
                    min: lo,
                    max: hi,
                });
            }
            values.push(rng.gen_range(lo..=hi));
        }
        Ok(Self::from_channels(&values, OPAQUE))
    }

    /// Return this color with its hue rotated by `degrees` on the color
    /// wheel. Routed through HSL; HSL itself overrides this with the direct
    /// path.
    fn rotate_hue(&self, degrees: f64) -> Self {
        let hsl = Hsl::from_rgb(&self.to_rgb()).rotate_hue(degrees);
        Self::from_rgb(&hsl.to_rgb())
    }

    /// Return this color rotated halfway across the color wheel. Equivalent
    /// to `rotate_hue(180.0)`.
    fn opposite(&self) -> Self {
        self.rotate_hue(180.0)
    }

    /// Return this color with its hue rotated up to `degrees` toward the
    /// warm pole at 90, never overshooting it.
    ///
    /// # Panics
    ///
    /// Panics if `degrees` is negative.
    fn warmer(&self, degrees: f64) -> Self {
        assert!(degrees >= 0.0, "adjustment amount must be non-negative");
        let hsl = Hsl::from_rgb(&self.to_rgb());
        self.rotate_hue(step_toward(hsl.hue(), 90.0, degrees))
    }

    /// Return this color with its hue rotated up to `degrees` toward the
    /// cool pole at 270, never overshooting it.
    ///
    /// # Panics
    ///
    /// Panics if `degrees` is negative.
    fn cooler(&self, degrees: f64) -> Self {
        assert!(degrees >= 0.0, "adjustment amount must be non-negative");
        let hsl = Hsl::from_rgb(&self.to_rgb());
        self.rotate_hue(step_toward(hsl.hue(), 270.0, degrees))
    }

    /// Return the complement of this color: every channel mirrored within
    /// its range, hue channels rotated 180 degrees instead.
    fn inverted(&self) -> Self {
        let values = Self::CHANNELS
            .iter()
            .zip(self.channels())
            .map(|(channel, value)| channel.complement(value))
            .collect::<Vec<_>>();
        Self::from_channels(&values, self.alpha())
    }

    /// Produce `steps` colors evenly interpolated between this color and
    /// `other`, converted into this space. The two endpoints are prepended
    /// and appended unless `exclude_endpoints` is set.
    ///
    /// Linear channels interpolate monotonically; hue channels follow the
    /// circular shortest path. Alpha is interpolated and rounded.
    fn interpolate_to<T: ColorModel>(
        &self,
        other: &T,
        steps: usize,
        exclude_endpoints: bool,
    ) -> Vec<Self> {
        let end = Self::from_model(other);
        let start = self.channels();
        let finish = end.channels();

        let mut colors = Vec::with_capacity(steps + 2);
        if !exclude_endpoints {
            colors.push(*self);
        }
        for step in 1..=steps {
            let t = step as f64 / (steps + 1) as f64;
            let values = Self::CHANNELS
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
            let alpha = lerp(self.alpha() as f64, end.alpha() as f64, t).round() as u8;
            colors.push(Self::from_channels(&values, alpha));
        }
        if !exclude_endpoints {
            colors.push(end);
        }
        colors
    }

    /// Cast this color to packed 8-bit RGBA channels, converting to RGB
    /// first. Channels round half away from zero.
    fn to_rgba8(&self) -> [u8; 4] {
        let rgb = self.to_rgb();
        [rgb.red8(), rgb.green8(), rgb.blue8(), rgb.alpha()]
    }

    /// Cast packed 8-bit RGBA channels into this space.
    fn from_rgba8(rgba: [u8; 4]) -> Self {
        let [red, green, blue, alpha] = rgba;
        Self::from_rgb(&Rgb::from_channels(
            &[red as f64, green as f64, blue as f64],
            alpha,
        ))
    }
}
