//! One module per color model.
//!
//! The [`color_model!`] macro generates the struct, the validating
//! constructor, the per-channel accessors and `with_` builders, and the
//! [`Model`](crate::model::Model) plumbing every space shares. The per-space
//! conversion against RGB stays hand-written in each module.

pub mod cmyk;
pub mod hsi;
pub mod hsl;
pub mod hsp;
pub mod hsv;
pub mod lab;
pub mod rgb;
pub mod xyz;

pub use cmyk::Cmyk;
pub use hsi::Hsi;
pub use hsl::Hsl;
pub use hsp::Hsp;
pub use hsv::{Hsb, Hsv};
pub use lab::Lab;
pub use rgb::Rgb;
pub use xyz::Xyz;

/// Generate a color model struct and its shared plumbing.
///
/// Channels are listed in declaration order as
/// `field / with_builder => channel metadata`.
macro_rules! color_model {
    (
        $(#[$meta:meta])*
        $name:ident, $space:ident {
            $( $field:ident / $with:ident => $channel:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub struct $name {
            $( $field: f64, )+
            alpha: u8,
        }

        impl $name {
            #[doc = concat!("Create a new `", stringify!($name), "` from channel values in their native ranges.")]
            ///
            /// Fails with
            /// [`ColorError::InvalidChannelValue`](crate::ColorError::InvalidChannelValue)
            /// if any channel lies outside its documented closed range.
            pub fn new($($field: f64,)+ alpha: u8) -> Result<Self, $crate::color::ColorError> {
                $( ($channel).check($field)?; )+
                Ok(Self { $($field,)+ alpha })
            }

            $(
                #[doc = concat!("The stored ", stringify!($field), " channel value.")]
                pub fn $field(&self) -> f64 {
                    self.$field
                }

                #[doc = concat!("Return a copy with the ", stringify!($field), " channel replaced, validated like the constructor.")]
                pub fn $with(&self, value: f64) -> Result<Self, $crate::color::ColorError> {
                    ($channel).check(value)?;
                    Ok(Self { $field: value, ..*self })
                }
            )+
        }

        impl $crate::model::Model for $name {
            const SPACE: $crate::color::Space = $crate::color::Space::$space;
            const CHANNELS: &'static [$crate::model::Channel] = &[ $($channel),+ ];

            fn channels(&self) -> Vec<f64> {
                vec![ $(self.$field),+ ]
            }

            fn alpha(&self) -> u8 {
                self.alpha
            }

            fn with_alpha(&self, alpha: u8) -> Self {
                Self { alpha, ..*self }
            }

            fn from_channels(values: &[f64], alpha: u8) -> Self {
                let mut values = values.iter().copied();
                Self {
                    $( $field: ($channel).clamp(values.next().unwrap_or(0.0)), )+
                    alpha,
                }
            }
        }
    };
}

pub(crate) use color_model;
