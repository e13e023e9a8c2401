//! Color spaces, channels and output formats.

use std::fmt;

use crate::i18n::{I18nError, LocalizedStringFormatter};

/// The space a [`Color`](super::Color) stores its channels in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Red, green, blue (0-255).
    Rgb,
    /// Hue (degrees), saturation and lightness (percent).
    Hsl,
    /// Hue (degrees), saturation and brightness (percent).
    Hsb,
}

impl ColorSpace {
    /// The three color channels of this space, in order.
    pub fn channels(self) -> [ColorChannel; 3] {
        match self {
            ColorSpace::Rgb => [ColorChannel::Red, ColorChannel::Green, ColorChannel::Blue],
            ColorSpace::Hsl => [ColorChannel::Hue, ColorChannel::Saturation, ColorChannel::Lightness],
            ColorSpace::Hsb => [ColorChannel::Hue, ColorChannel::Saturation, ColorChannel::Brightness],
        }
    }

    /// Index of `channel` within this space, `None` for alpha or foreign
    /// channels.
    pub(crate) fn index_of(self, channel: ColorChannel) -> Option<usize> {
        self.channels().iter().position(|c| *c == channel)
    }
}

/// One scalar component of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
    Hue,
    Saturation,
    Lightness,
    Brightness,
    Alpha,
}

/// Bounds and step sizes of a channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRange {
    pub min: f64,
    pub max: f64,
    /// Increment for arrow keys.
    pub step: f64,
    /// Increment for Page Up/Down and Shift+Arrow.
    pub page_step: f64,
}

impl ChannelRange {
    /// Clamp `value` into `[min, max]`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

impl ColorChannel {
    /// Every channel.
    pub const ALL: [ColorChannel; 8] = [
        ColorChannel::Red,
        ColorChannel::Green,
        ColorChannel::Blue,
        ColorChannel::Hue,
        ColorChannel::Saturation,
        ColorChannel::Lightness,
        ColorChannel::Brightness,
        ColorChannel::Alpha,
    ];

    /// The catalog key and lowercase name of the channel.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorChannel::Red => "red",
            ColorChannel::Green => "green",
            ColorChannel::Blue => "blue",
            ColorChannel::Hue => "hue",
            ColorChannel::Saturation => "saturation",
            ColorChannel::Lightness => "lightness",
            ColorChannel::Brightness => "brightness",
            ColorChannel::Alpha => "alpha",
        }
    }

    /// The space this channel is read from when the color is stored in a
    /// space that lacks it. Alpha exists in every space.
    pub(crate) fn home_space(self) -> ColorSpace {
        match self {
            ColorChannel::Red | ColorChannel::Green | ColorChannel::Blue => ColorSpace::Rgb,
            ColorChannel::Brightness => ColorSpace::Hsb,
            _ => ColorSpace::Hsl,
        }
    }

    /// Bounds and step sizes of the channel.
    pub fn range(self) -> ChannelRange {
        match self {
            ColorChannel::Hue => ChannelRange {
                min: 0.0,
                max: 360.0,
                step: 1.0,
                page_step: 15.0,
            },
            ColorChannel::Saturation | ColorChannel::Lightness | ColorChannel::Brightness => ChannelRange {
                min: 0.0,
                max: 100.0,
                step: 1.0,
                page_step: 10.0,
            },
            ColorChannel::Red | ColorChannel::Green | ColorChannel::Blue => ChannelRange {
                min: 0.0,
                max: 255.0,
                step: 1.0,
                page_step: 17.0,
            },
            ColorChannel::Alpha => ChannelRange {
                min: 0.0,
                max: 1.0,
                step: 0.01,
                page_step: 0.1,
            },
        }
    }

    /// The localized channel name, e.g. "Hue" or "Farbton".
    pub fn localized_name(self, formatter: &LocalizedStringFormatter) -> Result<String, I18nError> {
        formatter.format(self.as_str(), &[])
    }
}

impl fmt::Display for ColorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// String formats accepted by [`Color::to_string`](super::Color::to_string).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// `#RRGGBB`
    Hex,
    /// `#RRGGBBAA`
    Hexa,
    /// `rgb(r, g, b)`
    Rgb,
    /// `rgba(r, g, b, a)`
    Rgba,
    /// `hsl(h, s%, l%)`
    Hsl,
    /// `hsla(h, s%, l%, a)`
    Hsla,
    /// `hsb(h, s%, b%)`
    Hsb,
    /// `hsba(h, s%, b%, a)`
    Hsba,
    /// A CSS color in the stored space (`rgba()` or `hsla()`); HSB colors are
    /// converted to HSL because CSS has no HSB notation.
    Css,
}
