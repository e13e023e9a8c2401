//! The immutable color value.

use std::str::FromStr;

use horizon_aria_core::logging::targets;

use super::ColorParseError;
use super::channel::{ChannelRange, ColorChannel, ColorFormat, ColorSpace};
use super::convert::{convert, normalize_hue, round_to};

/// An immutable color with an alpha channel, stored in one [`ColorSpace`].
///
/// Every modification returns a new value. Channels use display units: RGB
/// 0-255, hue in degrees, saturation/lightness/brightness in percent and
/// alpha 0-1.
///
/// # Example
///
/// ```
/// use horizon_aria::color::{Color, ColorChannel, ColorFormat, ColorSpace};
///
/// let red = Color::parse("hsl(0, 100%, 50%)")?;
/// let green = red.with_channel_value(ColorChannel::Hue, 120.0);
///
/// assert_eq!(red.channel_value(ColorChannel::Hue), 0.0);
/// assert_eq!(green.to_string(ColorFormat::Hex), "#00FF00");
/// assert_eq!(green.to_format(ColorSpace::Rgb).channel_value(ColorChannel::Green), 255.0);
/// # Ok::<(), horizon_aria::color::ColorParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    space: ColorSpace,
    channels: [f64; 3],
    alpha: f64,
}

impl Color {
    fn from_parts(space: ColorSpace, channels: [f64; 3], alpha: f64) -> Self {
        let mut color = Self {
            space,
            channels,
            alpha: ColorChannel::Alpha.range().clamp(alpha),
        };
        for (index, channel) in space.channels().into_iter().enumerate() {
            color.channels[index] = channel.range().clamp(color.channels[index]);
        }
        color
    }

    /// An opaque RGB color.
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// An RGB color with alpha.
    pub fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self::from_parts(ColorSpace::Rgb, [red, green, blue], alpha)
    }

    /// An opaque HSL color.
    pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self::hsla(hue, saturation, lightness, 1.0)
    }

    /// An HSL color with alpha. The hue wraps into `[0, 360)`.
    pub fn hsla(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self::from_parts(ColorSpace::Hsl, [normalize_hue(hue), saturation, lightness], alpha)
    }

    /// An opaque HSB color.
    pub fn hsb(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self::hsba(hue, saturation, brightness, 1.0)
    }

    /// An HSB color with alpha. The hue wraps into `[0, 360)`.
    pub fn hsba(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        Self::from_parts(ColorSpace::Hsb, [normalize_hue(hue), saturation, brightness], alpha)
    }

    /// Parse a color string.
    ///
    /// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()`, `rgba()`,
    /// `hsl()`, `hsla()`, `hsb()` and `hsba()`.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let result = super::parse::parse(input);
        if let Err(err) = &result {
            tracing::debug!(target: targets::COLOR, input, error = %err, "color parse failed");
        }
        result
    }

    /// The space the channels are stored in.
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// The alpha channel, 0-1.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Read a channel.
    ///
    /// Channels absent from the stored space are read from a converted copy:
    /// hue, saturation and lightness from HSL, brightness from HSB and
    /// red/green/blue from RGB. An HSB color therefore reports its own
    /// saturation, while an RGB color reports HSL saturation.
    pub fn channel_value(&self, channel: ColorChannel) -> f64 {
        if channel == ColorChannel::Alpha {
            return self.alpha;
        }
        match self.space.index_of(channel) {
            Some(index) => self.channels[index],
            None => self.to_format(channel.home_space()).channel_value(channel),
        }
    }

    /// Bounds and step sizes for editing `channel`.
    pub fn channel_range(&self, channel: ColorChannel) -> ChannelRange {
        channel.range()
    }

    /// Return a copy with one channel replaced, clamped to the channel range.
    ///
    /// The result stays in the stored space; a foreign channel is set on a
    /// converted copy which is then converted back.
    pub fn with_channel_value(&self, channel: ColorChannel, value: f64) -> Self {
        let value = channel.range().clamp(value);
        if channel == ColorChannel::Alpha {
            return Self { alpha: value, ..*self };
        }
        match self.space.index_of(channel) {
            Some(index) => {
                let mut channels = self.channels;
                channels[index] = value;
                Self { channels, ..*self }
            }
            None => self
                .to_format(channel.home_space())
                .with_channel_value(channel, value)
                .to_format(self.space),
        }
    }

    /// Convert to another color space. Alpha is kept.
    pub fn to_format(&self, space: ColorSpace) -> Self {
        Self {
            space,
            channels: convert(self.space, space, self.channels),
            alpha: self.alpha,
        }
    }

    /// Format a channel value for display, e.g. "90°", "50%" or "128".
    pub fn format_channel_value(&self, channel: ColorChannel) -> String {
        let value = self.channel_value(channel);
        match channel {
            ColorChannel::Hue => format!("{}°", number(value)),
            ColorChannel::Saturation | ColorChannel::Lightness | ColorChannel::Brightness => {
                format!("{}%", number(value))
            }
            ColorChannel::Alpha => format!("{}%", number(value * 100.0)),
            ColorChannel::Red | ColorChannel::Green | ColorChannel::Blue => number(value.round()),
        }
    }

    /// Serialize in the given format.
    pub fn to_string(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::Hex => {
                let [r, g, b] = self.rgb8();
                format!("#{r:02X}{g:02X}{b:02X}")
            }
            ColorFormat::Hexa => {
                let [r, g, b] = self.rgb8();
                let a = (self.alpha * 255.0).round() as u8;
                format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
            }
            ColorFormat::Rgb => {
                let [r, g, b] = self.rgb8();
                format!("rgb({r}, {g}, {b})")
            }
            ColorFormat::Rgba => {
                let [r, g, b] = self.rgb8();
                format!("rgba({r}, {g}, {b}, {})", number(self.alpha))
            }
            ColorFormat::Hsl => {
                let [h, s, l] = self.to_format(ColorSpace::Hsl).channels;
                format!("hsl({}, {}%, {}%)", number(h), number(s), number(l))
            }
            ColorFormat::Hsla => {
                let [h, s, l] = self.to_format(ColorSpace::Hsl).channels;
                format!("hsla({}, {}%, {}%, {})", number(h), number(s), number(l), number(self.alpha))
            }
            ColorFormat::Hsb => {
                let [h, s, b] = self.to_format(ColorSpace::Hsb).channels;
                format!("hsb({}, {}%, {}%)", number(h), number(s), number(b))
            }
            ColorFormat::Hsba => {
                let [h, s, b] = self.to_format(ColorSpace::Hsb).channels;
                format!("hsba({}, {}%, {}%, {})", number(h), number(s), number(b), number(self.alpha))
            }
            ColorFormat::Css => match self.space {
                ColorSpace::Rgb => self.to_string(ColorFormat::Rgba),
                ColorSpace::Hsl | ColorSpace::Hsb => self.to_string(ColorFormat::Hsla),
            },
        }
    }

    fn rgb8(&self) -> [u8; 3] {
        let [r, g, b] = self.to_format(ColorSpace::Rgb).channels;
        [r.round() as u8, g.round() as u8, b.round() as u8]
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Shortest decimal rendering with at most two fractional digits.
fn number(value: f64) -> String {
    let rounded = round_to(value, 2);
    if rounded == 0.0 {
        // Avoid "-0".
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}
