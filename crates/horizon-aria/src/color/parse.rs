//! Color string parsing.

use std::sync::LazyLock;

use regex::Regex;

use super::ColorParseError;
use super::channel::ColorSpace;
use super::value::Color;

static HEX: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-f]{3,4}|[0-9a-f]{6}|[0-9a-f]{8})$"));

static FUNCTIONAL: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(r"^(rgb|hsl|hsb)(a?)\(\s*([^,()\s]+)\s*,\s*([^,()\s]+)\s*,\s*([^,()\s]+)\s*(?:,\s*([^,()\s]+)\s*)?\)$")
});

pub(super) fn parse(input: &str) -> Result<Color, ColorParseError> {
    let normalized = input.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return Err(ColorParseError::Empty);
    }

    let unrecognized = || ColorParseError::Unrecognized(input.to_string());

    if let Some(caps) = HEX.as_ref().ok().and_then(|re| re.captures(&normalized)) {
        return parse_hex(input, &caps[1]);
    }

    let caps = FUNCTIONAL
        .as_ref()
        .ok()
        .and_then(|re| re.captures(&normalized))
        .ok_or_else(unrecognized)?;

    let space = match &caps[1] {
        "rgb" => ColorSpace::Rgb,
        "hsl" => ColorSpace::Hsl,
        _ => ColorSpace::Hsb,
    };
    let has_alpha_suffix = !caps[2].is_empty();
    let alpha = caps.get(6).map(|m| m.as_str());
    if has_alpha_suffix != alpha.is_some() {
        return Err(unrecognized());
    }

    let component = |name: &'static str, text: &str, max: f64, percent_of: Option<f64>| {
        parse_component(input, name, text, max, percent_of)
    };

    let alpha = match alpha {
        Some(text) => component("alpha", text, 1.0, Some(1.0))?,
        None => 1.0,
    };

    match space {
        ColorSpace::Rgb => Ok(Color::rgba(
            component("red", &caps[3], 255.0, Some(255.0))?,
            component("green", &caps[4], 255.0, Some(255.0))?,
            component("blue", &caps[5], 255.0, Some(255.0))?,
            alpha,
        )),
        ColorSpace::Hsl | ColorSpace::Hsb => {
            let hue = parse_hue(input, &caps[3])?;
            let saturation = component("saturation", &caps[4], 100.0, Some(100.0))?;
            let third_name = if space == ColorSpace::Hsl { "lightness" } else { "brightness" };
            let third = component(third_name, &caps[5], 100.0, Some(100.0))?;
            Ok(if space == ColorSpace::Hsl {
                Color::hsla(hue, saturation, third, alpha)
            } else {
                Color::hsba(hue, saturation, third, alpha)
            })
        }
    }
}

fn parse_hex(input: &str, digits: &str) -> Result<Color, ColorParseError> {
    let expanded: String = if digits.len() <= 4 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    let byte = |index: usize| {
        u8::from_str_radix(&expanded[index * 2..index * 2 + 2], 16).map_err(|_| {
            ColorParseError::InvalidComponent {
                input: input.to_string(),
                component: "hex",
            }
        })
    };

    let alpha = if expanded.len() == 8 { byte(3)? as f64 / 255.0 } else { 1.0 };
    Ok(Color::rgba(byte(0)? as f64, byte(1)? as f64, byte(2)? as f64, round_alpha(alpha)))
}

fn round_alpha(alpha: f64) -> f64 {
    (alpha * 100.0).round() / 100.0
}

fn parse_hue(input: &str, text: &str) -> Result<f64, ColorParseError> {
    let number = text.strip_suffix("deg").unwrap_or(text);
    number
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ColorParseError::InvalidComponent {
            input: input.to_string(),
            component: "hue",
        })
}

/// Parse a number, or a percentage of `percent_of`, and require it to lie in
/// `[0, max]`.
fn parse_component(
    input: &str,
    component: &'static str,
    text: &str,
    max: f64,
    percent_of: Option<f64>,
) -> Result<f64, ColorParseError> {
    let invalid = || ColorParseError::InvalidComponent {
        input: input.to_string(),
        component,
    };

    let value = match (text.strip_suffix('%'), percent_of) {
        (Some(number), Some(scale)) => number.parse::<f64>().map_err(|_| invalid())? / 100.0 * scale,
        (Some(_), None) => return Err(invalid()),
        (None, _) => text.parse::<f64>().map_err(|_| invalid())?,
    };

    if value.is_finite() && (0.0..=max).contains(&value) {
        Ok(value)
    } else {
        Err(invalid())
    }
}
