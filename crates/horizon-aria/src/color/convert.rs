//! Conversions between color spaces.
//!
//! Channels use display units: RGB 0-255, hue in degrees, saturation,
//! lightness and brightness in percent. RGB results are rounded to whole
//! numbers and the others to two decimals, so repeated conversions do not
//! accumulate noise. HSL and HSB convert directly into each other, which
//! keeps the hue of grays intact.

use super::channel::ColorSpace;

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Normalize an angle into `[0, 360)`.
pub(crate) fn normalize_hue(hue: f64) -> f64 {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs.
    if hue >= 360.0 { 0.0 } else { hue }
}

pub(crate) fn convert(from: ColorSpace, to: ColorSpace, c: [f64; 3]) -> [f64; 3] {
    match (from, to) {
        (a, b) if a == b => c,
        (ColorSpace::Hsl, ColorSpace::Hsb) => hsl_to_hsb(c),
        (ColorSpace::Hsb, ColorSpace::Hsl) => hsb_to_hsl(c),
        (ColorSpace::Hsl, ColorSpace::Rgb) => hsl_to_rgb(c),
        (ColorSpace::Hsb, ColorSpace::Rgb) => hsb_to_rgb(c),
        (ColorSpace::Rgb, ColorSpace::Hsl) => rgb_to_hsl(c),
        (ColorSpace::Rgb, ColorSpace::Hsb) => rgb_to_hsb(c),
        // Unreachable: equal spaces are handled by the first arm.
        _ => c,
    }
}

fn hsl_to_rgb([h, s, l]: [f64; 3]) -> [f64; 3] {
    let (s, l) = (s / 100.0, l / 100.0);
    let a = s * l.min(1.0 - l);
    let f = |n: f64| {
        let k = (n + h / 30.0).rem_euclid(12.0);
        let v = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (v * 255.0).round()
    };
    [f(0.0), f(8.0), f(4.0)]
}

fn hsb_to_rgb([h, s, b]: [f64; 3]) -> [f64; 3] {
    let (s, v) = (s / 100.0, b / 100.0);
    let f = |n: f64| {
        let k = (n + h / 60.0).rem_euclid(6.0);
        let c = v - v * s * k.min(4.0 - k).min(1.0).max(0.0);
        (c * 255.0).round()
    };
    [f(5.0), f(3.0), f(1.0)]
}

fn rgb_hue(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let hue = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    normalize_hue(round_to(hue * 60.0, 2))
}

fn rgb_to_hsl([r, g, b]: [f64; 3]) -> [f64; 3] {
    let (r, g, b) = (r / 255.0, g / 255.0, b / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };
    [
        rgb_hue(r, g, b, max, delta),
        round_to(s * 100.0, 2),
        round_to(l * 100.0, 2),
    ]
}

fn rgb_to_hsb([r, g, b]: [f64; 3]) -> [f64; 3] {
    let (r, g, b) = (r / 255.0, g / 255.0, b / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let s = if max == 0.0 { 0.0 } else { delta / max };
    [
        rgb_hue(r, g, b, max, delta),
        round_to(s * 100.0, 2),
        round_to(max * 100.0, 2),
    ]
}

fn hsl_to_hsb([h, s, l]: [f64; 3]) -> [f64; 3] {
    let (s, l) = (s / 100.0, l / 100.0);
    let v = l + s * l.min(1.0 - l);
    let sv = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };
    [h, round_to(sv * 100.0, 2), round_to(v * 100.0, 2)]
}

fn hsb_to_hsl([h, s, b]: [f64; 3]) -> [f64; 3] {
    let (s, v) = (s / 100.0, b / 100.0);
    let l = v * (1.0 - s / 2.0);
    let sl = if l == 0.0 || l == 1.0 {
        0.0
    } else {
        (v - l) / l.min(1.0 - l)
    };
    [h, round_to(sl * 100.0, 2), round_to(l * 100.0, 2)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors() {
        assert_eq!(convert(ColorSpace::Hsl, ColorSpace::Rgb, [0.0, 100.0, 50.0]), [255.0, 0.0, 0.0]);
        assert_eq!(convert(ColorSpace::Hsl, ColorSpace::Rgb, [120.0, 100.0, 50.0]), [0.0, 255.0, 0.0]);
        assert_eq!(convert(ColorSpace::Hsb, ColorSpace::Rgb, [240.0, 100.0, 100.0]), [0.0, 0.0, 255.0]);
        assert_eq!(convert(ColorSpace::Rgb, ColorSpace::Hsl, [0.0, 0.0, 255.0]), [240.0, 100.0, 50.0]);
        assert_eq!(convert(ColorSpace::Rgb, ColorSpace::Hsb, [255.0, 255.0, 0.0]), [60.0, 100.0, 100.0]);
    }

    #[test]
    fn test_grays() {
        assert_eq!(convert(ColorSpace::Rgb, ColorSpace::Hsl, [128.0, 128.0, 128.0])[1], 0.0);
        assert_eq!(convert(ColorSpace::Hsl, ColorSpace::Rgb, [200.0, 0.0, 100.0]), [255.0, 255.0, 255.0]);
    }

    #[test]
    fn test_hsl_hsb_keeps_hue() {
        assert_eq!(convert(ColorSpace::Hsl, ColorSpace::Hsb, [210.0, 0.0, 0.0])[0], 210.0);
        assert_eq!(convert(ColorSpace::Hsl, ColorSpace::Hsb, [0.0, 100.0, 50.0]), [0.0, 100.0, 100.0]);
        assert_eq!(convert(ColorSpace::Hsb, ColorSpace::Hsl, [0.0, 100.0, 100.0]), [0.0, 100.0, 50.0]);
    }

    #[test]
    fn test_normalize_hue() {
        assert_eq!(normalize_hue(-1.0), 359.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(725.0), 5.0);
    }
}
