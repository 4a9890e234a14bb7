//! WCAG 2.x relative luminance and contrast ratio.

use std::fmt;

use thiserror::Error;

const LINEAR_THRESHOLD: f64 = 0.03928;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color must start with '#'")]
    MissingHash,
    #[error("expected 3 or 6 hex digits, got {0}")]
    BadLength(usize),
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` or the `#rgb` shorthand.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').ok_or(ColorParseError::MissingHash)?;
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            n => return Err(ColorParseError::BadLength(n)),
        };
        // from_str_radix alone would let a sign through ("+f").
        if !expanded.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(hex.to_string()));
        }
        let channel = |i: usize| {
            expanded
                .get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| ColorParseError::BadDigit(hex.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn luminance(self) -> f64 {
        relative_luminance(self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= LINEAR_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

/// Symmetric; ranges from 1 (same luminance) to 21 (black on white).
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = a.luminance();
    let lb = b.luminance();
    let brightest = la.max(lb);
    let darkest = la.min(lb);
    (brightest + 0.05) / (darkest + 0.05)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WcagLevel {
    #[default]
    AA,
    AAA,
}

impl WcagLevel {
    pub fn threshold(self) -> f64 {
        match self {
            WcagLevel::AA => 4.5,
            WcagLevel::AAA => 7.0,
        }
    }
}

pub fn meets_wcag(ratio: f64, level: WcagLevel) -> bool {
    ratio >= level.threshold()
}

/// Black or white, whichever reads better on `background`.
pub fn best_text_color(background: Rgb) -> Rgb {
    if contrast_ratio(Rgb::BLACK, background) >= contrast_ratio(Rgb::WHITE, background) {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_on_black_is_twenty_one() {
        let ratio = contrast_ratio(Rgb::WHITE, Rgb::BLACK);
        assert!((ratio - 21.0).abs() < 1e-9);
    }

    #[test]
    fn ratio_is_symmetric() {
        let pairs = [
            (Rgb::new(34, 197, 94), Rgb::WHITE),
            (Rgb::new(18, 52, 86), Rgb::new(250, 128, 114)),
            (Rgb::new(0, 0, 0), Rgb::new(119, 119, 119)),
        ];
        for (a, b) in pairs {
            assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        }
        assert_eq!(contrast_ratio(Rgb::BLACK, Rgb::BLACK), 1.0);
    }

    #[test]
    fn luminance_uses_piecewise_gamma() {
        assert_eq!(relative_luminance(0, 0, 0), 0.0);
        assert!((relative_luminance(255, 255, 255) - 1.0).abs() < 1e-12);
        // 10/255 sits below the linear threshold
        assert!((relative_luminance(10, 10, 10) - (10.0 / 255.0) / 12.92).abs() < 1e-12);
        assert!(relative_luminance(0, 255, 0) > relative_luminance(255, 0, 0));
    }

    #[test]
    fn wcag_thresholds() {
        assert!(meets_wcag(4.5, WcagLevel::AA));
        assert!(!meets_wcag(4.49, WcagLevel::AA));
        assert!(!meets_wcag(6.99, WcagLevel::AAA));
        assert!(meets_wcag(7.0, WcagLevel::AAA));
        // #767676 on white is the classic AA boundary grey
        let grey = contrast_ratio(Rgb::from_hex("#767676").unwrap(), Rgb::WHITE);
        assert!(meets_wcag(grey, WcagLevel::AA));
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(Rgb::from_hex("#22c55e"), Ok(Rgb::new(0x22, 0xc5, 0x5e)));
        assert_eq!(Rgb::from_hex("#fff"), Ok(Rgb::WHITE));
        assert_eq!(Rgb::from_hex("fff"), Err(ColorParseError::MissingHash));
        assert_eq!(Rgb::from_hex("#ffff"), Err(ColorParseError::BadLength(4)));
        assert!(matches!(Rgb::from_hex("#gg0000"), Err(ColorParseError::BadDigit(_))));
    }

    #[test]
    fn signed_digits_are_not_hex() {
        assert_eq!(
            Rgb::from_hex("#+f+f+f"),
            Err(ColorParseError::BadDigit("#+f+f+f".to_string()))
        );
        assert!(matches!(Rgb::from_hex("#+ff"), Err(ColorParseError::BadDigit(_))));
        assert!(matches!(Rgb::from_hex("#-10000"), Err(ColorParseError::BadDigit(_))));
    }

    #[test]
    fn best_text_color_picks_the_stronger_contrast() {
        assert_eq!(best_text_color(Rgb::from_hex("#0f172a").unwrap()), Rgb::WHITE);
        assert_eq!(best_text_color(Rgb::from_hex("#fef08a").unwrap()), Rgb::BLACK);
        assert_eq!(Rgb::new(0x15, 0x80, 0x3d).to_string(), "#15803d");
    }
}
