#![forbid(unsafe_code)]

//! Terminal colors, color profiles, and downsampling between them.
//!
//! A [`Color`] is stored at whatever fidelity it was created with. When lines
//! are serialized for a terminal that supports fewer colors, [`Color::downgrade`]
//! maps it to the nearest representable value.
//!
//! # Example
//! ```
//! use tabula_style::color::{Ansi16, Color, ColorProfile};
//!
//! let coral = Color::rgb(224, 108, 117);
//! assert_eq!(coral.downgrade(ColorProfile::TrueColor), Some(coral));
//! assert!(matches!(coral.downgrade(ColorProfile::Ansi256), Some(Color::Ansi256(_))));
//! assert_eq!(coral.downgrade(ColorProfile::Mono), None);
//! assert_eq!(Color::Ansi16(Ansi16::Red).downgrade(ColorProfile::Ansi256), Some(Color::Ansi16(Ansi16::Red)));
//! ```

/// The color capability of the output terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum ColorProfile {
    /// No color or text attributes at all.
    Mono,
    /// The 16 standard ANSI colors.
    Ansi16,
    /// The xterm 256-color palette.
    Ansi256,
    /// 24-bit RGB.
    #[default]
    TrueColor,
}

impl ColorProfile {
    /// Choose the best profile from capability flags.
    ///
    /// `no_color` reflects explicit user intent (e.g. `NO_COLOR`) and wins.
    #[must_use]
    pub const fn from_flags(true_color: bool, colors_256: bool, no_color: bool) -> Self {
        if no_color {
            Self::Mono
        } else if true_color {
            Self::TrueColor
        } else if colors_256 {
            Self::Ansi256
        } else {
            Self::Ansi16
        }
    }

    /// Whether this profile emits any SGR sequences.
    #[must_use]
    pub const fn has_color(self) -> bool {
        !matches!(self, Self::Mono)
    }
}

/// An opaque 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`. Returns `None` on anything else.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// The 16 standard ANSI colors, by palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Ansi16 {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    BrightBlack = 8,
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

impl Ansi16 {
    const ALL: [Self; 16] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::BrightBlack,
        Self::BrightRed,
        Self::BrightGreen,
        Self::BrightYellow,
        Self::BrightBlue,
        Self::BrightMagenta,
        Self::BrightCyan,
        Self::BrightWhite,
    ];

    /// Palette index (0-15).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Look up a palette index, `None` if out of range.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 16 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// True for indices 8-15.
    #[inline]
    #[must_use]
    pub const fn is_bright(self) -> bool {
        self.index() >= 8
    }
}

/// A color at the fidelity it was specified with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// One of the 16 standard colors.
    Ansi16(Ansi16),
    /// An index into the 256-color palette.
    Ansi256(u8),
    /// A 24-bit color.
    Rgb(Rgb),
}

impl Color {
    /// Shorthand for `Color::Rgb(Rgb::new(r, g, b))`.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(Rgb::new(r, g, b))
    }

    /// The canonical RGB value of this color.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        match self {
            Self::Ansi16(c) => ANSI16_PALETTE[c.index() as usize],
            Self::Ansi256(idx) => ansi256_to_rgb(idx),
            Self::Rgb(rgb) => rgb,
        }
    }

    /// Nearest color among the 16 standard colors.
    #[must_use]
    pub fn to_ansi16(self) -> Ansi16 {
        match self {
            Self::Ansi16(c) => c,
            Self::Ansi256(idx) if idx < 16 => Ansi16::ALL[idx as usize],
            other => {
                let rgb = other.to_rgb();
                rgb_to_ansi16(rgb.r, rgb.g, rgb.b)
            }
        }
    }

    /// Nearest 256-palette index.
    #[must_use]
    pub fn to_ansi256(self) -> u8 {
        match self {
            Self::Ansi16(c) => c.index(),
            Self::Ansi256(idx) => idx,
            Self::Rgb(rgb) => rgb_to_256(rgb.r, rgb.g, rgb.b),
        }
    }

    /// Downsample to what `profile` can display.
    ///
    /// 16-color values pass through every color profile unchanged. Returns
    /// `None` for [`ColorProfile::Mono`].
    #[must_use]
    pub fn downgrade(self, profile: ColorProfile) -> Option<Self> {
        match profile {
            ColorProfile::Mono => None,
            ColorProfile::Ansi16 => Some(Self::Ansi16(self.to_ansi16())),
            ColorProfile::Ansi256 => match self {
                Self::Rgb(rgb) => Some(Self::Ansi256(rgb_to_256(rgb.r, rgb.g, rgb.b))),
                other => Some(other),
            },
            ColorProfile::TrueColor => Some(self),
        }
    }
}

impl From<Ansi16> for Color {
    fn from(color: Ansi16) -> Self {
        Self::Ansi16(color)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

const ANSI16_PALETTE: [Rgb; 16] = [
    Rgb::new(0, 0, 0),
    Rgb::new(205, 0, 0),
    Rgb::new(0, 205, 0),
    Rgb::new(205, 205, 0),
    Rgb::new(0, 0, 238),
    Rgb::new(205, 0, 205),
    Rgb::new(0, 205, 205),
    Rgb::new(229, 229, 229),
    Rgb::new(127, 127, 127),
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(92, 92, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(0, 255, 255),
    Rgb::new(255, 255, 255),
];

const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Nearest 256-palette index for an RGB value.
///
/// Grays map onto the 24-step ramp (232-255); everything else onto the
/// 6x6x6 cube (16-231).
#[must_use]
pub fn rgb_to_256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        return match r {
            0..8 => 16,
            249.. => 231,
            _ => 232 + ((r - 8) / 10).min(23),
        };
    }
    16 + 36 * cube_index(r) + 6 * cube_index(g) + cube_index(b)
}

// Cube levels are not evenly spaced; split on the midpoints between them.
fn cube_index(v: u8) -> u8 {
    match v {
        0..48 => 0,
        48..115 => 1,
        _ => (v - 35) / 40,
    }
}

/// RGB value of a 256-palette index.
#[must_use]
pub fn ansi256_to_rgb(index: u8) -> Rgb {
    match index {
        0..16 => ANSI16_PALETTE[index as usize],
        232.. => {
            let gray = 8 + 10 * (index - 232);
            Rgb::new(gray, gray, gray)
        }
        _ => {
            let idx = index - 16;
            Rgb::new(
                CUBE_LEVELS[(idx / 36) as usize],
                CUBE_LEVELS[((idx / 6) % 6) as usize],
                CUBE_LEVELS[(idx % 6) as usize],
            )
        }
    }
}

/// Nearest standard color by luma-weighted distance.
#[must_use]
pub fn rgb_to_ansi16(r: u8, g: u8, b: u8) -> Ansi16 {
    let target = Rgb::new(r, g, b);
    ANSI16_PALETTE
        .iter()
        .zip(Ansi16::ALL)
        .min_by_key(|(candidate, _)| weighted_distance(target, **candidate))
        .map_or(Ansi16::Black, |(_, color)| color)
}

fn weighted_distance(a: Rgb, b: Rgb) -> u64 {
    let d = |x: u8, y: u8| {
        let diff = i64::from(x) - i64::from(y);
        (diff * diff) as u64
    };
    2126 * d(a.r, b.r) + 7152 * d(a.g, b.g) + 722 * d(a.b, b.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- ColorProfile ---

    #[test]
    fn profile_from_flags_prefers_mono() {
        assert_eq!(ColorProfile::from_flags(true, true, true), ColorProfile::Mono);
        assert_eq!(
            ColorProfile::from_flags(true, false, false),
            ColorProfile::TrueColor
        );
        assert_eq!(
            ColorProfile::from_flags(false, true, false),
            ColorProfile::Ansi256
        );
        assert_eq!(
            ColorProfile::from_flags(false, false, false),
            ColorProfile::Ansi16
        );
    }

    #[test]
    fn profiles_are_ordered_by_fidelity() {
        assert!(ColorProfile::Mono < ColorProfile::Ansi16);
        assert!(ColorProfile::Ansi16 < ColorProfile::Ansi256);
        assert!(ColorProfile::Ansi256 < ColorProfile::TrueColor);
        assert_eq!(ColorProfile::default(), ColorProfile::TrueColor);
    }

    // --- Rgb ---

    #[test]
    fn rgb_from_hex() {
        assert_eq!(Rgb::from_hex("#e06c75"), Some(Rgb::new(0xe0, 0x6c, 0x75)));
        assert_eq!(Rgb::from_hex("98c379"), Some(Rgb::new(0x98, 0xc3, 0x79)));
        assert_eq!(Rgb::from_hex("#fff"), None);
        assert_eq!(Rgb::from_hex("#gg0000"), None);
        assert_eq!(Rgb::from_hex("#ééé"), None);
    }

    // --- Ansi16 ---

    #[test]
    fn ansi16_index_round_trip() {
        for i in 0..16 {
            let c = Ansi16::from_index(i).expect("in range");
            assert_eq!(c.index(), i);
            assert_eq!(c.is_bright(), i >= 8);
        }
        assert_eq!(Ansi16::from_index(16), None);
    }

    // --- 256 palette ---

    #[test]
    fn rgb_to_256_grayscale_ramp() {
        assert_eq!(rgb_to_256(0, 0, 0), 16);
        assert_eq!(rgb_to_256(255, 255, 255), 231);
        assert_eq!(rgb_to_256(128, 128, 128), 244);
    }

    #[test]
    fn rgb_to_256_cube() {
        assert_eq!(rgb_to_256(255, 0, 0), 196);
        assert_eq!(rgb_to_256(0, 255, 0), 46);
        assert_eq!(rgb_to_256(0, 0, 255), 21);
    }

    #[test]
    fn ansi256_to_rgb_covers_all_ranges() {
        assert_eq!(ansi256_to_rgb(1), Rgb::new(205, 0, 0));
        assert_eq!(ansi256_to_rgb(196), Rgb::new(255, 0, 0));
        assert_eq!(ansi256_to_rgb(232), Rgb::new(8, 8, 8));
        assert_eq!(ansi256_to_rgb(255), Rgb::new(238, 238, 238));
    }

    #[test]
    fn cube_colors_survive_round_trip() {
        for idx in 16..=231u8 {
            let rgb = ansi256_to_rgb(idx);
            if rgb.r == rgb.g && rgb.g == rgb.b {
                continue;
            }
            assert_eq!(rgb_to_256(rgb.r, rgb.g, rgb.b), idx, "index {idx}");
        }
    }

    // --- downgrade ---

    #[test]
    fn truecolor_passthrough() {
        let color = Color::rgb(12, 34, 56);
        assert_eq!(color.downgrade(ColorProfile::TrueColor), Some(color));
    }

    #[test]
    fn downgrade_rgb_to_256() {
        assert_eq!(
            Color::rgb(255, 0, 0).downgrade(ColorProfile::Ansi256),
            Some(Color::Ansi256(196))
        );
    }

    #[test]
    fn downgrade_keeps_ansi16_at_256() {
        let c = Color::Ansi16(Ansi16::BrightCyan);
        assert_eq!(c.downgrade(ColorProfile::Ansi256), Some(c));
    }

    #[test]
    fn downgrade_to_16() {
        assert_eq!(
            Color::rgb(250, 5, 5).downgrade(ColorProfile::Ansi16),
            Some(Color::Ansi16(Ansi16::BrightRed))
        );
        assert_eq!(
            Color::Ansi256(2).downgrade(ColorProfile::Ansi16),
            Some(Color::Ansi16(Ansi16::Green))
        );
        assert_eq!(
            Color::Ansi256(16).downgrade(ColorProfile::Ansi16),
            Some(Color::Ansi16(Ansi16::Black))
        );
    }

    #[test]
    fn downgrade_to_mono_drops_color() {
        assert_eq!(Color::rgb(1, 2, 3).downgrade(ColorProfile::Mono), None);
        assert_eq!(
            Color::Ansi16(Ansi16::Red).downgrade(ColorProfile::Mono),
            None
        );
    }

    #[test]
    fn palette_colors_map_to_themselves() {
        for c in Ansi16::ALL {
            let rgb = ANSI16_PALETTE[c.index() as usize];
            assert_eq!(rgb_to_ansi16(rgb.r, rgb.g, rgb.b), c);
        }
    }
}
