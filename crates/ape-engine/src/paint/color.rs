use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use bytemuck::{Pod, Zeroable};

use super::known;

/// 32-bit straight-alpha RGBA color, one byte per channel.
///
/// Math on colors never fails: interpolation factors and normalized channel
/// inputs are clamped into range instead of rejected.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// All channels zero (transparent black).
    pub const EMPTY: Color = Color::new(0, 0, 0, 0);
    pub const WHITE: Color = known::WHITE;
    pub const BLACK: Color = known::BLACK;

    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self { red, green, blue, alpha }
    }

    /// Opaque color from red, green and blue.
    #[inline]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 255)
    }

    /// Every channel, alpha included, set to `v`.
    #[inline]
    pub const fn splat(v: u8) -> Self {
        Self::new(v, v, v, v)
    }

    /// Gray level `v` with an explicit alpha.
    #[inline]
    pub const fn gray(v: u8, alpha: u8) -> Self {
        Self::new(v, v, v, alpha)
    }

    /// Same RGB, different alpha.
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self::new(self.red, self.green, self.blue, alpha)
    }

    /// Packs the channels as `0xRRGGBBAA`.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        (self.red as u32) << 24 | (self.green as u32) << 16 | (self.blue as u32) << 8 | self.alpha as u32
    }

    /// Inverse of [`to_u32`](Self::to_u32).
    #[inline]
    pub const fn from_u32(packed: u32) -> Self {
        Self::new((packed >> 24) as u8, (packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
    }

    /// Raw `[r, g, b, a]` bytes, suitable for vertex/texture uploads.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Builds a color from normalized channels.
    ///
    /// Each channel is clamped to `[0, 1]` (NaN counts as 0) and scaled to
    /// `[0, 255]` with rounding.
    pub fn from_01(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self::new(unit_to_u8(red), unit_to_u8(green), unit_to_u8(blue), unit_to_u8(alpha))
    }

    /// Normalized `(r, g, b, a)` in `[0, 1]`.
    #[inline]
    pub fn to_01(self) -> (f32, f32, f32, f32) {
        (
            self.red as f32 / 255.0,
            self.green as f32 / 255.0,
            self.blue as f32 / 255.0,
            self.alpha as f32 / 255.0,
        )
    }

    /// Channel-wise linear interpolation from `a` to `b`.
    ///
    /// `t` is clamped to `[0, 1]`, so out-of-range factors return the nearest
    /// endpoint rather than extrapolating.
    pub fn lerp(a: Color, b: Color, t: f32) -> Color {
        let t = clamp_unit(t);
        Color::new(
            lerp_channel(a.red, b.red, t),
            lerp_channel(a.green, b.green, t),
            lerp_channel(a.blue, b.blue, t),
            lerp_channel(a.alpha, b.alpha, t),
        )
    }

    #[inline]
    pub fn lerp_to(self, target: Color, t: f32) -> Color {
        Color::lerp(self, target, t)
    }

    /// Moves toward [`Color::WHITE`] by `percent` (clamped to `[0, 100]`).
    #[inline]
    pub fn lighten(self, percent: f32) -> Color {
        self.lerp_to(Color::WHITE, percent_to_unit(percent))
    }

    /// Moves toward [`Color::BLACK`] by `percent` (clamped to `[0, 100]`).
    #[inline]
    pub fn darken(self, percent: f32) -> Color {
        self.lerp_to(Color::BLACK, percent_to_unit(percent))
    }

    /// Looks up a known color by name.
    ///
    /// Matching ignores ASCII case, spaces, underscores and hyphens, so
    /// `"Alice Blue"`, `"alice_blue"` and `"AliceBlue"` are equivalent.
    pub fn named(name: &str) -> Option<Color> {
        name_index().get(&normalize_name(name)).copied()
    }
}

#[inline]
fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[inline]
fn percent_to_unit(percent: f32) -> f32 {
    clamp_unit(percent / 100.0)
}

#[inline]
fn unit_to_u8(v: f32) -> u8 {
    (clamp_unit(v) * 255.0).round() as u8
}

#[inline]
fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    let from = from as f32;
    let to = to as f32;
    (from + (to - from) * t).round().clamp(0.0, 255.0) as u8
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

static NAME_INDEX: OnceLock<HashMap<String, Color>> = OnceLock::new();

fn name_index() -> &'static HashMap<String, Color> {
    NAME_INDEX.get_or_init(|| {
        let index: HashMap<String, Color> = known::ALL
            .iter()
            .map(|(name, color)| (normalize_name(name), *color))
            .collect();
        log::debug!("named color index built ({} entries)", index.len());
        index
    })
}

impl From<u32> for Color {
    #[inline]
    fn from(packed: u32) -> Self {
        Color::from_u32(packed)
    }
}

impl From<Color> for u32 {
    #[inline]
    fn from(c: Color) -> Self {
        c.to_u32()
    }
}

impl From<[u8; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Color::new(r, g, b, a)
    }
}

impl From<Color> for [u8; 4] {
    #[inline]
    fn from(c: Color) -> Self {
        [c.red, c.green, c.blue, c.alpha]
    }
}

/// Formats as `#rrggbbaa`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.to_u32())
    }
}

/// Error returned when a string is neither a hex literal nor a known color name.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseColorError {
    pub message: String,
}

impl ParseColorError {
    fn new(msg: impl Into<String>) -> Self {
        Self { message: msg.into() }
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color: {}", self.message)
    }
}

impl std::error::Error for ParseColorError {}

/// Accepts `#rrggbb`, `#rrggbbaa` (straight alpha, 255 when omitted) or a
/// known color name.
impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        Color::named(s).ok_or_else(|| ParseColorError::new(format!("unknown color name `{s}`")))
    }
}

fn parse_hex(hex: &str) -> Result<Color, ParseColorError> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ParseColorError::new(format!("`#{hex}` contains non-hex digits")));
    }
    if hex.len() != 6 && hex.len() != 8 {
        return Err(ParseColorError::new(format!(
            "hex literal must be #rrggbb or #rrggbbaa, got {} digits",
            hex.len()
        )));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|e| ParseColorError::new(format!("`#{hex}`: {e}")))
    };
    let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
    Ok(Color::new(channel(0)?, channel(2)?, channel(4)?, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    // ── packing ───────────────────────────────────────────────────────────

    #[test]
    fn to_u32_is_big_endian_rgba() {
        assert_eq!(Color::new(0x12, 0x34, 0x56, 0x78).to_u32(), 0x1234_5678);
        assert_eq!(Color::WHITE.to_u32(), 0xFFFF_FFFF);
        assert_eq!(Color::EMPTY.to_u32(), 0);
    }

    #[test]
    fn from_u32_unpacks_channels() {
        assert_eq!(Color::from_u32(0xAABB_CCDD), Color::new(0xAA, 0xBB, 0xCC, 0xDD));
    }

    #[test]
    fn as_bytes_is_rgba_order() {
        assert_eq!(Color::new(1, 2, 3, 4).as_bytes(), &[1, 2, 3, 4]);
    }

    // ── lerp ──────────────────────────────────────────────────────────────

    #[test]
    fn lerp_endpoints() {
        assert_eq!(Color::lerp(RED, BLUE, 0.0), RED);
        assert_eq!(Color::lerp(RED, BLUE, 1.0), BLUE);
    }

    #[test]
    fn lerp_clamps_out_of_range_t() {
        assert_eq!(Color::lerp(RED, BLUE, -3.0), RED);
        assert_eq!(Color::lerp(RED, BLUE, 7.5), BLUE);
        assert_eq!(Color::lerp(RED, BLUE, f32::NAN), RED);
    }

    #[test]
    fn lerp_midpoint_rounds() {
        let mid = Color::lerp(Color::new(0, 0, 0, 0), Color::new(255, 100, 1, 255), 0.5);
        assert_eq!(mid, Color::new(128, 50, 1, 128));
    }

    #[test]
    fn lerp_to_matches_static_lerp() {
        assert_eq!(RED.lerp_to(BLUE, 0.25), Color::lerp(RED, BLUE, 0.25));
    }

    // ── lighten / darken ──────────────────────────────────────────────────

    #[test]
    fn lighten_bounds() {
        let c = Color::new(10, 120, 200, 40);
        assert_eq!(c.lighten(0.0), c);
        assert_eq!(c.lighten(100.0), Color::WHITE);
        assert_eq!(c.lighten(250.0), Color::WHITE);
        assert_eq!(c.lighten(-10.0), c);
    }

    #[test]
    fn darken_bounds() {
        let c = Color::new(10, 120, 200, 255);
        assert_eq!(c.darken(0.0), c);
        assert_eq!(c.darken(100.0), Color::BLACK);
        assert_eq!(c.darken(50.0), Color::new(5, 60, 100, 255));
    }

    // ── from_01 ───────────────────────────────────────────────────────────

    #[test]
    fn from_01_scales_and_clamps() {
        assert_eq!(Color::from_01(1.0, 0.0, 0.5, 1.0), Color::new(255, 0, 128, 255));
        assert_eq!(Color::from_01(-1.0, 2.0, 0.0, 9.0), Color::new(0, 255, 0, 255));
    }

    // ── parsing / names ───────────────────────────────────────────────────

    #[test]
    fn parse_hex_rgb_defaults_opaque() {
        assert_eq!("#ff8000".parse::<Color>().unwrap(), Color::rgb(255, 128, 0));
    }

    #[test]
    fn parse_hex_rgba() {
        assert_eq!("#01020304".parse::<Color>().unwrap(), Color::new(1, 2, 3, 4));
    }

    #[test]
    fn parse_hex_wrong_length_fails() {
        let err = "#fff".parse::<Color>().unwrap_err();
        assert!(err.message.contains("3 digits"));
    }

    #[test]
    fn parse_hex_non_hex_fails() {
        assert!("#gg0000".parse::<Color>().is_err());
    }

    #[test]
    fn parse_named_ignores_case_and_separators() {
        let expected = Color::rgb(240, 248, 255);
        assert_eq!("Alice Blue".parse::<Color>().unwrap(), expected);
        assert_eq!("alice_blue".parse::<Color>().unwrap(), expected);
        assert_eq!("ALICEBLUE".parse::<Color>().unwrap(), expected);
    }

    #[test]
    fn parse_unknown_name_fails() {
        assert!("not a color".parse::<Color>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let c = Color::new(0xde, 0xad, 0xbe, 0xef);
        assert_eq!(c.to_string(), "#deadbeef");
        assert_eq!(c.to_string().parse::<Color>().unwrap(), c);
    }

    #[test]
    fn known_table_is_opaque_and_indexed() {
        assert!(known::ALL.len() > 800);
        for (name, color) in known::ALL {
            assert_eq!(color.alpha, 255, "{name}");
            assert!(Color::named(name).is_some(), "{name}");
        }
    }
}
