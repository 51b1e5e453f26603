use std::str::FromStr;

use crate::core::{
    format_hashed, from_24bit, hsl_to_rgb, normalize, parse_hashed, rgb_to_hsl, to_24bit,
    to_contrast, to_eq_coordinates, to_luminance,
};
use crate::error::ColorFormatError;
use crate::Float;

/// The lightness below which a color counts as dark.
const DARK_LIGHTNESS: Float = 0.5;

/// A 24-bit sRGB color.
///
/// This is the representation users type and copy: three unsigned bytes for
/// red, green, and blue, written as a hashed hexadecimal string. There is no
/// alpha channel.
///
/// `Rgb` parses from 3- or 6-digit hexadecimal, with or without the leading
/// `#`, and always displays in the canonical 7-character lowercase form:
///
/// ```
/// # use contrastcheck::{ColorFormatError, Rgb};
/// # fn main() -> Result<(), ColorFormatError> {
/// let goldenrod: Rgb = "#DAA520".parse()?;
/// assert_eq!(goldenrod, Rgb::new(0xda, 0xa5, 0x20));
/// assert_eq!(goldenrod.to_string(), "#daa520");
/// # Ok(())
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

impl Rgb {
    /// Create a new sRGB color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Access this color's coordinates.
    pub const fn coordinates(&self) -> [u8; 3] {
        self.0
    }

    /// Compute this color's relative luminance.
    ///
    /// The result ranges `0..=1`, with 0 the luminance of black and 1 that of
    /// white. The computation follows the WCAG 2.x definition: each
    /// gamma-corrected channel is linearized with the piecewise sRGB transfer
    /// function and the linear channels are combined with the fixed
    /// perceptual weights 0.2126, 0.7152, and 0.0722.
    pub fn luminance(&self) -> Float {
        let [r, g, b] = self.0;
        to_luminance(&from_24bit(r, g, b))
    }

    /// Determine the contrast ratio between this color and the other color.
    ///
    /// The ratio ranges `1..=21` and does not depend on which color is the
    /// foreground: the lighter of the two luminances always forms the
    /// numerator.
    ///
    /// ```
    /// # use contrastcheck::Rgb;
    /// let black = Rgb::new(0, 0, 0);
    /// let white = Rgb::new(0xff, 0xff, 0xff);
    /// let ratio = black.contrast_against(&white);
    /// assert!((ratio - 21.0).abs() < 1e-9);
    /// ```
    pub fn contrast_against(&self, other: &Self) -> Float {
        to_contrast(self.luminance(), other.luminance())
    }

    /// Convert this color to hue/saturation/lightness form.
    ///
    /// This method offers the same functionality as [`Hsl as
    /// From<Rgb>`](struct.Hsl.html#impl-From%3CRgb%3E-for-Hsl).
    pub fn to_hsl(&self) -> Hsl {
        Hsl::from(*self)
    }
}

impl FromStr for Rgb {
    type Err = ColorFormatError;

    /// Parse the given string as a hashed hexadecimal color.
    ///
    /// Both the 3-digit shorthand and the 6-digit form are recognized, with
    /// or without the leading `#`. Malformed or interactively incomplete
    /// input yields an error value, never a panic.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hashed(s).map(Self)
    }
}

impl std::fmt::Display for Rgb {
    /// Format this color as a 7-character lowercase hexadecimal string.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_hashed(&self.0, f)
    }
}

impl From<Hsl> for Rgb {
    /// Convert the hue/saturation/lightness color to 24-bit sRGB.
    fn from(value: Hsl) -> Self {
        Self(to_24bit(&hsl_to_rgb(&value.coordinates())))
    }
}

// ====================================================================================================================

/// A color in hue/saturation/lightness form.
///
/// This is the representation a picker with separate channel controls
/// naturally stores and animates between. The hue is a degree `0..360`, the
/// saturation and lightness are fractions in unit range.
///
/// # Undefined Hue
///
/// Achromatic colors, i.e., grays including black and white, have no
/// meaningful hue. Instead of reporting a stale or arbitrary angle, this type
/// models that state explicitly: [`Hsl::hue`] is an `Option` and `None` for
/// achromatic colors. The two properties are coupled both ways, so a color
/// with an undefined hue always has zero saturation and vice versa. The
/// sentinel survives every conversion:
///
/// ```
/// # use contrastcheck::{Hsl, Rgb};
/// let gray = Hsl::from(Rgb::new(0x76, 0x76, 0x76));
/// assert_eq!(gray.hue(), None);
/// assert_eq!(Hsl::from(Rgb::from(gray)).hue(), None);
/// ```
///
/// # Normalization
///
/// Constructors clamp saturation and lightness into unit range, reduce the
/// hue by full rotations, and replace the hue of an achromatic color with the
/// undefined sentinel. Consequently, every `Hsl` value is well-formed and
/// out-of-range caller input degrades deterministically instead of
/// propagating not-a-numbers.
///
/// # Equality Testing and Hashing
///
/// Equality and hashing operate on bit strings derived from the coordinates
/// by scaling the hue to unit range, rounding away the least significant
/// digit, and dropping the sign of negative zeros. That makes the comparison
/// robust against floating point error while keeping equal hashes for equal
/// colors.
#[derive(Copy, Clone, Debug)]
pub struct Hsl {
    hue: Option<Float>,
    saturation: Float,
    lightness: Float,
}

impl Hsl {
    /// Instantiate a new color from hue, saturation, and lightness.
    ///
    /// The coordinates are normalized as described above. In particular, if
    /// the saturation clamps to zero, the numeric hue gives way to the
    /// undefined sentinel:
    ///
    /// ```
    /// # use contrastcheck::Hsl;
    /// assert_eq!(Hsl::new(480.0, 1.0, 0.5).hue(), Some(120.0));
    /// assert_eq!(Hsl::new(42.0, 0.0, 0.5).hue(), None);
    /// ```
    pub fn new(hue: Float, saturation: Float, lightness: Float) -> Self {
        Self::from_coordinates([hue, saturation, lightness])
    }

    /// Instantiate a new achromatic color with the given lightness.
    ///
    /// The resulting color has an undefined hue and zero saturation.
    pub fn achromatic(lightness: Float) -> Self {
        Self::from_coordinates([Float::NAN, 0.0, lightness])
    }

    /// Instantiate a new color from raw coordinates, with a not-a-number hue
    /// encoding the undefined sentinel.
    pub(crate) fn from_coordinates(coordinates: [Float; 3]) -> Self {
        let [hue, saturation, lightness] = normalize(&coordinates);
        Self {
            hue: if hue.is_nan() { None } else { Some(hue) },
            saturation,
            lightness,
        }
    }

    /// Access this color's coordinates, with a not-a-number hue encoding the
    /// undefined sentinel.
    pub(crate) fn coordinates(&self) -> [Float; 3] {
        [
            self.hue.unwrap_or(Float::NAN),
            self.saturation,
            self.lightness,
        ]
    }

    /// Access this color's hue, a degree `0..360`, or `None` if this color is
    /// achromatic.
    pub fn hue(&self) -> Option<Float> {
        self.hue
    }

    /// Access this color's saturation, a fraction in unit range.
    pub fn saturation(&self) -> Float {
        self.saturation
    }

    /// Access this color's lightness, a fraction in unit range.
    pub fn lightness(&self) -> Float {
        self.lightness
    }

    /// Determine whether this color is achromatic, i.e., has zero saturation
    /// and hence an undefined hue.
    pub fn is_achromatic(&self) -> bool {
        self.hue.is_none()
    }

    /// Determine whether this color is dark.
    ///
    /// A color with a lightness below the midpoint counts as dark. UI shells
    /// use this predicate to pick a readable overlay color when the real
    /// foreground has too little contrast to be legible.
    pub fn is_dark(&self) -> bool {
        self.lightness < DARK_LIGHTNESS
    }

    /// Convert this color to 24-bit sRGB.
    ///
    /// This method offers the same functionality as [`Rgb as
    /// From<Hsl>`](struct.Rgb.html#impl-From%3CHsl%3E-for-Rgb).
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from(*self)
    }

    /// Format this color as a 7-character lowercase hexadecimal string.
    ///
    /// ```
    /// # use contrastcheck::Hsl;
    /// assert_eq!(Hsl::new(0.0, 1.0, 0.5).to_hex(), "#ff0000");
    /// ```
    pub fn to_hex(&self) -> String {
        self.to_rgb().to_string()
    }
}

impl FromStr for Hsl {
    type Err = ColorFormatError;

    /// Parse the given string as a hashed hexadecimal color and convert it to
    /// hue/saturation/lightness form. The failure behavior is that of [`Rgb
    /// as FromStr`](struct.Rgb.html#impl-FromStr-for-Rgb).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Rgb>().map(Into::into)
    }
}

impl From<Rgb> for Hsl {
    /// Convert the 24-bit sRGB color to hue/saturation/lightness form.
    fn from(value: Rgb) -> Self {
        let [r, g, b] = value.coordinates();
        Self::from_coordinates(rgb_to_hsl(&from_24bit(r, g, b)))
    }
}

impl PartialEq for Hsl {
    fn eq(&self, other: &Self) -> bool {
        to_eq_coordinates(&self.coordinates()) == to_eq_coordinates(&other.coordinates())
    }
}

impl Eq for Hsl {}

impl std::hash::Hash for Hsl {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        to_eq_coordinates(&self.coordinates()).hash(state);
    }
}

// ====================================================================================================================

#[cfg(feature = "serde")]
mod serialization {
    use super::{Float, Hsl};
    use serde::de::{Deserialize, Deserializer};
    use serde::ser::{Serialize, SerializeTuple, Serializer};

    /// Serialize this color as a three-element array, with `null` standing in
    /// for the undefined hue. That matches the layout a picker shell persists
    /// across sessions.
    impl Serialize for Hsl {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut tuple = serializer.serialize_tuple(3)?;
            tuple.serialize_element(&self.hue)?;
            tuple.serialize_element(&self.saturation)?;
            tuple.serialize_element(&self.lightness)?;
            tuple.end()
        }
    }

    impl<'de> Deserialize<'de> for Hsl {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let (hue, saturation, lightness) =
                <(Option<Float>, Float, Float)>::deserialize(deserializer)?;
            Ok(hue.map_or_else(
                || Self::achromatic(lightness),
                |hue| Self::new(hue, saturation, lightness),
            ))
        }
    }
}

// ====================================================================================================================
