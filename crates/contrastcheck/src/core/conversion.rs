use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the color coordinates to 24-bit representation.
///
/// This function assumes that the coordinates belong to an in-gamut sRGB
/// color, i.e., that they range `0..=1`. Even if that is not the case, the
/// conversion clamps coordinates to the range `0x00..=0xff`.
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = *coordinates;
    [
        (r.clamp(0.0, 1.0) * 255.0).round() as u8,
        (g.clamp(0.0, 1.0) * 255.0).round() as u8,
        (b.clamp(0.0, 1.0) * 255.0).round() as u8,
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected sRGB to HSL. This is a one-hop,
/// direct conversion.
///
/// The resulting hue is a degree `0..360` or, for achromatic colors,
/// not-a-number. Saturation and lightness are fractions in unit range. Since
/// an achromatic color has no meaningful hue, this function never reports a
/// numeric hue alongside zero saturation.
pub(crate) fn rgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let lightness = (max + min) / 2.0;

    if delta == 0.0 {
        return [Float::NAN, 0.0, lightness];
    }

    let saturation = delta / (1.0 - lightness.mul_add(2.0, -1.0).abs());

    // Pick the sector based on the largest channel.
    let hue = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    [60.0 * hue, saturation, lightness]
}

/// Convert coordinates from HSL to gamma-corrected sRGB. This is a one-hop,
/// direct conversion.
///
/// A not-a-number hue is treated as 0º. That is safe because the hue of a
/// well-formed color is not-a-number only when its saturation is zero, in
/// which case the hue cannot influence the result.
pub(crate) fn hsl_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [hue, saturation, lightness] = *value;
    let hue = if hue.is_nan() { 0.0 } else { hue.rem_euclid(360.0) };

    let chroma = (1.0 - lightness.mul_add(2.0, -1.0).abs()) * saturation;
    let hue_prime = hue / 60.0;
    let x = chroma * (1.0 - (hue_prime % 2.0 - 1.0).abs());

    let [r1, g1, b1] = match hue_prime as u8 {
        0 => [chroma, x, 0.0],
        1 => [x, chroma, 0.0],
        2 => [0.0, chroma, x],
        3 => [0.0, x, chroma],
        4 => [x, 0.0, chroma],
        _ => [chroma, 0.0, x],
    };

    let m = lightness - chroma / 2.0;
    [r1 + m, g1 + m, b1 + m]
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{from_24bit, hsl_to_rgb, rgb_to_hsl, to_24bit};
    use crate::core::assert_same_coordinates;
    use crate::Float;

    #[test]
    fn test_24bit() {
        assert_eq!(from_24bit(255, 255, 255), [1.0, 1.0, 1.0]);
        assert_eq!(to_24bit(&[0.0, 0.5, 1.0]), [0, 128, 255]);
        // Out-of-range coordinates clamp instead of wrapping.
        assert_eq!(to_24bit(&[-0.5, 1.5, 0.2]), [0, 255, 51]);
    }

    #[test]
    fn test_rgb_to_hsl() {
        // Pure red sits at the start of the first sector.
        assert_same_coordinates!(rgb_to_hsl(&[1.0, 0.0, 0.0]), [0.0, 1.0, 0.5]);
        assert_same_coordinates!(rgb_to_hsl(&[0.0, 1.0, 0.0]), [120.0, 1.0, 0.5]);
        assert_same_coordinates!(rgb_to_hsl(&[0.0, 0.0, 1.0]), [240.0, 1.0, 0.5]);

        // Achromatic colors have an undefined hue, not 0º.
        assert_same_coordinates!(rgb_to_hsl(&[1.0, 1.0, 1.0]), [Float::NAN, 0.0, 1.0]);
        assert_same_coordinates!(rgb_to_hsl(&[0.0, 0.0, 0.0]), [Float::NAN, 0.0, 0.0]);
        assert_same_coordinates!(rgb_to_hsl(&[0.5, 0.5, 0.5]), [Float::NAN, 0.0, 0.5]);
    }

    #[test]
    fn test_hsl_to_rgb() {
        assert_same_coordinates!(hsl_to_rgb(&[0.0, 1.0, 0.5]), [1.0, 0.0, 0.0]);
        assert_same_coordinates!(hsl_to_rgb(&[120.0, 1.0, 0.5]), [0.0, 1.0, 0.0]);
        assert_same_coordinates!(hsl_to_rgb(&[240.0, 1.0, 0.5]), [0.0, 0.0, 1.0]);

        // An undefined hue defaults to 0º, which saturation 0 renders moot.
        assert_same_coordinates!(hsl_to_rgb(&[Float::NAN, 0.0, 0.25]), [0.25, 0.25, 0.25]);

        // Hues normalize by full rotations before sector selection.
        assert_same_coordinates!(
            hsl_to_rgb(&[480.0, 1.0, 0.5]),
            hsl_to_rgb(&[120.0, 1.0, 0.5]),
        );
        assert_same_coordinates!(
            hsl_to_rgb(&[-240.0, 1.0, 0.5]),
            hsl_to_rgb(&[120.0, 1.0, 0.5]),
        );
    }

    #[test]
    fn test_round_trip() {
        // Round-tripping through HSL may be off by at most one per channel.
        for &(r, g, b) in &[
            (0x00, 0x00, 0x00),
            (0xff, 0xff, 0xff),
            (0xfa, 0xda, 0x5e),
            (0x76, 0x76, 0x76),
            (0x22, 0x44, 0x88),
            (0x01, 0xfe, 0x80),
            (0xc0, 0x1f, 0x1f),
        ] {
            let [r2, g2, b2] = to_24bit(&hsl_to_rgb(&rgb_to_hsl(&from_24bit(r, g, b))));
            assert!(r.abs_diff(r2) <= 1, "red channel off by more than one");
            assert!(g.abs_diff(g2) <= 1, "green channel off by more than one");
            assert!(b.abs_diff(b2) <= 1, "blue channel off by more than one");
        }
    }
}
