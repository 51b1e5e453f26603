use crate::core::FloatExt;
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two coordinate slices describe the same
/// color.
///
/// Given two coordinate arrays, this macro normalizes the coordinates by
/// zeroing out not-a-numbers, scaling hues to unit range, reducing resolution,
/// and dropping the sign of negative zeros before comparing the resulting bit
/// strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the coordinates below each other at the beginning of
/// subsequent lines for easy comparability.
#[cfg(test)]
macro_rules! assert_same_coordinates {
    ($cs1:expr , $cs2:expr $(,)?) => {
        let (cs1, cs2) = ($cs1, $cs2);
        let bits1 = $crate::core::to_eq_coordinates(&cs1);
        let bits2 = $crate::core::to_eq_coordinates(&cs2);
        assert_eq!(
            bits1, bits2,
            "color coordinates differ:\n{:?}\n{:?}",
            cs1, cs2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_same_coordinates;

// --------------------------------------------------------------------------------------------------------------------

/// Normalize the HSL coordinates.
///
/// This function ensures that coordinates are well-formed. It replaces
/// not-a-number saturation and lightness with zero and clamps both into unit
/// range. It further couples hue and saturation both ways: zero saturation
/// forces the hue to not-a-number, and a not-a-number hue forces saturation to
/// zero. A numeric hue is reduced to `0..360` by removing full rotations.
#[inline]
pub(crate) fn normalize(coordinates: &[Float; 3]) -> [Float; 3] {
    let [mut hue, mut saturation, mut lightness] = *coordinates;

    if saturation.is_nan() {
        saturation = 0.0;
    }
    if lightness.is_nan() {
        lightness = 0.0;
    }

    saturation = saturation.clamp(0.0, 1.0);
    lightness = lightness.clamp(0.0, 1.0);

    if hue.is_nan() {
        saturation = 0.0;
    } else if saturation == 0.0 {
        hue = Float::NAN;
    } else {
        hue = hue.rem_euclid(360.0);
    }

    [hue, saturation, lightness]
}

/// Normalize coordinates for equality testing and hashing.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn to_eq_coordinates(coordinates: &[Float; 3]) -> [Bits; 3] {
    let [hue, c2, c3] = *coordinates;

    // Turn the hue into a comparable entity: scale rotations to unit range
    // and map not-a-number onto a value no rotation can produce.
    let mut c1 = if hue.is_nan() {
        -1.0
    } else {
        hue.rem_euclid(360.0) / 360.0
    };
    let mut c2 = if c2.is_nan() { 0.0 } else { c2 };
    let mut c3 = if c3.is_nan() { 0.0 } else { c3 };

    // Reduce precision.
    let factor = <Float as FloatExt>::ROUNDING_FACTOR;
    c1 = (c1 * factor).round();
    c2 = (c2 * factor).round();
    c3 = (c3 * factor).round();

    // Prevent too much negativity.
    if c1 == -0.0 {
        c1 = 0.0;
    }
    if c2 == -0.0 {
        c2 = 0.0
    }
    if c3 == -0.0 {
        c3 = 0.0
    }

    [c1.to_bits(), c2.to_bits(), c3.to_bits()]
}

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a
/// bit string. It is only public because the [`assert_close_enough`] test
/// macro uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

// ====================================================================================================================
