use crate::Float;

/// The coefficients for computing the relative luminance of sRGB coordinates.
///
/// WCAG 2.x fixes these weights; they reflect human perceptual sensitivity,
/// with green dominant and blue minor. Substituting other weights silently
/// breaks conformance.
const SRGB_LUMINANCE: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// The boundary between the linear and exponential segments of the sRGB
/// transfer function, as specified by WCAG 2.x.
const LINEAR_THRESHOLD: Float = 0.03928;

/// Compute the relative luminance of the given sRGB coordinates.
///
/// This function linearizes each gamma-corrected coordinate with the piecewise
/// sRGB transfer function and combines the results with the fixed WCAG
/// weights. For unit-range coordinates, the result ranges `0..=1`, with 0 the
/// luminance of black and 1 that of white.
pub(crate) fn to_luminance(coordinates: &[Float; 3]) -> Float {
    fn linearize(value: Float) -> Float {
        if value <= LINEAR_THRESHOLD {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }

    let [w1, w2, w3] = *SRGB_LUMINANCE;
    let [r, g, b] = *coordinates;

    linearize(r).mul_add(w1, linearize(g).mul_add(w2, linearize(b) * w3))
}

/// Compute the contrast ratio for the given relative luminances.
///
/// The ratio is `(lighter + 0.05) / (darker + 0.05)`, where lighter and darker
/// are determined by comparing the two luminances. The arguments are therefore
/// interchangeable and the result ranges `1..=21`, reaching the maximum for
/// pure black against pure white.
pub(crate) fn to_contrast(luminance1: Float, luminance2: Float) -> Float {
    let (lighter, darker) = if luminance1 >= luminance2 {
        (luminance1, luminance2)
    } else {
        (luminance2, luminance1)
    };

    (lighter + 0.05) / (darker + 0.05)
}

// ====================================================================================================================
