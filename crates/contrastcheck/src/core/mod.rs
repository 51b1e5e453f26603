mod contrast;
mod conversion;
mod equality;
mod math;
mod string;

// contrast
pub(crate) use contrast::{to_contrast, to_luminance};

// conversion
pub(crate) use conversion::{from_24bit, hsl_to_rgb, rgb_to_hsl, to_24bit};

// equality
#[cfg(test)]
pub(crate) use equality::assert_same_coordinates;
pub use equality::to_eq_bits;
pub(crate) use equality::{normalize, to_eq_coordinates};

// math
pub(crate) use math::FloatExt;

// string
pub use string::is_hex;
pub(crate) use string::{format_hashed, parse_hashed};
